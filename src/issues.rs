//! Operator-facing diagnostics.
//!
//! An [`Issue`] is a severity-tagged message that does not abort anything:
//! configuration problems end up here while the component keeps running on
//! its defaults. Components own an [`IssueSink`] and expose the recorded
//! issues through [`IssueProvider`], which a diagnostics page can poll.
//!
//! ```
//! use sizelimits::{Issue, IssueProvider, IssueSeverity, IssueSink};
//!
//! let sink = IssueSink::new("Demo");
//! sink.accept_issue(Issue::new("Demo", "cache folder missing", IssueSeverity::Warning));
//! assert_eq!(sink.issues().len(), 1);
//! ```

use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueSeverity {
    Critical,
    Error,
    ConfigurationError,
    Warning,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IssueSeverity::Critical => "Critical",
            IssueSeverity::Error => "Error",
            IssueSeverity::ConfigurationError => "ConfigurationError",
            IssueSeverity::Warning => "Warning",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Name of the component that raised the issue.
    pub source: String,
    pub message: String,
    pub severity: IssueSeverity,
    /// When the issue was recorded.
    #[cfg(feature = "chrono")]
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

impl Issue {
    pub fn new(
        source: impl Into<String>,
        message: impl Into<String>,
        severity: IssueSeverity,
    ) -> Self {
        Issue {
            source: source.into(),
            message: message.into(),
            severity,
            #[cfg(feature = "chrono")]
            recorded_at: chrono::Utc::now(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.source, self.message)
    }
}

/// Anything that can report its accumulated issues.
pub trait IssueProvider {
    fn issues(&self) -> Vec<Issue>;
}

/// Append-only, thread-safe issue list.
///
/// Appends from many threads are never lost. Order between threads is
/// unspecified, order within one thread is kept.
#[derive(Debug, Default)]
pub struct IssueSink {
    default_source: String,
    issues: Mutex<Vec<Issue>>,
}

impl IssueSink {
    pub fn new(default_source: impl Into<String>) -> Self {
        IssueSink {
            default_source: default_source.into(),
            issues: Mutex::new(Vec::new()),
        }
    }

    /// The source name used by [`IssueSink::accept`].
    pub fn default_source(&self) -> &str {
        &self.default_source
    }

    pub fn accept_issue(&self, issue: Issue) {
        log::warn!("{issue}");
        self.lock().push(issue);
    }

    /// Record a message under this sink's default source.
    pub fn accept(&self, message: impl Into<String>, severity: IssueSeverity) {
        self.accept_issue(Issue::new(self.default_source.clone(), message, severity));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while pushing cannot leave the Vec half-written, so the data
    // behind a poisoned lock is still valid.
    fn lock(&self) -> MutexGuard<'_, Vec<Issue>> {
        self.issues.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IssueProvider for IssueSink {
    fn issues(&self) -> Vec<Issue> {
        self.lock().clone()
    }
}
