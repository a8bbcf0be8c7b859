use sizelimits::{
    Dimensions, IssueProvider, IssueSeverity, SizeLimits, SizeLimitsConfig, TotalSizeBehavior,
};

fn limits_from(config: SizeLimitsConfig) -> SizeLimits {
    SizeLimits::from_config(&config)
}

#[test]
fn scenario_a_total_size_throws() {
    let limits = limits_from(
        SizeLimitsConfig::default()
            .with_total_size(100, 100)
            .with_total_behavior(TotalSizeBehavior::ThrowException),
    );
    let err = limits
        .validate_total_size(Dimensions::new(101, 50))
        .expect_err("101x50 should exceed 100x100");
    assert_eq!((err.width, err.height), (101, 50));
    assert_eq!((err.max_width, err.max_height), (100, 100));
    assert!(limits.validate_total_size(Dimensions::new(100, 100)).is_ok());
}

#[test]
fn scenario_b_zero_total_width_keeps_default() {
    let limits = limits_from(SizeLimitsConfig {
        total_width: Some(0),
        ..Default::default()
    });
    assert_eq!(limits.total_size(), Dimensions::new(3200, 3200));

    let issues = limits.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, IssueSeverity::ConfigurationError);
    assert!(issues[0].message.contains("must both be greater than 0"));
}

#[test]
fn scenario_c_ignore_limits() {
    let limits = limits_from(
        SizeLimitsConfig::default()
            .with_total_size(10, 10)
            .with_total_behavior(TotalSizeBehavior::IgnoreLimits),
    );
    assert!(limits.validate_total_size(Dimensions::new(99_999, 99_999)).is_ok());
    assert!(limits.validate_total_size(Dimensions::new(u32::MAX, u32::MAX)).is_ok());
    // The predicate still answers honestly.
    assert!(!limits.fits_inside_total_size(Dimensions::new(99_999, 99_999)));
}

#[test]
fn scenario_d_zero_image_size_is_unlimited() {
    let limits = limits_from(SizeLimitsConfig::default().with_image_size(0, 0));
    assert!(!limits.has_image_size());
    assert_eq!(limits.image_size(), Dimensions::new(0, 0));
}

#[test]
fn negative_total_height_keeps_default() {
    let limits = limits_from(SizeLimitsConfig::default().with_total_size(640, -480));
    assert_eq!(limits.total_size(), Dimensions::new(3200, 3200));
    assert_eq!(limits.issues().len(), 1);
}

#[test]
fn both_total_axes_invalid_records_one_issue() {
    let limits = limits_from(SizeLimitsConfig::default().with_total_size(0, 0));
    assert_eq!(limits.issues().len(), 1);
}

#[test]
fn image_limit_is_not_enforced_by_total_validation() {
    let limits = limits_from(
        SizeLimitsConfig::default()
            .with_image_size(100, 100)
            .with_total_size(1000, 1000),
    );
    assert!(limits.has_image_size());
    assert!(!limits.fits_inside_image_size(Dimensions::new(500, 500)));
    assert!(limits.validate_total_size(Dimensions::new(500, 500)).is_ok());
}
