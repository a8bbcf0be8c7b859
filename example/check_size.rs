use clap::Parser;
use sizelimits::{
    Dimensions, IssueProvider, RawSettings, SizeLimits, SizeLimitsConfig, TotalSizeBehavior,
};
use std::path::PathBuf;
use std::process;

/// Check output sizes against sizelimits settings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Final output sizes to check, e.g. 1920x1080
    #[arg(value_name = "SIZE", required = true)]
    sizes: Vec<Dimensions>,

    /// Settings file with sizelimits.* keys
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Override sizelimits.totalbehavior
    #[arg(short, long)]
    behavior: Option<TotalSizeBehavior>,
}

fn main() {
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => match RawSettings::from_path(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        },
        None => RawSettings::new(),
    };

    let mut config = SizeLimitsConfig::from_settings(&settings);
    if let Some(behavior) = args.behavior {
        config = config.with_total_behavior(behavior);
    }
    let limits = SizeLimits::from_config(&config);

    println!("Total size:    {} ({})", limits.total_size(), limits.total_behavior());
    if limits.has_image_size() {
        println!("Image size:    {}", limits.image_size());
    } else {
        println!("Image size:    unlimited");
    }

    let issues = limits.issues();
    if !issues.is_empty() {
        println!();
        println!("Issues ({}):", issues.len());
        println!("{}", "-".repeat(40));
        for issue in &issues {
            println!("  {}", issue);
        }
    }

    println!();
    let mut failed = false;
    for size in &args.sizes {
        match limits.validate_total_size(*size) {
            Ok(()) => println!("{:>12}  ok", size.to_string()),
            Err(err) => {
                failed = true;
                println!("{:>12}  rejected: {}", size.to_string(), err);
            }
        }
    }

    if failed {
        process::exit(2);
    }
}
