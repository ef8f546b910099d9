// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{consts::*, BeeminderOptions, Config};
use crate::core::net::{self, HttpSource};
use crate::runner::{self, RunOutcome};
use crate::specs::{LengthSplit, SplitRule};
use crate::store::BeeminderStore;
use crate::sync::SyncAction;

/// Scrape Boot.dev level/XP and record progress on a Beeminder goal.
#[derive(Debug, Parser)]
#[command(name = "bootdev_bee", version, about)]
pub struct Args {
    /// Profile page to scrape
    #[arg(long, env = "BOOTDEV_URL", default_value = DEFAULT_PROFILE_URL)]
    pub url: String,

    /// Beeminder username
    #[arg(long, env = "BEEMINDER_USERNAME", default_value = DEFAULT_USERNAME)]
    pub user: String,

    /// Beeminder goal slug
    #[arg(long, env = "BEEMINDER_GOAL", default_value = DEFAULT_GOAL)]
    pub goal: String,

    /// Beeminder auth token
    #[arg(long, env = "BEEMINDER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Beeminder API base URL
    #[arg(long, env = "BEEMINDER_API", default_value = BEEMINDER_API)]
    pub api: String,

    /// Fused level/XP split rule MIN_LEN:LEVEL_DIGITS (repeatable)
    #[arg(long = "split-rule", value_name = "MIN_LEN:LEVEL_DIGITS")]
    pub split_rules: Vec<SplitRule>,

    /// Decide, print, but do not post
    #[arg(long)]
    pub dry_run: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn to_config(&self) -> Config {
        let split = if self.split_rules.is_empty() {
            LengthSplit::default()
        } else {
            LengthSplit::new(self.split_rules.clone())
        };
        Config {
            profile_url: self.url.clone(),
            beeminder: BeeminderOptions {
                base_url: self.api.clone(),
                username: self.user.clone(),
                goal: self.goal.clone(),
                auth_token: self.token.clone(),
            },
            split,
            dry_run: self.dry_run,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref()).wrap_err("could not open log file")?;
    let config = args.to_config();
    logd!("{config:?}");

    println!("=== Boot.dev XP Tracker ===");
    println!("Time: {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

    let client = net::client().wrap_err("could not build HTTP client")?;
    let page = HttpSource::new(client.clone());
    let store = BeeminderStore::new(client, config.beeminder.clone());

    let outcome = runner::run(&config, &page, &store, chrono::Utc::now().timestamp())
        .wrap_err("Failed to retrieve level and XP")?;
    println!("{}", summary(&outcome));
    Ok(())
}

/// One human line per outcome.
pub fn summary(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Appended { action, .. } => format!("✓ Posted: {}", describe(action)),
        RunOutcome::AppendFailed { action, reason, .. } => {
            format!("✗ Could not post ({reason}): {}", describe(action))
        }
        RunOutcome::NoProgress { current, last } => {
            format!("✗ No progress since last check ({current}; last {last})")
        }
        RunOutcome::Planned { action, .. } => format!("Dry run, would post: {}", describe(action)),
    }
}

fn describe(action: &SyncAction) -> String {
    match action.datapoint() {
        Some((value, comment)) => format!("value={value}, comment='{comment}'"),
        None => s!("nothing"),
    }
}
