// src/runner.rs
use crate::{
    config::Config,
    core::{net::{NetError, PageSource}, PageText},
    progress::ProgressReading,
    specs::{self, ExtractError},
    store::{DatapointLog, NewDatapoint, StoreError},
    sync::{self, History, SyncAction},
};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("could not fetch profile: {0}")]
    Fetch(#[from] NetError),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("configuration missing: {0}")]
    ConfigurationMissing(&'static str),
}

/// How a completed run ended. All of these exit zero.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    Appended { current: ProgressReading, action: SyncAction },
    AppendFailed { current: ProgressReading, action: SyncAction, reason: String },
    NoProgress { current: ProgressReading, last: ProgressReading },
    /// Dry run: `action` was decided but not sent.
    Planned { current: ProgressReading, action: SyncAction },
}

/// Top-level run: fetch → extract → history → reconcile → append.
/// `now` is the unix timestamp stamped on any appended datapoint.
pub fn run(
    config: &Config,
    page: &dyn PageSource,
    log: &dyn DatapointLog,
    now: i64,
) -> Result<RunOutcome, RunError> {
    let html = page.fetch(&config.profile_url)?;
    let current = specs::extract(&PageText::from_html(&html), &config.split)?;
    logf!("Current: {current} (Total: {})", current.total_score());

    let have_token = config.beeminder.has_token();
    if !have_token && !config.dry_run {
        loge!("BEEMINDER_TOKEN environment variable not set");
        return Err(RunError::ConfigurationMissing("BEEMINDER_TOKEN"));
    }

    let history = if have_token { read_history(log) } else { History::NoHistory };
    let action = sync::reconcile(current, history);

    let (value, comment) = match &action {
        SyncAction::NoProgress { last } => {
            logf!("Skipping Beeminder update - no work done today");
            return Ok(RunOutcome::NoProgress { current, last: *last });
        }
        SyncAction::Initialize { value, comment } | SyncAction::Progress { value, comment, .. } => {
            (*value, comment.clone())
        }
    };

    if config.dry_run {
        logf!("Dry run: would post value={value}, comment='{comment}'");
        return Ok(RunOutcome::Planned { current, action });
    }

    let point = NewDatapoint { value, timestamp: now, comment: Some(comment) };
    match log.append(&point) {
        Ok(()) => {
            logf!("Successfully posted to Beeminder");
            Ok(RunOutcome::Appended { current, action })
        }
        Err(e) => {
            loge!("Error posting to Beeminder: {e}");
            Ok(RunOutcome::AppendFailed { current, action, reason: e.to_string() })
        }
    }
}

/// History problems degrade to a first run; they never end the run.
fn read_history(log: &dyn DatapointLog) -> History {
    match log.history() {
        Ok(points) => {
            let h = sync::last_reading(&points);
            if h == History::Unparseable {
                logf!("No datapoint with 'Level X, XP: Y' format found");
            }
            h
        }
        Err(StoreError::Status { status, body }) => {
            logw!("API error {status}: {body}");
            History::NoHistory
        }
        Err(e) => {
            logw!("Error fetching last datapoint: {e}");
            History::NoHistory
        }
    }
}
