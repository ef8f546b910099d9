// src/sync.rs
//! Decide whether a fresh reading is worth a datapoint.
//!
//! The remote log is the only memory between runs. A reading is appended only
//! when its score beats the newest reading we can recover from the log, so a
//! second run with no real progress in between is a no-op.
use crate::config::consts::SENTINEL_VALUE;
use crate::progress::ProgressReading;
use crate::store::Datapoint;

/// What the history says about the last run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum History {
    /// The log is empty (or could not be read).
    NoHistory,
    /// Newest datapoint carrying one of our comments.
    LastReading(ProgressReading),
    /// Datapoints exist but none has a comment we recognise.
    Unparseable,
}

/// Newest parseable datapoint, by timestamp. Delivery order is not trusted.
pub fn last_reading(points: &[Datapoint]) -> History {
    if points.is_empty() {
        return History::NoHistory;
    }
    let mut newest_first: Vec<&Datapoint> = points.iter().collect();
    newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    newest_first
        .into_iter()
        .find_map(|p| {
            let r = ProgressReading::from_comment(&p.comment)?;
            logf!("Last recorded: {r} (from comment: '{}')", p.comment);
            Some(History::LastReading(r))
        })
        .unwrap_or(History::Unparseable)
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyncAction {
    /// No usable baseline: record one.
    Initialize { value: f64, comment: String },
    /// Score went up since `last`.
    Progress { value: f64, comment: String, last: ProgressReading, gained: u64 },
    /// Nothing new since `last`. Normal outcome.
    NoProgress { last: ProgressReading },
}

impl SyncAction {
    /// Value and comment to append, if any.
    pub fn datapoint(&self) -> Option<(f64, &str)> {
        match self {
            SyncAction::Initialize { value, comment }
            | SyncAction::Progress { value, comment, .. } => Some((*value, comment.as_str())),
            SyncAction::NoProgress { .. } => None,
        }
    }
}

pub fn reconcile(current: ProgressReading, history: History) -> SyncAction {
    let last = match history {
        History::LastReading(last) => last,
        History::NoHistory | History::Unparseable => {
            logf!("No previous datapoint found - posting initial value");
            return SyncAction::Initialize { value: SENTINEL_VALUE, comment: current.to_string() };
        }
    };

    let (now, before) = (current.total_score(), last.total_score());
    if now <= before {
        logf!("No progress since last check ({now} <= {before})");
        return SyncAction::NoProgress { last };
    }

    let gained = now - before;
    logf!("Progress increased by {gained}!");
    SyncAction::Progress {
        value: SENTINEL_VALUE,
        comment: progress_comment(current, last),
        last,
        gained,
    }
}

fn progress_comment(current: ProgressReading, last: ProgressReading) -> String {
    if current.level > last.level {
        format!("{current} (leveled up from {}!)", last.level)
    } else {
        let delta = i64::from(current.xp) - i64::from(last.xp);
        format!("{current} ({delta:+} XP)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dp(timestamp: i64, comment: &str) -> Datapoint {
        Datapoint { timestamp, value: 1.0, comment: s!(comment) }
    }

    #[test]
    fn newest_by_timestamp_not_by_order() {
        let older = dp(100, "Level 14, XP: 500");
        let newer = dp(200, "Level 14, XP: 800");
        let want = History::LastReading(ProgressReading::new(14, 800));
        assert_eq!(last_reading(&[older.clone(), newer.clone()]), want);
        assert_eq!(last_reading(&[newer, older]), want);
    }

    #[test]
    fn foreign_comments_are_skipped() {
        let points = [
            dp(300, "manual fix"),
            dp(200, "Level 14, XP: 800 (+300 XP)"),
            dp(100, "Level 14, XP: 500"),
        ];
        assert_eq!(last_reading(&points), History::LastReading(ProgressReading::new(14, 800)));
    }

    #[test]
    fn tri_state_history() {
        assert_eq!(last_reading(&[]), History::NoHistory);
        assert_eq!(last_reading(&[dp(1, ""), dp(2, "hello")]), History::Unparseable);
    }

    #[test]
    fn first_run_initializes_without_comparing() {
        let current = ProgressReading::new(1, 50);
        let want = SyncAction::Initialize { value: 1.0, comment: s!("Level 1, XP: 50") };
        assert_eq!(reconcile(current, History::NoHistory), want);
        assert_eq!(reconcile(current, History::Unparseable), want);
    }

    #[test]
    fn level_up_comment() {
        let action = reconcile(
            ProgressReading::new(15, 50),
            History::LastReading(ProgressReading::new(14, 900)),
        );
        assert_eq!(
            action,
            SyncAction::Progress {
                value: 1.0,
                comment: s!("Level 15, XP: 50 (leveled up from 14!)"),
                last: ProgressReading::new(14, 900),
                gained: 150,
            }
        );
    }

    #[test]
    fn xp_delta_comment() {
        let action = reconcile(
            ProgressReading::new(14, 960),
            History::LastReading(ProgressReading::new(14, 900)),
        );
        assert_eq!(action.datapoint(), Some((1.0, "Level 14, XP: 960 (+60 XP)")));
    }

    #[test]
    fn unchanged_or_lower_is_silent() {
        let last = ProgressReading::new(14, 900);
        for current in [ProgressReading::new(14, 900), ProgressReading::new(14, 100), ProgressReading::new(13, 999)] {
            let action = reconcile(current, History::LastReading(last));
            assert_eq!(action, SyncAction::NoProgress { last });
            assert_eq!(action.datapoint(), None);
        }
    }
}
