// src/progress.rs
//! Progress readings and the comment format they round-trip through on the
//! remote log.
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::LEVEL_WEIGHT;

/// One observation of the profile. `xp` is earned within `level`, not cumulative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgressReading {
    pub level: u32,
    pub xp: u32,
}

impl ProgressReading {
    pub fn new(level: u32, xp: u32) -> Self {
        Self { level, xp }
    }

    /// Comparison key only; never sent anywhere.
    ///
    /// Ordering across a level-up holds only while per-level XP stays below
    /// `LEVEL_WEIGHT`.
    pub fn total_score(&self) -> u64 {
        u64::from(self.level) * LEVEL_WEIGHT + u64::from(self.xp)
    }

    /// Parse a datapoint comment such as `"Level 14, XP: 960 (+60 XP)"`.
    /// Anything else is not ours and yields `None`.
    pub fn from_comment(comment: &str) -> Option<Self> {
        let caps = comment_re().captures(comment)?;
        let level = caps[1].parse().ok()?;
        let xp = caps[2].parse().ok()?;
        Some(Self { level, xp })
    }
}

/// Canonical comment prefix: `Level {level}, XP: {xp}`.
impl fmt::Display for ProgressReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}, XP: {}", self.level, self.xp)
    }
}

fn comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Level\s+(\d+),\s*XP:\s*(\d+)").expect("static regex"))
}
