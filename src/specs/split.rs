// src/specs/split.rs
//! Level/XP split for the fused digit run the profile renders.
//!
//! The page prints level and XP side by side with no delimiter, so "Level 14"
//! followed by "132 XP" arrives as `14132`. The split point can only be guessed
//! from the run length. The guess assumes level stays below 100 and that XP has
//! at least three digits once there is meaningful progress; neither is promised
//! by the site, so the policy is data, not code, and can be swapped per run.
use std::fmt;
use std::str::FromStr;

use crate::config::consts::DEFAULT_SPLIT_RULES;
use crate::progress::ProgressReading;

/// Decides which leading digits of a fused run are the level.
pub trait SplitPolicy {
    /// `digits` has separators stripped already. `None` means "do not guess".
    fn split(&self, digits: &str) -> Option<ProgressReading>;
}

/// Runs of at least `min_len` digits take `level_digits` leading digits as level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitRule {
    min_len: usize,
    level_digits: usize,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SplitRuleError {
    #[error("expected MIN_LEN:LEVEL_DIGITS, got {0:?}")]
    Syntax(String),
    #[error("rule {0}: level needs at least one digit and XP at least one more")]
    Width(SplitRule),
}

impl SplitRule {
    pub fn new(min_len: usize, level_digits: usize) -> Result<Self, SplitRuleError> {
        let rule = Self { min_len, level_digits };
        if level_digits == 0 || level_digits >= min_len {
            return Err(SplitRuleError::Width(rule));
        }
        Ok(rule)
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn level_digits(&self) -> usize {
        self.level_digits
    }
}

impl fmt::Display for SplitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.min_len, self.level_digits)
    }
}

impl FromStr for SplitRule {
    type Err = SplitRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || SplitRuleError::Syntax(s!(s));
        let (a, b) = s.split_once(':').ok_or_else(syntax)?;
        let min_len = a.trim().parse().map_err(|_| syntax())?;
        let level_digits = b.trim().parse().map_err(|_| syntax())?;
        Self::new(min_len, level_digits)
    }
}

/// Length-threshold policy. Rules are kept longest-first; the first rule whose
/// `min_len` fits wins. Runs shorter than every rule are never guessed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthSplit {
    rules: Vec<SplitRule>,
}

impl LengthSplit {
    pub fn new(mut rules: Vec<SplitRule>) -> Self {
        rules.sort_by(|a, b| b.min_len.cmp(&a.min_len));
        rules.dedup_by_key(|r| r.min_len);
        Self { rules }
    }

    pub fn rules(&self) -> &[SplitRule] {
        &self.rules
    }
}

impl Default for LengthSplit {
    fn default() -> Self {
        Self::new(
            DEFAULT_SPLIT_RULES
                .iter()
                .map(|&(min_len, level_digits)| SplitRule { min_len, level_digits })
                .collect(),
        )
    }
}

impl SplitPolicy for LengthSplit {
    fn split(&self, digits: &str) -> Option<ProgressReading> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let rule = self.rules.iter().find(|r| digits.len() >= r.min_len)?;
        let (level, xp) = digits.split_at_checked(rule.level_digits)?;
        Some(ProgressReading::new(level.parse().ok()?, xp.parse().ok()?))
    }
}
