// src/specs/profile.rs
//! Profile page → `ProgressReading`.
//!
//! Signals, in order of preference:
//! 1. separated display: "Level 14 960 XP" (two numbers, whitespace between)
//! 2. fused display: "Level 14960 XP" or "Level 14,960 XP", split by policy
//! 3. script data: `"level": 14` and `"xp": 960` anywhere in the page scripts
use std::sync::OnceLock;

use regex::Regex;

use super::split::SplitPolicy;
use crate::core::PageText;
use crate::core::sanitize::strip_separators;
use crate::progress::ProgressReading;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("no level/XP signal found on the profile page")]
    NotFound,
}

/// Where a reading came from, for logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Separated,
    Fused,
    Script,
}

pub fn extract(page: &PageText, policy: &dyn SplitPolicy) -> Result<ProgressReading, ExtractError> {
    extract_with_signal(page, policy).map(|(reading, _)| reading)
}

pub fn extract_with_signal(
    page: &PageText,
    policy: &dyn SplitPolicy,
) -> Result<(ProgressReading, Signal), ExtractError> {
    if let Some(r) = from_separated(&page.text) {
        logf!("Found Level: {}, XP: {} (separated)", r.level, r.xp);
        return Ok((r, Signal::Separated));
    }
    if let Some(r) = from_fused(&page.text, policy) {
        logf!("Found Level: {}, XP: {}", r.level, r.xp);
        return Ok((r, Signal::Fused));
    }
    if let Some(r) = from_scripts(&page.scripts) {
        logf!("Found in script - Level: {}, XP: {}", r.level, r.xp);
        return Ok((r, Signal::Script));
    }
    loge!("Could not find level and XP values in page");
    Err(ExtractError::NotFound)
}

/* ---------- helpers ---------- */

fn separated_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)level\s*(\d{1,3})[ \t]+([0-9][0-9,'\u{00A0}\u{202F}_]*)\s*xp")
            .expect("static regex")
    })
}

fn fused_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)level\s*([0-9][0-9,'\u{00A0}\u{202F}_]*)\s*xp").expect("static regex")
    })
}

fn script_level_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)"level"[:\s]*(\d+)"#).expect("static regex"))
}

fn script_xp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)"xp"[:\s]*(\d+)"#).expect("static regex"))
}

/// "Level 14 960 XP": both numbers are explicit, no guessing. The gap is plain
/// spaces only; NBSP groups digits inside a fused run.
fn from_separated(text: &str) -> Option<ProgressReading> {
    separated_re().captures_iter(text).find_map(|caps| {
        let level = caps[1].parse().ok()?;
        let xp = strip_separators(&caps[2]).parse().ok()?;
        Some(ProgressReading::new(level, xp))
    })
}

/// First fused run the policy agrees to split.
fn from_fused(text: &str, policy: &dyn SplitPolicy) -> Option<ProgressReading> {
    fused_re().captures_iter(text).find_map(|caps| {
        let digits = strip_separators(&caps[1]);
        let reading = policy.split(&digits);
        if reading.is_none() {
            logd!("Digit run {:?} too ambiguous to split", &caps[1]);
        }
        reading
    })
}

/// First `"level"` and first `"xp"` across all scripts, paired.
fn from_scripts(scripts: &[String]) -> Option<ProgressReading> {
    let first = |re: &Regex| -> Option<u32> {
        scripts
            .iter()
            .find_map(|s| re.captures(s).and_then(|c| c[1].parse().ok()))
    };
    let level = first(script_level_re())?;
    let xp = first(script_xp_re())?;
    Some(ProgressReading::new(level, xp))
}
