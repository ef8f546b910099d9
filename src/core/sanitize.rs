// src/core/sanitize.rs

/// Characters the profile may use to group thousands ("14,132", "4 960").
pub const THOUSANDS_SEPARATORS: &[char] = &[',', '\'', '\u{00A0}', '\u{202F}', '_'];

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() && !THOUSANDS_SEPARATORS.contains(&ch) {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop thousands separators from a captured digit run. Idempotent.
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|c| !THOUSANDS_SEPARATORS.contains(c)).collect()
}
