// src/config/consts.rs

// Profile page
pub const DEFAULT_PROFILE_URL: &str = "https://www.boot.dev/u/kylepace";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Beeminder
pub const BEEMINDER_API: &str = "https://www.beeminder.com/api/v1";
pub const DEFAULT_USERNAME: &str = "kyle";
pub const DEFAULT_GOAL: &str = "programming";

// Datapoint value meaning "progress happened today"
pub const SENTINEL_VALUE: f64 = 1.0;

// Score = level * LEVEL_WEIGHT + xp
pub const LEVEL_WEIGHT: u64 = 1000;

// Split rules (min digit-run length, level digits), longest first
pub const DEFAULT_SPLIT_RULES: &[(usize, usize)] = &[(5, 2), (4, 1)];
