// src/config/options.rs
use super::consts::*;
use crate::specs::split::LengthSplit;

/// Everything one run needs. Built by the CLI, passed down by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub profile_url: String,
    pub beeminder: BeeminderOptions,
    pub split: LengthSplit,
    /// Extract and reconcile, but never append.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_url: s!(DEFAULT_PROFILE_URL),
            beeminder: BeeminderOptions::default(),
            split: LengthSplit::default(),
            dry_run: false,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct BeeminderOptions {
    pub base_url: String,
    pub username: String,
    pub goal: String,
    pub auth_token: Option<String>,
}

impl Default for BeeminderOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BEEMINDER_API),
            username: s!(DEFAULT_USERNAME),
            goal: s!(DEFAULT_GOAL),
            auth_token: None,
        }
    }
}

impl BeeminderOptions {
    pub fn datapoints_url(&self) -> String {
        format!(
            "{}/users/{}/goals/{}/datapoints.json",
            self.base_url.trim_end_matches('/'),
            self.username,
            self.goal
        )
    }

    pub fn has_token(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

// Keep the token out of debug logs.
impl std::fmt::Debug for BeeminderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeeminderOptions")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("goal", &self.goal)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datapoints_url_joins_cleanly() {
        let mut opts = BeeminderOptions::default();
        opts.base_url = s!("http://localhost:8080/api/v1/");
        opts.username = s!("alice");
        opts.goal = s!("code");
        assert_eq!(
            opts.datapoints_url(),
            "http://localhost:8080/api/v1/users/alice/goals/code/datapoints.json"
        );
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let mut opts = BeeminderOptions::default();
        assert!(!opts.has_token());
        opts.auth_token = Some(s!("   "));
        assert!(!opts.has_token());
        opts.auth_token = Some(s!("abc123"));
        assert!(opts.has_token());
    }

    #[test]
    fn debug_redacts_token() {
        let mut opts = BeeminderOptions::default();
        opts.auth_token = Some(s!("supersecret"));
        let dbg = format!("{opts:?}");
        assert!(!dbg.contains("supersecret"));
        assert!(dbg.contains("<redacted>"));
    }
}
