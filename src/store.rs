// src/store.rs
//! The remote append-only datapoint log (a Beeminder goal). Read the history,
//! append new points; nothing is ever edited or deleted.
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::BeeminderOptions;

/// One datapoint as the goal API returns it. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Datapoint {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub value: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
}

fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// A datapoint to add.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDatapoint {
    pub value: f64,
    pub timestamp: i64,
    pub comment: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Beeminder auth token not set")]
    MissingToken,

    #[error("Beeminder request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Beeminder API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode datapoints: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read/append access to the goal's datapoints.
pub trait DatapointLog {
    /// All datapoints, in whatever order the service hands them over.
    fn history(&self) -> Result<Vec<Datapoint>, StoreError>;

    fn append(&self, point: &NewDatapoint) -> Result<(), StoreError>;
}

pub struct BeeminderStore {
    client: Client,
    opts: BeeminderOptions,
}

impl BeeminderStore {
    pub fn new(client: Client, opts: BeeminderOptions) -> Self {
        Self { client, opts }
    }

    fn token(&self) -> Result<&str, StoreError> {
        match self.opts.auth_token.as_deref() {
            Some(t) if !t.trim().is_empty() => Ok(t),
            _ => Err(StoreError::MissingToken),
        }
    }
}

/// Keep error bodies short in logs.
fn snippet(body: &str) -> String {
    body.chars().take(200).collect()
}

impl DatapointLog for BeeminderStore {
    fn history(&self) -> Result<Vec<Datapoint>, StoreError> {
        let token = self.token()?;
        let resp = self
            .client
            .get(self.opts.datapoints_url())
            .query(&[("auth_token", token)])
            .send()?;

        let status = resp.status();
        logf!("Beeminder API status: {}", status.as_u16());
        let body = resp.text()?;
        if !status.is_success() {
            return Err(StoreError::Status { status: status.as_u16(), body: snippet(&body) });
        }

        let points: Vec<Datapoint> = serde_json::from_str(&body)?;
        logf!("Found {} datapoint(s)", points.len());
        Ok(points)
    }

    fn append(&self, point: &NewDatapoint) -> Result<(), StoreError> {
        let token = self.token()?;
        let value = point.value.to_string();
        let timestamp = point.timestamp.to_string();

        let mut form: Vec<(&str, &str)> = vec![
            ("auth_token", token),
            ("value", value.as_str()),
            ("timestamp", timestamp.as_str()),
        ];
        if let Some(c) = point.comment.as_deref() {
            form.push(("comment", c));
        }

        logf!("Posting to Beeminder: value={}, comment={:?}", value, point.comment.as_deref().unwrap_or(""));
        let resp = self.client.post(self.opts.datapoints_url()).form(&form).send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(StoreError::Status { status: status.as_u16(), body: snippet(&body) });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_payload_and_tolerates_gaps() {
        let body = r#"[
            {"id":"a1","timestamp":1700000000,"daystamp":"20231114","value":1,"comment":"Level 14, XP: 960","updated_at":1700000001},
            {"id":"a2","timestamp":1700086400,"value":1.5,"comment":null},
            {"id":"a3","value":2}
        ]"#;
        let points: Vec<Datapoint> = serde_json::from_str(body).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].timestamp, 1_700_000_000);
        assert_eq!(points[0].comment, "Level 14, XP: 960");
        assert_eq!(points[1].value, 1.5);
        assert_eq!(points[1].comment, "");
        assert_eq!(points[2].timestamp, 0);
    }

    #[test]
    fn missing_token_is_refused_before_any_request() {
        let store = BeeminderStore::new(Client::new(), BeeminderOptions::default());
        assert!(matches!(store.history(), Err(StoreError::MissingToken)));
        let point = NewDatapoint { value: 1.0, timestamp: 0, comment: None };
        assert!(matches!(store.append(&point), Err(StoreError::MissingToken)));
    }

    #[test]
    fn snippet_caps_length() {
        let long = "x".repeat(500);
        assert_eq!(snippet(&long).len(), 200);
        assert_eq!(snippet("short"), "short");
    }
}
