use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Twitch channel TAU watches for going-live events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Streamer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub twitch_id: String,
    pub twitch_username: String,
    #[serde(default)]
    pub streaming: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// A stream TAU recorded for a streamer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stream {
    pub id: String,
    #[serde(default)]
    pub streamer: String,
    #[serde(default)]
    pub stream_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_login: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default, rename = "type")]
    pub stream_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub viewer_count: i64,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub is_mature: bool,
}

impl Stream {
    /// A stream is live until TAU records an end time
    pub fn is_live(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    /// Returns how long the stream ran, or has run so far if still live
    pub fn duration(&self) -> Option<chrono::Duration> {
        let started = self.started_at?;
        let ended = self.ended_at.unwrap_or_else(Utc::now);
        Some(ended.signed_duration_since(started))
    }
}

/// Request body for following a streamer
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FollowRequest<'a> {
    pub twitch_username: &'a str,
    pub streaming: bool,
    pub disabled: bool,
}
