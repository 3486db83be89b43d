use chrono::{DateTime, Utc};

/// Message used for a 401 whose body is blank
pub const DEFAULT_AUTHORIZATION_MESSAGE: &str = "invalid or expired token";

/// Errors returned by every TAU and Helix operation
///
/// Exactly one variant is produced per failed call. `BadRequest` never
/// reaches the network; the remaining taxonomy variants come from the
/// remote status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller input was rejected before any request was sent
    #[error("{0}")]
    BadRequest(String),
    /// The remote service answered 401
    #[error("{0}")]
    Authorization(String),
    /// The remote service answered 429
    #[error("rate limited until {}", .reset_time.to_rfc3339())]
    RateLimit { reset_time: DateTime<Utc> },
    /// Any other non-2xx status
    #[error("{}", generic_message(.code, .body))]
    Generic { code: u16, body: String },
    /// The transport failed before a status code was received
    #[error(transparent)]
    Transport(anyhow::Error),
    /// A 2xx body could not be decoded
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

fn generic_message(code: &u16, body: &str) -> String {
    if body.is_empty() {
        format!("request failed with status {code}")
    } else {
        format!("request failed with status {code}: {body}")
    }
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Returns the reset time carried by a rate-limit error
    pub fn reset_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::RateLimit { reset_time } => Some(*reset_time),
            _ => None,
        }
    }

    /// Returns the HTTP status this error was classified from, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authorization(_) => Some(401),
            Self::RateLimit { .. } => Some(429),
            Self::Generic { code, .. } => Some(*code),
            Self::BadRequest(_) | Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }
}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::BadRequest(a), Self::BadRequest(b))
            | (Self::Authorization(a), Self::Authorization(b)) => a == b,
            (Self::RateLimit { reset_time: a }, Self::RateLimit { reset_time: b }) => a == b,
            (
                Self::Generic { code: ca, body: ba },
                Self::Generic { code: cb, body: bb },
            ) => ca == cb && ba == bb,
            (Self::Transport(a), Self::Transport(b)) => a.to_string() == b.to_string(),
            (Self::Decode(a), Self::Decode(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// Errors raised while building a client
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("host can't be blank")]
    BlankHost,
    #[error("port must be between 1 and 65535")]
    InvalidPort,
    #[error("token can't be blank")]
    BlankToken,
    #[error("token contains characters not allowed in a header")]
    InvalidToken,
    #[error("timeout must be at least one second")]
    InvalidTimeout,
    #[error("failed to build HTTP transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not determine config directory")]
    NoConfigDir,
}
