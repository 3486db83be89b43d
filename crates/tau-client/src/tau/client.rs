use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::endpoint::{path_segment, Endpoint};
use crate::error::{ApiError, ConfigError};
use crate::http::{HttpClient, ReqwestClient};
use crate::pagination::{collect_pages, Limit};
use crate::validate::require_non_blank;

use super::types::*;

/// Base path of TAU's own REST API
pub const TAU_BASE_PATH: &str = "/api/v1/";

/// Client for TAU's streamer and stream endpoints
///
/// Generic over the HTTP client implementation for testability.
#[derive(Debug, Clone)]
pub struct TauClient<H: HttpClient = ReqwestClient> {
    dispatcher: Dispatcher<H>,
}

impl TauClient<ReqwestClient> {
    /// Creates a client for the TAU server at `host:port`
    pub fn new(
        host: impl Into<String>,
        port: u16,
        token: impl Into<String>,
        secure: bool,
    ) -> Result<Self, ConfigError> {
        Self::from_config(&ClientConfig::new(host, port, token, secure))
    }

    /// Creates a client from loaded settings
    ///
    /// The settings are validated when the dispatcher is built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = ReqwestClient::with_timeout(config.timeout())?;
        Self::with_http_client(config, http)
    }
}

impl<H: HttpClient> TauClient<H> {
    /// Creates a client over a custom HTTP implementation
    pub fn with_http_client(config: &ClientConfig, http: H) -> Result<Self, ConfigError> {
        Ok(Self {
            dispatcher: Dispatcher::new(http, config, TAU_BASE_PATH)?,
        })
    }

    /// Lists every streamer TAU is listening to for going-live alerts
    pub async fn get_streamers(&self) -> Result<Vec<Streamer>, ApiError> {
        self.dispatcher
            .execute_json(&Endpoint::get("streamers"))
            .await
    }

    /// Gets the most recent stream TAU recorded for a streamer
    pub async fn get_latest_stream_for_streamer(&self, id: &str) -> Result<Stream, ApiError> {
        let id = require_non_blank(id, "ID")?;
        let path = format!("streamers/{}/streams/latest", path_segment(id));
        self.dispatcher.execute_json(&Endpoint::get(path)).await
    }

    /// Follows a Twitch user on TAU and subscribes to their going-live events
    pub async fn follow_streamer(&self, username: &str) -> Result<Streamer, ApiError> {
        let username = require_non_blank(username, "username")?;
        let endpoint = Endpoint::post("streamers").json(&FollowRequest {
            twitch_username: username,
            streaming: false,
            disabled: false,
        })?;
        self.dispatcher.execute_json(&endpoint).await
    }

    /// Gets a streamer's recorded streams, following pagination
    ///
    /// Pages are fetched until the service reports no further page or the
    /// number already gathered exceeds `limit`. The bound is checked between
    /// pages, so up to one page more than `limit` may be returned, and
    /// `Limit::Bounded(0)` still fetches the first page.
    pub async fn get_streams_for_streamer(
        &self,
        streamer_id: &str,
        limit: impl Into<Limit>,
    ) -> Result<Vec<Stream>, ApiError> {
        let streamer_id = require_non_blank(streamer_id, "streamer id")?;
        let path = format!("streamers/{}/streams", path_segment(streamer_id));
        collect_pages(&self.dispatcher, Endpoint::get(path), limit.into()).await
    }
}
