use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ConfigError};
use crate::http::{HttpClient, ReqwestClient};
use crate::validate::{require_bounded, require_non_blank, MAX_VIDEO_IDS};

/// Base path of the Helix proxy TAU exposes
pub const HELIX_BASE_PATH: &str = "/api/twitch/helix/";

/// Twitch Helix API client, routed through a TAU server
///
/// Generic over the HTTP client implementation for testability.
#[derive(Debug, Clone)]
pub struct HelixClient<H: HttpClient = ReqwestClient> {
    dispatcher: Dispatcher<H>,
}

impl HelixClient<ReqwestClient> {
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

impl<H: HttpClient> HelixClient<H> {
    /// Creates a client over a custom HTTP implementation
    pub fn with_http_client(config: &ClientConfig, http: H) -> Result<Self, ConfigError> {
        Ok(Self {
            dispatcher: Dispatcher::new(http, config, HELIX_BASE_PATH)?,
        })
    }

    /// Makes an authenticated GET request and decodes the JSON response
    pub async fn get_request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let endpoint = Endpoint::get(path).query_pairs(query);
        self.dispatcher.execute_json(&endpoint).await
    }

    /// Makes an authenticated POST request with a JSON body
    pub async fn post_request<B, T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = Endpoint::post(path).query_pairs(query).json(body)?;
        self.dispatcher.execute_json(&endpoint).await
    }

    /// Makes an authenticated DELETE request
    ///
    /// Helix answers deletes with an empty 2xx body, so any 2xx is success.
    pub async fn delete_request(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<(), ApiError> {
        self.delete(Endpoint::delete(path).query_pairs(query)).await
    }

    async fn delete(&self, endpoint: Endpoint) -> Result<(), ApiError> {
        self.dispatcher.execute(&endpoint).await?;
        Ok(())
    }

    /// Deletes a custom channel points reward
    pub async fn delete_custom_reward(
        &self,
        broadcaster_id: &str,
        id: &str,
    ) -> Result<(), ApiError> {
        let broadcaster_id = require_non_blank(broadcaster_id, "broadcaster")?;
        let id = require_non_blank(id, "ID")?;
        self.delete(
            Endpoint::delete("channel_points/custom_rewards")
                .query("broadcaster_id", broadcaster_id)
                .query("id", id),
        )
        .await
    }

    /// Deletes an EventSub subscription
    pub async fn delete_eventsub_subscription(&self, id: &str) -> Result<(), ApiError> {
        let id = require_non_blank(id, "ID")?;
        self.delete(Endpoint::delete("eventsub/subscriptions").query("id", id))
            .await
    }

    /// Removes a follow relationship between two users
    pub async fn delete_user_follows(&self, from_id: &str, to_id: &str) -> Result<(), ApiError> {
        let from_id = require_non_blank(from_id, "fromID")?;
        let to_id = require_non_blank(to_id, "toID")?;
        self.delete(
            Endpoint::delete("users/follows")
                .query("from_id", from_id)
                .query("to_id", to_id),
        )
        .await
    }

    /// Unblocks a user for the authenticated broadcaster
    pub async fn unblock_user(&self, user_id: &str) -> Result<(), ApiError> {
        let user_id = require_non_blank(user_id, "userID")?;
        self.delete(Endpoint::delete("users/blocks").query("user_id", user_id))
            .await
    }

    /// Deletes up to five videos in one request
    pub async fn delete_videos<S: AsRef<str>>(&self, ids: &[S]) -> Result<(), ApiError> {
        let ids = require_bounded(ids, "IDs", MAX_VIDEO_IDS)?;
        let ids = ids.iter().map(|id| AsRef::<str>::as_ref(id));
        self.delete(Endpoint::delete("videos").query_all("id", ids))
            .await
    }

    /// Deletes a single segment from a channel's stream schedule
    pub async fn delete_channel_stream_schedule_segment(
        &self,
        broadcaster_id: &str,
        id: &str,
    ) -> Result<(), ApiError> {
        let broadcaster_id = require_non_blank(broadcaster_id, "broadcaster")?;
        let id = require_non_blank(id, "ID")?;
        self.delete(
            Endpoint::delete("schedule/segment")
                .query("broadcaster_id", broadcaster_id)
                .query("id", id),
        )
        .await
    }
}
