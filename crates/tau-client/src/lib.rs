//! Typed client for a TAU server
//!
//! [`TauClient`] talks to TAU's own streamer API and [`HelixClient`] to the
//! Twitch Helix proxy TAU exposes. Both send every call through one
//! [`Dispatcher`], which authenticates with `Authorization: Token <token>` and
//! maps status codes onto [`ApiError`].

pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod helix;
pub mod http;
pub mod pagination;
pub mod tau;
pub mod validate;

pub use config::ClientConfig;
pub use dispatch::Dispatcher;
pub use endpoint::Endpoint;
pub use error::{ApiError, ConfigError};
pub use helix::HelixClient;
pub use http::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};
pub use pagination::{Limit, Page};
pub use tau::TauClient;
