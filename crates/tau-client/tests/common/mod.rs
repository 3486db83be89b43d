//! Common helpers for integration tests against a wiremock server

#![allow(dead_code)]

use serde_json::{json, Value};
use tau_client::{ClientConfig, HelixClient, TauClient};
use wiremock::MockServer;

pub const TOKEN: &str = "foo";

/// Config pointing at the mock server over plain http
pub fn config_for(server: &MockServer) -> ClientConfig {
    let addr = server.address();
    ClientConfig::new(addr.ip().to_string(), addr.port(), TOKEN, false)
}

pub fn helix_client(server: &MockServer) -> HelixClient {
    HelixClient::from_config(&config_for(server)).expect("client should build")
}

pub fn tau_client(server: &MockServer) -> TauClient {
    TauClient::from_config(&config_for(server)).expect("client should build")
}

/// A TAU stream record as the server returns it
pub fn stream_json(id: &str, user_login: &str) -> Value {
    json!({
        "id": id,
        "streamer": "s1",
        "stream_id": format!("twitch_{id}"),
        "user_id": "141981764",
        "user_login": user_login,
        "user_name": user_login.to_uppercase(),
        "game_id": "509658",
        "game_name": "Just Chatting",
        "type": "live",
        "title": "Test Stream",
        "viewer_count": 1000,
        "started_at": "2021-06-17T20:00:00Z",
        "ended_at": null,
        "language": "en",
        "thumbnail_url": "https://example.com/thumb.jpg",
        "tag_ids": [],
        "is_mature": false
    })
}

/// A paginated envelope around `results`
pub fn page(results: Vec<Value>, next: Option<String>, count: usize) -> Value {
    json!({
        "results": results,
        "next": next,
        "previous": null,
        "count": count
    })
}

/// Returns a port nothing is listening on
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}
