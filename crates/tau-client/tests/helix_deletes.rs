//! Helix delete operations against a live HTTP server

mod common;

use chrono::Datelike;
use tau_client::ApiError;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REWARDS_PATH: &str = "/api/twitch/helix/channel_points/custom_rewards/";

async fn mount_delete(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("DELETE"))
        .and(path(route))
        .and(header("Authorization", "Token foo"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn delete_request_succeeds_on_no_content() {
    let server = MockServer::start().await;
    mount_delete(&server, REWARDS_PATH, 204).await;

    let helix = common::helix_client(&server);

    helix
        .delete_request("channel_points/custom_rewards", &[])
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_request_returns_authorization_error() {
    let server = MockServer::start().await;
    mount_delete(&server, REWARDS_PATH, 401).await;

    let err = common::helix_client(&server)
        .delete_request("channel_points/custom_rewards", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Authorization(_)));
}

#[tokio::test]
async fn delete_request_returns_rate_limit_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(REWARDS_PATH))
        .and(header("Authorization", "Token foo"))
        .respond_with(ResponseTemplate::new(429).insert_header("Ratelimit-Reset", "1623961625"))
        .expect(1)
        .mount(&server)
        .await;

    let err = common::helix_client(&server)
        .delete_request("channel_points/custom_rewards", &[])
        .await
        .unwrap_err();

    let reset = err.reset_time().expect("rate limit error carries reset time");
    assert_eq!(reset.year(), 2021);
    assert_eq!(reset.month(), 6);
    assert_eq!(reset.day(), 17);
}

#[tokio::test]
async fn delete_request_returns_generic_error() {
    let server = MockServer::start().await;
    mount_delete(&server, REWARDS_PATH, 404).await;

    let err = common::helix_client(&server)
        .delete_request("channel_points/custom_rewards", &[])
        .await
        .unwrap_err();

    match err {
        ApiError::Generic { code, body } => {
            assert_eq!(code, 404);
            assert!(body.is_empty());
        }
        other => panic!("expected generic error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_custom_reward_sends_ids() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(REWARDS_PATH))
        .and(query_param("broadcaster_id", "123"))
        .and(query_param("id", "456"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    common::helix_client(&server)
        .delete_custom_reward("123", "456")
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_eventsub_subscription_sends_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/twitch/helix/eventsub/subscriptions/"))
        .and(query_param("id", "123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    common::helix_client(&server)
        .delete_eventsub_subscription("123")
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_user_follows_sends_both_ids() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/twitch/helix/users/follows/"))
        .and(query_param("from_id", "123"))
        .and(query_param("to_id", "456"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    common::helix_client(&server)
        .delete_user_follows("123", "456")
        .await
        .unwrap();
}

#[tokio::test]
async fn unblock_user_sends_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/twitch/helix/users/blocks/"))
        .and(query_param("user_id", "123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    common::helix_client(&server).unblock_user("123").await.unwrap();
}

#[tokio::test]
async fn delete_videos_sends_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/twitch/helix/videos/"))
        .and(query_param("id", "123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    common::helix_client(&server)
        .delete_videos(&["123"])
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_schedule_segment_sends_encoded_id() {
    let segment = "eyJzZWdtZW50SUQiOiI4Y2EwN2E2NC0xYTZkLTRjYWItYWE5Ni0xNjIyYzNjYWUzZDkiLCJpc29ZZWFyIjoyMDIxLCJpc29XZWVrIjoyMX0=";
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/twitch/helix/schedule/segment/"))
        .and(query_param("broadcaster_id", "141981764"))
        .and(query_param("id", segment))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    common::helix_client(&server)
        .delete_channel_stream_schedule_segment("141981764", segment)
        .await
        .unwrap();
}

#[tokio::test]
async fn invalid_input_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let helix = common::helix_client(&server);

    assert!(matches!(
        helix.delete_custom_reward("", "123").await,
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        helix.unblock_user("\t").await,
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        helix.delete_videos(&["1", "2", "3", "4", "5", "6"]).await,
        Err(ApiError::BadRequest(_))
    ));
}
