//! Native client tests against a mock backend.
//!
//! These tests verify that:
//! 1. Activity fetches bypass caches and keep the server's ordering
//! 2. Activity names and emails are percent-encoded in paths and queries
//! 3. Non-ok replies are returned with their body, broken bodies are errors

#![cfg(feature = "no-wasm")]

use activity_board::client::request::NoWasmClient;
use activity_board::config::BoardConfig;
use activity_board::interface::{ActivitiesApi, HttpClient};
use activity_board::model::dtos::{RemovalParams, SignupParams};
use activity_board::model::structs::Participant;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> NoWasmClient {
    let config = BoardConfig::with_base_url(&server.uri()).unwrap();
    NoWasmClient::new(&config).await.unwrap()
}

#[tokio::test]
async fn fetch_is_not_cached_and_keeps_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .and(header("cache-control", "no-store"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Programming Class": {
                "description": "Learn programming fundamentals",
                "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                "max_participants": 20,
                "participants": ["emma@mergington.edu", {"name": "Sophia Lee"}]
            },
            "Chess Club": {
                "description": "Learn strategies",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": []
            }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let first = client.fetch_activities().await.unwrap();
    let second = client.fetch_activities().await.unwrap();
    assert_eq!(first, second);

    let names: Vec<&str> = first.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["Programming Class", "Chess Club"]);

    let programming = first.get("Programming Class").unwrap();
    assert_eq!(programming.spots_left(), 18);
    assert_eq!(
        programming.participants[1],
        Participant::Record {
            name: Some("Sophia Lee".to_string()),
            email: None
        }
    );
}

#[tokio::test]
async fn fetch_rejects_non_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.fetch_activities().await.is_err());
}

#[tokio::test]
async fn signup_encodes_activity_and_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/activities/Chess%20Club/signup"))
        .and(query_param("email", "new+kid@mergington.edu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Signed up new+kid@mergington.edu for Chess Club"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resp = client
        .signup(SignupParams {
            activity: "Chess Club",
            email: "new+kid@mergington.edu",
        })
        .await
        .unwrap();

    assert!(resp.ok());
    assert_eq!(
        resp.message().as_deref(),
        Some("Signed up new+kid@mergington.edu for Chess Club")
    );
}

#[tokio::test]
async fn signup_rejection_keeps_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/activities/Chess%20Club/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Activity full"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resp = client
        .signup(SignupParams {
            activity: "Chess Club",
            email: "late@mergington.edu",
        })
        .await
        .unwrap();

    assert!(!resp.ok());
    assert_eq!(resp.status, 400);
    assert_eq!(resp.detail().as_deref(), Some("Activity full"));
}

#[tokio::test]
async fn removal_uses_delete_on_participants() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/activities/Drama%20Club/participants"))
        .and(query_param("email", "temp.remove@mergington.edu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Removed temp.remove@mergington.edu from Drama Club"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resp = client
        .remove_participant(RemovalParams {
            activity: "Drama Club",
            email: "temp.remove@mergington.edu",
        })
        .await
        .unwrap();

    assert!(resp.ok());
}
