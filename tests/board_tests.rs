//! End-to-end board flows through the terminal surface.
//!
//! These tests verify that:
//! 1. A signup refreshes the board before the result message is printed
//! 2. A rejected signup prints the server detail and does not reload
//! 3. A broken activities endpoint replaces the board with the error text

#![cfg(feature = "no-wasm")]

use std::time::Duration;

use activity_board::app::terminal::TerminalSurface;
use activity_board::app::ActivityBoard;
use activity_board::client::request::NoWasmClient;
use activity_board::config::BoardConfig;
use activity_board::interface::HttpClient;
use activity_board::view::{MessageKind, LOAD_FAILED};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestBoard = ActivityBoard<NoWasmClient, TerminalSurface<Vec<u8>>>;

async fn board_for(server: &MockServer) -> TestBoard {
    let config = BoardConfig::with_base_url(&server.uri()).unwrap();
    let client = NoWasmClient::new(&config).await.unwrap();
    ActivityBoard::with_config(client, TerminalSurface::new(Vec::new()), &config)
}

fn output(board: TestBoard) -> String {
    let (_, surface) = board.into_parts();
    String::from_utf8(surface.into_inner()).unwrap()
}

#[tokio::test]
async fn signup_reloads_before_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/activities/Gym%20Class/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Signed up olivia@mergington.edu for Gym Class"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Gym Class": {
                "description": "Physical education",
                "schedule": "Mondays",
                "max_participants": 2,
                "participants": ["john@mergington.edu", "olivia@mergington.edu"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let board = board_for(&server).await;
    let message = board
        .submit_signup("olivia@mergington.edu", "Gym Class")
        .await;
    assert_eq!(message.kind, MessageKind::Success);
    assert!(board.surface().visible_message().is_some());

    let text = output(board);
    let board_at = text.find("Availability: 0 spots left").unwrap();
    let message_at = text
        .find("[success] Signed up olivia@mergington.edu for Gym Class")
        .unwrap();
    assert!(board_at < message_at);
    assert!(text.contains("[O ] olivia@mergington.edu"));
}

#[tokio::test]
async fn rejected_signup_prints_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/activities/Gym%20Class/signup"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Student already signed up"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let board = board_for(&server).await.with_hide_delay(Duration::ZERO);
    board.submit_signup("john@mergington.edu", "Gym Class").await;
    assert_eq!(board.surface().visible_message(), None);

    assert_eq!(output(board), "[error] Student already signed up\n");
}

#[tokio::test]
async fn unreachable_list_shows_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let board = board_for(&server).await;
    board.initialize().await;

    assert_eq!(output(board), format!("{LOAD_FAILED}\n"));
}
