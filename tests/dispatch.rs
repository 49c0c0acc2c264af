mod common;

use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use rust_qa_chat::common::{DispatchOutcome, FALLBACK_TEXT, Sender};
use rust_qa_chat::network::ERROR_TEXT;
use rust_qa_chat::ErrorKind;

use common::{FakeSurface, dispatcher_for, unreachable_endpoint};

#[tokio::test]
async fn hello_round_trip_renders_user_then_bot() {
    let server = MockServer::start_async().await;
    let chat = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat")
                .header("content-type", "application/json")
                .json_body(json!({"message": "hello"}));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"response": "hi there"}));
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let mut surface = FakeSurface::with_input("hello");

    let outcome = dispatcher.send_message(&mut surface).await;

    assert_eq!(outcome, DispatchOutcome::Succeeded);
    assert_eq!(
        surface.rendered_pairs(),
        vec![
            ("hello".to_string(), Sender::User),
            ("hi there".to_string(), Sender::Bot),
        ]
    );
    assert_eq!(surface.input.as_deref(), Some(""));
    chat.assert_calls(1);
}

#[tokio::test]
async fn input_is_trimmed_before_echo_and_send() {
    let server = MockServer::start_async().await;
    let chat = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat")
                .json_body(json!({"message": "what are his skills?"}));
            then.status(200)
                .json_body(json!({"response": "Customer Service, Troubleshooting"}));
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let mut surface = FakeSurface::with_input("   what are his skills?\t\n");

    dispatcher.send_message(&mut surface).await;

    assert_eq!(surface.rendered[0].text, "what are his skills?");
    assert_eq!(surface.rendered[0].sender, Sender::User);
    assert_eq!(surface.rendered[1].text, "Customer Service, Troubleshooting");
    assert_eq!(surface.clears, 1);
    chat.assert_calls(1);
}

#[tokio::test]
async fn whitespace_input_renders_nothing_and_sends_nothing() {
    let server = MockServer::start_async().await;
    let chat = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).json_body(json!({"response": "unexpected"}));
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    for input in ["", "  ", "\t\n "] {
        let mut surface = FakeSurface::with_input(input);

        let outcome = dispatcher.send_message(&mut surface).await;

        assert_eq!(outcome, DispatchOutcome::Aborted);
        assert!(surface.rendered.is_empty());
        assert_eq!(surface.clears, 0);
        assert_eq!(surface.input.as_deref(), Some(input));
    }
    chat.assert_calls(0);
}

#[tokio::test]
async fn missing_input_field_aborts() {
    let server = MockServer::start_async().await;
    let chat = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).json_body(json!({"response": "unexpected"}));
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let mut surface = FakeSurface::without_input();

    assert_eq!(
        dispatcher.send_message(&mut surface).await,
        DispatchOutcome::Aborted
    );
    assert!(surface.rendered.is_empty());
    chat.assert_calls(0);
}

#[tokio::test]
async fn server_error_renders_error_notice_without_parsing_body() {
    let server = MockServer::start_async().await;
    let chat = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!({"response": "An internal server error occurred."}));
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let mut surface = FakeSurface::with_input("test");

    let outcome = dispatcher.send_message(&mut surface).await;

    assert_eq!(outcome, DispatchOutcome::Failed);
    assert_eq!(
        surface.rendered_pairs(),
        vec![
            ("test".to_string(), Sender::User),
            (ERROR_TEXT.to_string(), Sender::Bot),
        ]
    );
    chat.assert_calls(1);
}

#[tokio::test]
async fn bad_request_is_a_transport_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(400)
                .json_body(json!({"response": "Invalid request: 'message' field missing."}));
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let err = dispatcher.backend().exchange("anything").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TransportFailure);
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn empty_object_renders_fallback_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat")
                .json_body(json!({"message": "ping"}));
            then.status(200).json_body(json!({}));
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let mut surface = FakeSurface::with_input("ping");

    let outcome = dispatcher.send_message(&mut surface).await;

    assert_eq!(outcome, DispatchOutcome::Succeeded);
    assert_eq!(surface.rendered.len(), 2);
    assert_eq!(surface.rendered[1].text, FALLBACK_TEXT);
    assert_eq!(surface.rendered[1].sender, Sender::Bot);
}

#[tokio::test]
async fn null_and_empty_responses_render_fallback_text() {
    for body in [json!({"response": null}), json!({"response": ""})] {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat");
                then.status(200).json_body(body.clone());
            })
            .await;

        let dispatcher = dispatcher_for(&server.url("/chat"));
        let mut surface = FakeSurface::with_input("status");
        dispatcher.send_message(&mut surface).await;

        assert_eq!(surface.rendered[1].text, FALLBACK_TEXT, "body: {body}");
    }
}

#[tokio::test]
async fn malformed_body_renders_error_notice() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>oops</html>");
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let err = dispatcher.backend().exchange("hi").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);

    let mut surface = FakeSurface::with_input("hi");
    let outcome = dispatcher.send_message(&mut surface).await;

    assert_eq!(outcome, DispatchOutcome::Failed);
    assert_eq!(surface.rendered.len(), 2);
    assert_eq!(surface.rendered[1].text, ERROR_TEXT);
    assert_eq!(surface.rendered[1].sender, Sender::Bot);
}

#[tokio::test]
async fn unreachable_backend_renders_one_error_notice() {
    let dispatcher = dispatcher_for(&unreachable_endpoint());
    let mut surface = FakeSurface::with_input("anyone there?");

    let outcome = dispatcher.send_message(&mut surface).await;

    assert_eq!(outcome, DispatchOutcome::Failed);
    assert_eq!(
        surface.rendered_pairs(),
        vec![
            ("anyone there?".to_string(), Sender::User),
            (ERROR_TEXT.to_string(), Sender::Bot),
        ]
    );

    let err = dispatcher.backend().exchange("again").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailure);
}

#[tokio::test]
async fn health_check_reads_root_route() {
    let server = MockServer::start_async().await;
    let root = server
        .mock_async(|when, then| {
            when.method(httpmock::Method::GET).path("/");
            then.status(200).body("Bot service is running.");
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let body = dispatcher.backend().health_check().await.unwrap();

    assert_eq!(body, "Bot service is running.");
    root.assert_calls(1);
}

#[tokio::test]
async fn numeric_response_renders_error_notice() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).json_body(json!({"response": 5}));
        })
        .await;

    let dispatcher = dispatcher_for(&server.url("/chat"));
    let err = dispatcher.backend().exchange("count").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);

    let mut surface = FakeSurface::with_input("count");
    let outcome = dispatcher.send_message(&mut surface).await;

    assert_eq!(outcome, DispatchOutcome::Failed);
    assert_eq!(
        surface.rendered_pairs(),
        vec![
            ("count".to_string(), Sender::User),
            (ERROR_TEXT.to_string(), Sender::Bot),
        ]
    );
}
