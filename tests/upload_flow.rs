//! End-to-end submit flow against an in-process backend.

mod common;

use common::validate_server::{dead_base_url, CannedResponse, ValidateServer};
use common::{client_for, SAMPLE_RESPONSE};
use docval::app::{App, Message, SubmitRejection, WidgetState, UPLOAD_FAILED};
use docval::core::client::BackendStatus;
use docval::core::models::{ExtractedValue, SelectedFile};
use docval::core::submit::{dispatch_submit, spawn_probe};
use tokio::sync::mpsc;

fn letter() -> SelectedFile {
    SelectedFile::new("letter.txt", "text/plain", b"Name: Jane Doe\nPlace: Pune".to_vec())
}

/// Awaits the upload task and feeds everything it sent back into the app.
async fn settle(app: &mut App, handle: tokio::task::JoinHandle<()>, rx: &mut mpsc::Receiver<Message>) {
    handle.await.expect("upload task panicked");
    while let Ok(message) = rx.try_recv() {
        app.apply(message);
    }
}

#[tokio::test]
async fn submit_without_file_sends_nothing() {
    let server = ValidateServer::start(vec![CannedResponse::json(200, SAMPLE_RESPONSE)]);
    let client = client_for(server.base_url());
    let (tx, _rx) = mpsc::channel(8);
    let mut app = App::new();

    let rejection = dispatch_submit(&mut app, &client, &tx).unwrap_err();

    assert_eq!(rejection, SubmitRejection::NoFileSelected);
    assert!(app.notice.is_some());
    assert_eq!(app.state, WidgetState::Idle);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn submit_posts_one_multipart_request() {
    let server = ValidateServer::start(vec![CannedResponse::json(200, SAMPLE_RESPONSE)]);
    let client = client_for(server.base_url());
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new();
    app.select_file(letter());

    let handle = dispatch_submit(&mut app, &client, &tx).unwrap();
    assert_eq!(app.state, WidgetState::Submitting);
    assert!(!app.is_submit_enabled());

    settle(&mut app, handle, &mut rx).await;

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/validate");
    assert!(request.header("content-type").unwrap().starts_with("multipart/form-data"));

    let body = request.body_text();
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="letter.txt""#));
    assert!(body.contains("Content-Type: text/plain"));
    assert!(body.contains("Name: Jane Doe\nPlace: Pune"));

    assert_eq!(app.state, WidgetState::ResultReady);
    assert!(app.is_submit_enabled());
    let result = app.result().unwrap();
    assert_eq!(result.summary, "Looks valid");
    assert_eq!(result.key_info[0], ("name".to_string(), ExtractedValue::Found("Jane".to_string())));
    assert_eq!(result.key_info[1], ("dob".to_string(), ExtractedValue::Missing));
}

#[tokio::test]
async fn server_error_becomes_generic_message() {
    let server = ValidateServer::start(vec![CannedResponse::json(500, r#"{"error":"boom"}"#)]);
    let client = client_for(server.base_url());
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new();
    app.select_file(letter());

    let handle = dispatch_submit(&mut app, &client, &tx).unwrap();
    settle(&mut app, handle, &mut rx).await;

    assert_eq!(app.state, WidgetState::ErrorReady);
    assert_eq!(app.error(), Some(UPLOAD_FAILED));
    assert!(app.result().is_none());
    assert!(app.is_submit_enabled());
}

#[tokio::test]
async fn unreachable_backend_becomes_generic_message() {
    let client = client_for(&dead_base_url());
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new();
    app.select_file(letter());

    let handle = dispatch_submit(&mut app, &client, &tx).unwrap();
    settle(&mut app, handle, &mut rx).await;

    assert_eq!(app.state, WidgetState::ErrorReady);
    assert_eq!(app.error(), Some(UPLOAD_FAILED));
}

#[tokio::test]
async fn malformed_body_becomes_generic_message() {
    let server = ValidateServer::start(vec![CannedResponse::json(200, "<html>oops</html>")]);
    let client = client_for(server.base_url());
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new();
    app.select_file(letter());

    let handle = dispatch_submit(&mut app, &client, &tx).unwrap();
    settle(&mut app, handle, &mut rx).await;

    assert_eq!(app.state, WidgetState::ErrorReady);
    assert_eq!(app.error(), Some(UPLOAD_FAILED));
}

#[tokio::test]
async fn resubmit_after_error_repeats_the_flow() {
    let server = ValidateServer::start(vec![
        CannedResponse::json(500, r#"{"error":"model not loaded"}"#),
        CannedResponse::json(200, SAMPLE_RESPONSE),
    ]);
    let client = client_for(server.base_url());
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new();
    app.select_file(letter());

    let handle = dispatch_submit(&mut app, &client, &tx).unwrap();
    settle(&mut app, handle, &mut rx).await;
    assert_eq!(app.state, WidgetState::ErrorReady);

    let handle = dispatch_submit(&mut app, &client, &tx).unwrap();
    assert!(app.error().is_none());
    assert_eq!(app.state, WidgetState::Submitting);
    settle(&mut app, handle, &mut rx).await;

    assert_eq!(app.state, WidgetState::ResultReady);
    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    // Boundaries differ between requests; the uploaded document does not.
    for request in &requests {
        assert_eq!(request.path, "/validate");
        assert!(request.body_text().contains("Name: Jane Doe\nPlace: Pune"));
    }
}

#[tokio::test]
async fn second_submit_while_busy_is_rejected() {
    let server = ValidateServer::start(vec![CannedResponse::json(200, SAMPLE_RESPONSE)]);
    let client = client_for(server.base_url());
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new();
    app.select_file(letter());

    let handle = dispatch_submit(&mut app, &client, &tx).unwrap();
    let ticket = app.in_flight().unwrap();
    let rejection = dispatch_submit(&mut app, &client, &tx).unwrap_err();
    assert_eq!(rejection, SubmitRejection::Busy { ticket });

    settle(&mut app, handle, &mut rx).await;
    assert_eq!(server.requests().len(), 1);
    assert_eq!(app.state, WidgetState::ResultReady);
}

#[tokio::test]
async fn reselecting_during_upload_discards_its_answer() {
    let server = ValidateServer::start(vec![CannedResponse::json(200, SAMPLE_RESPONSE)]);
    let client = client_for(server.base_url());
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new();
    app.select_file(letter());

    let handle = dispatch_submit(&mut app, &client, &tx).unwrap();
    app.select_file(SelectedFile::new("other.pdf", "application/pdf", b"%PDF-1.4".to_vec()));
    settle(&mut app, handle, &mut rx).await;

    assert_eq!(server.requests().len(), 1);
    assert_eq!(app.state, WidgetState::FileSelected);
    assert!(app.result().is_none());
    assert_eq!(app.file().unwrap().name, "other.pdf");
}

#[tokio::test]
async fn probe_reports_backend_liveness() {
    let server = ValidateServer::start(vec![CannedResponse::json(200, "\"running\"")]);
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new();

    spawn_probe(&client_for(server.base_url()), &tx).await.unwrap();
    app.apply(rx.try_recv().unwrap());
    assert_eq!(app.backend, BackendStatus::Online);
    let probe = &server.requests()[0];
    assert_eq!((probe.method.as_str(), probe.path.as_str()), ("GET", "/"));

    spawn_probe(&client_for(&dead_base_url()), &tx).await.unwrap();
    app.apply(rx.try_recv().unwrap());
    assert_eq!(app.backend, BackendStatus::Offline);
}
