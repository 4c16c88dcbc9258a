use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use preview_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchOutput, FetchSettings, Fetcher,
    RequestId,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Answers after a per-URL delay; `"fail"` produces a network error.
struct ScriptedFetcher;

#[async_trait::async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, _request_id: RequestId, url: &str) -> Result<FetchOutput, FetchError> {
        match url {
            "slow" => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                unreachable!("slow fetch is always cancelled")
            }
            "fail" => Err(FetchError {
                kind: FailureKind::Network,
                message: "connection refused".into(),
            }),
            other => Ok(FetchOutput {
                status_code: 200,
                bytes: other.as_bytes().to_vec(),
                content_type: None,
            }),
        }
    }
}

fn scripted_engine() -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (event_tx, event_rx) = mpsc::channel();
    let engine = EngineHandle::with_fetcher(Arc::new(ScriptedFetcher), event_tx).expect("engine");
    (engine, event_rx)
}

#[tokio::test]
async fn engine_reports_completion_from_real_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hello"))
        .respond_with(ResponseTemplate::new(201).set_body_string("Hello"))
        .mount(&server)
        .await;

    let (event_tx, event_rx) = mpsc::channel();
    let engine = EngineHandle::new(FetchSettings::default(), event_tx).expect("engine");
    engine.fetch(9, format!("{}/hello", server.uri()));

    let event = tokio::task::spawn_blocking(move || event_rx.recv_timeout(Duration::from_secs(5)))
        .await
        .unwrap()
        .expect("completion event");

    match event {
        EngineEvent::FetchCompleted { request_id, result } => {
            assert_eq!(request_id, 9);
            let output = result.expect("fetch ok");
            assert_eq!(output.status_code, 201);
            assert_eq!(output.bytes, b"Hello");
        }
    }
}

#[test]
fn engine_reports_failures() {
    let (engine, events) = scripted_engine();
    engine.fetch(1, "fail");

    let EngineEvent::FetchCompleted { request_id, result } =
        events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(request_id, 1);
    let err = result.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn cancelled_fetch_reports_nothing() {
    let (engine, events) = scripted_engine();
    engine.fetch(1, "slow");
    engine.cancel(1);
    engine.fetch(2, "fast");

    let EngineEvent::FetchCompleted { request_id, result } =
        events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(request_id, 2);
    assert_eq!(result.unwrap().bytes, b"fast");
    assert!(events.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn cancelling_unknown_request_is_harmless() {
    let (engine, events) = scripted_engine();
    engine.cancel(42);
    engine.fetch(1, "ok");

    let EngineEvent::FetchCompleted { request_id, .. } =
        events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(request_id, 1);
}
