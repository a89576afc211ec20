// =============================================================================
// CaseDesk Common - Native Client Tests
// =============================================================================
//
// Each test binds a one-shot HTTP responder on localhost and points the
// client at it.

use casedesk_common::case::{CaseStatus, Resolution};
use casedesk_common::{CaseClient, CaseLookup, FetchError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one request with `status` and `body`; returns the base URL and a
/// handle resolving to the request line that was received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let n = socket.read(&mut buf).await.unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        request.lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{}/api", addr), handle)
}

#[tokio::test]
async fn test_list_cases_sends_search_and_decodes() {
    let body = r#"[
        {"id": "1", "title": "Smith v. Bayersche Motors", "status": "won", "jurisdiction": "California", "caseType": "Liability", "date": "2023-05-15"},
        {"title": "missing id", "status": "lost"}
    ]"#;
    let (base, handle) = serve_once("200 OK", body).await;

    let client = CaseClient::new(base).unwrap();
    let cases = client.list_cases("new york").await.unwrap();

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].status, CaseStatus::Resolved(Resolution::InFavourOfDefendant));

    let request_line = handle.await.unwrap();
    assert!(request_line.starts_with("GET /api/cases/?search=new%20york "));
}

#[tokio::test]
async fn test_get_case_404_is_not_found() {
    let (base, _handle) = serve_once("404 Not Found", r#"{"detail": "Case not found"}"#).await;

    let client = CaseClient::new(base).unwrap();
    let result = client.get_case("missing").await;
    assert_eq!(result, Err(FetchError::NotFound));
    assert_eq!(
        CaseLookup::from_result("missing", result),
        CaseLookup::NotFound("missing".into())
    );
}

#[tokio::test]
async fn test_server_error_is_load_failure() {
    let (base, _handle) = serve_once("500 Internal Server Error", "boom").await;

    let client = CaseClient::new(base).unwrap();
    match client.list_cases("").await {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_list_is_decode_error() {
    let (base, _handle) = serve_once("200 OK", r#"{"not": "a list"}"#).await;

    let client = CaseClient::new(base).unwrap();
    assert!(matches!(client.list_cases("").await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_trend_stats() {
    let body = r#"{"totalCases": 5, "wonCases": 2, "lostCases": 1, "inProgressCases": 2, "winRate": 40.0, "lossRate": 20.0}"#;
    let (base, handle) = serve_once("200 OK", body).await;

    let client = CaseClient::new(base).unwrap();
    let stats = client.trend_stats().await.unwrap();
    assert_eq!(stats.total_cases, 5);
    assert_eq!(stats.settled_cases, 0);
    assert!(handle.await.unwrap().starts_with("GET /api/stats/ "));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = CaseClient::new(format!("http://127.0.0.1:{}/api", port)).unwrap();
    assert!(matches!(client.car_stats().await, Err(FetchError::Network(_))));
}
