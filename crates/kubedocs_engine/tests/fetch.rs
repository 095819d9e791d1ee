use std::time::Duration;

use kubedocs_engine::{FetchFailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{header, headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(FetchSettings::default()).expect("client builds")
}

#[tokio::test]
async fn fetch_text_returns_decoded_body_and_sends_fixed_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .and(header("user-agent", "KubeDocsHarvester/0.1"))
        .and(headers(
            "accept",
            vec!["text/html", "application/xhtml+xml", "application/xml"],
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/doc", server.uri());
    let page = fetcher().fetch_text(&url).await.expect("fetch ok");

    assert_eq!(page.body, "<html>ok</html>");
    assert_eq!(page.final_url, url);
    assert!(page.content_type.unwrap().starts_with("text/html"));
    assert_eq!(page.encoding_label, "UTF-8");
}

#[tokio::test]
async fn fetch_text_honors_declared_charset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"caf\xe9".to_vec(), "text/html; charset=ISO-8859-1"),
        )
        .mount(&server)
        .await;

    let page = fetcher()
        .fetch_text(&format!("{}/latin", server.uri()))
        .await
        .expect("fetch ok");
    assert_eq!(page.body, "café");
}

#[tokio::test]
async fn fetch_text_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetcher()
        .fetch_text(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchFailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetch_text_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).expect("client builds");

    let err = fetcher
        .fetch_text(&format!("{}/slow", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchFailureKind::Timeout);
}

#[tokio::test]
async fn fetch_text_rejects_invalid_url() {
    let err = fetcher().fetch_text("not a url").await.unwrap_err();
    assert_eq!(err.kind, FetchFailureKind::InvalidUrl);
}

#[tokio::test]
async fn download_to_file_streams_exact_bytes() {
    let server = MockServer::start().await;
    let payload: Vec<u8> = b"%PDF-1.7 binary payload".repeat(100);
    Mock::given(method("GET"))
        .and(path("/guide.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&server)
        .await;

    let temp = tempfile::TempDir::new().unwrap();
    let target = temp.path().join("guide.pdf");

    let written = fetcher()
        .download_to_file(&format!("{}/guide.pdf", server.uri()), &target)
        .await
        .expect("download ok");

    assert_eq!(written, payload.len() as u64);
    assert_eq!(std::fs::read(&target).unwrap(), payload);
}

#[tokio::test]
async fn download_to_file_fails_on_http_status_without_creating_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.pdf"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp = tempfile::TempDir::new().unwrap();
    let target = temp.path().join("gone.pdf");

    let err = fetcher()
        .download_to_file(&format!("{}/gone.pdf", server.uri()), &target)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchFailureKind::HttpStatus(500));
    assert!(!target.exists());
}
