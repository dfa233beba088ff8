//! End-to-end tests against a mock HTTP server
//!
//! These cover the full pipeline (URI construction, request headers, HTTP
//! status mapping, timeout behavior, response parsing) with wiremock standing
//! in for the search API.

use google_cse::{transport::USER_AGENT, CseClient, CseConfig, SearchError, SearchOptions};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SINGLE_RESULT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GSP VER="3.2">
  <TM>0.031415</TM>
  <Q>banana</Q>
  <PARAM name="q" value="banana" original_value="banana"/>
  <PARAM name="num" value="10" original_value="10"/>
  <RES>
    <M>1</M>
    <SN>1</SN>
    <EN>1</EN>
    <R N="1">
      <U>https://cosm.com/feeds/1234</U>
      <T>Cosm - Air Quality &lt;b&gt;Banana&lt;/b&gt;</T>
      <S>This is the air quality &lt;b&gt;banana&lt;/b&gt;!</S>
    </R>
  </RES>
</GSP>"#;

async fn test_client(server: &MockServer, timeout: Duration) -> CseClient {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut config = CseConfig::new("1234").with_param("ie", "utf8");
    config.secure = false;
    config.host = server.address().to_string();
    config.timeout = timeout;
    CseClient::new(config).unwrap()
}

#[tokio::test]
async fn sends_the_canonical_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cse"))
        .and(query_param("q", "banana"))
        .and(query_param("start", "0"))
        .and(query_param("num", "10"))
        .and(query_param("client", "google-csbe"))
        .and(query_param("output", "xml_no_dtd"))
        .and(query_param("cx", "1234"))
        .and(query_param("ie", "utf8"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(SINGLE_RESULT_XML))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, Duration::from_secs(3)).await;
    let page = client
        .search("banana", &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(page.total_entries, 1);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].title, "Cosm - Air Quality <b>Banana</b>");
    assert_eq!(page.current_page(), 1);
}

#[tokio::test]
async fn page_option_moves_the_start_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cse"))
        .and(query_param("start", "14"))
        .and(query_param("num", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SINGLE_RESULT_XML))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, Duration::from_secs(3)).await;
    let options = SearchOptions {
        offset: None,
        per_page: Some("7".into()),
        page: Some("3".into()),
    };
    client.search("banana", &options).await.unwrap();
}

#[tokio::test]
async fn redirect_maps_to_invalid_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cse"))
        .respond_with(ResponseTemplate::new(302))
        .mount(&server)
        .await;

    let client = test_client(&server, Duration::from_secs(3)).await;
    match client.search("raspberry", &SearchOptions::default()).await {
        Err(SearchError::InvalidRequest { status: 302 }) => {}
        other => panic!("expected InvalidRequest(302), got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_maps_to_invalid_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cse"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server, Duration::from_secs(3)).await;
    match client.search("raspberry", &SearchOptions::default()).await {
        Err(SearchError::InvalidRequest { status: 404 }) => {}
        other => panic!("expected InvalidRequest(404), got {other:?}"),
    }
}

#[tokio::test]
async fn server_failure_maps_to_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cse"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server, Duration::from_secs(3)).await;
    match client.search("raspberry", &SearchOptions::default()).await {
        Err(SearchError::ServerError { status: 500 }) => {}
        other => panic!("expected ServerError(500), got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cse"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SINGLE_RESULT_XML)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server, Duration::from_millis(100)).await;
    match client.search("raspberry", &SearchOptions::default()).await {
        Err(SearchError::Timeout { timeout_ms: 100 }) => {}
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn non_xml_body_maps_to_invalid_xml() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cse"))
        .respond_with(ResponseTemplate::new(200).set_body_string("raspberry"))
        .mount(&server)
        .await;

    let client = test_client(&server, Duration::from_secs(3)).await;
    match client.search("raspberry", &SearchOptions::default()).await {
        Err(SearchError::InvalidXml(_)) => {}
        other => panic!("expected InvalidXml, got {other:?}"),
    }
}
