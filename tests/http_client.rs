//! `ReqwestHttpClient` against a local wiremock server.
//!
//! The mock server runs on its own tokio runtime; the client under test is
//! blocking and is driven from the plain test thread.

use std::sync::mpsc;
use std::time::Duration;

use feed_loader::{HttpClient, HttpClientError, HttpClientResult, ReqwestHttpClient};
use tokio::runtime::Runtime;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn get(client: &ReqwestHttpClient, url: &Url) -> HttpClientResult {
    let (tx, rx) = mpsc::channel();
    client.get(url, Box::new(move |result| tx.send(result).unwrap()));
    rx.recv_timeout(Duration::from_secs(10))
        .expect("client never completed")
}

fn client() -> ReqwestHttpClient {
    ReqwestHttpClient::new(Duration::from_secs(5)).unwrap()
}

#[test]
fn test_get_requests_the_given_url() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server),
    );
    let url = Url::parse(&format!("{}/feed", server.uri())).unwrap();

    get(&client(), &url).unwrap();

    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/feed");
}

#[test]
fn test_get_delivers_status_and_body() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"any data".to_vec()))
            .mount(&server),
    );
    let url = Url::parse(&server.uri()).unwrap();

    let response = get(&client(), &url).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"any data".to_vec());
}

#[test]
fn test_get_treats_error_status_as_a_response() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server),
    );
    let url = Url::parse(&server.uri()).unwrap();

    let response = get(&client(), &url).unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.body, b"maintenance".to_vec());
}

#[test]
fn test_get_delivers_empty_body() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server),
    );
    let url = Url::parse(&server.uri()).unwrap();

    let response = get(&client(), &url).unwrap();

    assert!(response.body.is_empty());
}

#[test]
fn test_get_fails_when_nothing_listens() {
    let url = Url::parse("http://127.0.0.1:1/feed").unwrap();

    let result = get(&client(), &url);

    assert!(matches!(result, Err(HttpClientError::Request(_))));
}

#[test]
fn test_get_fails_on_timeout() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server),
    );
    let url = Url::parse(&server.uri()).unwrap();
    let client = ReqwestHttpClient::new(Duration::from_millis(200)).unwrap();

    let result = get(&client, &url);

    assert!(matches!(result, Err(HttpClientError::Request(e)) if e.is_timeout()));
}
