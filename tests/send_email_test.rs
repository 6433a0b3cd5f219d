//! Integration tests for SesClient against a mock SES endpoint.
//!
//! The client is blocking, so every call runs on tokio's blocking pool while
//! the mock server is driven by the async runtime.

use integrations_aws_ses_classic::{SesClient, SesError, SendEmailResponse};
use std::error::Error as _;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEND_EMAIL_RESPONSE: &str = "<SendEmailResponse xmlns=\"http://ses.amazonaws.com/doc/2010-12-01/\">\
    <SendEmailResult><MessageId>0000012345-abcdef</MessageId></SendEmailResult>\
    <ResponseMetadata><RequestId>d5964849-c866-11e0-9beb-01a62d68c57f</RequestId></ResponseMetadata>\
    </SendEmailResponse>";

async fn send_text_to(endpoint: String, body: &'static str) -> Result<String, SesError> {
    tokio::task::spawn_blocking(move || {
        let client = SesClient::new("AK", "SK", &endpoint)?;
        client.send_text("from@example.com", "to@example.com", "Hi", body)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_text_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("Action", "SendEmail"))
        .and(query_param("Message.Body.Text.Data", "Hello there"))
        .and(query_param("AWSAccessKeyId", "AK"))
        .and(header_exists("Date"))
        .and(header_exists("X-Amzn-Authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEND_EMAIL_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = send_text_to(mock_server.uri(), "Hello there").await.unwrap();

    assert_eq!(body, SEND_EMAIL_RESPONSE);
    let response = SendEmailResponse::from_xml(&body).unwrap();
    assert_eq!(response.message_id, "0000012345-abcdef");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_html_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("Message.Body.Html.Data", "<p>Hello</p>"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let endpoint = mock_server.uri();
    let body = tokio::task::spawn_blocking(move || {
        let client = SesClient::new("AK", "SK", &endpoint)?;
        client.send_html("from@example.com", "to@example.com", "Hi", "<p>Hello</p>")
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_every_request_closes_its_connection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("connection", "close"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let endpoint = mock_server.uri();
    let (text, html) = tokio::task::spawn_blocking(move || {
        let client = SesClient::new("AK", "SK", &endpoint)?;
        let text = client.send_text("from@example.com", "to@example.com", "Hi", "first")?;
        let html = client.send_html("from@example.com", "to@example.com", "Hi", "<p>second</p>")?;
        Ok::<_, SesError>((text, html))
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(text, "ok");
    assert_eq!(html, "ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_query_string_is_sorted_and_form_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    send_text_to(mock_server.uri(), "Hello there").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some(
            "AWSAccessKeyId=AK&Action=SendEmail\
             &Destination.ToAddresses.member.1=to%40example.com\
             &Message.Body.Text.Data=Hello+there\
             &Message.Subject.Data=Hi\
             &Source=from%40example.com"
        )
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remote_error_carries_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("AccessDenied"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = send_text_to(mock_server.uri(), "Body").await.unwrap_err();

    assert_eq!(err.to_string(), "AccessDenied");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_200_success_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let err = send_text_to(mock_server.uri(), "Body").await.unwrap_err();

    assert!(matches!(err, SesError::Remote { .. }));
    assert_eq!(err.to_string(), "");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connection_refused_is_transport_error() {
    let err = send_text_to("http://127.0.0.1:1".to_string(), "Body")
        .await
        .unwrap_err();

    assert!(matches!(err, SesError::Transport { .. }));
    let source = err
        .source()
        .and_then(|source| source.downcast_ref::<reqwest::Error>())
        .expect("reqwest error as source");
    assert!(source.is_connect());
    assert_eq!(err.to_string(), source.to_string());
}
