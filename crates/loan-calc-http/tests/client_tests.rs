use httpmock::prelude::*;
use loan_calc_core::{InterestRateType, LoanRequest};
use loan_calc_http::{ClientConfig, ClientError, LoanClient, NetworkError, CALCULATE_PATH};
use rust_decimal_macros::dec;
use std::time::Duration;

fn sample_request() -> LoanRequest {
    LoanRequest {
        amount: dec!(1000),
        interest_rate: dec!(12),
        term_in_months: 1,
        interest_rate_type: InterestRateType::Fixed,
    }
}

fn client_for(server: &MockServer) -> LoanClient {
    LoanClient::new(&ClientConfig::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn test_success_response_is_decoded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(CALCULATE_PATH)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "amount": 1000.0,
                    "interestRate": 12.0,
                    "termInMonths": 1,
                    "interestRateType": "FIXED"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "amount": 1000,
                    "interestRate": 12,
                    "termInMonths": 1,
                    "interestRateType": "FIXED",
                    "monthlyPayment": 1010.00,
                    "totalPaid": 1010.00,
                    "totalInterest": 10.00,
                    "amortizationSchedule": [
                        {"month": 1, "principal": 1000.00, "interest": 10.00, "remainingBalance": 0}
                    ]
                }));
        })
        .await;

    let response = client_for(&server).calculate(&sample_request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.monthly_payment, dec!(1010));
    assert_eq!(response.amortization_schedule.len(), 1);
    assert_eq!(response.amortization_schedule[0].interest, dec!(10));
}

#[tokio::test]
async fn test_plain_text_error_body_surfaces() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(CALCULATE_PATH);
            then.status(500).body("Calculation backend unavailable");
        })
        .await;

    let err = client_for(&server)
        .calculate(&sample_request())
        .await
        .unwrap_err();

    // Non-2xx responses are not retried.
    mock.assert_hits_async(1).await;
    match err {
        ClientError::Network(NetworkError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Calculation backend unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_json_error_body_surfaces_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(CALCULATE_PATH);
            then.status(400)
                .json_body(serde_json::json!({"error": "term out of range"}));
        })
        .await;

    let err = client_for(&server)
        .calculate(&sample_request())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "term out of range");
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(CALCULATE_PATH);
            then.status(503);
        })
        .await;

    let err = client_for(&server)
        .calculate(&sample_request())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 503");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(CALCULATE_PATH);
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = client_for(&server)
        .calculate(&sample_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_invalid_request_never_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(CALCULATE_PATH);
            then.status(200);
        })
        .await;

    let mut request = sample_request();
    request.term_in_months = 0;
    let err = client_for(&server).calculate(&request).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a port, then release it so nothing is listening there.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let config = ClientConfig {
        base_url: format!("http://{addr}"),
        timeout: Duration::from_secs(2),
        retry_transient: true,
    };
    let err = LoanClient::new(&config)
        .unwrap()
        .calculate(&sample_request())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Network(NetworkError::Transport(_))
    ));
}
