use crate::health::responses::HealthCheckResponse;
use crate::http::tests::test_server;

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse { error: false });
}

#[tokio::test]
async fn test_health_check_allows_configured_origin() {
    let server = test_server();

    let response = server
        .get("/health/check")
        .add_header("Origin", "http://localhost:3000")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("Missing CORS header."),
        "http://localhost:3000"
    );
}
