//! Shutdown drains the server and stops the accept loop.

mod common;

use std::time::Duration;

#[tokio::test]
async fn trigger_stops_the_accept_loop() {
    let service = common::spawn_service().await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let response = client
        .get(service.url("/health"))
        .send()
        .await
        .expect("service up before shutdown");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    service.stop();

    // The serve loop exits asynchronously; poll for its final record.
    let mut stopped = false;
    for _ in 0..100 {
        if service.app_log().contains("HTTP server stopped") {
            stopped = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(stopped, "server never logged its exit");

    // The listener is gone; fresh connections are refused.
    assert!(client.get(service.url("/health")).send().await.is_err());
}
