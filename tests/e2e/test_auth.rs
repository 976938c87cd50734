use crate::helpers::{TestContext, TEST_SECRET};
use hyper::StatusCode;
use serde_json::json;

fn valid_body() -> serde_json::Value {
    json!({
        "noteId": 1,
        "noteText": "A valid sentence.",
        "subjectName": "Biology"
    })
}

#[tokio::test]
async fn it_should_reject_requests_without_authorization_header() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post("/generate-video", &valid_body())
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Unauthorized");
    // Rejected before the body was processed
    assert_eq!(ctx.tts.call_count(), 0);
}

#[tokio::test]
async fn it_should_reject_requests_with_wrong_secret() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post_with_auth("/generate-video", &valid_body(), "not-the-secret")
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Unauthorized");
    assert_eq!(ctx.tts.call_count(), 0);
}

#[tokio::test]
async fn it_should_accept_the_configured_secret() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post_with_auth("/generate-video", &valid_body(), TEST_SECRET)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
}
