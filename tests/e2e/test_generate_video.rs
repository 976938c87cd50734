use crate::helpers::{TestContext, TEST_SECRET};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn it_should_generate_and_publish_a_video() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post_with_auth(
            "/generate-video",
            &json!({
                "noteId": 123,
                "noteText": "The heart pumps blood. It beats all day! Does it ever rest?",
                "subjectName": "Biology"
            }),
            TEST_SECRET,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "complete");
    assert_eq!(
        body["videoUrl"],
        "https://storage.test/storage/v1/object/public/videos/note-videos/123.mp4"
    );

    // One provider call per sentence scene, one upload under the note key
    assert_eq!(ctx.tts.call_count(), 3);
    assert_eq!(ctx.image.call_count(), 3);
    let uploads = ctx.storage.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, "note-videos/123.mp4");
    assert!(uploads[0].1 > 0);
}

#[tokio::test]
async fn it_should_accept_string_note_ids() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post_with_auth(
            "/generate-video",
            &json!({
                "noteId": "abc-42",
                "noteText": "One sentence is enough.",
                "subjectName": "History"
            }),
            TEST_SECRET,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.storage.uploads()[0].0, "note-videos/abc-42.mp4");
}

#[tokio::test]
async fn it_should_reject_a_missing_note_text_before_any_synthesis() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post_with_auth(
            "/generate-video",
            &json!({
                "noteId": 123,
                "subjectName": "Biology"
            }),
            TEST_SECRET,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "noteText is required");
    assert_eq!(ctx.tts.call_count(), 0);
    assert_eq!(ctx.image.call_count(), 0);
    assert!(ctx.storage.uploads().is_empty());
}

#[tokio::test]
async fn it_should_reject_each_missing_field_by_name() {
    let ctx = TestContext::new().await;

    let cases = vec![
        (
            json!({"noteText": "A sentence.", "subjectName": "Math"}),
            "noteId is required",
        ),
        (
            json!({"noteId": 1, "noteText": "A sentence."}),
            "subjectName is required",
        ),
    ];

    for (body, expected_error) in cases {
        let response = ctx
            .client
            .post_with_auth("/generate-video", &body, TEST_SECRET)
            .await
            .unwrap();
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"], expected_error);
    }
}

#[tokio::test]
async fn it_should_map_pipeline_failures_to_500_with_details() {
    let ctx = TestContext::with_failing_tts().await;

    let response = ctx
        .client
        .post_with_auth(
            "/generate-video",
            &json!({
                "noteId": 7,
                "noteText": "This synthesis will fail.",
                "subjectName": "Physics"
            }),
            TEST_SECRET,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["error"], "Video generation failed");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("tts provider unavailable"));
    // Nothing gets published on failure
    assert!(ctx.storage.uploads().is_empty());
}

#[tokio::test]
async fn it_should_report_500_for_notes_without_sentence_boundaries() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post_with_auth(
            "/generate-video",
            &json!({
                "noteId": 9,
                "noteText": "no terminator here",
                "subjectName": "Biology"
            }),
            TEST_SECRET,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json()["details"]
        .as_str()
        .unwrap()
        .contains("no sentences found"));
    // Failed before any provider call
    assert_eq!(ctx.tts.call_count(), 0);
}

#[tokio::test]
async fn it_should_overwrite_on_republishing_the_same_note() {
    let ctx = TestContext::new().await;
    let body = json!({
        "noteId": 55,
        "noteText": "Same note, published twice.",
        "subjectName": "Chemistry"
    });

    for _ in 0..2 {
        let response = ctx
            .client
            .post_with_auth("/generate-video", &body, TEST_SECRET)
            .await
            .unwrap();
        response.assert_status(StatusCode::OK);
    }

    // Same deterministic key both times; the second publish replaces
    // the first instead of erroring
    let uploads = ctx.storage.uploads();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].0, uploads[1].0);
}
