use std::time::Duration;

use crate::helpers::{TRIGGER_SECRET, TestApp, random_email};

#[tokio::test]
async fn should_email_code_of_stored_record() {
    let app = TestApp::with_trigger_webhook().await;
    let email = random_email();
    app.add_user(&email, Some("Ada"), "old-password").await;
    app.seed_record(&email, "042137", false).await;

    let response = app
        .post_trigger(
            &serde_json::json!({ "email": email, "code": "042137" }),
            Some(TRIGGER_SECRET),
        )
        .await;

    assert_eq!(response.status().as_u16(), 204);
    let sent = app.email_client.sent_emails().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, email);
    assert!(sent[0].content.text.contains("042137"));
    assert!(sent[0].content.text.contains("Ada"));
}

#[tokio::test]
async fn should_not_email_codes_without_a_matching_record() {
    let app = TestApp::with_trigger_webhook().await;
    let without_record = random_email();
    let with_other_code = random_email();
    for email in [&without_record, &with_other_code] {
        app.add_user(email, None, "old-password").await;
    }
    app.seed_record(&with_other_code, "731902", false).await;

    for email in [&without_record, &with_other_code] {
        let response = app
            .post_trigger(
                &serde_json::json!({ "email": email, "code": "042137" }),
                Some(TRIGGER_SECRET),
            )
            .await;

        assert_eq!(response.status().as_u16(), 204, "Failed for {email}");
    }
    assert!(app.email_client.sent_emails().await.is_empty());
    assert!(app.record(&without_record).await.is_none());
}

#[tokio::test]
async fn should_reject_events_without_the_shared_secret() {
    let app = TestApp::with_trigger_webhook().await;
    let email = random_email();
    app.add_user(&email, None, "old-password").await;
    app.seed_record(&email, "042137", false).await;
    let event = serde_json::json!({ "email": email, "code": "042137" });

    for secret in [None, Some("guess")] {
        let response = app.post_trigger(&event, secret).await;

        assert_eq!(response.status().as_u16(), 401, "Failed for {secret:?}");
    }
    assert!(app.email_client.sent_emails().await.is_empty());
}

#[tokio::test]
async fn should_send_one_email_per_record_when_delivered_by_webhook() {
    let app = TestApp::with_trigger_webhook().await;
    let email = random_email();
    app.add_user(&email, None, "old-password").await;

    let response = app.post_request_password_reset(&email).await;
    assert_eq!(response.status().as_u16(), 200);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(app.email_client.sent_emails().await.is_empty());

    let record = app.record(&email).await.expect("Record was created");
    let response = app
        .post_trigger(
            &serde_json::json!({ "email": email, "code": record.code().as_str() }),
            Some(TRIGGER_SECRET),
        )
        .await;

    assert_eq!(response.status().as_u16(), 204);
    assert_eq!(app.email_client.sent_emails().await.len(), 1);
}

#[tokio::test]
async fn should_not_mount_webhook_without_a_secret() {
    let app = TestApp::new().await;

    let response = app
        .post_trigger(
            &serde_json::json!({ "email": random_email(), "code": "042137" }),
            Some(TRIGGER_SECRET),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_accept_but_ignore_unknown_or_malformed_events() {
    let app = TestApp::with_trigger_webhook().await;

    let test_cases = [
        serde_json::json!({ "email": random_email(), "code": "042137" }),
        serde_json::json!({ "email": "not-an-email", "code": "042137" }),
        serde_json::json!({ "code": "042137" }),
    ];

    for test_case in test_cases {
        let response = app.post_trigger(&test_case, Some(TRIGGER_SECRET)).await;

        assert_eq!(
            response.status().as_u16(),
            204,
            "Failed for input: {test_case}"
        );
    }
    assert!(app.email_client.sent_emails().await.is_empty());
}
