use crate::helpers::{TestApp, error_body, random_email};

#[tokio::test]
async fn should_store_unused_code_and_email_it() {
    let app = TestApp::new().await;
    let email = random_email();
    app.add_user(&email, Some("Ada"), "old-password").await;

    let response = app.post_request_password_reset(&email).await;

    assert_eq!(response.status().as_u16(), 200);
    let record = app.record(&email).await.expect("Record was created");
    assert!(!record.is_used());

    let sent = app.wait_for_emails(1).await;
    assert_eq!(sent[0].recipient, email);
    assert_eq!(sent[0].subject, "Your Password Reset Verification Code");
    assert!(sent[0].content.text.contains(record.code().as_str()));
    assert!(sent[0].content.text.contains("Hello Ada"));
    assert!(sent[0].content.html.contains(record.code().as_str()));
}

#[tokio::test]
async fn should_succeed_without_emailing_unknown_addresses() {
    let app = TestApp::new().await;
    let stranger = random_email();
    let known = random_email();
    app.add_user(&known, None, "old-password").await;

    let response = app.post_request_password_reset(&stranger).await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(app.record(&stranger).await.is_some());

    // Events are handled in order, so the stranger's has been dropped once this one is out
    app.post_request_password_reset(&known).await;
    let sent = app.wait_for_emails(1).await;

    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, known);
}

#[tokio::test]
async fn should_replace_previous_code() {
    let app = TestApp::new().await;
    let email = random_email();
    app.add_user(&email, None, "old-password").await;
    app.seed_record(&email, "042137", true).await;

    app.post_request_password_reset(&email).await;

    let record = app.record(&email).await.unwrap();
    assert!(!record.is_used());
    let sent = app.wait_for_emails(1).await;
    assert!(sent[0].content.text.contains(record.code().as_str()));
}

#[tokio::test]
async fn should_return_400_for_invalid_email() {
    let app = TestApp::new().await;

    let response = app.post_request_password_reset("student.example.com").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_body(response).await.0, "invalid-argument");
}
