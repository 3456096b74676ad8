use crate::helpers::{TestApp, error_body, random_email};

#[tokio::test]
async fn should_mark_record_used_for_matching_code() {
    let app = TestApp::new().await;
    let email = random_email();
    app.seed_record(&email, "042137", false).await;

    let response = app.post_verify_reset_code(&email, "042137").await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(app.record(&email).await.unwrap().is_used());
}

#[tokio::test]
async fn should_leave_record_unused_for_wrong_code() {
    let app = TestApp::new().await;
    let email = random_email();
    app.seed_record(&email, "042137", false).await;

    let response = app.post_verify_reset_code(&email, "111111").await;

    assert_eq!(response.status().as_u16(), 412);
    assert_eq!(
        error_body(response).await,
        (
            "failed-precondition".to_string(),
            "Invalid verification code.".to_string()
        )
    );
    assert!(!app.record(&email).await.unwrap().is_used());
}

#[tokio::test]
async fn should_return_412_without_record() {
    let app = TestApp::new().await;

    let response = app.post_verify_reset_code(&random_email(), "042137").await;

    assert_eq!(response.status().as_u16(), 412);
    assert_eq!(
        error_body(response).await.1,
        "No verification found for this email."
    );
}

#[tokio::test]
async fn should_complete_full_reset_flow() {
    let app = TestApp::new().await;
    let email = random_email();
    app.add_user(&email, Some("Ada"), "old-password").await;

    app.post_request_password_reset(&email).await;
    app.wait_for_emails(1).await;
    let code = app.record(&email).await.unwrap().code().as_str().to_string();

    let response = app.post_verify_reset_code(&email, &code).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .post_reset_password(&serde_json::json!({
            "email": email,
            "newPassword": "n3w-passw0rd",
            "verificationCode": code,
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(app.password_is(&email, "n3w-passw0rd").await);
}
