use crate::helpers::{TestApp, error_body, random_email};

const NEW_PASSWORD: &str = "n3w-passw0rd";

fn body(email: &str, code: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "newPassword": NEW_PASSWORD,
        "verificationCode": code,
    })
}

#[tokio::test]
async fn should_return_200_and_update_password_for_validated_record() {
    let app = TestApp::new().await;
    let email = random_email();
    app.add_user(&email, Some("Ada"), "old-password").await;
    app.seed_record(&email, "042137", true).await;

    let response = app.post_reset_password(&body(&email, "042137")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));
    assert!(app.password_is(&email, NEW_PASSWORD).await);
}

#[tokio::test]
async fn should_succeed_when_repeated_with_same_inputs() {
    let app = TestApp::new().await;
    let email = random_email();
    app.add_user(&email, None, "old-password").await;
    app.seed_record(&email, "042137", true).await;

    for _ in 0..2 {
        let response = app.post_reset_password(&body(&email, "042137")).await;
        assert_eq!(response.status().as_u16(), 200);
    }
    assert!(app.password_is(&email, NEW_PASSWORD).await);
}

#[tokio::test]
async fn should_return_412_without_verification_record() {
    let app = TestApp::new().await;
    let email = random_email();
    app.add_user(&email, None, "old-password").await;

    let response = app.post_reset_password(&body(&email, "042137")).await;

    assert_eq!(response.status().as_u16(), 412);
    assert_eq!(
        error_body(response).await,
        (
            "failed-precondition".to_string(),
            "No verification found for this email.".to_string()
        )
    );
    assert!(app.password_is(&email, "old-password").await);
}

#[tokio::test]
async fn should_return_412_when_code_not_validated() {
    let app = TestApp::new().await;
    let email = random_email();
    app.add_user(&email, None, "old-password").await;
    app.seed_record(&email, "042137", false).await;

    let response = app.post_reset_password(&body(&email, "042137")).await;

    assert_eq!(response.status().as_u16(), 412);
    assert_eq!(
        error_body(response).await.1,
        "Verification code has not been validated."
    );
    assert!(app.password_is(&email, "old-password").await);
}

#[tokio::test]
async fn should_return_412_when_code_does_not_match() {
    let app = TestApp::new().await;
    let email = random_email();
    app.add_user(&email, None, "old-password").await;
    app.seed_record(&email, "042137", true).await;

    let response = app.post_reset_password(&body(&email, "999999")).await;

    assert_eq!(response.status().as_u16(), 412);
    assert_eq!(
        error_body(response).await.1,
        "Verification code does not match."
    );
    assert!(app.password_is(&email, "old-password").await);
}

#[tokio::test]
async fn should_return_500_when_identity_is_missing() {
    let app = TestApp::new().await;
    let email = random_email();
    app.seed_record(&email, "042137", true).await;

    let response = app.post_reset_password(&body(&email, "042137")).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        error_body(response).await,
        (
            "internal".to_string(),
            "Failed to reset password".to_string()
        )
    );
}

#[tokio::test]
async fn should_return_400_for_malformed_input() {
    let app = TestApp::new().await;
    let email = random_email();

    let test_cases = [
        serde_json::json!({ "email": email, "newPassword": NEW_PASSWORD }),
        serde_json::json!({ "email": "not-an-email", "newPassword": NEW_PASSWORD, "verificationCode": "042137" }),
        serde_json::json!({ "email": email, "newPassword": "short", "verificationCode": "042137" }),
        serde_json::json!({ "email": email, "newPassword": NEW_PASSWORD, "verificationCode": "" }),
    ];

    for test_case in test_cases {
        let response = app.post_reset_password(&test_case).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {test_case}"
        );
        assert_eq!(error_body(response).await.0, "invalid-argument");
    }
}

#[tokio::test]
async fn should_report_every_failure_as_internal_when_collapsed() {
    let app = TestApp::with_collapsed_errors().await;
    let unvalidated = random_email();
    app.add_user(&unvalidated, None, "old-password").await;
    app.seed_record(&unvalidated, "042137", false).await;

    let test_cases = [
        body(&random_email(), "042137"),
        body(&unvalidated, "042137"),
        serde_json::json!({ "email": "not-an-email" }),
    ];

    for test_case in test_cases {
        let response = app.post_reset_password(&test_case).await;

        assert_eq!(
            response.status().as_u16(),
            500,
            "Failed for input: {test_case}"
        );
        assert_eq!(
            error_body(response).await,
            (
                "internal".to_string(),
                "Failed to reset password".to_string()
            )
        );
    }
}

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let app = TestApp::new().await;

    let response = app
        .post_reset_password(&body(&random_email(), "042137"))
        .await;

    assert!(response.headers().get("x-request-id").is_some());
}
