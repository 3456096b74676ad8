//! Email templates sent during the password-reset flow.

use askama::Template;
use relock_core::EmailContent;

pub const PASSWORD_RESET_SUBJECT: &str = "Your Password Reset Verification Code";

/// Only stated in the email copy.
pub const CODE_EXPIRY_MINUTES: u32 = 10;

pub const DEFAULT_APP_NAME: &str = "Physica App";

#[derive(Template)]
#[template(path = "password_reset_code.txt")]
struct PasswordResetCodeText<'a> {
    app_name: &'a str,
    first_name: &'a str,
    code: &'a str,
}

#[derive(Template)]
#[template(path = "password_reset_code.html")]
struct PasswordResetCodeHtml<'a> {
    app_name: &'a str,
    first_name: &'a str,
    code: &'a str,
    expiry_minutes: u32,
}

/// The verification-code email, in plain text and HTML.
#[derive(Debug, Clone, Copy)]
pub struct PasswordResetEmail<'a> {
    pub app_name: &'a str,
    pub first_name: &'a str,
    pub code: &'a str,
}

impl PasswordResetEmail<'_> {
    pub fn render(&self) -> Result<EmailContent, askama::Error> {
        let text = PasswordResetCodeText {
            app_name: self.app_name,
            first_name: self.first_name,
            code: self.code,
        }
        .render()?;

        let html = PasswordResetCodeHtml {
            app_name: self.app_name,
            first_name: self.first_name,
            code: self.code,
            expiry_minutes: CODE_EXPIRY_MINUTES,
        }
        .render()?;

        Ok(EmailContent::new(text, html))
    }
}
