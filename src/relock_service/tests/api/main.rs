mod helpers;
mod request_password_reset;
mod reset_password;
mod verification_code_created;
mod verify_reset_code;
