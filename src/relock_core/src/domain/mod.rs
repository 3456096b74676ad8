pub mod account;
pub mod callable_error;
pub mod email;
pub mod email_content;
pub mod events;
pub mod password;
pub mod uid;
pub mod verification_code;
pub mod verification_record;
