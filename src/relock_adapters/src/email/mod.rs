pub mod mock_email_client;
pub mod postmark_email_client;
pub mod smtp_email_client;

pub use mock_email_client::{MockEmailClient, SentEmail};
pub use postmark_email_client::PostmarkEmailClient;
pub use smtp_email_client::SmtpEmailClient;

pub use lettre::transport::smtp::Error as SmtpError;
