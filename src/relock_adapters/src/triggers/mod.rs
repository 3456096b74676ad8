pub mod triggering_verification_code_store;

pub use triggering_verification_code_store::{
    TRIGGER_CHANNEL_CAPACITY, TriggeringVerificationCodeStore,
};
