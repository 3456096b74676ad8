pub mod hashmap_account_store;
pub mod hashmap_auth_provider;
pub mod hashmap_verification_code_store;
pub mod postgres_account_store;
pub mod postgres_auth_provider;
pub mod redis_verification_code_store;

pub use hashmap_account_store::HashMapAccountStore;
pub use hashmap_auth_provider::HashMapAuthProvider;
pub use hashmap_verification_code_store::HashMapVerificationCodeStore;
pub use postgres_account_store::PostgresAccountStore;
pub use postgres_auth_provider::PostgresAuthProvider;
pub use redis_verification_code_store::RedisVerificationCodeStore;
