//! 平台抽象 Trait

mod credential_store;

pub use credential_store::CredentialStore;
