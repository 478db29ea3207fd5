//! Credential provider implementations

mod env_provider;

pub use env_provider::{DEFAULT_GEMINI_API_KEY_VAR, EnvCredentialProvider};
