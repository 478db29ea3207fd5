//! Generative-text backend implementations

mod factory;
mod gemini;
mod http_client;

pub use factory::{LlmProviderConfig, LlmProviderFactory};
pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiProvider};
pub use http_client::{HttpClient, HttpClientTrait};
