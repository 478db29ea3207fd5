//! Generative-text backend domain traits

mod provider;

pub use provider::LlmProvider;

#[cfg(test)]
pub use provider::MockLlmProvider;
#[cfg(test)]
pub use provider::recording::RecordingLlmProvider;
