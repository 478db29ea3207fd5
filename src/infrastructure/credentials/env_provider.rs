use async_trait::async_trait;
use std::collections::HashMap;
use std::env;

use crate::domain::{Credential, CredentialProvider, CredentialType, DomainError};

/// Environment variable holding the Gemini API key
pub const DEFAULT_GEMINI_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Credential provider that reads from environment variables
///
/// A variable that is set but empty counts as missing.
#[derive(Debug)]
pub struct EnvCredentialProvider {
    mappings: HashMap<CredentialType, String>,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn with_mapping(mut self, credential_type: CredentialType, env_var: impl Into<String>) -> Self {
        self.mappings.insert(credential_type, env_var.into());
        self
    }

    pub fn with_defaults(self) -> Self {
        self.with_mapping(CredentialType::Gemini, DEFAULT_GEMINI_API_KEY_VAR)
    }

    /// Name of the variable mapped to `credential_type`, if any
    pub fn env_var(&self, credential_type: &CredentialType) -> Option<&str> {
        self.mappings.get(credential_type).map(String::as_str)
    }

    fn read_credential(&self, credential_type: &CredentialType) -> Result<Credential, DomainError> {
        let env_var = self.env_var(credential_type).ok_or_else(|| {
            DomainError::credential(format!(
                "No environment mapping configured for credential type: {}",
                credential_type
            ))
        })?;

        let api_key = env::var(env_var)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                DomainError::credential(format!(
                    "Environment variable '{}' not set for credential type: {}",
                    env_var, credential_type
                ))
            })?;

        Ok(Credential::new(credential_type.clone(), api_key))
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new().with_defaults()
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(
        &self,
        credential_type: &CredentialType,
    ) -> Result<Credential, DomainError> {
        self.read_credential(credential_type)
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}
