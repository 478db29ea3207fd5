use async_trait::async_trait;
use std::fmt::Debug;

use super::{Credential, CredentialType};
use crate::domain::DomainError;

/// Source of backend credentials, consulted once at startup
#[async_trait]
pub trait CredentialProvider: Send + Sync + Debug {
    async fn get_credential(&self, credential_type: &CredentialType) -> Result<Credential, DomainError>;

    fn provider_name(&self) -> &'static str;
}
