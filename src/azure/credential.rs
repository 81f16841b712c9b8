//! Bearer token acquisition.
//!
//! The lookup only needs "give me a token for ARM"; [`TokenProvider`] hides
//! whether it comes from the azure_identity credential chain or from a token
//! handed in through the environment.

use crate::config::{ACCESS_TOKEN_ENV, ARM_SCOPE};
use crate::error::{AsgError, AsgResult, TransportError};
use async_trait::async_trait;
use azure_core::auth::TokenCredential;
use azure_identity::DefaultAzureCredential;
use std::sync::Arc;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a bearer token valid for ARM calls.
    async fn bearer_token(&self) -> Result<String, TransportError>;
}

/// DefaultAzureCredential chain: environment, managed identity, az cli.
pub struct AzureIdentityProvider {
    credential: Arc<dyn TokenCredential>,
    scope: String,
}

impl AzureIdentityProvider {
    /// Building the chain does not contact Azure; a missing credential
    /// shows up on the first [`TokenProvider::bearer_token`] call.
    pub fn new() -> AzureIdentityProvider {
        AzureIdentityProvider {
            credential: Arc::new(DefaultAzureCredential::default()),
            scope: ARM_SCOPE.to_string(),
        }
    }
}

impl Default for AzureIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenProvider for AzureIdentityProvider {
    async fn bearer_token(&self) -> Result<String, TransportError> {
        let token = self
            .credential
            .get_token(&[self.scope.as_str()])
            .await
            .map_err(|e| TransportError::Token(e.to_string()))?;
        Ok(token.token.secret().to_string())
    }
}

/// Fixed token, used when `AZURE_ACCESS_TOKEN` is set and in tests.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: &str) -> StaticTokenProvider {
        StaticTokenProvider {
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String, TransportError> {
        if self.token.is_empty() {
            return Err(TransportError::Token("static token is empty".to_string()));
        }
        Ok(self.token.clone())
    }
}

/// Pick the token provider for this process.
pub fn provider_from_env() -> Arc<dyn TokenProvider> {
    match std::env::var(ACCESS_TOKEN_ENV) {
        Ok(token) if !token.is_empty() => {
            log::info!("Using bearer token from {ACCESS_TOKEN_ENV}");
            Arc::new(StaticTokenProvider::new(&token))
        }
        _ => {
            log::info!("Using azure_identity default credential chain");
            Arc::new(AzureIdentityProvider::new())
        }
    }
}

/// Fetch one token up front so a bad credential fails before any listing.
pub async fn authenticate(provider: &dyn TokenProvider) -> AsgResult<()> {
    provider
        .bearer_token()
        .await
        .map(|_| log::info!("Credential acquired"))
        .map_err(|e| AsgError::AuthFailure(e.to_string()))
}
