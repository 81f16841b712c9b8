//! Azure Resource Manager REST client.

use super::credential::TokenProvider;
use super::pager::{Page, PageSource};
use crate::config::{NETWORK_API_VERSION, SUBSCRIPTIONS_API_VERSION};
use crate::error::TransportError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;

/// Thin ARM client: one GET per page, bearer token per request.
pub struct ArmClient {
    http: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
    endpoint: String,
}

impl ArmClient {
    pub fn new(tokens: Arc<dyn TokenProvider>, endpoint: &str) -> ArmClient {
        ArmClient {
            http: reqwest::Client::new(),
            tokens,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn subscriptions_url(&self) -> String {
        format!(
            "{}/subscriptions?api-version={SUBSCRIPTIONS_API_VERSION}",
            self.endpoint
        )
    }

    /// All ASGs in the subscription, across every resource group.
    pub fn asgs_url(&self, subscription_id: &str) -> String {
        format!(
            "{}/subscriptions/{subscription_id}/providers/Microsoft.Network/applicationSecurityGroups?api-version={NETWORK_API_VERSION}",
            self.endpoint
        )
    }

    /// Listing that starts at `first_url` and follows `nextLink`.
    pub fn listing<T>(&self, first_url: String) -> ArmListing<'_, T> {
        ArmListing {
            client: self,
            first_url,
            _item: PhantomData,
        }
    }

    /// GET `url` and decode it as one page of `T`.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Page<T>, TransportError> {
        let token = self.tokens.bearer_token().await?;
        log::debug!("GET {url}");

        let response = self.http.get(url).bearer_auth(token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("GET {url} failed with status {status}");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        log::debug!("GET {url} ok, body.len()={}", body.len());

        let mut deserializer = serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", body);
            TransportError::Decode {
                path: e.path().to_string(),
                message: e.inner().to_string(),
            }
        })
    }
}

/// A paginated ARM listing of `T`.
pub struct ArmListing<'a, T> {
    client: &'a ArmClient,
    first_url: String,
    _item: PhantomData<fn() -> T>,
}

#[async_trait]
impl<'a, T> PageSource for ArmListing<'a, T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    async fn fetch_page(&self, next_link: Option<&str>) -> Result<Page<T>, TransportError> {
        let url = next_link.unwrap_or(self.first_url.as_str());
        self.client.get_page(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::credential::StaticTokenProvider;

    fn client(endpoint: &str) -> ArmClient {
        ArmClient::new(Arc::new(StaticTokenProvider::new("token")), endpoint)
    }

    #[test]
    fn test_subscriptions_url() {
        let arm = client("https://management.azure.com/");
        assert_eq!(
            arm.subscriptions_url(),
            "https://management.azure.com/subscriptions?api-version=2022-12-01"
        );
    }

    #[test]
    fn test_asgs_url() {
        let arm = client("https://management.azure.com");
        assert_eq!(
            arm.asgs_url("sub1"),
            "https://management.azure.com/subscriptions/sub1/providers/Microsoft.Network/applicationSecurityGroups?api-version=2023-09-01"
        );
    }
}
