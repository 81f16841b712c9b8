//! Subscription and ASG lookups.

use super::arm::ArmClient;
use super::pager::collect_all;
use crate::error::AsgResult;
use crate::models::{Asg, RawAsg, Subscription};
use async_trait::async_trait;

/// Where subscriptions and their ASGs come from.
#[async_trait]
pub trait AsgInventory: Sync {
    /// Every subscription the credential can see, unfiltered.
    async fn list_subscriptions(&self) -> AsgResult<Vec<Subscription>>;

    /// Every ASG in the subscription.
    async fn list_asgs(&self, subscription: &Subscription) -> AsgResult<Vec<Asg>>;
}

#[async_trait]
impl AsgInventory for ArmClient {
    async fn list_subscriptions(&self) -> AsgResult<Vec<Subscription>> {
        let listing = self.listing::<Subscription>(self.subscriptions_url());
        collect_all(&listing, "subscriptions").await
    }

    async fn list_asgs(&self, subscription: &Subscription) -> AsgResult<Vec<Asg>> {
        let listing = self.listing::<RawAsg>(self.asgs_url(&subscription.subscription_id));
        let raw = collect_all(&listing, &format!("ASGs in {}", subscription.display_name)).await?;

        raw.into_iter().map(Asg::try_from).collect()
    }
}
