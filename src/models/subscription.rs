//! Azure subscription data model.

use serde::Deserialize;
use std::fmt;

/// A subscription visible to the current credential.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Azure subscription ID (GUID), identity of the subscription.
    pub subscription_id: String,
    /// Azure subscription display name.
    pub display_name: String,
    /// Enabled, Disabled, Warned, ... as reported by ARM.
    #[serde(default)]
    pub state: Option<String>,
}

impl Subscription {
    pub fn new(subscription_id: &str, display_name: &str) -> Subscription {
        Subscription {
            subscription_id: subscription_id.to_string(),
            display_name: display_name.to_string(),
            state: None,
        }
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.subscription_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_arm_subscription() {
        let json = r#"{
            "id": "/subscriptions/0000-1111",
            "authorizationSource": "RoleBased",
            "subscriptionId": "0000-1111",
            "tenantId": "tenant-1",
            "displayName": "Subscription 1",
            "state": "Enabled"
        }"#;
        let sub: Subscription = serde_json::from_str(json).expect("Error parsing subscription");
        assert_eq!(sub.subscription_id, "0000-1111");
        assert_eq!(sub.display_name, "Subscription 1");
        assert_eq!(sub.state.as_deref(), Some("Enabled"));
    }

    #[test]
    fn test_display() {
        let sub = Subscription::new("sub1", "Subscription 1");
        assert_eq!(sub.to_string(), "Subscription 1 (sub1)");
    }
}
