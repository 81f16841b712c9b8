//! Inventory Azure Application Security Groups and write them as Terraform.
//!
//! Flow: list the subscriptions the credential can see, match them against
//! the requested IDs, then for every matched subscription list its ASGs and
//! write `<subscription-name>.tf` into the target directory.

pub mod azure;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use azure::AsgInventory;
use config::FailurePolicy;
use error::{AsgError, AsgResult};
use models::Subscription;
use processing::{find_matches, MatchResult};
use std::path::{Path, PathBuf};

/// What a run produced.
#[derive(Debug, Default)]
pub struct LookupReport {
    /// Terraform files written, in processing order, each path once.
    pub written: Vec<PathBuf>,
    /// Matched subscriptions without any ASG, no file written.
    pub skipped: Vec<Subscription>,
    /// Subscriptions that failed, only filled with [`FailurePolicy::Continue`].
    pub failed: Vec<(Subscription, AsgError)>,
    /// Requested IDs that matched no visible subscription.
    pub unmatched: Vec<String>,
}

/// Look up the ASGs of the requested subscriptions and write one Terraform file each.
///
/// Subscriptions are processed one at a time. Listing the subscriptions and
/// preparing `target_dir` are always fatal; a failure inside one
/// subscription aborts or is recorded depending on `policy`.
pub async fn run_asg_lookup<I: AsgInventory + ?Sized>(
    inventory: &I,
    requested: &str,
    target_dir: &Path,
    policy: FailurePolicy,
) -> AsgResult<LookupReport> {
    log::info!("#Start run_asg_lookup() target_dir={}", target_dir.display());

    let available = inventory.list_subscriptions().await?;
    log::info!("Credential can see {} subscriptions", available.len());

    let MatchResult { matched, unmatched } = find_matches(&available, requested);
    log::info!(
        "Matched {} subscriptions, {} not found",
        matched.len(),
        unmatched.len()
    );

    output::ensure_dir(target_dir)?;

    let mut report = LookupReport {
        unmatched,
        ..Default::default()
    };

    for sub in matched {
        log::info!("Looking up ASGs in {sub}");
        match lookup_subscription(inventory, &sub, target_dir).await {
            // duplicate requests or colliding names rewrite the same file
            Ok(Some(path)) if report.written.contains(&path) => {}
            Ok(Some(path)) => report.written.push(path),
            Ok(None) => report.skipped.push(sub),
            Err(e) => match policy {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Continue => {
                    log::warn!("Skipping {sub}: {e}");
                    report.failed.push((sub, e));
                }
            },
        }
    }

    Ok(report)
}

async fn lookup_subscription<I: AsgInventory + ?Sized>(
    inventory: &I,
    sub: &Subscription,
    target_dir: &Path,
) -> AsgResult<Option<PathBuf>> {
    let asgs = inventory.list_asgs(sub).await?;
    log::info!("Found {} ASGs in {sub}", asgs.len());
    output::write_fragment(&sub.display_name, &asgs, target_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::models::Asg;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In memory inventory: ASGs per subscription id, `None` means listing fails.
    struct MockInventory {
        subscriptions: Vec<Subscription>,
        asgs: HashMap<String, Option<Vec<Asg>>>,
    }

    impl MockInventory {
        fn new() -> MockInventory {
            let mut asgs = HashMap::new();
            asgs.insert(
                "sub1".to_string(),
                Some(vec![
                    Asg::new("asg1-sub1", "rg1-1"),
                    Asg::new("asg2-sub1", "rg1-2"),
                ]),
            );
            asgs.insert(
                "sub2".to_string(),
                Some(vec![
                    Asg::new("asg1-sub2", "rg2-1"),
                    Asg::new("asg2-sub2", "rg2-1"),
                    Asg::new("asg3-sub2", "rg2-2"),
                ]),
            );
            asgs.insert("sub3".to_string(), Some(vec![]));
            asgs.insert("sub4".to_string(), None);
            MockInventory {
                subscriptions: vec![
                    Subscription::new("sub1", "Subscription 1"),
                    Subscription::new("sub2", "Subscription 2"),
                    Subscription::new("sub3", "Subscription 3"),
                    Subscription::new("sub4", "Subscription 4"),
                ],
                asgs,
            }
        }
    }

    #[async_trait]
    impl AsgInventory for MockInventory {
        async fn list_subscriptions(&self) -> AsgResult<Vec<Subscription>> {
            Ok(self.subscriptions.clone())
        }

        async fn list_asgs(&self, subscription: &Subscription) -> AsgResult<Vec<Asg>> {
            match self.asgs.get(&subscription.subscription_id) {
                Some(Some(asgs)) => Ok(asgs.clone()),
                _ => Err(AsgError::ListingFailed {
                    listing: format!("ASGs in {}", subscription.display_name),
                    page: 0,
                    source: TransportError::Status {
                        status: 403,
                        body: "AuthorizationFailed".to_string(),
                    },
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_run_writes_non_empty_subscriptions() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("tf-files");

        let report = run_asg_lookup(
            &MockInventory::new(),
            "sub1,sub3,unknownSub",
            &target,
            FailurePolicy::Abort,
        )
        .await
        .expect("run ok");

        assert_eq!(report.written, vec![target.join("subscription-1.tf")]);
        assert_eq!(report.skipped, vec![Subscription::new("sub3", "Subscription 3")]);
        assert!(report.failed.is_empty());
        assert_eq!(report.unmatched, vec!["unknownSub"]);
        assert!(!target.join("subscription-3.tf").exists());

        let text = std::fs::read_to_string(target.join("subscription-1.tf")).unwrap();
        assert_eq!(text.matches("asgName").count(), 2);
        assert!(text.contains("resourceGroupName = \"rg1-2\""));
    }

    #[tokio::test]
    async fn test_run_aborts_on_failed_subscription() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = run_asg_lookup(
            &MockInventory::new(),
            "sub4,sub2",
            dir.path(),
            FailurePolicy::Abort,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AsgError::ListingFailed { .. }));
        // sub2 comes first in available order and was written before sub4 failed
        assert!(dir.path().join("subscription-2.tf").exists());
    }

    #[tokio::test]
    async fn test_run_continues_on_failed_subscription() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let report = run_asg_lookup(
            &MockInventory::new(),
            "sub4,sub1",
            dir.path(),
            FailurePolicy::Continue,
        )
        .await
        .expect("run ok");
        assert_eq!(report.written, vec![dir.path().join("subscription-1.tf")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0.subscription_id, "sub4");
    }

    #[tokio::test]
    async fn test_run_duplicate_request_lists_file_once() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let report = run_asg_lookup(
            &MockInventory::new(),
            "sub2,sub2",
            dir.path(),
            FailurePolicy::Abort,
        )
        .await
        .expect("run ok");
        assert_eq!(report.written, vec![dir.path().join("subscription-2.tf")]);
        assert_eq!(
            crate::output::format_summary(&report),
            "files_written=1 skipped_no_asgs=0 failed=0 not_found=0"
        );
    }

    #[tokio::test]
    async fn test_run_directory_conflict() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("tf-files");
        std::fs::write(&target, "file").unwrap();
        let err = run_asg_lookup(
            &MockInventory::new(),
            "sub1",
            &target,
            FailurePolicy::Continue,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AsgError::DirectoryConflict(_)));
    }
}
