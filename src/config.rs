//! Runtime configuration and constants.

use crate::error::{AsgError, AsgResult};
use clap::Parser;
use std::path::PathBuf;

/// Directory the Terraform files are written to when none is given.
pub const DEFAULT_TARGET_DIR: &str = "tf-files";

/// Azure Resource Manager endpoint for the public cloud.
pub const ARM_ENDPOINT: &str = "https://management.azure.com";

/// Token scope for ARM calls.
pub const ARM_SCOPE: &str = "https://management.azure.com/.default";

pub const SUBSCRIPTIONS_API_VERSION: &str = "2022-12-01";
pub const NETWORK_API_VERSION: &str = "2023-09-01";

/// Env var holding a pre-fetched bearer token, skips the azure_identity chain.
pub const ACCESS_TOKEN_ENV: &str = "AZURE_ACCESS_TOKEN";

/// Lists all ASGs in the given subscriptions and writes one Terraform file per subscription.
#[derive(Parser, Debug, Clone)]
#[command(name = "asg-lookup", version)]
pub struct Args {
    /// Comma-separated list of subscription IDs to query for ASGs.
    #[arg(long = "subscriptionsIds", env = "ASG_SUBSCRIPTION_IDS")]
    pub subscriptions_ids: String,

    /// Directory to output the Terraform files.
    #[arg(long = "targetDir", env = "ASG_TARGET_DIR", default_value = DEFAULT_TARGET_DIR)]
    pub target_dir: PathBuf,

    /// Keep going with the remaining subscriptions when one fails.
    #[arg(
        long,
        env = "ASG_CONTINUE_ON_ERROR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub continue_on_error: bool,

    /// Azure Resource Manager base url.
    #[arg(long, env = "ARM_ENDPOINT", default_value = ARM_ENDPOINT)]
    pub arm_endpoint: String,
}

/// What the driver does when a single subscription fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the run on the first error.
    #[default]
    Abort,
    /// Record the failure and continue with the next subscription.
    Continue,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub requested_ids: String,
    pub target_dir: PathBuf,
    pub failure_policy: FailurePolicy,
    pub arm_endpoint: String,
}

impl Config {
    pub fn from_args(args: Args) -> AsgResult<Config> {
        let arm_endpoint = args.arm_endpoint.trim_end_matches('/').to_string();
        if !arm_endpoint.starts_with("http://") && !arm_endpoint.starts_with("https://") {
            return Err(AsgError::Config(format!(
                "arm endpoint must be an http(s) url, got '{}'",
                args.arm_endpoint
            )));
        }
        if args.target_dir.as_os_str().is_empty() {
            return Err(AsgError::Config("target directory is empty".to_string()));
        }

        Ok(Config {
            requested_ids: args.subscriptions_ids,
            target_dir: args.target_dir,
            failure_policy: if args.continue_on_error {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Abort
            },
            arm_endpoint,
        })
    }
}
