//! Azure Resource Manager interaction.
//!
//! - [`credential`] - Bearer tokens for ARM
//! - [`pager`] - Walking paginated listings
//! - [`arm`] - REST client and listings
//! - [`lookup`] - Subscription and ASG lookups

mod arm;
mod credential;
mod lookup;
mod pager;

// Re-export public types and functions
pub use arm::{ArmClient, ArmListing};
pub use credential::{
    authenticate, provider_from_env, AzureIdentityProvider, StaticTokenProvider, TokenProvider,
};
pub use lookup::AsgInventory;
pub use pager::{collect_all, Page, PageSource};
