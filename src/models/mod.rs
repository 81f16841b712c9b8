//! Domain models for ASG lookup.
//!
//! - [`Subscription`] - Azure subscription visible to the credential
//! - [`RawAsg`] and [`Asg`] - Application Security Group as listed and as written

mod asg;
mod subscription;

// Re-export public types
pub use asg::{resource_group_from_id, Asg, RawAsg};
pub use subscription::Subscription;
