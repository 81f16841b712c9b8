//! Output of ASG lookup results.
//!
//! - [`target_dir`] - Output directory preparation
//! - [`terraform`] - Terraform fragment files
//! - [`report`] - Terminal report with colors

mod report;
mod target_dir;
mod terraform;

pub use report::{format_summary, format_unmatched, print_report};
pub use target_dir::ensure_dir;
pub use terraform::{escape_hcl, fragment_file_name, render_block, write_fragment};
