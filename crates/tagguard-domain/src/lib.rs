//! Pure tag-compliance evaluation (no IO).
//!
//! Input: the required tag keys and a resource-properties value read elsewhere.
//! Output: a verdict and its formatted evaluation result.

#![forbid(unsafe_code)]

pub mod extract;
pub mod format;
pub mod model;
pub mod policy;

mod engine;

pub use engine::{evaluate, evaluate_resource};
pub use extract::{extract_tags, ExtractError};
pub use format::format_verdict;

#[cfg(test)]
mod props;
#[cfg(test)]
mod test_support;
