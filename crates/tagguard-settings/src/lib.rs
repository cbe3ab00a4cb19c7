//! Type-configuration parsing and required-tag resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::TypeConfiguration;
pub use resolve::resolve_required_tags;

use anyhow::Context;

/// Parse the hook's type configuration (a JSON document) into a typed model.
pub fn parse_type_configuration(input: &str) -> anyhow::Result<TypeConfiguration> {
    let cfg: TypeConfiguration =
        serde_json::from_str(input).context("parse type configuration")?;
    Ok(cfg)
}
