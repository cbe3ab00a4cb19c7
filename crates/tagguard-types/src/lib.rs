//! Stable DTOs and IDs used across the tagguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted evaluation result and envelope
//! - stable string IDs and message constants
//! - the invocation-point enum used by the dispatch table

#![forbid(unsafe_code)]

pub mod ids;
pub mod invocation;
pub mod result;

pub use invocation::InvocationPoint;
pub use result::{
    EvaluationResult, HandlerErrorCode, OperationStatus, ResultEnvelope, ToolMeta,
    SCHEMA_RESULT_V1,
};
