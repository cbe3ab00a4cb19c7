//! Use case orchestration for tagguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, domain, and types layers. It is intentionally thin and delegates
//! the decision logic to the domain crate.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod dispatch;
mod envelope;
mod evaluate;

pub use dispatch::{Dispatcher, HandlerFn, HookRequest};
pub use envelope::{build_envelope, serialize_envelope};
pub use evaluate::{run_evaluation, runtime_failure_result, status_exit_code};
