//! Stable identifiers and message text.
//!
//! Result messages are part of the external contract: callers and tests key
//! off them, so they live here rather than inline in the formatter.

/// Registered type name of the hook.
pub const TYPE_NAME: &str = "Generic::TagEnforcement::Hook";

// Result messages
pub const MSG_NO_VIOLATIONS: &str = "no violations found";
pub const MSG_NO_PROPERTIES: &str = "no properties defined on resource";
pub const MSG_MISSING_TAGS_PREFIX: &str = "missing tags: ";
