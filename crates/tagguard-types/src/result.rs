use crate::InvocationPoint;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the result envelope.
pub const SCHEMA_RESULT_V1: &str = "tagguard.result.v1";

/// Outcome status of one evaluation, as the provisioning framework sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Success,
    Failed,
}

/// Error classification for failed evaluations.
///
/// `NonCompliant` is a business-rule violation (missing tags, no properties);
/// `InternalFailure` is a structural problem reading the resource data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum HandlerErrorCode {
    NonCompliant,
    InternalFailure,
}

/// The externally visible outcome of one compliance check.
///
/// Only the domain formatter constructs these; every field is derived
/// deterministically from a verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationResult {
    pub status: OperationStatus,
    pub message: String,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Envelope wrapping one evaluation result with run metadata.
///
/// The envelope is what the CLI emits; the hosting framework only cares about
/// the inner `result`, the rest is there for audit trails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResultEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Absent when the run failed before the request could be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_point: Option<InvocationPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    pub result: EvaluationResult,
}
