//! Result envelope assembly and serialization.

use crate::dispatch::HookRequest;
use anyhow::Context;
use tagguard_types::{EvaluationResult, InvocationPoint, ResultEnvelope, ToolMeta, SCHEMA_RESULT_V1};
use time::OffsetDateTime;

/// Wrap one evaluation result with run metadata.
pub fn build_envelope(
    invocation_point: Option<InvocationPoint>,
    request: &HookRequest,
    started_at: OffsetDateTime,
    result: EvaluationResult,
) -> ResultEnvelope {
    ResultEnvelope {
        schema: SCHEMA_RESULT_V1.to_string(),
        tool: ToolMeta {
            name: "tagguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        invocation_point,
        target_name: request.target_name.clone(),
        target_type: request.target_type.clone(),
        result,
    }
}

/// Pretty JSON with a trailing newline, ready to write to a file or stdout.
pub fn serialize_envelope(envelope: &ResultEnvelope) -> anyhow::Result<String> {
    let mut out =
        serde_json::to_string_pretty(envelope).context("serialize result envelope")?;
    out.push('\n');
    Ok(out)
}
