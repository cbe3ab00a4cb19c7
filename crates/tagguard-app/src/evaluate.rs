//! The evaluation use case: resolve configuration, evaluate the resource,
//! format the verdict.

use serde_json::Value;
use tagguard_domain::model::Verdict;
use tagguard_domain::{evaluate_resource, format_verdict};
use tagguard_settings::{resolve_required_tags, TypeConfiguration};
use tagguard_types::{EvaluationResult, OperationStatus};

/// Run one tag-compliance evaluation.
///
/// Pure and total: internal failures come back as `InternalFailure` results,
/// never as panics past this boundary.
pub fn run_evaluation(
    type_configuration: Option<&TypeConfiguration>,
    resource_properties: Option<&Value>,
) -> EvaluationResult {
    let required = resolve_required_tags(type_configuration);
    let verdict = evaluate_resource(&required, resource_properties);
    format_verdict(&verdict)
}

/// Result used when the hosting layer itself fails (unreadable request,
/// malformed payload) before an evaluation could run.
pub fn runtime_failure_result(detail: &str) -> EvaluationResult {
    format_verdict(&Verdict::InternalError {
        detail: detail.to_string(),
    })
}

/// Map result status to exit code: 0 = success, 2 = compliance failure.
pub fn status_exit_code(status: OperationStatus) -> i32 {
    match status {
        OperationStatus::Success => 0,
        OperationStatus::Failed => 2,
    }
}
