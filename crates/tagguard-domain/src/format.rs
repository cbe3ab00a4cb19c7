//! Verdict to externally visible result.

use crate::model::Verdict;
use tagguard_types::ids;
use tagguard_types::{EvaluationResult, HandlerErrorCode, OperationStatus};

/// Map a verdict onto the evaluation result the provisioning framework sees.
///
/// This is the only place an `EvaluationResult` is constructed; the mapping
/// is total and deterministic, and missing keys are listed in required order.
pub fn format_verdict(verdict: &Verdict) -> EvaluationResult {
    match verdict {
        Verdict::Compliant => EvaluationResult {
            status: OperationStatus::Success,
            message: ids::MSG_NO_VIOLATIONS.to_string(),
            error_code: None,
        },
        Verdict::NonCompliant { missing } => EvaluationResult {
            status: OperationStatus::Failed,
            message: format!("{}{}", ids::MSG_MISSING_TAGS_PREFIX, missing.join(", ")),
            error_code: Some(HandlerErrorCode::NonCompliant),
        },
        Verdict::NoPropertiesDefined => EvaluationResult {
            status: OperationStatus::Failed,
            message: ids::MSG_NO_PROPERTIES.to_string(),
            error_code: Some(HandlerErrorCode::NonCompliant),
        },
        Verdict::InternalError { detail } => EvaluationResult {
            status: OperationStatus::Failed,
            message: detail.clone(),
            error_code: Some(HandlerErrorCode::InternalFailure),
        },
    }
}
