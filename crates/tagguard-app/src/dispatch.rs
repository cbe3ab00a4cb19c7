//! Invocation dispatch: an explicit table keyed by invocation point.
//!
//! Handlers are plain functions registered at construction; there is no
//! global hook registry.

use crate::evaluate::run_evaluation;
use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tagguard_domain::format_verdict;
use tagguard_domain::model::Verdict;
use tagguard_settings::TypeConfiguration;
use tagguard_types::{EvaluationResult, InvocationPoint};

/// One provisioning request as handed to the hook.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRequest {
    #[serde(default)]
    pub target_name: Option<String>,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub resource_properties: Option<Value>,
    #[serde(default)]
    pub type_configuration: Option<TypeConfiguration>,
}

pub type HandlerFn = fn(&HookRequest) -> EvaluationResult;

/// Dispatch table for the provisioning lifecycle points.
pub struct Dispatcher {
    handlers: BTreeMap<InvocationPoint, HandlerFn>,
}

impl Dispatcher {
    /// The standard wiring: create and update evaluate tag compliance,
    /// delete always passes.
    pub fn standard() -> Self {
        let mut handlers: BTreeMap<InvocationPoint, HandlerFn> = BTreeMap::new();
        handlers.insert(InvocationPoint::CreatePreProvision, pre_provision_handler);
        handlers.insert(InvocationPoint::UpdatePreProvision, pre_provision_handler);
        handlers.insert(InvocationPoint::DeletePreProvision, delete_handler);
        Self { handlers }
    }

    pub fn dispatch(
        &self,
        point: InvocationPoint,
        request: &HookRequest,
    ) -> anyhow::Result<EvaluationResult> {
        let handler = self
            .handlers
            .get(&point)
            .with_context(|| format!("no handler registered for {}", point.as_str()))?;
        Ok(handler(request))
    }
}

fn pre_provision_handler(request: &HookRequest) -> EvaluationResult {
    run_evaluation(
        request.type_configuration.as_ref(),
        request.resource_properties.as_ref(),
    )
}

/// Deletion is never blocked by tag policy.
fn delete_handler(_request: &HookRequest) -> EvaluationResult {
    format_verdict(&Verdict::Compliant)
}
