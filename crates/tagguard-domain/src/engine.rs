use crate::extract::extract_tags;
use crate::model::{TagState, Verdict};
use crate::policy::RequiredTagSet;
use serde_json::Value;

/// Classify one tag state against the required keys.
///
/// Rules apply in priority order: missing properties beat everything except
/// internal failures, which are handled in [`evaluate_resource`].
pub fn evaluate(required: &RequiredTagSet, state: &TagState) -> Verdict {
    match state {
        TagState::NoProperties => Verdict::NoPropertiesDefined,
        TagState::AbsentTags if required.is_empty() => Verdict::Compliant,
        TagState::AbsentTags => Verdict::NonCompliant {
            missing: required.keys().to_vec(),
        },
        TagState::Tags(tags) => {
            // Set difference, preserving the required set's order.
            let missing: Vec<String> = required
                .iter()
                .filter(|key| !tags.contains_key(key.as_str()))
                .cloned()
                .collect();
            if missing.is_empty() {
                Verdict::Compliant
            } else {
                Verdict::NonCompliant { missing }
            }
        }
    }
}

/// Extract and classify in one step.
///
/// Any extraction failure short-circuits to `InternalError`, overriding all
/// other rules; this is the only entry point callers outside the domain need.
pub fn evaluate_resource(required: &RequiredTagSet, resource_properties: Option<&Value>) -> Verdict {
    match extract_tags(resource_properties) {
        Ok(state) => evaluate(required, &state),
        Err(err) => Verdict::InternalError {
            detail: err.to_string(),
        },
    }
}
