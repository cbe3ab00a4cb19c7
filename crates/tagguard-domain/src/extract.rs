//! Tag extraction from the resource-properties value.

use crate::model::{ResourceTagMap, TagState};
use serde_json::Value;
use thiserror::Error;

/// Structural problem while reading the tag list.
///
/// These are not compliance violations: they surface as `InternalFailure`
/// in the externally visible result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("tag entry at index {index} has no Key field")]
    MissingKey { index: usize },
    #[error("tag entry at index {index} has a non-string Key")]
    NonStringKey { index: usize },
}

/// Read the declared tags out of an arbitrary resource-properties structure.
///
/// Absent or empty properties are `NoProperties`; a missing, empty, or
/// non-list `Tags` field is `AbsentTags`. Entries without a usable `Key`
/// fail extraction rather than being silently skipped.
pub fn extract_tags(resource_properties: Option<&Value>) -> Result<TagState, ExtractError> {
    let props = match resource_properties {
        None => return Ok(TagState::NoProperties),
        Some(value) if is_empty_value(value) => return Ok(TagState::NoProperties),
        Some(value) => value,
    };

    let entries = match props.get("Tags") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => return Ok(TagState::AbsentTags),
    };

    let mut tags = ResourceTagMap::new();
    for (index, entry) in entries.iter().enumerate() {
        let key = match entry.get("Key") {
            Some(Value::String(key)) => key.clone(),
            Some(_) => return Err(ExtractError::NonStringKey { index }),
            None => return Err(ExtractError::MissingKey { index }),
        };
        let value = entry
            .get("Value")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        tags.insert(key, value);
    }

    Ok(TagState::Tags(tags))
}

/// Mirrors the original handler's truthiness check on the properties value.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(entries) => entries.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
