//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Missing-key computation (exact set difference, required order)
//! - Verdict classification for absent tags and absent properties
//! - Determinism of evaluation and formatting
//! - Extractor totality on arbitrary JSON

use crate::engine::{evaluate, evaluate_resource};
use crate::extract::extract_tags;
use crate::format::format_verdict;
use crate::model::{TagState, Verdict};
use crate::policy::RequiredTagSet;
use crate::test_support::properties_with_tags;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use tagguard_types::{HandlerErrorCode, OperationStatus};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for tag keys: no commas (the config delimiter) and no
/// leading/trailing whitespace, so keys survive a `requiredTags` round trip.
fn arb_tag_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_:-]{0,15}").unwrap()
}

/// Strategy for tag values (content is irrelevant to compliance).
fn arb_tag_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,20}").unwrap()
}

/// Strategy for a unique, ordered set of tag keys.
fn arb_key_set(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(arb_tag_key(), 0..max)
        .prop_map(|set| set.into_iter().collect())
}

/// Strategy for arbitrary JSON values, for extractor totality.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        arb_tag_value().prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::btree_map(arb_tag_key(), inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn required_from(keys: &[String]) -> RequiredTagSet {
    RequiredTagSet::from_spec(Some(&keys.join(",")))
}

// ============================================================================
// Property tests: classification invariants
// ============================================================================

proptest! {
    /// Tag maps covering every required key are always Compliant.
    #[test]
    fn superset_tag_maps_are_compliant(
        keys in arb_key_set(8),
        extras in arb_key_set(4),
        value in arb_tag_value(),
    ) {
        let pairs: Vec<(&str, &str)> = keys
            .iter()
            .chain(extras.iter())
            .map(|k| (k.as_str(), value.as_str()))
            .collect();
        let props = properties_with_tags(&pairs);

        let verdict = evaluate_resource(&required_from(&keys), Some(&props));
        prop_assert_eq!(verdict, Verdict::Compliant);
    }

    /// With no tag list present, every required key is missing.
    #[test]
    fn absent_tags_miss_the_whole_required_set(keys in arb_key_set(8)) {
        prop_assume!(!keys.is_empty());

        let required = required_from(&keys);
        let verdict = evaluate(&required, &TagState::AbsentTags);
        prop_assert_eq!(verdict.clone(), Verdict::NonCompliant { missing: keys.clone() });

        // The formatted message lists every required key.
        let result = format_verdict(&verdict);
        prop_assert_eq!(result.status, OperationStatus::Failed);
        for key in &keys {
            prop_assert!(result.message.contains(key.as_str()));
        }
    }

    /// Absent properties always fail as NonCompliant, whatever is required.
    #[test]
    fn no_properties_always_fails_as_non_compliant(keys in arb_key_set(8)) {
        let verdict = evaluate(&required_from(&keys), &TagState::NoProperties);
        let result = format_verdict(&verdict);

        prop_assert_eq!(result.status, OperationStatus::Failed);
        prop_assert_eq!(result.error_code, Some(HandlerErrorCode::NonCompliant));
    }

    /// `missing` is exactly `required − keys(tags)`, in required order.
    #[test]
    fn missing_is_the_exact_set_difference(
        keys in arb_key_set(10),
        present_mask in prop::collection::vec(any::<bool>(), 10),
    ) {
        let present: Vec<String> = keys
            .iter()
            .zip(present_mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(k, _)| k.clone())
            .collect();
        let expected_missing: Vec<String> = keys
            .iter()
            .filter(|k| !present.contains(k))
            .cloned()
            .collect();

        let pairs: Vec<(&str, &str)> = present.iter().map(|k| (k.as_str(), "v")).collect();
        let props = properties_with_tags(&pairs);
        let verdict = evaluate_resource(&required_from(&keys), Some(&props));

        // With no present tags the payload is `{"Tags": []}`, which extracts
        // to AbsentTags; the missing set is still the whole requirement.
        if expected_missing.is_empty() {
            prop_assert_eq!(verdict, Verdict::Compliant);
        } else {
            prop_assert_eq!(verdict, Verdict::NonCompliant { missing: expected_missing });
        }
    }

    /// Identical inputs give byte-identical results.
    #[test]
    fn evaluation_is_idempotent(
        keys in arb_key_set(8),
        present in arb_key_set(8),
    ) {
        let pairs: Vec<(&str, &str)> = present.iter().map(|k| (k.as_str(), "v")).collect();
        let props = properties_with_tags(&pairs);
        let required = required_from(&keys);

        let first = format_verdict(&evaluate_resource(&required, Some(&props)));
        let second = format_verdict(&evaluate_resource(&required, Some(&props)));

        let first_bytes = serde_json::to_vec(&first).expect("serialize");
        let second_bytes = serde_json::to_vec(&second).expect("serialize");
        prop_assert_eq!(first_bytes, second_bytes);
    }
}

// ============================================================================
// Property tests: extractor totality
// ============================================================================

proptest! {
    /// The extractor never panics, whatever the properties value looks like.
    #[test]
    fn extractor_is_total_on_arbitrary_json(value in arb_json()) {
        let _ = extract_tags(Some(&value));
    }

    /// Wrapping arbitrary JSON as a Tags field never panics either; any
    /// non-error outcome is one of the three defined states.
    #[test]
    fn tags_field_extraction_is_total(value in arb_json()) {
        let props = json!({"Tags": value});
        match extract_tags(Some(&props)) {
            Ok(TagState::NoProperties | TagState::AbsentTags | TagState::Tags(_)) => {}
            Err(_) => {}
        }
    }

    /// Extracted tag keys are exactly the Key fields of the entries.
    #[test]
    fn extracted_keys_match_the_entries(keys in arb_key_set(8)) {
        prop_assume!(!keys.is_empty());

        let pairs: Vec<(&str, &str)> = keys.iter().map(|k| (k.as_str(), "v")).collect();
        let props = properties_with_tags(&pairs);

        let state = extract_tags(Some(&props)).expect("extract");
        let TagState::Tags(tags) = state else {
            return Err(proptest::test_runner::TestCaseError::fail("expected Tags state"));
        };
        let extracted: BTreeSet<&String> = tags.keys().collect();
        let expected: BTreeSet<&String> = keys.iter().collect();
        prop_assert_eq!(extracted, expected);
    }
}
