use crate::policy::RequiredTagSet;
use serde_json::{json, Value};

pub fn required(keys: &[&str]) -> RequiredTagSet {
    RequiredTagSet::from_spec(Some(&keys.join(",")))
}

pub fn tags_json(pairs: &[(&str, &str)]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|(key, value)| json!({"Key": key, "Value": value}))
            .collect(),
    )
}

pub fn properties_with_tags(pairs: &[(&str, &str)]) -> Value {
    json!({"Tags": tags_json(pairs)})
}
