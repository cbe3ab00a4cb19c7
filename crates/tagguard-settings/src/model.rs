use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The hook's type configuration.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. The single recognized option is `requiredTags`,
/// a comma-delimited list of required tag key names; an absent field and an
/// empty string both mean "no requirement", but they are kept distinct here
/// and collapsed during resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeConfiguration {
    #[serde(
        rename = "requiredTags",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_tags: Option<String>,
}
