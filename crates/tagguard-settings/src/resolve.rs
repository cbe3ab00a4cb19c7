use crate::model::TypeConfiguration;
use tagguard_domain::policy::RequiredTagSet;

/// Resolve the required tag keys out of an optional type configuration.
///
/// A missing configuration, a missing `requiredTags` field, and a blank value
/// all resolve to the empty set: no requirement is configured.
pub fn resolve_required_tags(cfg: Option<&TypeConfiguration>) -> RequiredTagSet {
    RequiredTagSet::from_spec(cfg.and_then(|c| c.required_tags.as_deref()))
}
