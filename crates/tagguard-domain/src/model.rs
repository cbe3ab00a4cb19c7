use std::collections::BTreeMap;

/// Tag key to tag value, as declared on the resource. Keys are unique.
pub type ResourceTagMap = BTreeMap<String, String>;

/// What the extractor found on the resource.
///
/// `NoProperties` (nothing declared at all) is distinct from `AbsentTags`
/// (properties present, but no usable tag list) and the two classify
/// differently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagState {
    NoProperties,
    AbsentTags,
    Tags(ResourceTagMap),
}

/// Internal classification of one compliance check, before formatting.
///
/// Exactly one verdict is produced per evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Compliant,
    /// `missing` preserves the order of the required set.
    NonCompliant { missing: Vec<String> },
    NoPropertiesDefined,
    InternalError { detail: String },
}
