/// Ordered, deduplicated set of tag keys every compliant resource must declare.
///
/// Derived from the `requiredTags` configuration option; empty means no
/// requirement is configured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredTagSet {
    keys: Vec<String>,
}

impl RequiredTagSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the raw `requiredTags` configuration value.
    ///
    /// Absent, empty, or whitespace-only input means no requirement. Otherwise
    /// the string is split on commas and each segment is kept verbatim,
    /// including incidental whitespace: keys match literally, so `"Owner, Env"`
    /// requires the key `" Env"`. A trailing comma therefore yields a literal
    /// empty key that can never match. Duplicates keep their first position.
    ///
    /// This never fails.
    pub fn from_spec(spec: Option<&str>) -> Self {
        let Some(spec) = spec else {
            return Self::empty();
        };
        if spec.trim().is_empty() {
            return Self::empty();
        }

        let mut keys: Vec<String> = Vec::new();
        for segment in spec.split(',') {
            if !keys.iter().any(|k| k == segment) {
                keys.push(segment.to_string());
            }
        }
        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}
