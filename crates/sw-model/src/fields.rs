//! Key→value lookup over a section's field list.

use std::collections::HashMap;

use crate::site::Field;

/// Lookup structure built by folding a section's field list.
///
/// Duplicate keys resolve to the last occurrence (the fold simply
/// overwrites). Lookups are case-sensitive exact matches; there is no
/// normalization of any kind, because the identifier namespace and the
/// field keys are a wire contract with the authoring tooling.
#[derive(Clone, Debug, Default)]
pub struct FieldMap {
    values: HashMap<String, String>,
}

impl FieldMap {
    /// Build a map from a field list. Last write wins on duplicates.
    #[must_use]
    pub fn from_fields(fields: &[Field]) -> Self {
        let values = fields
            .iter()
            .map(|field| (field.key.clone(), field.value.clone()))
            .collect();
        Self { values }
    }

    /// Raw value for `key`, if the field exists at all.
    ///
    /// The returned value may be empty. Rendering code should prefer
    /// [`text`](Self::text), which applies the per-field default rule.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key`, or `default` when the field is missing or empty.
    ///
    /// Tenants are non-technical users editing a subset of fields, so a
    /// blank value degrades to the component's placeholder copy instead
    /// of rendering an empty slot. The fallback applies per field: other
    /// fields in the same section are unaffected.
    #[must_use]
    pub fn text<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.values.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no fields were present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
