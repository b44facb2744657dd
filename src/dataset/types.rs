use serde::Serialize;
use std::collections::BTreeMap;

/// One organization row from the dataset snapshot.
///
/// Attribute values are normalized quality scores in 0..=1. Records are
/// built once per ranking request and never mutated; scores are always
/// recomputed from these raw values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrganizationRecord {
    pub name: String,
    pub attributes: BTreeMap<String, f64>,
}

impl OrganizationRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(attribute.into(), value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).copied()
    }
}
