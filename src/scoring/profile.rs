use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scoring profile: the fixed attribute set and the point constants.
///
/// Every organization row and every allocation is interpreted against this
/// profile. The attribute order here is the display order everywhere
/// (table columns, highlight notes, bar chart).
///
/// Example YAML:
/// ```yaml
/// profile:
///   attributes: [compensation, growth, career, work_life_balance, benefits, fulfillment]
///   max_points_per_attribute: 5
///   max_total_points: 15
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringProfile {
    /// Attribute column names, in display order.
    pub attributes: Vec<String>,

    /// Per-attribute slider ceiling. Also the normalization divisor that
    /// maps allocated points onto the attribute's own 0..1 scale, so the
    /// two can never drift apart.
    #[serde(default = "default_max_points_per_attribute")]
    pub max_points_per_attribute: u32,

    /// Total point budget across all attributes.
    #[serde(default = "default_max_total_points")]
    pub max_total_points: u32,
}

fn default_max_points_per_attribute() -> u32 {
    5
}

fn default_max_total_points() -> u32 {
    15
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            attributes: vec![
                "compensation".to_string(),
                "growth".to_string(),
                "career".to_string(),
                "work_life_balance".to_string(),
                "benefits".to_string(),
                "fulfillment".to_string(),
            ],
            max_points_per_attribute: default_max_points_per_attribute(),
            max_total_points: default_max_total_points(),
        }
    }
}

impl ScoringProfile {
    /// Normalize a raw point value onto the attribute's 0..1 scale.
    pub fn target_for(&self, points: u32) -> f64 {
        f64::from(points) / f64::from(self.max_points_per_attribute)
    }
}

/// User preference allocation: attribute name to allocated points.
///
/// The engine expects an entry for every profile attribute. Range and
/// budget checks live in `scoring::validation` and run before the engine
/// is invoked; the engine itself has no awareness of the total budget.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Allocation {
    points: BTreeMap<String, u32>,
}

impl Allocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocation with zero points for every profile attribute.
    /// CLI layering starts from this so the engine always sees a complete
    /// mapping.
    pub fn zeroed(profile: &ScoringProfile) -> Self {
        Self {
            points: profile.attributes.iter().map(|a| (a.clone(), 0)).collect(),
        }
    }

    pub fn set(&mut self, attribute: impl Into<String>, points: u32) {
        self.points.insert(attribute.into(), points);
    }

    pub fn get(&self, attribute: &str) -> Option<u32> {
        self.points.get(attribute).copied()
    }

    /// Sum of all allocated points.
    pub fn total(&self) -> u32 {
        self.points.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.points.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(String, u32)> for Allocation {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = ScoringProfile::default();
        assert_eq!(profile.attributes.len(), 6);
        assert_eq!(profile.max_points_per_attribute, 5);
        assert_eq!(profile.max_total_points, 15);
    }

    #[test]
    fn test_target_normalization() {
        let profile = ScoringProfile::default();
        assert_eq!(profile.target_for(0), 0.0);
        assert_eq!(profile.target_for(5), 1.0);
        assert_eq!(profile.target_for(3), 0.6);
    }

    #[test]
    fn test_profile_parse_defaults_constants() {
        let yaml = "attributes: [a, b]";
        let profile: ScoringProfile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(profile.attributes, vec!["a", "b"]);
        assert_eq!(profile.max_points_per_attribute, 5);
        assert_eq!(profile.max_total_points, 15);
    }

    #[test]
    fn test_profile_parse_full() {
        let yaml = r#"
attributes: [speed, comfort]
max_points_per_attribute: 10
max_total_points: 12
"#;
        let profile: ScoringProfile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(profile.max_points_per_attribute, 10);
        assert_eq!(profile.max_total_points, 12);
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = ScoringProfile::default();
        let yaml = serde_saphyr::to_string(&profile).unwrap();
        let parsed: ScoringProfile = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(profile, parsed);
    }

    #[test]
    fn test_allocation_zeroed_covers_profile() {
        let profile = ScoringProfile::default();
        let allocation = Allocation::zeroed(&profile);
        for attr in &profile.attributes {
            assert_eq!(allocation.get(attr), Some(0));
        }
        assert_eq!(allocation.total(), 0);
    }

    #[test]
    fn test_allocation_total() {
        let mut allocation = Allocation::new();
        allocation.set("a", 5);
        allocation.set("b", 3);
        assert_eq!(allocation.total(), 8);
        assert_eq!(allocation.get("a"), Some(5));
        assert_eq!(allocation.get("missing"), None);
    }

    #[test]
    fn test_allocation_parse_from_yaml_map() {
        let yaml = r#"
compensation: 3
growth: 2
"#;
        let allocation: Allocation = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(allocation.get("compensation"), Some(3));
        assert_eq!(allocation.get("growth"), Some(2));
        assert_eq!(allocation.total(), 5);
    }
}
