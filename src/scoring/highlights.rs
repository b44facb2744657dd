use super::profile::{Allocation, ScoringProfile};
use crate::dataset::types::OrganizationRecord;

/// Minimum allocated points for an attribute to be worth calling out.
pub const HIGHLIGHT_MIN_POINTS: u32 = 3;

/// Derive "meets your target" notes for one organization, usually the
/// top-ranked pick.
///
/// An attribute qualifies when the user put at least
/// [`HIGHLIGHT_MIN_POINTS`] on it and the organization's actual value is
/// at or above the normalized target (the boundary is inclusive). Notes
/// come out in profile attribute order. When nothing qualifies a single
/// balanced-overall note is returned, never an empty list.
///
/// Purely derived view data; has no effect on scoring or ordering.
pub fn derive_highlights(
    organization: &OrganizationRecord,
    allocation: &Allocation,
    profile: &ScoringProfile,
) -> Vec<String> {
    let mut notes = Vec::new();

    for attribute in &profile.attributes {
        let Some(points) = allocation.get(attribute) else {
            continue;
        };
        let Some(actual) = organization.attribute(attribute) else {
            continue;
        };
        if points >= HIGHLIGHT_MIN_POINTS && actual >= profile.target_for(points) {
            notes.push(format!("{attribute}: meets your target"));
        }
    }

    if notes.is_empty() {
        notes.push("balanced overall across your priorities".to_string());
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_ab() -> ScoringProfile {
        ScoringProfile {
            attributes: vec!["a".to_string(), "b".to_string()],
            max_points_per_attribute: 5,
            max_total_points: 15,
        }
    }

    fn allocation(pairs: &[(&str, u32)]) -> Allocation {
        pairs
            .iter()
            .map(|(name, points)| (name.to_string(), *points))
            .collect()
    }

    #[test]
    fn test_highlight_when_target_met_with_enough_points() {
        let org = OrganizationRecord::new("Acme")
            .with_attribute("a", 0.9)
            .with_attribute("b", 0.9);
        let notes = derive_highlights(&org, &allocation(&[("a", 4), ("b", 0)]), &profile_ab());
        assert_eq!(notes, vec!["a: meets your target"]);
    }

    #[test]
    fn test_exact_target_is_included() {
        // 4 points -> target 0.8; actual exactly 0.8 qualifies
        let org = OrganizationRecord::new("Acme")
            .with_attribute("a", 0.8)
            .with_attribute("b", 0.0);
        let notes = derive_highlights(&org, &allocation(&[("a", 4), ("b", 0)]), &profile_ab());
        assert_eq!(notes, vec!["a: meets your target"]);
    }

    #[test]
    fn test_low_priority_attributes_not_highlighted() {
        // b meets its target but only carries 2 points, below the cutoff
        let org = OrganizationRecord::new("Acme")
            .with_attribute("a", 0.1)
            .with_attribute("b", 1.0);
        let notes = derive_highlights(&org, &allocation(&[("a", 5), ("b", 2)]), &profile_ab());
        assert_eq!(notes, vec!["balanced overall across your priorities"]);
    }

    #[test]
    fn test_shortfall_not_highlighted() {
        let org = OrganizationRecord::new("Acme")
            .with_attribute("a", 0.5)
            .with_attribute("b", 0.5);
        let notes = derive_highlights(&org, &allocation(&[("a", 5), ("b", 0)]), &profile_ab());
        assert_eq!(notes, vec!["balanced overall across your priorities"]);
    }

    #[test]
    fn test_notes_follow_profile_order() {
        let org = OrganizationRecord::new("Acme")
            .with_attribute("a", 1.0)
            .with_attribute("b", 1.0);
        let notes = derive_highlights(&org, &allocation(&[("a", 3), ("b", 5)]), &profile_ab());
        assert_eq!(notes, vec!["a: meets your target", "b: meets your target"]);
    }
}
