use super::profile::{Allocation, ScoringProfile};

/// Validate the scoring profile at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_profile(profile: &ScoringProfile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if profile.attributes.is_empty() {
        errors.push("profile.attributes: must not be empty".to_string());
    }

    for (i, attribute) in profile.attributes.iter().enumerate() {
        if attribute.trim().is_empty() {
            errors.push(format!("profile.attributes[{}]: must not be blank", i));
        }
        if profile.attributes[..i].contains(attribute) {
            errors.push(format!("profile.attributes: duplicate '{}'", attribute));
        }
    }

    if profile.max_points_per_attribute == 0 {
        errors.push("profile.max_points_per_attribute: must be at least 1".to_string());
    }
    if profile.max_total_points == 0 {
        errors.push("profile.max_total_points: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a preference allocation against the profile before the engine
/// runs. This is where the total point budget is enforced; the engine
/// itself never checks it.
pub fn validate_allocation(
    allocation: &Allocation,
    profile: &ScoringProfile,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (attribute, points) in allocation.iter() {
        if !profile.attributes.iter().any(|a| a == attribute) {
            errors.push(format!("allocation.{}: unknown attribute", attribute));
            continue;
        }
        if points > profile.max_points_per_attribute {
            errors.push(format!(
                "allocation.{}: {} exceeds the per-attribute maximum of {}",
                attribute, points, profile.max_points_per_attribute
            ));
        }
    }

    for attribute in &profile.attributes {
        if allocation.get(attribute).is_none() {
            errors.push(format!("allocation.{}: missing", attribute));
        }
    }

    let total = allocation.total();
    if total > profile.max_total_points {
        errors.push(format!(
            "allocation: total {} exceeds the {} point budget",
            total, profile.max_total_points
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_ab() -> ScoringProfile {
        ScoringProfile {
            attributes: vec!["a".to_string(), "b".to_string()],
            max_points_per_attribute: 5,
            max_total_points: 8,
        }
    }

    fn allocation(pairs: &[(&str, u32)]) -> Allocation {
        pairs
            .iter()
            .map(|(name, points)| (name.to_string(), *points))
            .collect()
    }

    #[test]
    fn test_valid_profile() {
        assert!(validate_profile(&ScoringProfile::default()).is_ok());
    }

    #[test]
    fn test_empty_attribute_set() {
        let profile = ScoringProfile {
            attributes: vec![],
            ..ScoringProfile::default()
        };
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors[0].contains("must not be empty"));
    }

    #[test]
    fn test_duplicate_attribute() {
        let profile = ScoringProfile {
            attributes: vec!["a".to_string(), "a".to_string()],
            ..ScoringProfile::default()
        };
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors[0].contains("duplicate 'a'"));
    }

    #[test]
    fn test_zero_max_points() {
        let profile = ScoringProfile {
            max_points_per_attribute: 0,
            ..ScoringProfile::default()
        };
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors[0].contains("max_points_per_attribute"));
    }

    #[test]
    fn test_valid_allocation() {
        let result = validate_allocation(&allocation(&[("a", 5), ("b", 3)]), &profile_ab());
        assert!(result.is_ok());
    }

    #[test]
    fn test_per_attribute_maximum() {
        let errors =
            validate_allocation(&allocation(&[("a", 7), ("b", 0)]), &profile_ab()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("allocation.a"));
        assert!(errors[0].contains("per-attribute maximum of 5"));
    }

    #[test]
    fn test_budget_exceeded() {
        // 5 + 4 = 9 against a budget of 8
        let errors =
            validate_allocation(&allocation(&[("a", 5), ("b", 4)]), &profile_ab()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("total 9 exceeds the 8 point budget"));
    }

    #[test]
    fn test_budget_boundary_is_inclusive() {
        let result = validate_allocation(&allocation(&[("a", 5), ("b", 3)]), &profile_ab());
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_attribute() {
        let errors = validate_allocation(&allocation(&[("a", 1), ("b", 1), ("c", 1)]), &profile_ab())
            .unwrap_err();
        assert!(errors.iter().any(|e| e.contains("allocation.c: unknown")));
    }

    #[test]
    fn test_missing_attribute() {
        let errors = validate_allocation(&allocation(&[("a", 1)]), &profile_ab()).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("allocation.b: missing")));
    }

    #[test]
    fn test_collects_all_errors() {
        // over per-attribute max, unknown attribute, missing attribute,
        // and a total of 10 against the 8 point budget
        let errors =
            validate_allocation(&allocation(&[("a", 9), ("c", 1)]), &profile_ab()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
