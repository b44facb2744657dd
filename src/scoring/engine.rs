use serde::Serialize;
use thiserror::Error;

use super::profile::{Allocation, ScoringProfile};
use crate::dataset::types::OrganizationRecord;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("allocation has no points entry for attribute '{0}'")]
    MissingAttribute(String),

    #[error("organization '{organization}' has no value for attribute '{attribute}'")]
    MissingValue {
        organization: String,
        attribute: String,
    },
}

/// One attribute's contribution to the dissatisfaction score.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeGap {
    pub attribute: String,
    /// Normalized target the user asked for (points / max per attribute).
    pub target: f64,
    /// The organization's actual value for this attribute.
    pub actual: f64,
    /// Squared one-sided shortfall; zero when actual >= target.
    pub penalty: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: Vec<AttributeGap>,
}

/// An organization with its computed score and 1-based rank.
#[derive(Debug, Clone, Serialize)]
pub struct RankedOrganization {
    pub rank: usize,
    pub organization: OrganizationRecord,
    pub score: f64,
    pub breakdown: Vec<AttributeGap>,
}

/// Compute the dissatisfaction score for one organization.
///
/// For each profile attribute, the allocated points are normalized onto
/// the attribute's 0..1 scale and the squared one-sided shortfall is
/// accumulated. Over-performance contributes nothing: exceeding a target
/// neither lowers the score nor offsets another attribute's gap. The
/// score is zero exactly when every attribute meets its target.
///
/// The total point budget is deliberately not checked here; that is a
/// caller precondition enforced by `validation::validate_allocation`.
pub fn score_organization(
    organization: &OrganizationRecord,
    allocation: &Allocation,
    profile: &ScoringProfile,
) -> Result<ScoreResult, ScoringError> {
    let mut score = 0.0;
    let mut breakdown = Vec::with_capacity(profile.attributes.len());

    for attribute in &profile.attributes {
        let points = allocation
            .get(attribute)
            .ok_or_else(|| ScoringError::MissingAttribute(attribute.clone()))?;
        let actual =
            organization
                .attribute(attribute)
                .ok_or_else(|| ScoringError::MissingValue {
                    organization: organization.name.clone(),
                    attribute: attribute.clone(),
                })?;

        let target = profile.target_for(points);
        let gap = (target - actual).max(0.0);
        let penalty = gap * gap;
        score += penalty;

        breakdown.push(AttributeGap {
            attribute: attribute.clone(),
            target,
            actual,
            penalty,
        });
    }

    Ok(ScoreResult { score, breakdown })
}

/// Score every organization and sort ascending by dissatisfaction.
///
/// The sort is stable: organizations with exactly equal scores keep their
/// dataset order. Ranks are assigned 1-based after sorting. An empty
/// input yields an empty result.
pub fn rank(
    organizations: &[OrganizationRecord],
    allocation: &Allocation,
    profile: &ScoringProfile,
) -> Result<Vec<RankedOrganization>, ScoringError> {
    let mut scored = Vec::with_capacity(organizations.len());
    for organization in organizations {
        let result = score_organization(organization, allocation, profile)?;
        scored.push((organization.clone(), result));
    }

    scored.sort_by(|a, b| a.1.score.total_cmp(&b.1.score));

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(idx, (organization, result))| RankedOrganization {
            rank: idx + 1,
            organization,
            score: result.score,
            breakdown: result.breakdown,
        })
        .collect())
}
