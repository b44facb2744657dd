pub mod engine;
pub mod highlights;
pub mod profile;
pub mod validation;

pub use engine::{rank, score_organization, AttributeGap, RankedOrganization, ScoreResult, ScoringError};
pub use highlights::{derive_highlights, HIGHLIGHT_MIN_POINTS};
pub use profile::{Allocation, ScoringProfile};
pub use validation::{validate_allocation, validate_profile};
