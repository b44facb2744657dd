use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::{Allocation, ScoringProfile};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the organization catalog CSV.
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Attribute set and point constants. Defaults to the built-in
    /// six-attribute profile when omitted.
    #[serde(default)]
    pub profile: Option<ScoringProfile>,

    /// Default point allocation, overridable per run with `-p`.
    #[serde(default)]
    pub allocation: Option<Allocation>,
}
