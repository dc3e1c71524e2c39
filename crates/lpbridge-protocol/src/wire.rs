//! JSON shapes exchanged with the solver service.
//!
//! Request types mirror exactly what the service reads. Response types make
//! every field optional: a reply that leaves something out still decodes and
//! the interpreter fills in defaults.

use indexmap::IndexMap;
use lpbridge_model::OriginalExpressions;
use serde::{Deserialize, Serialize};

/// One `{name, coef}` entry of a sparse linear expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTerm {
    pub name: String,
    pub coef: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireBounds {
    /// GLPK bound-type code
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ub: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConstraint {
    pub name: String,
    pub vars: Vec<WireTerm>,
    pub bnds: WireBounds,
}

/// Advisory description of the request. The solver ignores it but echoes it
/// back under `inputData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMetadata {
    pub created_at: String,
    pub format_version: String,
    pub source: String,
    pub num_variables: usize,
    pub variable_names: Vec<String>,
    pub original_expressions: OriginalExpressions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRequest {
    pub objective: Vec<WireTerm>,
    pub constraints: Vec<WireConstraint>,
    pub metadata: WireMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireResponse {
    #[serde(default)]
    pub result: Option<WireOutcome>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "inputData")]
    pub input_data: Option<WireInputEcho>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireOutcome {
    #[serde(default)]
    pub result: Option<WireSolution>,
    /// Solver wall time in seconds
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub iterations: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireSolution {
    #[serde(default)]
    pub z: Option<f64>,
    #[serde(default)]
    pub vars: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub dual: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub status: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireInputEcho {
    #[serde(default)]
    pub variable_names: Option<Vec<String>>,
    #[serde(default)]
    pub original_expressions: Option<OriginalExpressions>,
    #[serde(default)]
    pub num_variables: Option<usize>,
}
