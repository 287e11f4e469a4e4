use serde::Deserialize;
use serde_json::{Map, Value};

/// One recorded execution point: a snapshot of the variable scope plus a
/// human-readable description of the transition that produced it.
///
/// Steps are immutable once received from the tracer. Both fields are
/// required; a response whose steps are missing either is an invalid body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    /// Variable name -> value, in the order the tracer reported them.
    pub scope: Map<String, Value>,
    /// What happened to produce this step.
    pub message: String,
}
