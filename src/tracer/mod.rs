//! Tracer service protocol and clients.
//!
//! The tracer is an external collaborator: it executes the submitted program
//! and returns the ordered list of steps. This module owns the wire contract
//! (`POST {base}/visualize`), the failure taxonomy, the HTTP client, and a
//! scripted client for tests.

mod client;
mod mock;

pub use client::HttpTracer;
pub use mock::MockTracer;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::trace::Step;

/// Fixed message shown when the tracer gave no usable reason of its own.
pub const GENERIC_FAILURE: &str = "the tracer service request failed";

/// Request body for one trace run.
#[derive(Debug, Serialize)]
pub struct TraceRequest<'a> {
    pub code: &'a str,
}

/// Successful response body. `steps` may be empty: a program that produced
/// no recorded steps is still a successful run.
#[derive(Debug, Deserialize)]
pub struct TraceResponse {
    pub steps: Vec<Step>,
}

/// Failure response body.
#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Failures surfaced by a tracer client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TracerError {
    /// The service returned a failure status with a reason; shown verbatim.
    #[error("{0}")]
    Rejected(String),
    /// Transport failure, unparsable body, or failure without a reason.
    #[error("{}", GENERIC_FAILURE)]
    Unavailable,
}

/// Produces an ordered trace for a program source.
#[async_trait]
pub trait Tracer: Send + Sync {
    async fn trace(&self, code: &str) -> Result<Vec<Step>, TracerError>;
}

/// Parse a success (2xx) body into steps.
pub(crate) fn parse_steps(body: &str) -> Result<Vec<Step>, TracerError> {
    let response: TraceResponse = serde_json::from_str(body).map_err(|err| {
        tracing::warn!(error = %err, "tracer returned an unparsable success body");
        TracerError::Unavailable
    })?;
    Ok(response.steps)
}

/// Classify a failure (non-2xx) body, surfacing `detail` verbatim when the
/// service supplied one.
pub(crate) fn classify_failure(body: &str) -> TracerError {
    match serde_json::from_str::<FailureBody>(body) {
        Ok(FailureBody {
            detail: Some(detail),
        }) if !detail.trim().is_empty() => TracerError::Rejected(detail),
        _ => TracerError::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps_from_success_body() {
        let steps = parse_steps(
            r#"{"steps": [{"scope": {"x": 1}, "message": "assigned x"}]}"#,
        )
        .unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].message, "assigned x");
    }

    #[test]
    fn empty_steps_list_is_a_valid_trace() {
        let steps = parse_steps(r#"{"steps": []}"#).unwrap();
        assert!(steps.is_empty());
    }

    #[test]
    fn unparsable_success_body_is_unavailable() {
        assert_eq!(parse_steps("not json"), Err(TracerError::Unavailable));
        // Parsable JSON of the wrong shape is just as invalid.
        assert_eq!(
            parse_steps(r#"{"results": []}"#),
            Err(TracerError::Unavailable)
        );
        assert_eq!(
            parse_steps(r#"{"steps": [{"scope": {}}]}"#),
            Err(TracerError::Unavailable)
        );
    }

    #[test]
    fn failure_detail_is_surfaced_verbatim() {
        let err = classify_failure(r#"{"detail": "SyntaxError: invalid syntax"}"#);
        assert_eq!(
            err,
            TracerError::Rejected("SyntaxError: invalid syntax".to_string())
        );
        assert_eq!(err.to_string(), "SyntaxError: invalid syntax");
    }

    #[test]
    fn failure_without_detail_gets_the_generic_message() {
        assert_eq!(classify_failure(r#"{}"#), TracerError::Unavailable);
        assert_eq!(classify_failure("<html>502</html>"), TracerError::Unavailable);
        assert_eq!(classify_failure(r#"{"detail": "  "}"#), TracerError::Unavailable);
        assert_eq!(TracerError::Unavailable.to_string(), GENERIC_FAILURE);
    }
}
