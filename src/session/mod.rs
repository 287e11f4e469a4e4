//! Execution session: the request lifecycle state machine for one run.
//!
//! All transitions happen in response to discrete events (a user-initiated
//! run, a tracer outcome). A run while another is pending supersedes it: the
//! superseded request's outcome is discarded when it eventually arrives,
//! because its token no longer matches the pending one. Stale responses can
//! therefore never overwrite newer state.

use crate::trace::{Step, TraceStore};
use crate::tracer::TracerError;

/// Identifies one dispatched trace request. Tokens are minted in strictly
/// increasing order; only the outcome carrying the token of the currently
/// pending request is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Where the session is in the run cycle. `Ready` and `Failed` are mutually
/// exclusive by construction; entering `Pending` clears both.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle {
    /// No run has been started.
    Idle,
    /// A trace request is in flight.
    Pending(RequestToken),
    /// The last run completed and produced a trace (possibly empty).
    Ready(TraceStore),
    /// The last run failed with a user-facing message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// No ready trace with at least one step to display. Local-only: the UI
    /// renders a placeholder for this, not an error.
    #[error("no run has produced a displayable step")]
    NoActiveTrace,
}

/// Client state for one editing/running cycle.
#[derive(Debug)]
pub struct ExecutionSession {
    lifecycle: Lifecycle,
    next_token: u64,
}

impl Default for ExecutionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionSession {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Idle,
            next_token: 0,
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Pending(_))
    }

    /// Start a run: clears any prior trace or failure and supersedes any
    /// pending request. The returned token must accompany the outcome passed
    /// to [`finish_run`](Self::finish_run).
    pub fn begin_run(&mut self) -> RequestToken {
        if let Lifecycle::Pending(stale) = &self.lifecycle {
            tracing::debug!(?stale, "superseding in-flight trace request");
        }
        let token = RequestToken(self.next_token);
        self.next_token += 1;
        self.lifecycle = Lifecycle::Pending(token);
        token
    }

    /// Apply the outcome of a dispatched request. An outcome whose token
    /// does not match the currently pending request is discarded, so a
    /// superseded response arriving late cannot corrupt newer state.
    pub fn finish_run(&mut self, token: RequestToken, outcome: Result<Vec<Step>, TracerError>) {
        match &self.lifecycle {
            Lifecycle::Pending(expected) if *expected == token => {}
            _ => {
                tracing::debug!(?token, "discarding stale trace outcome");
                return;
            }
        }
        self.lifecycle = match outcome {
            Ok(steps) => Lifecycle::Ready(TraceStore::new(steps)),
            Err(err) => Lifecycle::Failed(err.to_string()),
        };
    }

    /// The step under the cursor of the ready trace.
    pub fn current_step(&self) -> Result<&Step, SessionError> {
        match &self.lifecycle {
            Lifecycle::Ready(trace) => trace.current().ok_or(SessionError::NoActiveTrace),
            _ => Err(SessionError::NoActiveTrace),
        }
    }

    /// The ready trace, if the last run completed successfully.
    pub fn trace(&self) -> Option<&TraceStore> {
        match &self.lifecycle {
            Lifecycle::Ready(trace) => Some(trace),
            _ => None,
        }
    }

    /// User-facing failure message, if the last run failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.lifecycle {
            Lifecycle::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Advance the cursor; no-op unless a non-empty trace is ready.
    pub fn next_step(&mut self) {
        if let Lifecycle::Ready(trace) = &mut self.lifecycle {
            trace.next();
        }
    }

    /// Move the cursor back; no-op unless a non-empty trace is ready.
    pub fn prev_step(&mut self) {
        if let Lifecycle::Ready(trace) = &mut self.lifecycle {
            trace.prev();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn steps(n: usize) -> Vec<Step> {
        (0..n)
            .map(|i| Step {
                scope: Map::new(),
                message: format!("step {i}"),
            })
            .collect()
    }

    #[test]
    fn begins_idle_with_nothing_to_display() {
        let session = ExecutionSession::new();
        assert_eq!(*session.lifecycle(), Lifecycle::Idle);
        assert_eq!(session.current_step(), Err(SessionError::NoActiveTrace));
        assert!(session.failure().is_none());
    }

    #[test]
    fn begin_run_clears_previous_failure() {
        let mut session = ExecutionSession::new();
        let token = session.begin_run();
        session.finish_run(token, Err(TracerError::Rejected("boom".to_string())));
        assert_eq!(session.failure(), Some("boom"));

        session.begin_run();
        assert!(session.is_pending());
        assert!(session.failure().is_none());
        assert!(session.trace().is_none());
    }

    #[test]
    fn begin_run_clears_previous_trace() {
        let mut session = ExecutionSession::new();
        let token = session.begin_run();
        session.finish_run(token, Ok(steps(2)));
        assert!(session.trace().is_some());

        session.begin_run();
        assert!(session.trace().is_none());
        assert_eq!(session.current_step(), Err(SessionError::NoActiveTrace));
    }

    #[test]
    fn success_resets_cursor_to_first_step() {
        let mut session = ExecutionSession::new();
        let token = session.begin_run();
        session.finish_run(token, Ok(steps(3)));
        session.next_step();
        session.next_step();

        let token = session.begin_run();
        session.finish_run(token, Ok(steps(3)));
        assert_eq!(session.trace().and_then(|t| t.position()), Some(0));
    }

    #[test]
    fn empty_trace_is_ready_not_failed() {
        let mut session = ExecutionSession::new();
        let token = session.begin_run();
        session.finish_run(token, Ok(Vec::new()));

        let trace = session.trace().expect("empty run is still ready");
        assert!(trace.is_empty());
        assert!(session.failure().is_none());
        assert_eq!(session.current_step(), Err(SessionError::NoActiveTrace));
    }

    #[test]
    fn failure_detail_is_kept_verbatim() {
        let mut session = ExecutionSession::new();
        let token = session.begin_run();
        session.finish_run(
            token,
            Err(TracerError::Rejected("SyntaxError: invalid syntax".to_string())),
        );
        assert_eq!(session.failure(), Some("SyntaxError: invalid syntax"));
        assert!(session.trace().is_none());
    }

    #[test]
    fn superseded_outcome_is_discarded() {
        let mut session = ExecutionSession::new();
        let first = session.begin_run();
        let second = session.begin_run();

        // The first response arrives late; it must not be applied.
        session.finish_run(first, Ok(steps(1)));
        assert!(session.is_pending());

        session.finish_run(second, Ok(steps(2)));
        let trace = session.trace().expect("second outcome applies");
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn superseded_outcome_arriving_after_the_winner_is_also_discarded() {
        let mut session = ExecutionSession::new();
        let first = session.begin_run();
        let second = session.begin_run();

        session.finish_run(second, Ok(steps(2)));
        session.finish_run(first, Err(TracerError::Unavailable));

        let trace = session.trace().expect("stale failure must not apply");
        assert_eq!(trace.len(), 2);
        assert!(session.failure().is_none());
    }

    #[test]
    fn outcome_without_a_pending_run_is_ignored() {
        let mut session = ExecutionSession::new();
        let token = session.begin_run();
        session.finish_run(token, Ok(steps(1)));

        // Same token again: the lifecycle is no longer pending.
        session.finish_run(token, Err(TracerError::Unavailable));
        assert!(session.trace().is_some());
    }

    #[test]
    fn navigation_is_a_noop_outside_ready() {
        let mut session = ExecutionSession::new();
        session.next_step();
        session.prev_step();
        assert_eq!(*session.lifecycle(), Lifecycle::Idle);

        session.begin_run();
        session.next_step();
        assert!(session.is_pending());
    }

    #[test]
    fn navigation_saturates_at_trace_boundaries() {
        let mut session = ExecutionSession::new();
        let token = session.begin_run();
        session.finish_run(token, Ok(steps(2)));

        session.prev_step();
        assert_eq!(session.trace().and_then(|t| t.position()), Some(0));
        session.next_step();
        session.next_step();
        session.next_step();
        assert_eq!(session.trace().and_then(|t| t.position()), Some(1));
    }
}
