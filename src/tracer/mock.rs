//! Scripted tracer for tests: replays queued outcomes and records the
//! source text of every request.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Tracer, TracerError};
use crate::trace::Step;

#[derive(Debug, Default)]
pub struct MockTracer {
    outcomes: Mutex<VecDeque<Result<Vec<Step>, TracerError>>>,
    requests: Mutex<Vec<String>>,
}

impl MockTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next request. Requests beyond the script
    /// fail as unavailable.
    pub fn push_outcome(&self, outcome: Result<Vec<Step>, TracerError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Source text of every request seen so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Tracer for MockTracer {
    async fn trace(&self, code: &str) -> Result<Vec<Step>, TracerError> {
        self.requests.lock().unwrap().push(code.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TracerError::Unavailable))
    }
}
