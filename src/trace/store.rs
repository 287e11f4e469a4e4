//! Immutable trace storage and bounded cursor navigation.

use crate::trace::Step;

/// The ordered steps from one successful run, plus the cursor selecting the
/// currently displayed step.
///
/// A store is produced wholesale by one tracer response and never patched
/// afterwards. The cursor stays in `[0, len - 1]` whenever the trace is
/// non-empty; navigation saturates at the boundaries instead of wrapping or
/// erroring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceStore {
    steps: Vec<Step>,
    cursor: usize,
}

impl TraceStore {
    /// Wrap a completed trace with the cursor on the first step.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Cursor position, or `None` when the trace has no steps.
    pub fn position(&self) -> Option<usize> {
        if self.steps.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// The step under the cursor, or `None` when the trace has no steps.
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.cursor)
    }

    /// Advance the cursor one step; no-op on the last step.
    pub fn next(&mut self) {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor back one step; no-op on the first step.
    pub fn prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.steps.is_empty() || self.cursor + 1 == self.steps.len()
    }
}
