use crate::session::RequestToken;
use crate::trace::Step;
use crate::tracer::TracerError;

/// Application-level events delivered to the main loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A dispatched trace request completed (success or failure).
    TraceFinished {
        token: RequestToken,
        outcome: Result<Vec<Step>, TracerError>,
    },
}

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys edit the program source.
    #[default]
    Editor,
    /// Keys navigate the trace.
    Stepper,
}
