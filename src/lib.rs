//! stepview: a terminal client for replaying program execution traces.
//!
//! The user edits a short program, submits it to an external tracer service,
//! and steps through the recorded execution one point at a time, inspecting
//! the live variable scope at each step.

pub mod config;
pub mod session;
pub mod trace;
pub mod tracer;
pub mod ui;
pub mod util;

pub use config::Config;
pub use session::{ExecutionSession, Lifecycle, RequestToken, SessionError};
pub use trace::{render_scope, ScopeValue, Step, TraceStore};
pub use tracer::{HttpTracer, MockTracer, Tracer, TracerError};
pub use ui::App;
