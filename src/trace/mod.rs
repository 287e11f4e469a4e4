//! Trace data model, scope value rendering, and cursor navigation.

mod step;
mod store;
mod value;

pub use step::Step;
pub use store::TraceStore;
pub use value::{render_scope, ScopeValue};
