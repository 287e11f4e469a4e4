//! Canonical display rendering for scope values.
//!
//! The tracer reports variable values as arbitrary JSON. Rendering re-shapes
//! each value into [`ScopeValue`] so the display logic can match
//! exhaustively, with the opaque fallback as a deliberate case rather than
//! an uncaught shape. The canonical string is compact JSON: the same value
//! always renders the same way, regardless of how it was transported.

use serde_json::{Map, Number, Value};

/// Nesting depth past which the renderer stops descending into a value.
const MAX_RENDER_DEPTH: usize = 32;

/// Placeholder shown for values the renderer refuses to descend into.
const OPAQUE_PLACEHOLDER: &str = "<opaque>";

/// A variable value re-shaped for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<ScopeValue>),
    Mapping(Vec<(String, ScopeValue)>),
    /// Structural fallback: nested too deep to display faithfully.
    Opaque,
}

impl ScopeValue {
    pub fn from_json(value: &Value) -> Self {
        Self::from_json_at(value, 0)
    }

    fn from_json_at(value: &Value, depth: usize) -> Self {
        if depth >= MAX_RENDER_DEPTH {
            return Self::Opaque;
        }
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => Self::Number(number.clone()),
            Value::String(text) => Self::String(text.clone()),
            Value::Array(items) => Self::Sequence(
                items
                    .iter()
                    .map(|item| Self::from_json_at(item, depth + 1))
                    .collect(),
            ),
            Value::Object(entries) => Self::Mapping(
                entries
                    .iter()
                    .map(|(key, item)| (key.clone(), Self::from_json_at(item, depth + 1)))
                    .collect(),
            ),
        }
    }

    /// Canonical display string for this value.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }

    fn write_canonical(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(true) => out.push_str("true"),
            Self::Bool(false) => out.push_str("false"),
            Self::Number(number) => out.push_str(&number.to_string()),
            Self::String(text) => out.push_str(&escape_string(text)),
            Self::Sequence(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_canonical(out);
                }
                out.push(']');
            }
            Self::Mapping(entries) => {
                out.push('{');
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(&escape_string(key));
                    out.push(':');
                    item.write_canonical(out);
                }
                out.push('}');
            }
            Self::Opaque => out.push_str(OPAQUE_PLACEHOLDER),
        }
    }
}

/// JSON-escape a string. Escaping a `&str` cannot fail, but the render must
/// never give up on the rest of the scope, so a failure degrades to a bare
/// quoted copy.
fn escape_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}

/// Project a step's scope into ordered (name, canonical value) pairs.
///
/// Entries render independently: one pathological value cannot prevent the
/// rest of the scope from displaying.
pub fn render_scope(scope: &Map<String, Value>) -> Vec<(String, String)> {
    scope
        .iter()
        .map(|(name, value)| (name.clone(), ScopeValue::from_json(value).canonical()))
        .collect()
}
