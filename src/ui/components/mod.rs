mod editor;
mod status_line;
mod step_controls;
mod variables_panel;

pub use editor::CodeEditor;
pub use status_line::StatusLine;
pub use step_controls::StepControls;
pub use variables_panel::VariablesPanel;

use ratatui::style::Color;

pub(crate) const ACCENT: Color = Color::Cyan;
pub(crate) const ERROR: Color = Color::Red;
pub(crate) const SUCCESS: Color = Color::Green;
pub(crate) const TEXT_MUTED: Color = Color::DarkGray;
