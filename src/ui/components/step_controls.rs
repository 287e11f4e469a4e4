//! One-line step readout with boundary-aware navigation hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::session::ExecutionSession;

use super::{ACCENT, TEXT_MUTED};

pub struct StepControls<'a> {
    session: &'a ExecutionSession,
    focused: bool,
}

impl<'a> StepControls<'a> {
    pub fn new(session: &'a ExecutionSession, focused: bool) -> Self {
        Self { session, focused }
    }
}

impl Widget for StepControls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(trace) = self.session.trace() else {
            return;
        };
        let Some(position) = trace.position() else {
            return;
        };

        let active = Style::default().fg(ACCENT);
        let inactive = Style::default()
            .fg(TEXT_MUTED)
            .add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(
            format!(" Step {}/{} ", position + 1, trace.len()),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        spans.push(Span::styled(
            "← prev",
            if trace.at_start() { inactive } else { active },
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "next →",
            if trace.at_end() { inactive } else { active },
        ));
        if !self.focused {
            spans.push(Span::styled("  (Tab to step)", Style::default().fg(TEXT_MUTED)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
