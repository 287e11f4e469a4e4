//! Status line: idle hint, pending spinner, failure text, or run summary.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::session::{ExecutionSession, Lifecycle};

use super::{ACCENT, ERROR, SUCCESS, TEXT_MUTED};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct StatusLine<'a> {
    session: &'a ExecutionSession,
    tick: u32,
}

impl<'a> StatusLine<'a> {
    pub fn new(session: &'a ExecutionSession, tick: u32) -> Self {
        Self { session, tick }
    }

    fn spinner_frame(&self) -> &'static str {
        // One frame per ~100ms at the 16ms tick rate.
        SPINNER_FRAMES[(self.tick as usize / 6) % SPINNER_FRAMES.len()]
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.session.lifecycle() {
            Lifecycle::Idle => Line::styled(
                " Press Ctrl+R to run the program",
                Style::default().fg(TEXT_MUTED),
            ),
            Lifecycle::Pending(_) => Line::from(vec![
                Span::raw(" "),
                Span::styled(self.spinner_frame(), Style::default().fg(ACCENT)),
                Span::styled(" tracing program...", Style::default().fg(ACCENT)),
            ]),
            Lifecycle::Failed(message) => Line::from(vec![
                Span::styled(" Error: ", Style::default().fg(ERROR)),
                Span::styled(message.clone(), Style::default().fg(ERROR)),
            ]),
            Lifecycle::Ready(trace) if trace.is_empty() => Line::styled(
                " Run complete, no steps recorded",
                Style::default().fg(TEXT_MUTED),
            ),
            Lifecycle::Ready(trace) => Line::styled(
                format!(" Trace ready: {} steps", trace.len()),
                Style::default().fg(SUCCESS),
            ),
        };

        Paragraph::new(line).render(area, buf);
    }
}
