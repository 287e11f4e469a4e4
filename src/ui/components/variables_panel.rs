//! Right-hand panel: the current step's variables and message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::session::{ExecutionSession, Lifecycle};
use crate::trace::render_scope;

use super::{ACCENT, TEXT_MUTED};

pub struct VariablesPanel<'a> {
    session: &'a ExecutionSession,
}

impl<'a> VariablesPanel<'a> {
    pub fn new(session: &'a ExecutionSession) -> Self {
        Self { session }
    }
}

impl Widget for VariablesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Variables ");
        let inner = block.inner(area);
        block.render(area, buf);

        let placeholder_style = Style::default()
            .fg(TEXT_MUTED)
            .add_modifier(Modifier::ITALIC);

        let lines: Vec<Line> = match self.session.lifecycle() {
            Lifecycle::Ready(trace) if trace.is_empty() => {
                vec![Line::styled("program produced no steps", placeholder_style)]
            }
            Lifecycle::Ready(trace) => {
                let mut lines = Vec::new();
                if let Some(step) = trace.current() {
                    let entries = render_scope(&step.scope);
                    if entries.is_empty() {
                        lines.push(Line::styled("(no variables in scope)", placeholder_style));
                    }
                    for (name, value) in entries {
                        lines.push(Line::from(vec![
                            Span::styled(name, Style::default().fg(ACCENT)),
                            Span::raw(": "),
                            Span::raw(value),
                        ]));
                    }
                    lines.push(Line::default());
                    lines.push(Line::from(vec![
                        Span::styled("Message: ", Style::default().fg(TEXT_MUTED)),
                        Span::raw(step.message.clone()),
                    ]));
                }
                lines
            }
            _ => vec![Line::styled("Run code to see variables", placeholder_style)],
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
