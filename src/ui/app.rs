use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::session::ExecutionSession;
use crate::tracer::{HttpTracer, Tracer};
use crate::ui::components::{
    CodeEditor, StatusLine, StepControls, VariablesPanel, ACCENT, TEXT_MUTED,
};
use crate::ui::events::{AppEvent, Focus};
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};

/// Main application state
pub struct App {
    /// Whether the app should quit
    should_quit: bool,
    /// Which pane receives key input
    focus: Focus,
    /// Program source being edited
    editor: CodeEditor,
    /// Request lifecycle and trace for the current run
    session: ExecutionSession,
    /// Tracer service client
    tracer: Arc<dyn Tracer>,
    /// Event channel sender (cloned into dispatch tasks)
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Tick counter for the spinner animation
    tick_count: u32,
}

impl App {
    pub fn new(config: Config) -> Self {
        let tracer = Arc::new(HttpTracer::new(config.tracer_url.clone()));
        Self::with_tracer(config, tracer)
    }

    /// Construct with a custom tracer client (tests use the scripted mock).
    pub fn with_tracer(config: Config, tracer: Arc<dyn Tracer>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            focus: Focus::Editor,
            editor: CodeEditor::with_text(&config.initial_source),
            session: ExecutionSession::new(),
            tracer,
            event_tx,
            event_rx,
            tick_count: 0,
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut guard = TerminalGuard::new();

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                // Terminal input + tick
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            self.handle_key_event(key);
                        }
                    }
                    self.tick_count = self.tick_count.wrapping_add(1);
                }

                // Outcomes from dispatched trace requests
                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TraceFinished { token, outcome } => {
                self.session.finish_run(token, outcome);
                // Jump focus to navigation once there is something to step.
                if self.session.trace().is_some_and(|t| !t.is_empty()) {
                    self.focus = Focus::Stepper;
                }
            }
        }
    }

    /// Snapshot the editor contents and dispatch one trace request. A run
    /// while another is pending supersedes it; the session discards the
    /// stale outcome by token.
    fn start_run(&mut self) {
        let token = self.session.begin_run();
        let code = self.editor.text().to_string();
        let tracer = Arc::clone(&self.tracer);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = tracer.trace(&code).await;
            // A send failure just means the app already shut down.
            let _ = tx.send(AppEvent::TraceFinished { token, outcome });
        });
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts (work in any focus)
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('r') => {
                    self.start_run();
                    return;
                }
                KeyCode::Char('n') => {
                    self.session.next_step();
                    return;
                }
                KeyCode::Char('p') => {
                    self.session.prev_step();
                    return;
                }
                _ => {}
            }
        }

        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::Editor => Focus::Stepper,
                Focus::Stepper => Focus::Editor,
            };
            return;
        }

        match self.focus {
            Focus::Editor => self.handle_editor_key(key),
            Focus::Stepper => self.handle_stepper_key(key),
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.editor.insert_char(c);
            }
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete_forward(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_line_start(),
            KeyCode::End => self.editor.move_line_end(),
            _ => {}
        }
    }

    fn handle_stepper_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.session.prev_step(),
            KeyCode::Right | KeyCode::Char('l') => self.session.next_step(),
            KeyCode::Esc => self.focus = Focus::Editor,
            _ => {}
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let size = f.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);

        let editor_focused = self.focus == Focus::Editor;
        let editor_block = Block::default()
            .borders(Borders::ALL)
            .title(" Program ")
            .border_style(if editor_focused {
                Style::default().fg(ACCENT)
            } else {
                Style::default()
            });
        let editor_area = editor_block.inner(panels[0]);
        f.render_widget(editor_block, panels[0]);
        self.editor
            .render(editor_area, f.buffer_mut(), editor_focused);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(panels[1]);
        f.render_widget(VariablesPanel::new(&self.session), right[0]);
        f.render_widget(
            StepControls::new(&self.session, self.focus == Focus::Stepper),
            right[1],
        );

        f.render_widget(StatusLine::new(&self.session, self.tick_count), rows[1]);

        let footer = Paragraph::new(Line::from(
            " Ctrl+R run   Tab focus   ←/→ step (Ctrl+P/Ctrl+N)   Ctrl+Q quit",
        ))
        .style(Style::default().fg(TEXT_MUTED));
        f.render_widget(footer, rows[2]);
    }
}
