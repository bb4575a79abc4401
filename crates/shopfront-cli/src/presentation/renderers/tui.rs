//! TUI Renderer for the interactive storefront
//!
//! Owns the terminal and the event loop. The application state lives behind
//! `TuiApp`; the renderer only forwards key presses and background
//! completions to it and draws whatever screen it reports.
//!
//! ## Design:
//! - Completions arrive over a channel from fetch tasks
//! - The loop polls input with a short timeout so completions are drawn promptly
//! - The terminal is restored even when the loop fails

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::ScreenView;

/// Events sent from background tasks to the renderer
pub enum TuiEvent<C> {
    /// A fetch finished; hand it to the application
    Completed(C),
    /// Fatal error; shown until the user quits
    Error(String),
}

/// Interactive application driven by the renderer
pub trait TuiApp {
    type Completion;

    fn screen(&self) -> ScreenViewModel;
    fn handle_key(&mut self, key: KeyEvent);
    fn complete(&mut self, completion: Self::Completion);
    fn should_quit(&self) -> bool;
}

#[derive(Default)]
pub struct TuiRenderer {
    error_message: Option<String>,
    quit: bool,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<A: TuiApp>(mut self, app: &mut A, rx: Receiver<TuiEvent<A::Completion>>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, app, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<A: TuiApp>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut A,
        rx: Receiver<TuiEvent<A::Completion>>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f, app))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(app, key);
            }

            self.drain(app, &rx);

            if self.quit || app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    /// Apply every pending background event without blocking
    fn drain<A: TuiApp>(&mut self, app: &mut A, rx: &Receiver<TuiEvent<A::Completion>>) {
        loop {
            match rx.try_recv() {
                Ok(TuiEvent::Completed(completion)) => {
                    if self.error_message.is_none() {
                        app.complete(completion);
                    }
                }
                Ok(TuiEvent::Error(msg)) => {
                    tracing::error!(error = %msg, "fatal error in browse session");
                    self.error_message = Some(msg);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    fn handle_key_event<A: TuiApp>(&mut self, app: &mut A, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.error_message.is_some() {
            // The error screen replaces the app; only quitting remains
            let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || ctrl_c {
                self.quit = true;
            }
            return;
        }
        app.handle_key(key);
    }

    fn render<A: TuiApp>(&self, f: &mut Frame, app: &A) {
        let size = f.area();

        if let Some(error_msg) = &self.error_message {
            let error = Paragraph::new(Span::styled(
                error_msg.as_str(),
                Style::default().fg(Color::Red),
            ))
            .block(Block::default().title("Error (q to quit)").borders(Borders::ALL));

            f.render_widget(error, size);
            return;
        }

        let screen = app.screen();
        f.render_widget(ScreenView::new(&screen), size);
    }
}
