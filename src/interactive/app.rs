//! TUI application state and logic
//!
//! Presentation state only: the input buffer, alert and message log. Game rules
//! and scores live in [`RoundState`].

use crate::round::{RandomSelector, RoundError, RoundState, Submission};
use crate::validator::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D, S> {
    pub round: RoundState<D, S>,
    pub pool: &'a [String],
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Modal shown after a rejected word, dismissed by any key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary, S: RandomSelector> App<'a, D, S> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyWordPool`] if `pool` is empty.
    pub fn new(mut round: RoundState<D, S>, pool: &'a [String]) -> Result<Self, RoundError> {
        let root = round.start(pool)?.to_uppercase();

        let mut app = Self {
            round,
            pool,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            &format!("Make words from the letters of {root}."),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Submit the input buffer as a word
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.trim().is_empty() {
            return;
        }

        match self.round.submit_word(&input) {
            Ok(Submission::Accepted {
                word, score_delta, ..
            }) => {
                self.add_message(
                    &format!("{} +{score_delta}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Ok(Submission::Rejected(reason)) => {
                let root = self.round.root_word().unwrap_or_default();
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(root),
                });
                // Keep the rejected word so the player can edit it
                self.input_buffer = input;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Start a new round with a fresh root word
    pub fn restart(&mut self) {
        self.input_buffer.clear();
        self.alert = None;

        match self.round.restart(self.pool) {
            Ok(root) => {
                let text = format!("New round! Root word: {}", root.to_uppercase());
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary, S: RandomSelector>(app: App<'_, D, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, D, S>(terminal: &mut Terminal<B>, mut app: App<'_, D, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
    S: RandomSelector,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            if app.alert.is_some() {
                match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    _ => app.dismiss_alert(),
                }
            } else {
                match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('r') if ctrl => app.restart(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
