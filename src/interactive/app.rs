//! TUI application state and logic

use crate::core::{RoundState, SubmissionOutcome, attempt_submission, normalize};
use crate::dictionary::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Modal rejection alert shown over the board
#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Application state
pub struct App<'a> {
    pub round: RoundState,
    pub start_words: &'a [String],
    pub dictionary: &'a dyn Dictionary,
    pub input_mode: InputMode,
    pub alert: Option<Alert>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    Alert,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_accepted: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(start_words: &'a [String], dictionary: &'a dyn Dictionary) -> Self {
        let round = RoundState::start(start_words, &mut rand::rng());

        Self {
            round,
            start_words,
            dictionary,
            input_mode: InputMode::Editing,
            alert: None,
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        }
    }

    /// Validate the pending input and apply the outcome
    ///
    /// An accepted word is recorded on the round; a rejected one raises a
    /// modal alert. Blank input is silently discarded.
    pub fn submit_pending(&mut self) {
        let raw = self.round.pending_input().to_string();

        match attempt_submission(&self.round, self.dictionary, &raw) {
            Some(SubmissionOutcome::Accepted(word)) => {
                self.round.record_acceptance(word);
                self.stats.words_accepted += 1;
                self.stats.best_score = self.stats.best_score.max(self.round.score());
            }
            Some(SubmissionOutcome::Rejected(rejection)) => {
                let word = normalize(&raw);
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(&word, self.round.root_word()),
                });
                self.input_mode = InputMode::Alert;
            }
            None => {
                self.round.clear_input();
            }
        }
    }

    /// Discard the round and start a fresh one
    pub fn new_round(&mut self) {
        self.round = RoundState::start(self.start_words, &mut rand::rng());
        self.stats.rounds_played += 1;
        self.alert = None;
        self.input_mode = InputMode::Editing;
    }

    /// Close the rejection alert and return to editing
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Editing;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Alert => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    _ => {
                        // Any other key dismisses the alert
                        app.dismiss_alert();
                    }
                },
                InputMode::Editing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        if c.is_alphabetic() {
                            app.round.push_input(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.round.pop_input();
                    }
                    KeyCode::Enter => {
                        app.submit_pending();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
