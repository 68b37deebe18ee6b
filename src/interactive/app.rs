//! TUI application state and logic

use crate::core::MAX_GUESSES;
use crate::game::{Dictionary, GuessEngine, RoundStatus, SubmitOutcome};
use crate::stats::Statistics;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a rejected-guess warning stays on screen
pub const WARNING_DURATION: Duration = Duration::from_secs(2);

/// How long the end-of-round dialog stays up before a new round starts
pub const RESTART_DELAY: Duration = Duration::from_secs(3);

/// Event poll interval, so timed popups expire without a key press
const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state
///
/// Holds exactly one engine per round and re-reads it after every change.
pub struct App<'a> {
    pub engine: GuessEngine<'a>,
    rng: StdRng,
    pub messages: Vec<Message>,
    pub warning: Option<Warning>,
    pub dialog: Option<Dialog>,
    pub stats: Statistics,
    pub auto_restart: Option<Duration>,
    pub should_quit: bool,
}

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Delete,
    Submit,
    NewGame,
    Dismiss,
    Quit,
}

/// Transient notice about a rejected guess
#[derive(Debug, Clone)]
pub struct Warning {
    pub text: String,
    pub shown_at: Instant,
}

/// End-of-round popup
#[derive(Debug, Clone)]
pub struct Dialog {
    pub title: String,
    pub text: String,
    pub won: bool,
    pub shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, mut rng: StdRng) -> Self {
        let engine = GuessEngine::with_rng(dictionary, &mut rng);

        Self {
            engine,
            rng,
            messages: vec![
                Message {
                    text: "Guess the hidden word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Backspace to delete, Enter to submit, Esc to quit."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            warning: None,
            dialog: None,
            stats: Statistics::default(),
            auto_restart: Some(RESTART_DELAY),
            should_quit: false,
        }
    }

    /// Map a key press to an action given what is on screen
    ///
    /// Game input is ignored while a popup is visible.
    #[must_use]
    pub fn map_key(&self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        if self.dialog.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => Some(Action::NewGame),
                KeyCode::Esc => Some(Action::Dismiss),
                KeyCode::Char('q' | 'Q') => Some(Action::Quit),
                _ => None,
            };
        }

        if self.warning.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(Action::Dismiss),
                _ => None,
            };
        }

        if self.engine.is_over() {
            // Dialog closed on a finished round
            return match key.code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => Some(Action::NewGame),
                KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Letter(c)),
            KeyCode::Backspace => Some(Action::Delete),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Letter(c) => self.engine.append_letter(c),
            Action::Delete => self.engine.remove_last_letter(),
            Action::Submit => self.submit(),
            Action::NewGame => self.new_game(),
            Action::Dismiss => {
                self.warning = None;
                self.dialog = None;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn submit(&mut self) {
        match self.engine.submit_guess() {
            SubmitOutcome::Rejected(reason) => {
                let text = reason.to_string();
                self.add_message(&text, MessageStyle::Error);
                self.warning = Some(Warning {
                    text,
                    shown_at: Instant::now(),
                });
            }
            SubmitOutcome::Accepted { .. } => {
                if self.engine.is_over() {
                    self.finish_round();
                }
            }
        }
    }

    fn finish_round(&mut self) {
        self.stats.record(&self.engine);
        let tries = self.engine.history().len();

        let dialog = if self.engine.status() == RoundStatus::Won {
            self.add_message(
                &format!("Solved in {tries}/{MAX_GUESSES}!"),
                MessageStyle::Success,
            );
            Dialog {
                title: "You Win!".to_string(),
                text: format!(
                    "Congratulations! You guessed the word in {tries}/{MAX_GUESSES} tries."
                ),
                won: true,
                shown_at: Instant::now(),
            }
        } else {
            let answer = self.engine.answer().to_string();
            self.add_message(&format!("The word was {answer}"), MessageStyle::Error);
            Dialog {
                title: "Game Over".to_string(),
                text: format!("You ran out of guesses! The word was {answer}."),
                won: false,
                shown_at: Instant::now(),
            }
        };
        self.dialog = Some(dialog);
    }

    /// Discard the current round and start a fresh one on the same dictionary
    pub fn new_game(&mut self) {
        let dictionary = self.engine.dictionary();
        self.engine = GuessEngine::with_rng(dictionary, &mut self.rng);
        self.warning = None;
        self.dialog = None;
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Expire timed popups
    ///
    /// Never touches the engine except through a full restart.
    pub fn tick(&mut self, now: Instant) {
        if self
            .warning
            .as_ref()
            .is_some_and(|warning| now.duration_since(warning.shown_at) >= WARNING_DURATION)
        {
            self.warning = None;
        }

        let restart_due = match (self.auto_restart, &self.dialog) {
            (Some(delay), Some(dialog)) => now.duration_since(dialog.shown_at) >= delay,
            _ => false,
        };
        if restart_due {
            self.new_game();
        }
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
pub fn run_tui(app: App) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
            && let Some(action) = app.map_key(key)
        {
            app.handle_action(action);
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
