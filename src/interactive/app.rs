//! TUI application state and logic

use crate::api::{ApiClient, ApiError};
use crate::config::ClientConfig;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::{Board, BoardError, KeyboardState};
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// What the player sees once a game is finished (today or a prior session)
#[derive(Debug, Clone)]
pub struct FinishedView {
    pub won: bool,
    pub attempts: u8,
    pub time_seconds: Option<u64>,
    /// 1-based rank among today's solvers, when the server assigned one
    pub rank: Option<u32>,
    pub streak_current: u32,
    pub streak_longest: u32,
}

/// One-line status shown under the board
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Warning,
    Success,
}

/// Everything resolved before the TUI starts: target word, server handles,
/// resumed progress, or an already-finished result
pub struct GameSetup {
    pub target: Word,
    pub word_id: Option<u64>,
    pub client: Option<ApiClient>,
    pub username: String,
    pub streak: u32,
    pub resumed_guesses: Vec<Word>,
    pub resumed_elapsed: u64,
    pub finished: Option<FinishedView>,
    pub offline_notice: Option<String>,
}

impl GameSetup {
    /// Offline setup: deterministic daily word, no server
    #[must_use]
    pub fn offline(dictionary: &Dictionary, config: &ClientConfig) -> Self {
        let today = Local::now().date_naive();
        Self {
            target: dictionary.word_for_date(today).clone(),
            word_id: None,
            client: None,
            username: config.username.clone().unwrap_or_else(|| "Player".to_string()),
            streak: 0,
            resumed_guesses: Vec::new(),
            resumed_elapsed: 0,
            finished: None,
            offline_notice: None,
        }
    }

    /// Connect to the server with cached credentials
    ///
    /// Any failure along the way (no token, expired token, unreachable
    /// server) falls back to offline play rather than refusing to start.
    #[must_use]
    pub fn connect(dictionary: &Dictionary, config: &ClientConfig) -> Self {
        match Self::try_connect(config) {
            Ok(setup) => setup,
            Err(notice) => {
                let mut setup = Self::offline(dictionary, config);
                setup.offline_notice = Some(notice);
                setup
            }
        }
    }

    fn try_connect(config: &ClientConfig) -> Result<Self, String> {
        let token = config
            .token
            .as_deref()
            .ok_or_else(|| "Not logged in - playing offline".to_string())?;

        let mut client = ApiClient::new(&config.api_url)
            .map_err(|e| format!("Server unavailable ({e}) - playing offline"))?;
        client.set_token(token);

        let today = client.today_word().map_err(|e| match e {
            ApiError::Unauthenticated => "Login expired - playing offline".to_string(),
            other => format!("Server unavailable ({other}) - playing offline"),
        })?;
        let target = today
            .word
            .as_deref()
            .and_then(|w| Word::new(w).ok())
            .ok_or_else(|| "Login expired - playing offline".to_string())?;

        let username = config.username.clone().unwrap_or_else(|| "Player".to_string());

        let mut setup = Self {
            target,
            word_id: Some(today.word_id),
            client: None,
            username,
            streak: 0,
            resumed_guesses: Vec::new(),
            resumed_elapsed: 0,
            finished: None,
            offline_notice: None,
        };

        // Current streak for the header; purely cosmetic, so best-effort.
        if let Ok(stats) = client.personal_stats() {
            setup.streak = stats.current_streak;
        }

        // Already played: show the recorded result instead of a fresh board.
        if let Ok(game) = client.today_game()
            && game.played
            && let Some(result) = game.result
        {
            setup.finished = Some(FinishedView {
                won: result.solved,
                attempts: result.attempts,
                time_seconds: result.time_seconds,
                rank: None,
                streak_current: setup.streak,
                streak_longest: setup.streak,
            });
        }

        if setup.finished.is_none()
            && let Ok(progress) = client.today_progress()
            && progress.has_progress
            && !progress.completed
        {
            setup.resumed_guesses = progress
                .guesses
                .iter()
                .filter_map(|g| Word::new(g).ok())
                .collect();
            setup.resumed_elapsed = progress.elapsed_seconds;
        }

        setup.client = Some(client);
        Ok(setup)
    }
}

/// Application state
pub struct App {
    dictionary: Dictionary,
    pub board: Board,
    pub keyboard: KeyboardState,
    client: Option<ApiClient>,
    word_id: Option<u64>,
    pub username: String,
    pub streak: u32,
    pub message: Option<Message>,
    pub finished: Option<FinishedView>,
    pub elapsed_seconds: u64,
    elapsed_offset: u64,
    started: Instant,
    pub should_quit: bool,
}

impl App {
    /// Build the app from a resolved setup
    ///
    /// # Errors
    /// Returns an error if resumed progress cannot be replayed (an
    /// inconsistent snapshot).
    pub fn new(dictionary: Dictionary, setup: GameSetup) -> Result<Self> {
        let mut board = Board::new(setup.target);
        let mut keyboard = KeyboardState::new();

        board.replay(&setup.resumed_guesses)?;
        for (guess, verdicts) in board.guesses().iter().zip(board.verdicts()) {
            keyboard.apply(guess, verdicts);
        }

        let message = setup.offline_notice.map(|text| Message {
            text,
            style: MessageStyle::Warning,
        });

        Ok(Self {
            dictionary,
            board,
            keyboard,
            client: setup.client,
            word_id: setup.word_id,
            username: setup.username,
            streak: setup.streak,
            message,
            finished: setup.finished,
            elapsed_seconds: setup.resumed_elapsed,
            elapsed_offset: setup.resumed_elapsed,
            started: Instant::now(),
            should_quit: false,
        })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Advance the elapsed clock; the timer only ever reads time, never
    /// touches guesses or the cursor
    pub fn tick(&mut self) {
        if !self.is_finished() {
            self.elapsed_seconds = self.elapsed_offset + self.started.elapsed().as_secs();
        }
    }

    pub fn handle_letter(&mut self, ch: char) {
        if self.is_finished() {
            return;
        }
        if self.board.add_letter(ch) {
            self.message = None;
        }
    }

    pub fn handle_backspace(&mut self) {
        if !self.is_finished() {
            self.board.remove_letter();
        }
    }

    pub fn handle_enter(&mut self) {
        if self.is_finished() {
            self.should_quit = true;
            return;
        }
        self.submit_guess();
    }

    fn submit_guess(&mut self) {
        if !self.board.is_row_complete() {
            self.show(BoardError::RowIncomplete.to_string(), MessageStyle::Warning);
            return;
        }

        let Ok(word) = Word::new(self.board.current_guess()) else {
            self.show("Not enough letters".to_string(), MessageStyle::Warning);
            return;
        };
        if !self.dictionary.contains(&word) && !self.server_accepts(&word) {
            self.show("Not in word list".to_string(), MessageStyle::Warning);
            return;
        }

        let Ok(outcome) = self.board.submit_guess() else {
            return;
        };
        self.keyboard.apply(&word, &outcome.verdicts);
        self.message = None;

        if self.board.status().is_terminal() {
            self.finish(outcome.won);
        } else {
            self.autosave();
        }
    }

    /// Last resort for words outside the embedded list: the server's
    /// dictionary may be larger than ours
    fn server_accepts(&self, word: &Word) -> bool {
        self.client
            .as_ref()
            .is_some_and(|client| client.validate_word(word.text()).unwrap_or(false))
    }

    fn autosave(&self) {
        // Best-effort: a failed save must never block gameplay, and the
        // player is not told about it.
        if let (Some(client), Some(word_id)) = (&self.client, self.word_id) {
            let _ = client.save_progress(word_id, self.board.guesses(), self.elapsed_seconds);
        }
    }

    fn finish(&mut self, won: bool) {
        let attempts = self.board.guesses().len() as u8;
        let mut view = FinishedView {
            won,
            attempts,
            time_seconds: Some(self.elapsed_seconds),
            rank: None,
            streak_current: if won { self.streak + 1 } else { 0 },
            streak_longest: self.streak.max(if won { self.streak + 1 } else { 0 }),
        };

        if let (Some(client), Some(word_id)) = (&self.client, self.word_id) {
            match client.submit_game(
                word_id,
                attempts,
                won,
                self.elapsed_seconds,
                self.board.guesses(),
            ) {
                Ok(response) => {
                    view.rank = (response.rank > 0).then_some(response.rank);
                    view.streak_current = response.streak.current;
                    view.streak_longest = response.streak.longest;
                }
                Err(ApiError::Status(status)) if status.as_u16() == 400 => {
                    // Lost a submit race; the recorded result stands.
                    self.show(
                        "Result was already recorded".to_string(),
                        MessageStyle::Warning,
                    );
                }
                Err(_) => {
                    self.show(
                        "Could not reach server - result not synced".to_string(),
                        MessageStyle::Warning,
                    );
                }
            }
        }

        if won {
            self.streak = view.streak_current;
            self.show(
                win_banner(attempts).to_string(),
                MessageStyle::Success,
            );
        } else {
            self.streak = 0;
            self.show(
                format!("The word was {}", self.board.target()),
                MessageStyle::Info,
            );
        }
        self.finished = Some(view);
    }

    fn show(&mut self, text: String, style: MessageStyle) {
        self.message = Some(Message { text, style });
    }
}

fn win_banner(attempts: u8) -> &'static str {
    match attempts {
        1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') if app.is_finished() => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.handle_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.handle_backspace();
                    }
                    KeyCode::Enter => {
                        app.handle_enter();
                    }
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
