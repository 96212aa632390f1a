//! Blocking HTTP client for the game server

use super::types::{
    LoginRequest, LoginResponse, PersonalStatsResponse, SaveProgressRequest,
    SaveProgressResponse, SubmitRequest, SubmitResponse, TodayGameResponse,
    TodayProgressResponse, TodayWordResponse, ValidateWordRequest, ValidateWordResponse,
};
use crate::core::Word;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for server calls
#[derive(Debug)]
pub enum ApiError {
    /// The token was missing, invalid, or expired (HTTP 401)
    Unauthenticated,
    /// The server answered with a non-success status
    Status(StatusCode),
    /// The request never completed (network, timeout, bad payload)
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "Not logged in or token expired"),
            Self::Status(code) => write!(f, "Server answered {code}"),
            Self::Transport(reason) => write!(f, "Request failed: {reason}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Client for the game server's REST API
pub struct ApiClient {
    base_url: String,
    http: Client,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against a server base URL
    ///
    /// # Errors
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            token: None,
        })
    }

    /// Attach a bearer token for authenticated endpoints
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send()?;
        match response.status() {
            status if status.is_success() => Ok(response.json()?),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthenticated),
            status => Err(ApiError::Status(status)),
        }
    }

    /// Log in (creating the user if needed) and keep the returned token
    ///
    /// # Errors
    /// `ApiError` on transport failure or a non-success status.
    pub fn login(&mut self, username: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.send(
            self.http
                .post(self.url("/auth/login"))
                .json(&LoginRequest { username }),
        )?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Fetch today's scheduled word
    ///
    /// The answer itself is only present when authenticated; anonymous
    /// callers get the hash for validation.
    ///
    /// # Errors
    /// `ApiError` on transport failure or a non-success status.
    pub fn today_word(&self) -> Result<TodayWordResponse, ApiError> {
        self.send(self.authorized(self.http.get(self.url("/words/today"))))
    }

    /// Ask the server whether a word is playable
    ///
    /// # Errors
    /// `ApiError` on transport failure or a non-success status.
    pub fn validate_word(&self, word: &str) -> Result<bool, ApiError> {
        let response: ValidateWordResponse = self.send(
            self.http
                .post(self.url("/words/validate"))
                .json(&ValidateWordRequest { word }),
        )?;
        Ok(response.valid)
    }

    /// Check whether today's game is already finalized
    ///
    /// # Errors
    /// `ApiError` on transport failure or a non-success status.
    pub fn today_game(&self) -> Result<TodayGameResponse, ApiError> {
        self.send(self.authorized(self.http.get(self.url("/games/today"))))
    }

    /// Submit a finished game; the server assigns rank and advances the streak
    ///
    /// # Errors
    /// `ApiError` on transport failure or a non-success status. A 400-class
    /// status here usually means the game was already recorded.
    pub fn submit_game(
        &self,
        word_id: u64,
        attempts: u8,
        solved: bool,
        time_seconds: u64,
        guesses: &[Word],
    ) -> Result<SubmitResponse, ApiError> {
        let request = SubmitRequest {
            word_id,
            attempts,
            solved,
            time_seconds,
            guess_history: guesses.iter().map(Word::text).collect(),
        };
        self.send(self.authorized(
            self.http.post(self.url("/games/submit")).json(&request),
        ))
    }

    /// Auto-save partial progress; the server enforces append-only history
    ///
    /// # Errors
    /// `ApiError` on transport failure or a non-success status. Callers
    /// treat this as advisory.
    pub fn save_progress(
        &self,
        word_id: u64,
        guesses: &[Word],
        elapsed_seconds: u64,
    ) -> Result<SaveProgressResponse, ApiError> {
        let request = SaveProgressRequest {
            word_id,
            guesses: guesses.iter().map(Word::text).collect(),
            elapsed_seconds,
        };
        self.send(self.authorized(
            self.http.post(self.url("/games/progress")).json(&request),
        ))
    }

    /// Fetch today's saved progress, if any
    ///
    /// # Errors
    /// `ApiError` on transport failure or a non-success status.
    pub fn today_progress(&self) -> Result<TodayProgressResponse, ApiError> {
        self.send(self.authorized(self.http.get(self.url("/games/progress/today"))))
    }

    /// Fetch the caller's lifetime statistics
    ///
    /// # Errors
    /// `ApiError` on transport failure or a non-success status.
    pub fn personal_stats(&self) -> Result<PersonalStatsResponse, ApiError> {
        self.send(self.authorized(self.http.get(self.url("/stats/me"))))
    }
}
