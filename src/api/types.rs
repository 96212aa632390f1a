//! Wire types for the game server API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user_id: u64,
    pub username: String,
    pub token: String,
}

/// Today's scheduled word; `word` is only present for authenticated callers
#[derive(Debug, Clone, Deserialize)]
pub struct TodayWordResponse {
    pub date: NaiveDate,
    pub word_id: u64,
    pub word_hash: String,
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidateWordRequest<'a> {
    pub word: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateWordResponse {
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitRequest<'a> {
    pub word_id: u64,
    pub attempts: u8,
    pub solved: bool,
    pub time_seconds: u64,
    pub guess_history: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StreakInfo {
    pub current: u32,
    pub longest: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub id: u64,
    /// 1-based rank among today's solvers; 0 for a loss
    pub rank: u32,
    pub streak: StreakInfo,
}

#[derive(Debug, Serialize)]
pub(crate) struct SaveProgressRequest<'a> {
    pub word_id: u64,
    pub guesses: Vec<&'a str>,
    pub elapsed_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveProgressResponse {
    pub saved: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A finalized game as the server reports it
#[derive(Debug, Clone, Deserialize)]
pub struct CompletedResult {
    pub attempts: u8,
    pub solved: bool,
    #[serde(default)]
    pub time_seconds: Option<u64>,
    #[serde(default)]
    pub guess_history: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodayGameResponse {
    pub played: bool,
    #[serde(default)]
    pub result: Option<CompletedResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodayProgressResponse {
    #[serde(default)]
    pub has_progress: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub word_id: Option<u64>,
    #[serde(default)]
    pub guesses: Vec<String>,
    #[serde(default)]
    pub elapsed_seconds: u64,
    #[serde(default)]
    pub result: Option<CompletedResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonalStatsResponse {
    pub total_games: u32,
    pub total_wins: u32,
    /// Percentage in 0..=100, not a fraction
    pub win_rate: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub avg_attempts: f64,
    #[serde(default)]
    pub attempts_distribution: HashMap<String, u32>,
}
