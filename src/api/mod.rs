//! HTTP client for the game server
//!
//! Wire DTOs and a blocking client for the server's auth, words, games, and
//! stats endpoints. Every call returns an explicit `Result`; whether a
//! failure matters (a submit) or is advisory (an auto-save) is the caller's
//! decision, not this module's.

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::{
    CompletedResult, LoginResponse, PersonalStatsResponse, SaveProgressResponse, StreakInfo,
    SubmitResponse, TodayGameResponse, TodayProgressResponse, TodayWordResponse,
};
