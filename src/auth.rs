//! Identity resolution from bearer tokens
//!
//! The game core only needs a stable user identity; how tokens are minted
//! (password, GitHub, device flow) is the server's business. A failed
//! resolution means the caller drops to unauthenticated local play instead
//! of failing the session.

use rustc_hash::FxHashMap;
use std::fmt;

/// Stable identity behind a resolved token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: u64,
    pub username: String,
}

/// Error type for failed identity resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The token is unknown, expired, or malformed
    Unauthenticated,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "Invalid or expired token"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Resolve an opaque bearer token to an identity
pub trait TokenResolver {
    /// # Errors
    /// Returns `AuthError::Unauthenticated` if the token cannot be resolved.
    fn resolve(&self, token: &str) -> Result<Identity, AuthError>;
}

/// In-memory token table, for offline play and tests
#[derive(Debug, Default)]
pub struct TokenTable {
    tokens: FxHashMap<String, Identity>,
}

impl TokenTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for an identity
    pub fn issue(&mut self, token: impl Into<String>, identity: Identity) {
        self.tokens.insert(token.into(), identity);
    }
}

impl TokenResolver for TokenTable {
    fn resolve(&self, token: &str) -> Result<Identity, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
