//! Command implementations for the CLI

mod login;
mod play;
mod simple;
mod stats;

pub use login::{run_login, run_logout};
pub use play::run_play;
pub use simple::run_simple;
pub use stats::run_stats;
