#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;

pub const DEFAULT_USER_ID: &str = "user123";
pub const DEFAULT_ALLOW_ORIGIN: &str = "*";
