use thiserror::Error;

use crate::commands::CommandError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Shell parse error: {0}")]
    ShellParse(#[from] shell_words::ParseError),
}

impl Error {
    /// Whether the failure comes from a value the user supplied.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Command(CommandError::InvalidArgument { .. }))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
