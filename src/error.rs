use thiserror::Error;

/// Unified error type for chainline
#[derive(Error, Debug)]
pub enum ChainlineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Animation error: {0}")]
    Animation(String),
}

pub type Result<T> = std::result::Result<T, ChainlineError>;
