//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API Error: {0}")]
    AiProvider(String),

    #[error("No images were generated.")]
    NoImageGenerated,

    #[error("Prompt must not be empty")]
    InvalidPrompt,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
