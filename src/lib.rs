//! Desktop prompt-to-image studio
//!
//! Sends a text prompt to Google's Imagen API and shows the generated image,
//! with loading and error states, in a single iced window.

pub mod ai;
pub mod error;
pub mod models;
pub mod studio;
pub mod ui;

pub use error::{Error, Result};
