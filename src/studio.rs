//! Interaction state for the prompt-to-image view
//!
//! `Studio` owns the prompt, the loading flag, and the latest outcome. The
//! GUI forwards events to it and renders whatever [`Studio::showing`] picks,
//! so the submission rules can be exercised without a window.

use crate::models::GeneratedImage;
use std::fmt;

/// What the result area shows, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showing<'a> {
    Loading,
    Error(&'a str),
    Image {
        image: &'a GeneratedImage,
        prompt: &'a str,
    },
    Idle,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Studio {
    prompt: String,
    is_loading: bool,
    error: Option<String>,
    image: Option<GeneratedImage>,
    submitted_prompt: Option<String>,
}

impl Studio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn image(&self) -> Option<&GeneratedImage> {
        self.image.as_ref()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// True when a submission would start a request.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.prompt.trim().is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            "Generating..."
        } else {
            "Generate"
        }
    }

    /// Enter the loading state and return the prompt to send.
    ///
    /// Returns `None` without touching state when the prompt is blank or a
    /// request is already in flight.
    pub fn begin_submission(&mut self) -> Option<String> {
        if !self.can_submit() {
            tracing::debug!(
                loading = self.is_loading,
                "Ignoring submission with blank prompt or request in flight"
            );
            return None;
        }

        self.is_loading = true;
        self.error = None;
        self.image = None;
        self.submitted_prompt = Some(self.prompt.clone());

        tracing::info!("Submitting prompt ({} chars)", self.prompt.len());
        Some(self.prompt.clone())
    }

    /// Record the outcome of the in-flight request.
    pub fn settle<E: fmt::Display>(&mut self, outcome: std::result::Result<GeneratedImage, E>) {
        if !self.is_loading {
            tracing::warn!("Dropping generation result with no request in flight");
            return;
        }

        self.is_loading = false;
        match outcome {
            Ok(image) => {
                tracing::info!(
                    "Image generated ({} bytes, {})",
                    image.bytes.len(),
                    image.mime_type
                );
                self.error = None;
                self.image = Some(image);
            }
            Err(e) => {
                tracing::error!("Error generating image: {}", e);
                self.image = None;
                self.error = Some(format!("Failed to generate image: {}", e));
            }
        }
    }

    pub fn showing(&self) -> Showing<'_> {
        if self.is_loading {
            return Showing::Loading;
        }
        if let Some(error) = &self.error {
            return Showing::Error(error);
        }
        if let Some(image) = &self.image {
            return Showing::Image {
                image,
                prompt: self.submitted_prompt.as_deref().unwrap_or_default(),
            };
        }
        Showing::Idle
    }
}
