//! Image generation service integration
//!
//! Provides the service trait the view drives, the Imagen REST client that
//! implements it, and a mock for tests.

pub mod imagen;
pub mod mime;
pub mod mock;

pub use imagen::ImagenImageClient;
pub use mock::MockImageGenerationClient;

use crate::models::GeneratedImage;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate a single image for `prompt`.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage>;
}
