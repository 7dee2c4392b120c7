use super::ImageGenerationService;
use crate::models::GeneratedImage;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum MockOutcome {
    Image(GeneratedImage),
    Empty,
    Failure(String),
}

pub struct MockImageGenerationClient {
    outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_image_response(self, image: GeneratedImage) -> Self {
        self.outcomes.lock().unwrap().push(MockOutcome::Image(image));
        self
    }

    /// Queue a response where the service produced no images.
    pub fn with_empty_response(self) -> Self {
        self.outcomes.lock().unwrap().push(MockOutcome::Empty);
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::Failure(message.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, in call order.
    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        let count = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        let outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            // Smallest JPEG header, enough for MIME sniffing
            return Ok(GeneratedImage::new(
                vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46],
                "image/jpeg",
            ));
        }

        match &outcomes[(count - 1) % outcomes.len()] {
            MockOutcome::Image(image) => Ok(image.clone()),
            MockOutcome::Empty => Err(Error::NoImageGenerated),
            MockOutcome::Failure(message) => Err(Error::AiProvider(message.clone())),
        }
    }
}
