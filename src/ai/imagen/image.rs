use super::client::ImagenHttpClient;
use super::types::{Instance, OutputOptions, Parameters, PredictRequest, PredictResponse};
use crate::ai::{mime, ImageGenerationService};
use crate::models::{Config, GeneratedImage, GenerationOptions};
use crate::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;

pub struct ImagenImageClient {
    http: ImagenHttpClient,
    options: GenerationOptions,
}

impl ImagenImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: ImagenHttpClient::new_with_client(api_key, model, client),
            options: GenerationOptions::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            http: ImagenHttpClient::new(config.api_key.clone(), config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn model(&self) -> &str {
        self.http.model()
    }

    fn build_request(&self, prompt: &str) -> PredictRequest {
        PredictRequest {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: Parameters {
                sample_count: self.options.number_of_images,
                aspect_ratio: self.options.aspect_ratio.clone(),
                output_options: OutputOptions {
                    mime_type: self.options.output_mime_type.clone(),
                },
            },
        }
    }
}

#[async_trait]
impl ImageGenerationService for ImagenImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        if prompt.trim().is_empty() {
            return Err(Error::InvalidPrompt);
        }

        tracing::debug!("Sending image generation request to Imagen ({})", self.model());

        let response: PredictResponse = self.http.predict(&self.build_request(prompt)).await?;

        for filtered in response
            .predictions
            .iter()
            .filter_map(|p| p.rai_filtered_reason.as_deref())
        {
            tracing::warn!("Imagen filtered a sample: {}", filtered);
        }

        let (prediction, encoded) = response
            .predictions
            .iter()
            .find_map(|p| p.bytes_base64_encoded.as_deref().map(|data| (p, data)))
            .ok_or_else(|| {
                tracing::error!("Imagen response contained no images");
                Error::NoImageGenerated
            })?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| Error::AiProvider(format!("Failed to decode Imagen base64 image: {}", e)))?;

        let mime_type = mime::resolve_image_mime(
            prediction.mime_type.as_deref(),
            &bytes,
            &self.options.output_mime_type,
        );

        tracing::debug!(
            "Imagen returned {} bytes with mime_type: {}",
            bytes.len(),
            mime_type
        );

        Ok(GeneratedImage::new(bytes, mime_type))
    }
}
