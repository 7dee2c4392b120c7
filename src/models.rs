//! Data models and structures
//!
//! Defines the generated image, the fixed generation options sent with every
//! request, and the environment-driven configuration.

use base64::Engine as _;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "imagen-4.0-generate-001";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// An image returned by the generation service, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl GeneratedImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Embedded-data reference (`data:<mime>;base64,<payload>`) for direct display.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Options sent with every generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub number_of_images: u32,
    pub aspect_ratio: String,
    pub output_mime_type: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            number_of_images: 1,
            aspect_ratio: "1:1".to_string(),
            output_mime_type: "image/jpeg".to_string(),
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("API_KEY")
            .or_else(|| non_empty("GEMINI_API_KEY"))
            .ok_or_else(|| crate::Error::Config("API_KEY not set".to_string()))?;

        let model = non_empty("IMAGEN_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        let base_url = non_empty("IMAGEN_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match non_empty("IMAGEN_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                crate::Error::Config(format!(
                    "IMAGEN_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?)),
            None => None,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_data_url_embeds_base64_payload() {
        let image = GeneratedImage::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg");
        assert_eq!(image.data_url(), "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn test_default_options_request_one_square_jpeg() {
        let options = GenerationOptions::default();
        assert_eq!(options.number_of_images, 1);
        assert_eq!(options.aspect_ratio, "1:1");
        assert_eq!(options.output_mime_type, "image/jpeg");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_falls_back_to_gemini_key() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_KEY", "  "),
            ("GEMINI_API_KEY", "gemini"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "gemini");
    }

    #[test]
    fn test_config_requires_api_key() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_KEY", "secret"),
            ("IMAGEN_MODEL", "models/imagen-4.0-fast-generate-001"),
            ("IMAGEN_BASE_URL", "http://localhost:8080/"),
            ("IMAGEN_TIMEOUT_SECS", "90"),
        ]))
        .unwrap();
        assert_eq!(config.model, "imagen-4.0-fast-generate-001");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_config_rejects_bad_timeout() {
        let err = Config::from_lookup(lookup_from(&[
            ("API_KEY", "secret"),
            ("IMAGEN_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("IMAGEN_TIMEOUT_SECS"));
    }
}
