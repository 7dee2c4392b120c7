use anyhow::Result;
use iced::{window, Application, Settings, Size};
use imagen_studio::ai::{ImageGenerationService, ImagenImageClient};
use imagen_studio::models::Config;
use imagen_studio::ui::{Flags, StudioApp};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagen_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting imagen-studio");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let client = ImagenImageClient::from_config(&config);
    info!("Image provider: Imagen (model: {})", client.model());
    let service: Arc<dyn ImageGenerationService> = Arc::new(client);

    StudioApp::run(Settings {
        window: window::Settings {
            size: Size::new(900.0, 900.0),
            ..Default::default()
        },
        ..Settings::with_flags(Flags { service })
    })?;

    info!("Window closed");
    Ok(())
}
