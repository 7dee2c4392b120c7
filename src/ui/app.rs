use crate::ai::ImageGenerationService;
use crate::models::GeneratedImage;
use crate::studio::Studio;
use crate::ui::views;
use crate::Error;
use iced::widget::image;
use iced::{executor, Application, Command, Element, Theme};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    PromptChanged(String),
    Submit,
    Generated(std::result::Result<GeneratedImage, Arc<Error>>),
}

pub struct Flags {
    pub service: Arc<dyn ImageGenerationService>,
}

pub struct StudioApp {
    studio: Studio,
    service: Arc<dyn ImageGenerationService>,
    // Decoded once per result so redraws reuse the same texture
    preview: Option<image::Handle>,
}

impl StudioApp {
    pub fn studio(&self) -> &Studio {
        &self.studio
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }
}

impl Application for StudioApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = executor::Default;
    type Flags = Flags;

    fn new(flags: Flags) -> (Self, Command<Message>) {
        (
            StudioApp {
                studio: Studio::new(),
                service: flags.service,
                preview: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "AI Image Generator".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::PromptChanged(prompt) => {
                if !self.studio.is_loading() {
                    self.studio.set_prompt(prompt);
                }
                Command::none()
            }
            Message::Submit => {
                let Some(prompt) = self.studio.begin_submission() else {
                    return Command::none();
                };
                self.preview = None;

                let service = Arc::clone(&self.service);
                Command::perform(
                    async move { service.generate_image(&prompt).await.map_err(Arc::new) },
                    Message::Generated,
                )
            }
            Message::Generated(outcome) => {
                if !self.studio.is_loading() {
                    return Command::none();
                }
                self.preview = outcome
                    .as_ref()
                    .ok()
                    .map(|image| image::Handle::from_memory(image.bytes.clone()));
                self.studio.settle(outcome);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        views::page(&self.studio, self.preview.as_ref())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockImageGenerationClient;
    use crate::studio::Showing;

    fn make_app() -> StudioApp {
        let (app, _) = StudioApp::new(Flags {
            service: Arc::new(MockImageGenerationClient::new()),
        });
        app
    }

    fn jpeg() -> GeneratedImage {
        GeneratedImage::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg")
    }

    #[test]
    fn test_prompt_changes_are_recorded() {
        let mut app = make_app();
        let _ = app.update(Message::PromptChanged("a fox".to_string()));
        assert_eq!(app.studio().prompt(), "a fox");
    }

    #[test]
    fn test_blank_submit_stays_idle() {
        let mut app = make_app();
        let _ = app.update(Message::PromptChanged("  ".to_string()));
        let _ = app.update(Message::Submit);
        assert!(!app.studio().is_loading());
        assert_eq!(app.studio().showing(), Showing::Idle);
    }

    #[test]
    fn test_prompt_is_frozen_while_loading() {
        let mut app = make_app();
        let _ = app.update(Message::PromptChanged("a fox".to_string()));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::PromptChanged("a wolf".to_string()));
        assert!(app.studio().is_loading());
        assert_eq!(app.studio().prompt(), "a fox");
    }

    #[test]
    fn test_generated_image_is_previewed() {
        let mut app = make_app();
        let _ = app.update(Message::PromptChanged("a fox".to_string()));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Generated(Ok(jpeg())));

        assert!(app.has_preview());
        assert_eq!(app.studio().image(), Some(&jpeg()));
        assert!(!app.studio().is_loading());
    }

    #[test]
    fn test_failure_clears_preview() {
        let mut app = make_app();
        let _ = app.update(Message::PromptChanged("a fox".to_string()));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Generated(Ok(jpeg())));

        let _ = app.update(Message::Submit);
        assert!(!app.has_preview());
        let _ = app.update(Message::Generated(Err(Arc::new(Error::NoImageGenerated))));

        assert!(!app.has_preview());
        assert_eq!(
            app.studio().error(),
            Some("Failed to generate image: No images were generated.")
        );
    }

    #[test]
    fn test_stray_result_is_ignored() {
        let mut app = make_app();
        let _ = app.update(Message::Generated(Ok(jpeg())));
        assert!(!app.has_preview());
        assert_eq!(app.studio().showing(), Showing::Idle);
    }
}
