//! Result-area widgets, one per thing the studio can be showing.

use crate::ui::app::Message;
use crate::ui::{ACCENT, DANGER, MUTED};
use iced::widget::{column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

pub fn loader<'a>() -> Element<'a, Message> {
    column![
        text("• • •").size(40).style(ACCENT),
        text("Generating your masterpiece...").size(18).style(MUTED),
    ]
    .spacing(16)
    .align_items(Alignment::Center)
    .into()
}

pub fn error_alert<'a>(message: &str) -> Element<'a, Message> {
    container(
        column![
            text("Error").size(18).style(DANGER),
            text(message).size(16),
        ]
        .spacing(6),
    )
    .padding(16)
    .max_width(640.0)
    .into()
}

pub fn image_card<'a>(handle: &image::Handle, prompt: &str) -> Element<'a, Message> {
    let picture: image::Image<image::Handle> = image(handle.clone())
        .width(Length::Fixed(512.0))
        .height(Length::Fixed(512.0))
        .content_fit(ContentFit::Cover);

    column![picture, text(prompt).size(14).style(MUTED)]
        .spacing(8)
        .align_items(Alignment::Center)
        .into()
}

pub fn placeholder<'a>() -> Element<'a, Message> {
    text("Your generated image will appear here.")
        .size(16)
        .style(MUTED)
        .into()
}
