use crate::studio::{Showing, Studio};
use crate::ui::app::Message;
use crate::ui::{widgets, ACCENT, MUTED};
use iced::widget::{button, column, container, image, row, text, text_input};
use iced::{Alignment, Element, Length};

const PROMPT_PLACEHOLDER: &str = "e.g., A cinematic shot of a raccoon in a library...";

pub fn page<'a>(studio: &'a Studio, preview: Option<&'a image::Handle>) -> Element<'a, Message> {
    let content = column![header(), prompt_form(studio), result_area(studio, preview)]
        .spacing(32)
        .max_width(768.0)
        .align_items(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .center_x()
        .into()
}

fn header<'a>() -> Element<'a, Message> {
    column![
        text("AI Image Generator").size(44).style(ACCENT),
        text("Bring your ideas to life. Describe anything you can imagine and let AI create it for you.")
            .size(18)
            .style(MUTED),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}

/// Prompt field and Generate button. Both go inert while a request is in flight.
fn prompt_form(studio: &Studio) -> Element<'_, Message> {
    let mut input = text_input(PROMPT_PLACEHOLDER, studio.prompt())
        .padding(12)
        .size(16)
        .width(Length::Fill);
    if !studio.is_loading() {
        input = input
            .on_input(Message::PromptChanged)
            .on_submit(Message::Submit);
    }

    let mut submit = button(text(studio.submit_label()).size(16)).padding([12, 24]);
    if studio.can_submit() {
        submit = submit.on_press(Message::Submit);
    }

    row![input, submit]
        .spacing(12)
        .align_items(Alignment::Center)
        .into()
}

fn result_area<'a>(studio: &'a Studio, preview: Option<&'a image::Handle>) -> Element<'a, Message> {
    let body = match (studio.showing(), preview) {
        (Showing::Loading, _) => widgets::loader(),
        (Showing::Error(message), _) => widgets::error_alert(message),
        (Showing::Image { prompt, .. }, Some(handle)) => widgets::image_card(handle, prompt),
        (Showing::Image { .. }, None) | (Showing::Idle, _) => widgets::placeholder(),
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(540.0))
        .center_x()
        .center_y()
        .into()
}
