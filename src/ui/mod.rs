//! iced front-end: one window with a prompt form and a result area.

pub mod app;
pub mod views;
pub mod widgets;

pub use app::{Flags, Message, StudioApp};

use iced::Color;

pub(crate) const ACCENT: Color = Color {
    r: 0.13,
    g: 0.83,
    b: 0.93,
    a: 1.0,
};
pub(crate) const MUTED: Color = Color {
    r: 0.61,
    g: 0.64,
    b: 0.69,
    a: 1.0,
};
pub(crate) const DANGER: Color = Color {
    r: 0.97,
    g: 0.44,
    b: 0.44,
    a: 1.0,
};
