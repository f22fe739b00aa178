//! # UI Styling Module
//!
//! Shared styling for the schedule cards so every panel looks the same.

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// White card with rounded corners and a soft drop shadow, used for the
/// "happening now" panel and each slot
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            color: Color::from_rgb(0.88, 0.88, 0.90),
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

/// Muted gray for secondary text (speakers, headings)
pub fn muted_text() -> Color {
    Color::from_rgb(0.42, 0.45, 0.50)
}

/// Slightly darker gray for body text
pub fn body_text() -> Color {
    Color::from_rgb(0.25, 0.28, 0.32)
}
