//! Fullscreen photo viewer overlay
//!
//! Laid over the grid with a dimmed backdrop. Previous/next step
//! circularly through the whole shuffled order, not just the photos
//! revealed so far, and the counter reports the position in the full
//! set. Clicking the backdrop closes the viewer; the photo and its
//! controls swallow clicks.
use iced::widget::image::Handle;
use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::state::data::Photo;
use crate::Message;

/// Maximum width of the photo inside the viewer
const VIEWER_WIDTH: f32 = 1100.0;
/// Maximum height of the photo inside the viewer
const VIEWER_HEIGHT: f32 = 680.0;

/// Lay the viewer for the selected photo over the given base view
pub fn overlay<'a>(
    base: Element<'a, Message>,
    photo: &Photo,
    position: (usize, usize),
) -> Element<'a, Message> {
    let backdrop = center(opaque(viewer(photo, position))).style(dimmed);

    stack![
        base,
        opaque(mouse_area(backdrop).on_press(Message::CloseViewer)),
    ]
    .into()
}

/// The viewer itself: title bar, photo, navigation controls
fn viewer<'a>(photo: &Photo, (index, total): (usize, usize)) -> Element<'a, Message> {
    let title_bar = row![
        text(photo.filename.clone()).size(16),
        iced::widget::horizontal_space(),
        button(text("✕")).padding(8).on_press(Message::CloseViewer),
    ]
    .width(Length::Fixed(VIEWER_WIDTH))
    .align_y(Alignment::Center);

    let picture = iced::widget::image(Handle::from_path(photo.path.clone()))
        .width(Length::Fixed(VIEWER_WIDTH))
        .height(Length::Fixed(VIEWER_HEIGHT));

    let controls = row![
        button(text("‹").size(28))
            .padding(8)
            .on_press(Message::PreviousPhoto),
        text(format!("{} / {}", index + 1, total)).size(16),
        button(text("›").size(28)).padding(8).on_press(Message::NextPhoto),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    column![title_bar, picture, controls]
        .spacing(16)
        .align_x(Alignment::Center)
        .into()
}

/// Translucent black backdrop behind the viewer
fn dimmed(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
