//! Thumbnail grid over the revealed photos
//!
//! Renders the gallery's visible window as a wrapping grid of clickable
//! thumbnails, followed by the load-more sentinel strip. Photos whose
//! thumbnail is still being generated get a placeholder cell of the
//! same size so the layout does not jump.
use iced::widget::image::Handle;
use iced::widget::{button, column, container, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;

use super::viewport::{self, SENTINEL_HEIGHT};
use crate::state::gallery::GalleryPager;
use crate::Message;

/// Width of one grid cell
const CELL_WIDTH: f32 = 260.0;
/// Height of one grid cell
const CELL_HEIGHT: f32 = 200.0;
/// Gap between cells
const CELL_SPACING: f32 = 12.0;

/// Build the grid for the currently revealed photos
pub fn view<'a>(
    gallery: &GalleryPager,
    thumbnails: &HashMap<String, Handle>,
) -> Element<'a, Message> {
    let cells: Vec<Element<'a, Message>> = gallery
        .visible_photos()
        .iter()
        .map(|photo| cell(photo.filename.clone(), thumbnails.get(&photo.filename)))
        .collect();

    let grid = Wrap::with_elements(cells)
        .spacing(CELL_SPACING)
        .line_spacing(CELL_SPACING);

    column![grid, sentinel(gallery)]
        .spacing(CELL_SPACING)
        .padding(20)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}

/// One clickable grid cell: the thumbnail, or a placeholder while the
/// thumbnail job is still running
fn cell<'a>(filename: String, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnail {
        Some(handle) => iced::widget::image(handle.clone())
            .width(Length::Fixed(CELL_WIDTH))
            .height(Length::Fixed(CELL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("…").size(24))
            .center_x(Length::Fixed(CELL_WIDTH))
            .center_y(Length::Fixed(CELL_HEIGHT))
            .style(container::rounded_box)
            .into(),
    };

    button(content)
        .padding(0)
        .style(button::text)
        .on_press(Message::PhotoClicked(filename))
        .into()
}

/// The sentinel strip whose visibility drives load-more requests.
/// Shows a hint only while photos remain hidden.
fn sentinel<'a>(gallery: &GalleryPager) -> Element<'a, Message> {
    let label = if gallery.is_exhausted() {
        String::new()
    } else {
        String::from("Loading more photos...")
    };

    container(text(label).size(14))
        .id(viewport::sentinel_id())
        .center_x(Length::Fill)
        .center_y(Length::Fixed(SENTINEL_HEIGHT))
        .into()
}
