use chrono::Utc;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{keyboard, Alignment, Element, Length, Rectangle, Subscription, Task, Theme};
use rfd::FileDialog;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

mod photos;
mod state;
mod ui;

use photos::listing::{self, ListingError};
use state::data::Photo;
use state::gallery::GalleryPager;
use state::settings::Settings;
use ui::viewport::{self, GridViewport};

/// How often the sentinel level is re-checked between scroll events
const SENTINEL_POLL: Duration = Duration::from_millis(250);

/// Main application state
struct PhotoWall {
    /// Persisted user settings (chosen folder, last scan time)
    settings: Settings,
    /// The progressive-reveal gallery state
    gallery: GalleryPager,
    /// Thumbnails ready to draw, keyed by filename
    thumbnails: HashMap<String, Handle>,
    /// Filenames with a thumbnail job in flight
    pending_thumbnails: HashSet<String>,
    /// Last observed geometry of the grid scrollable
    grid_viewport: Option<GridViewport>,
    /// Status message to display to the user
    status: String,
    /// Whether a folder scan is running
    scanning: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Choose Folder" button
    ChooseFolder,
    /// Folder scan finished
    PhotosListed(Result<Vec<Photo>, ListingError>),
    /// The grid scrollable moved
    GridScrolled(scrollable::Viewport),
    /// Periodic sentinel-level re-check
    Tick,
    /// Direct measurement of the sentinel's on-screen bounds finished
    SentinelBounds(Option<Rectangle>),
    /// A thumbnail job finished
    ThumbnailReady(String, Result<PathBuf, String>),
    /// User clicked a photo in the grid
    PhotoClicked(String),
    /// Modal viewer: step to the next photo
    NextPhoto,
    /// Modal viewer: step to the previous photo
    PreviousPhoto,
    /// Modal viewer: close
    CloseViewer,
}

impl PhotoWall {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let mut app = PhotoWall {
            settings,
            gallery: GalleryPager::new(),
            thumbnails: HashMap::new(),
            pending_thumbnails: HashSet::new(),
            grid_viewport: None,
            status: String::from("Choose a photo folder to build the gallery."),
            scanning: false,
        };

        let task = match app.settings.photos_dir.clone() {
            Some(folder) => app.start_scan(folder),
            None => Task::none(),
        };

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChooseFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Photo Folder")
                    .pick_folder();

                if let Some(folder) = folder {
                    self.settings.photos_dir = Some(folder.clone());
                    if let Err(e) = self.settings.save() {
                        eprintln!("⚠️  Failed to save settings: {}", e);
                    }
                    return self.start_scan(folder);
                }

                Task::none()
            }
            Message::PhotosListed(Ok(listed)) => {
                self.scanning = false;
                let count = listed.len();

                // New view lifetime: fresh shuffle, fresh selection, fresh grid
                self.gallery.initialize(listed);
                self.thumbnails.clear();
                self.pending_thumbnails.clear();
                self.grid_viewport = None;

                self.settings.last_scan = Some(Utc::now());
                if let Err(e) = self.settings.save() {
                    eprintln!("⚠️  Failed to save settings: {}", e);
                }

                self.status = if count == 0 {
                    String::from("No photos found in this folder.")
                } else {
                    format!("{} photos. Showing {}.", count, self.gallery.visible_len())
                };
                println!("✅ Gallery initialized with {} photos", count);

                self.load_visible_thumbnails()
            }
            Message::PhotosListed(Err(e)) => {
                self.scanning = false;
                self.status = format!("❌ {}", e);
                eprintln!("❌ Scan failed: {}", e);
                Task::none()
            }
            Message::GridScrolled(grid_viewport) => {
                self.grid_viewport = Some(GridViewport::from(grid_viewport));
                self.poll_sentinel()
            }
            Message::Tick => self.poll_sentinel(),
            Message::SentinelBounds(visible_bounds) => {
                if !self.scanning && viewport::sentinel_level(visible_bounds) {
                    self.reveal_next_batch()
                } else {
                    Task::none()
                }
            }
            Message::ThumbnailReady(filename, result) => {
                self.pending_thumbnails.remove(&filename);
                match result {
                    Ok(path) => {
                        self.thumbnails.insert(filename, Handle::from_path(path));
                    }
                    Err(e) => eprintln!("⚠️  Thumbnail failed for {}: {}", filename, e),
                }
                Task::none()
            }
            Message::PhotoClicked(filename) => {
                self.gallery.select(&filename);
                Task::none()
            }
            Message::NextPhoto => {
                self.gallery.select_next();
                Task::none()
            }
            Message::PreviousPhoto => {
                self.gallery.select_previous();
                Task::none()
            }
            Message::CloseViewer => {
                self.gallery.deselect();
                Task::none()
            }
        }
    }

    /// Kick off an async folder scan
    fn start_scan(&mut self, folder: PathBuf) -> Task<Message> {
        self.scanning = true;
        self.status = format!("Scanning {}...", folder.display());
        Task::perform(listing::list_photos(folder), Message::PhotosListed)
    }

    /// Level-triggered load-more: whenever the sentinel sits inside the
    /// margin-expanded viewport and photos remain hidden, reveal the
    /// next batch. Scroll events supply exact geometry; while none is
    /// cached (short content cannot be scrolled, and each reveal
    /// invalidates the cache) the sentinel container is measured
    /// directly instead. Redundant calls are absorbed by the gallery.
    fn poll_sentinel(&mut self) -> Task<Message> {
        if self.scanning || self.gallery.is_exhausted() {
            return Task::none();
        }

        match self.grid_viewport {
            Some(grid_viewport) => {
                if viewport::sentinel_in_view(grid_viewport) {
                    self.reveal_next_batch()
                } else {
                    Task::none()
                }
            }
            None => container::visible_bounds(viewport::sentinel_id())
                .map(Message::SentinelBounds),
        }
    }

    /// Reveal the next batch and queue its thumbnails
    fn reveal_next_batch(&mut self) -> Task<Message> {
        if !self.gallery.request_more() {
            return Task::none();
        }

        // The content height just changed, so any cached scroll
        // geometry no longer describes the grid
        self.grid_viewport = None;

        self.status = format!(
            "{} photos. Showing {}.",
            self.gallery.total_len(),
            self.gallery.visible_len()
        );
        self.load_visible_thumbnails()
    }

    /// Queue thumbnail jobs for revealed photos that have none yet
    fn load_visible_thumbnails(&mut self) -> Task<Message> {
        let cache = photos::thumbnail::cache_dir();
        let mut tasks = Vec::new();

        for photo in self.gallery.visible_photos() {
            if self.thumbnails.contains_key(&photo.filename)
                || self.pending_thumbnails.contains(&photo.filename)
            {
                continue;
            }
            self.pending_thumbnails.insert(photo.filename.clone());

            let filename = photo.filename.clone();
            let source = photo.path.clone();
            let cache = cache.clone();
            tasks.push(Task::perform(
                async move {
                    (
                        filename,
                        photos::thumbnail::load_or_generate(source, cache).await,
                    )
                },
                |(filename, result)| Message::ThumbnailReady(filename, result),
            ));
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("Photo Wall").size(28),
            horizontal_space(),
            text(&self.status).size(14),
            button("Choose Folder")
                .on_press(Message::ChooseFolder)
                .padding(10),
        ]
        .spacing(20)
        .padding(20)
        .align_y(Alignment::Center);

        let grid = scrollable(ui::grid::view(&self.gallery, &self.thumbnails))
            .on_scroll(Message::GridScrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let base: Element<Message> = column![header, grid].into();

        match (self.gallery.selected_photo(), self.gallery.selected_position()) {
            (Some(photo), Some(position)) => ui::modal::overlay(base, photo, position),
            _ => base,
        }
    }

    /// Keyboard navigation for the viewer, plus the sentinel poll
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::NextPhoto),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::PreviousPhoto),
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseViewer),
            _ => None,
        });

        let poll = iced::time::every(SENTINEL_POLL).map(|_| Message::Tick);

        Subscription::batch([keys, poll])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Photo Wall", PhotoWall::update, PhotoWall::view)
        .theme(PhotoWall::theme)
        .subscription(PhotoWall::subscription)
        .centered()
        .run_with(PhotoWall::new)
}
