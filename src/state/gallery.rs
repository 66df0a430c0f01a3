//! Progressive-reveal gallery state
//!
//! The gallery holds the full photo set in a one-time shuffled order and
//! exposes a growing prefix of it to the grid. The modal selection is
//! independent of how much has been revealed: next/previous wrap
//! circularly over the whole shuffled order.
use rand::seq::SliceRandom;
use rand::Rng;

use super::data::Photo;

/// Number of photos revealed as soon as the gallery is initialized
pub const INITIAL_BATCH_SIZE: usize = 12;

/// Number of photos revealed per load-more request
pub const BATCH_SIZE: usize = 8;

/// The gallery pager: shuffled order, revealed prefix, optional selection.
///
/// Invariants:
/// - the revealed window is always a prefix of the shuffled order
/// - the window length never decreases and never exceeds the set size
/// - the selection, when set, is a valid index into the shuffled order
#[derive(Debug, Default)]
pub struct GalleryPager {
    /// All photos in their one-time shuffled order
    order: Vec<Photo>,
    /// Length of the revealed prefix of `order`
    visible: usize,
    /// Index into `order` of the photo open in the modal viewer
    selected: Option<usize>,
}

impl GalleryPager {
    /// Create an idle gallery with no photos
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle the photo set and reveal the first batch.
    ///
    /// The shuffle happens exactly once per view lifetime; calling this
    /// again starts a new lifetime (fresh order, selection cleared).
    /// An empty photo set leaves the gallery idle.
    pub fn initialize(&mut self, photos: Vec<Photo>) {
        self.initialize_with(photos, &mut rand::rng());
    }

    /// Initialize with a caller-supplied RNG, so tests can seed the shuffle
    pub fn initialize_with<R: Rng + ?Sized>(&mut self, mut photos: Vec<Photo>, rng: &mut R) {
        photos.shuffle(rng);
        self.visible = photos.len().min(INITIAL_BATCH_SIZE);
        self.order = photos;
        self.selected = None;
    }

    /// Reveal the next batch. Returns whether the window actually grew.
    ///
    /// Safe to call redundantly: once every photo is revealed this is a
    /// no-op, so the level-triggered scroll signal can fire as often as
    /// it likes.
    pub fn request_more(&mut self) -> bool {
        if self.visible >= self.order.len() {
            return false;
        }
        self.visible = (self.visible + BATCH_SIZE).min(self.order.len());
        true
    }

    /// The revealed prefix of the shuffled order
    pub fn visible_photos(&self) -> &[Photo] {
        &self.order[..self.visible]
    }

    /// The full shuffled order (selection may point past the revealed prefix)
    pub fn photos(&self) -> &[Photo] {
        &self.order
    }

    /// Number of photos currently revealed
    pub fn visible_len(&self) -> usize {
        self.visible
    }

    /// Total number of photos in the set
    pub fn total_len(&self) -> usize {
        self.order.len()
    }

    /// True once every photo has been revealed (also true for an empty set)
    pub fn is_exhausted(&self) -> bool {
        self.visible == self.order.len()
    }

    /// Open the modal viewer on the photo with the given filename.
    /// Unknown filenames leave the selection untouched.
    pub fn select(&mut self, filename: &str) {
        if let Some(index) = self.order.iter().position(|p| p.filename == filename) {
            self.selected = Some(index);
        }
    }

    /// Step the selection forward, wrapping past the end of the set.
    /// No-op when nothing is selected.
    pub fn select_next(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some((current + 1) % self.order.len());
        }
    }

    /// Step the selection backward, wrapping past the start of the set.
    /// No-op when nothing is selected.
    pub fn select_previous(&mut self) {
        if let Some(current) = self.selected {
            let total = self.order.len();
            self.selected = Some((current + total - 1) % total);
        }
    }

    /// Close the modal viewer
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// The photo open in the modal viewer, if any
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.selected.map(|index| &self.order[index])
    }

    /// Zero-based position of the selection in the full shuffled order,
    /// paired with the set size, for the viewer's `current / total` counter
    pub fn selected_position(&self) -> Option<(usize, usize)> {
        self.selected.map(|index| (index, self.order.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn photo_set(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| Photo {
                filename: format!("photo_{:03}.jpg", i),
                path: PathBuf::from(format!("/photos/photo_{:03}.jpg", i)),
            })
            .collect()
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn initial_window_is_capped_at_twelve() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(30), &mut seeded());
        assert_eq!(gallery.visible_len(), INITIAL_BATCH_SIZE);
        assert_eq!(gallery.total_len(), 30);
        assert!(!gallery.is_exhausted());
    }

    #[test]
    fn short_set_is_fully_revealed_at_once() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(5), &mut seeded());
        assert_eq!(gallery.visible_len(), 5);
        assert!(gallery.is_exhausted());
    }

    #[test]
    fn window_stays_a_prefix_as_it_grows() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(30), &mut seeded());

        let before: Vec<Photo> = gallery.visible_photos().to_vec();
        assert!(gallery.request_more());

        let after = gallery.visible_photos();
        assert_eq!(after.len(), INITIAL_BATCH_SIZE + BATCH_SIZE);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(gallery.visible_photos(), &gallery.photos()[..gallery.visible_len()]);
    }

    #[test]
    fn fourteen_photos_take_exactly_one_extra_batch() {
        // 12 up front, one request for the remaining 2, then no-ops
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(14), &mut seeded());
        assert_eq!(gallery.visible_len(), 12);

        assert!(gallery.request_more());
        assert_eq!(gallery.visible_len(), 14);

        assert!(!gallery.request_more());
        assert_eq!(gallery.visible_len(), 14);
    }

    #[test]
    fn window_converges_after_the_expected_number_of_requests() {
        let count = 50;
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(count), &mut seeded());

        // ceil((50 - 12) / 8) = 5
        for _ in 0..5 {
            assert!(!gallery.is_exhausted());
            gallery.request_more();
        }
        assert!(gallery.is_exhausted());
        assert_eq!(gallery.visible_len(), count);
    }

    #[test]
    fn shuffle_is_a_permutation_of_the_input() {
        let photos = photo_set(23);
        let mut expected: Vec<String> = photos.iter().map(|p| p.filename.clone()).collect();
        expected.sort();

        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photos, &mut seeded());

        let mut shuffled: Vec<String> =
            gallery.photos().iter().map(|p| p.filename.clone()).collect();
        shuffled.sort();

        assert_eq!(shuffled, expected);
    }

    #[test]
    fn empty_set_stays_idle() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(Vec::new(), &mut seeded());

        assert_eq!(gallery.visible_len(), 0);
        assert!(gallery.is_exhausted());
        assert!(!gallery.request_more());
        assert_eq!(gallery.visible_len(), 0);

        gallery.select("anything.jpg");
        gallery.select_next();
        gallery.select_previous();
        assert_eq!(gallery.selected_photo(), None);
    }

    #[test]
    fn selection_wraps_circularly_at_both_ends() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(3), &mut seeded());

        let last = gallery.photos()[2].filename.clone();
        gallery.select(&last);
        assert_eq!(gallery.selected_position(), Some((2, 3)));

        gallery.select_next();
        assert_eq!(gallery.selected_position(), Some((0, 3)));

        gallery.select_previous();
        assert_eq!(gallery.selected_position(), Some((2, 3)));
    }

    #[test]
    fn selection_can_point_past_the_revealed_window() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(20), &mut seeded());
        assert_eq!(gallery.visible_len(), 12);

        let hidden = gallery.photos()[17].filename.clone();
        gallery.select(&hidden);
        assert_eq!(gallery.selected_position(), Some((17, 20)));
        // Navigating does not reveal anything
        gallery.select_next();
        assert_eq!(gallery.visible_len(), 12);
    }

    #[test]
    fn unknown_filename_leaves_selection_untouched() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(4), &mut seeded());

        let first = gallery.photos()[0].filename.clone();
        gallery.select(&first);
        gallery.select("not_in_the_set.jpg");
        assert_eq!(gallery.selected_position(), Some((0, 4)));
    }

    #[test]
    fn next_and_previous_are_noops_with_nothing_selected() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(4), &mut seeded());

        gallery.select_next();
        assert_eq!(gallery.selected_photo(), None);
        gallery.select_previous();
        assert_eq!(gallery.selected_photo(), None);
    }

    #[test]
    fn deselect_clears_the_selection() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(4), &mut seeded());

        let first = gallery.photos()[0].filename.clone();
        gallery.select(&first);
        assert!(gallery.selected_photo().is_some());

        gallery.deselect();
        assert_eq!(gallery.selected_photo(), None);
    }

    #[test]
    fn reinitialize_starts_a_fresh_lifetime() {
        let mut gallery = GalleryPager::new();
        gallery.initialize_with(photo_set(20), &mut seeded());
        gallery.request_more();
        let first = gallery.photos()[0].filename.clone();
        gallery.select(&first);

        gallery.initialize_with(photo_set(20), &mut StdRng::seed_from_u64(7));
        assert_eq!(gallery.visible_len(), INITIAL_BATCH_SIZE);
        assert_eq!(gallery.selected_photo(), None);
    }
}
