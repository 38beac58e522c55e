// SPDX-License-Identifier: MPL-2.0
//! Gallery selection controller.
//!
//! Owns the index of the image currently shown for one model record and
//! exposes wrap-around navigation. Every operation that moves the selection
//! reports it through a [`SelectionChanged`] notification; the view layer
//! reacts to those (scrolling the thumbnail strip) so the arithmetic here stays
//! free of rendering concerns.
//!
//! An empty gallery is a valid state: all navigation is a no-op and no
//! notification is produced.

use crate::domain::ModelSlug;

/// Why the selection moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// next / previous / direct selection.
    Navigation,
    /// A different model record was mounted.
    ModelReset,
}

/// Notification emitted whenever the selected index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: usize,
    pub current: usize,
    pub cause: ChangeCause,
}

/// Selection state for one mounted gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryController {
    model: Option<ModelSlug>,
    count: usize,
    selected: usize,
}

impl GalleryController {
    /// Creates an empty controller with no model attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller for `model` with `count` images, selecting the first.
    #[must_use]
    pub fn for_model(model: ModelSlug, count: usize) -> Self {
        Self {
            model: Some(model),
            count,
            selected: 0,
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Number of images in the gallery.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Identity of the model this selection belongs to.
    #[must_use]
    pub fn model(&self) -> Option<&ModelSlug> {
        self.model.as_ref()
    }

    /// 1-based position and total, for a "2 / 5" counter.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.is_empty()).then_some((self.selected + 1, self.count))
    }

    /// Advances by one, wrapping to the first image after the last.
    pub fn select_next(&mut self) -> Option<SelectionChanged> {
        if self.is_empty() {
            return None;
        }
        self.move_to((self.selected + 1) % self.count)
    }

    /// Steps back by one, wrapping to the last image before the first.
    pub fn select_previous(&mut self) -> Option<SelectionChanged> {
        if self.is_empty() {
            return None;
        }
        self.move_to((self.selected + self.count - 1) % self.count)
    }

    /// Selects `index` directly, clamped to the last image.
    pub fn select_index(&mut self, index: usize) -> Option<SelectionChanged> {
        if self.is_empty() {
            return None;
        }
        self.move_to(index.min(self.count - 1))
    }

    /// Adopts a (possibly new) model record.
    ///
    /// A different identity always resets the selection to 0 and notifies,
    /// even when the index was already 0, so the strip scroll is reset too.
    /// A re-fetch of the same model keeps the selection, clamped to the new
    /// image count.
    pub fn on_model_changed(&mut self, model: &ModelSlug, count: usize) -> Option<SelectionChanged> {
        let previous = self.selected;
        self.count = count;

        if self.model.as_ref() != Some(model) {
            self.model = Some(model.clone());
            self.selected = 0;
            return Some(SelectionChanged {
                previous,
                current: 0,
                cause: ChangeCause::ModelReset,
            });
        }

        let clamped = previous.min(count.saturating_sub(1));
        self.move_to(clamped)
    }

    fn move_to(&mut self, index: usize) -> Option<SelectionChanged> {
        if index == self.selected {
            return None;
        }
        let previous = self.selected;
        self.selected = index;
        Some(SelectionChanged {
            previous,
            current: index,
            cause: ChangeCause::Navigation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(count: usize) -> GalleryController {
        GalleryController::for_model(ModelSlug::from("benchy"), count)
    }

    #[test]
    fn new_controller_is_empty() {
        let controller = GalleryController::new();
        assert!(controller.is_empty());
        assert_eq!(controller.selected_index(), 0);
        assert_eq!(controller.position(), None);
        assert_eq!(controller.model(), None);
    }

    #[test]
    fn next_and_previous_wrap_around_three_images() {
        let mut controller = gallery(3);
        controller.select_next();
        assert_eq!(controller.selected_index(), 1);
        controller.select_next();
        assert_eq!(controller.selected_index(), 2);
        controller.select_next();
        assert_eq!(controller.selected_index(), 0);
        controller.select_previous();
        assert_eq!(controller.selected_index(), 2);
    }

    #[test]
    fn next_reports_selection_change() {
        let mut controller = gallery(2);
        let change = controller.select_next().expect("selection should move");
        assert_eq!(
            change,
            SelectionChanged {
                previous: 0,
                current: 1,
                cause: ChangeCause::Navigation,
            }
        );
    }

    #[test]
    fn single_image_navigation_reports_nothing() {
        let mut controller = gallery(1);
        assert_eq!(controller.select_next(), None);
        assert_eq!(controller.select_previous(), None);
        assert_eq!(controller.selected_index(), 0);
    }

    #[test]
    fn empty_gallery_navigation_is_a_no_op() {
        let mut controller = gallery(0);
        assert_eq!(controller.select_next(), None);
        assert_eq!(controller.select_previous(), None);
        assert_eq!(controller.select_index(4), None);
        assert_eq!(controller.selected_index(), 0);
    }

    #[test]
    fn select_index_clamps_out_of_range() {
        let mut controller = gallery(4);
        let change = controller.select_index(99).expect("selection should move");
        assert_eq!(change.current, 3);
        assert_eq!(controller.selected_index(), 3);
    }

    #[test]
    fn selecting_current_index_reports_nothing() {
        let mut controller = gallery(4);
        controller.select_index(2);
        assert_eq!(controller.select_index(2), None);
    }

    #[test]
    fn model_change_resets_selection() {
        let mut controller = gallery(5);
        controller.select_index(4);

        let change = controller
            .on_model_changed(&ModelSlug::from("calibration-cube"), 2)
            .expect("new model always notifies");
        assert_eq!(change.cause, ChangeCause::ModelReset);
        assert_eq!(change.previous, 4);
        assert_eq!(controller.selected_index(), 0);
        assert_eq!(controller.len(), 2);
        assert_eq!(controller.model(), Some(&ModelSlug::from("calibration-cube")));
    }

    #[test]
    fn model_change_notifies_even_from_index_zero() {
        let mut controller = gallery(3);
        let change = controller.on_model_changed(&ModelSlug::from("other"), 3);
        assert!(matches!(
            change,
            Some(SelectionChanged {
                cause: ChangeCause::ModelReset,
                ..
            })
        ));
    }

    #[test]
    fn refetch_of_same_model_keeps_selection_within_range() {
        let mut controller = gallery(5);
        controller.select_index(2);
        assert_eq!(controller.on_model_changed(&ModelSlug::from("benchy"), 5), None);
        assert_eq!(controller.selected_index(), 2);

        let change = controller
            .on_model_changed(&ModelSlug::from("benchy"), 2)
            .expect("clamping moves the selection");
        assert_eq!(change.current, 1);
    }

    #[test]
    fn refetch_with_no_images_lands_on_zero() {
        let mut controller = gallery(3);
        controller.select_index(2);
        controller.on_model_changed(&ModelSlug::from("benchy"), 0);
        assert_eq!(controller.selected_index(), 0);
        assert!(controller.is_empty());
    }

    #[test]
    fn position_is_one_based() {
        let mut controller = gallery(5);
        controller.select_index(1);
        assert_eq!(controller.position(), Some((2, 5)));
    }
}
