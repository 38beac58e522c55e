// SPDX-License-Identifier: MPL-2.0
use iced::keyboard::{self, key, Key, Location, Modifiers};
use iced::{event, window};
use shelf_lens::domain::ModelSlug;
use shelf_lens::gallery::{ChangeCause, GalleryController, StripGeometry};
use shelf_lens::ui::gallery_view::{self, key_message};

fn gallery(count: usize) -> GalleryController {
    GalleryController::for_model(ModelSlug::from("benchy"), count)
}

#[test]
fn next_then_previous_returns_to_start_for_every_index() {
    for count in 1..=8 {
        for start in 0..count {
            let mut g = gallery(count);
            g.select_index(start);

            g.select_next();
            g.select_previous();
            assert_eq!(g.selected_index(), start, "next∘previous, n={count}");

            g.select_previous();
            g.select_next();
            assert_eq!(g.selected_index(), start, "previous∘next, n={count}");
        }
    }
}

#[test]
fn n_steps_forward_is_a_full_cycle() {
    for count in 1..=10 {
        let mut g = gallery(count);
        g.select_index(count / 2);
        for _ in 0..count {
            g.select_next();
        }
        assert_eq!(g.selected_index(), count / 2);
    }
}

#[test]
fn selection_stays_in_range_for_any_operation_sequence() {
    // every sequence of length 5 over {next, previous, select(0..=n+1)}
    for count in 1..=4usize {
        let ops = count + 4;
        let total = ops.pow(5);
        for code in 0..total {
            let mut g = gallery(count);
            let mut rest = code;
            for _ in 0..5 {
                match rest % ops {
                    0 => {
                        g.select_next();
                    }
                    1 => {
                        g.select_previous();
                    }
                    n => {
                        g.select_index(n - 2);
                    }
                }
                rest /= ops;
                assert!(g.selected_index() < count, "n={count} code={code}");
            }
        }
    }
}

#[test]
fn model_change_resets_from_any_index() {
    for prior in 0..6 {
        let mut g = gallery(6);
        g.select_index(prior);
        let change = g
            .on_model_changed(&ModelSlug::from("calibration-cube"), 3)
            .expect("a new model always notifies");
        assert_eq!(g.selected_index(), 0);
        assert_eq!(change.previous, prior);
        assert_eq!(change.cause, ChangeCause::ModelReset);
    }
}

#[test]
fn empty_gallery_ignores_navigation() {
    let mut g = gallery(0);
    assert_eq!(g.select_next(), None);
    assert_eq!(g.select_previous(), None);
    assert_eq!(g.select_index(3), None);
    assert_eq!(g.selected_index(), 0);
    assert_eq!(g.position(), None);
}

#[test]
fn three_image_scenario() {
    let mut g = gallery(3);
    let mut seen = vec![g.selected_index()];
    for _ in 0..3 {
        g.select_next();
        seen.push(g.selected_index());
    }
    assert_eq!(seen, [0, 1, 2, 0]);

    g.select_previous();
    assert_eq!(g.selected_index(), 2);
    assert_eq!(g.position(), Some((3, 3)));
}

#[test]
fn arrow_right_is_the_next_button() {
    let event = event::Event::Keyboard(keyboard::Event::KeyPressed {
        key: Key::Named(key::Named::ArrowRight),
        modified_key: Key::Named(key::Named::ArrowRight),
        physical_key: key::Physical::Code(key::Code::ArrowRight),
        location: Location::Standard,
        modifiers: Modifiers::default(),
        text: None,
        repeat: false,
    });

    assert_eq!(
        key_message(event.clone(), event::Status::Ignored, window::Id::unique()),
        Some(gallery_view::Message::Next)
    );
    // a focused text input keeps its arrows
    assert_eq!(
        key_message(event, event::Status::Captured, window::Id::unique()),
        None
    );
}

#[test]
fn unmounted_gallery_has_no_keyboard() {
    let state = gallery_view::State::default();
    assert!(!state.is_mounted());
}

#[test]
fn centering_is_clamped_at_both_ends() {
    let geometry = StripGeometry::new(96.0, 8.0, 8.0);
    let count = 30;
    let strip = 600.0;

    assert_eq!(geometry.centered_offset(0, count, strip), 0.0);
    assert_eq!(
        geometry.centered_offset(count - 1, count, strip),
        geometry.max_offset(count, strip)
    );
    // a row narrower than the strip never scrolls
    assert_eq!(geometry.centered_offset(2, 3, strip), 0.0);
}
