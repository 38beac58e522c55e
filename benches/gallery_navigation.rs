// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation.
//!
//! Measures the per-keypress cost of:
//! - Selection stepping (next/previous with wrap-around)
//! - Strip centering for the new selection
//! - A full arrow-key update of the gallery component

use criterion::{criterion_group, criterion_main, Criterion};
use shelf_lens::domain::ModelSlug;
use shelf_lens::gallery::{GalleryController, StripGeometry};
use shelf_lens::ui::gallery_view::{Message, Settings, State};
use std::hint::black_box;
use std::time::{Duration, Instant};

const IMAGE_COUNT: usize = 500;

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("select_next_cycle", |b| {
        let mut gallery = GalleryController::for_model(ModelSlug::from("benchy"), IMAGE_COUNT);
        b.iter(|| black_box(gallery.select_next()));
    });

    group.bench_function("select_previous_cycle", |b| {
        let mut gallery = GalleryController::for_model(ModelSlug::from("benchy"), IMAGE_COUNT);
        b.iter(|| black_box(gallery.select_previous()));
    });

    group.finish();
}

fn bench_centering(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let geometry = StripGeometry::new(96.0, 8.0, 8.0);

    group.bench_function("centered_offset", |b| {
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % IMAGE_COUNT;
            black_box(geometry.centered_offset(black_box(index), IMAGE_COUNT, 1024.0))
        });
    });

    group.finish();
}

fn bench_component_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("arrow_key_update", |b| {
        let mut state = State::new(Settings {
            thumbnail_width: 96.0,
            scroll_step: 240.0,
            smooth_scroll: Duration::from_millis(250),
        });
        let _ = state.show_model(&ModelSlug::from("benchy"), IMAGE_COUNT);
        let now = Instant::now();
        b.iter(|| black_box(state.update_at(Message::Next, now).0));
    });

    group.finish();
}

criterion_group!(benches, bench_selection, bench_centering, bench_component_update);
criterion_main!(benches);
