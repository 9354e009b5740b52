// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the controller's hot path.
//!
//! Measures the performance of:
//! - Applying a stream of media status pushes
//! - Building render directives
//! - A tap/fade/auto-hide cycle on the virtual clock

use criterion::{criterion_group, criterion_main, Criterion};
use overlay_player::config::PlayerOptions;
use overlay_player::overlay::{ControllerBuilder, FrameScheduler};
use overlay_player::player::{MediaPlayback, PlaybackStatus, StatusRequest};
use std::hint::black_box;
use std::time::Duration;

/// Media that swallows every request.
struct NullMedia;

impl MediaPlayback for NullMedia {
    fn set_status(&mut self, request: StatusRequest) {
        black_box(request);
    }
}

fn options() -> PlayerOptions {
    PlayerOptions::default().with_source("bench.mp4")
}

/// Benchmark status update throughput.
///
/// One simulated minute of 250 ms status pushes per iteration.
fn bench_status_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_updates");

    group.bench_function("one_minute_of_pushes", |b| {
        b.iter(|| {
            let mut controller =
                ControllerBuilder::new(options()).mount(NullMedia, FrameScheduler::new());
            for position in (0..=60_000).step_by(250) {
                controller.on_status_update(PlaybackStatus::loaded(position, 60_000).playing(true));
            }
            black_box(controller.snapshot());
        });
    });

    group.bench_function("with_render_callback", |b| {
        b.iter(|| {
            let mut controller = ControllerBuilder::new(options())
                .on_render(|directives| {
                    black_box(directives);
                })
                .mount(NullMedia, FrameScheduler::new());
            for position in (0..=60_000).step_by(250) {
                controller.on_status_update(PlaybackStatus::loaded(position, 60_000).playing(true));
            }
        });
    });

    group.finish();
}

/// Benchmark building render directives for a settled overlay.
fn bench_directives(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_updates");

    let mut controller = ControllerBuilder::new(PlayerOptions {
        mute_visible: true,
        fullscreen_visible: true,
        ..options()
    })
    .mount(NullMedia, FrameScheduler::new());
    controller.on_status_update(PlaybackStatus::loaded(30_000, 60_000).playing(true));

    group.bench_function("directives", |b| {
        b.iter(|| black_box(controller.directives()));
    });

    group.finish();
}

/// Benchmark a full reveal, settle, and auto-hide cycle.
fn bench_toggle_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_updates");

    let mut controller = ControllerBuilder::new(options()).mount(NullMedia, FrameScheduler::new());
    controller.on_status_update(PlaybackStatus::loaded(0, 600_000).playing(true));

    group.bench_function("toggle_cycle", |b| {
        b.iter(|| {
            controller.request_toggle_controls();
            controller.advance_time(Duration::from_millis(2_600));
            black_box(controller.controls_visibility());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_status_stream,
    bench_directives,
    bench_toggle_cycle
);
criterion_main!(benches);
