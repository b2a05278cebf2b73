// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lookout_motion::{FrameInput, LoopConfig, LoopEffect, MotionPreference, SmoothScroll, Ticker};

fn bench_ticker(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticker");
    group.bench_function("marquee_1000_frames", |b| {
        b.iter(|| {
            let mut ticker = Ticker::new(
                LoopConfig::marquee(),
                LoopEffect::Marquee { track_width: 2400.0 },
            );
            for frame in 0..1000_u32 {
                let now = f64::from(frame) * 16.7;
                let scroll = f64::from(frame % 120) * 25.0;
                ticker.frame(FrameInput::new(now, scroll, MotionPreference::Full));
            }
            black_box(ticker.position())
        });
    });
    group.bench_function("spin_transform_string", |b| {
        let mut ticker = Ticker::new(LoopConfig::spin(), LoopEffect::Spin);
        let mut now = 0.0;
        b.iter(|| {
            now += 16.7;
            ticker
                .frame(FrameInput::new(now, 0.0, MotionPreference::Full))
                .to_string()
        });
    });
    group.finish();
}

fn bench_smooth_scroll(c: &mut Criterion) {
    c.bench_function("smooth_scroll_full_run", |b| {
        b.iter(|| {
            let mut scroll = SmoothScroll::new(black_box(0.0), black_box(4200.0)).with_duration(900.0);
            let mut now = 0.0;
            loop {
                let frame = scroll.sample(now);
                if frame.finished {
                    break frame.offset;
                }
                now += 16.7;
            }
        });
    });
}

criterion_group!(benches, bench_ticker, bench_smooth_scroll);
criterion_main!(benches);
