// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use lookout_page::memory::MemoryHost;
use lookout_page::{DomHost, Page, PageConfig, PageEvent};
use lookout_scroll_spy::{ScrollSpy, SectionDescriptor};
use lookout_visibility::{RootMargin, intersect};

fn bench_spy(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_spy");
    for count in [8_u32, 64] {
        let mut spy = ScrollSpy::new(200.0);
        spy.set_sections((0..count).map(|i| SectionDescriptor::new(i, f64::from(i) * 700.0, 700.0)));
        let end = f64::from(count) * 700.0;
        group.bench_function(format!("sweep_{count}"), |b| {
            b.iter(|| {
                let mut offset = 0.0;
                while offset < end {
                    black_box(spy.update(offset));
                    offset += 37.0;
                }
            });
        });
    }
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let root = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let margin = RootMargin::parse("0px 0px -5% 0px").unwrap_or(RootMargin::ZERO);
    c.bench_function("intersect_sweep", |b| {
        b.iter(|| {
            let mut visible = 0;
            for i in 0..1000_u32 {
                let y = f64::from(i) * 3.0 - 1000.0;
                let target = Rect::new(0.0, y, 1280.0, y + 100.0);
                if intersect(black_box(target), root, &margin).is_intersecting {
                    visible += 1;
                }
            }
            visible
        });
    });
}

fn bench_page_scroll(c: &mut Criterion) {
    let mut host = MemoryHost::new(Size::new(1280.0, 800.0));
    let body = host.body();
    let nav = host.append(body, "nav#navbar");
    let main = host.append(body, "main");
    for i in 0..16_u32 {
        let link = host.append(nav, "a.scrollto");
        host.set_attribute(link, "href", &format!("#s{i}"));
        let section = host.append(main, &format!("section#s{i}"));
        let top = f64::from(i) * 800.0;
        host.set_rect(section, Rect::new(0.0, top, 1280.0, top + 800.0));
    }
    host.append(body, "a.back-to-top");
    let mut page = Page::mount(host, PageConfig::default());
    let mut offset = 0.0;
    c.bench_function("page_scroll_event", |b| {
        b.iter(|| {
            offset = (offset + 53.0) % 12_800.0;
            page.host_mut().set_scroll_offset(offset);
            page.handle(PageEvent::Scroll)
        });
    });
}

criterion_group!(benches, bench_spy, bench_intersect, bench_page_scroll);
criterion_main!(benches);
