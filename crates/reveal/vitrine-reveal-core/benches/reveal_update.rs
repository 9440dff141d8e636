use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitrine_reveal::{
    ElementHost, LayoutTable, Property, Rect, RevealRegistry, ScrollTriggerSpec, TweenSpec,
    Viewport, VisualState,
};

fn build_layout(sections: usize) -> LayoutTable {
    let mut layout = LayoutTable::default();
    for i in 0..sections {
        layout.insert(&format!("section.{i}"), Rect::new(i as f32 * 400.0, 0.0, 1280.0, 300.0));
    }
    layout
}

fn build_registry(layout: &dyn ElementHost, sections: usize) -> RevealRegistry {
    let mut reg = RevealRegistry::default();
    for i in 0..sections {
        let key = format!("section.{i}");
        let spec = ScrollTriggerSpec::reveal(
            &key,
            "top bottom-=100",
            VisualState::hidden_offset(0.0, 50.0),
            VisualState::default()
                .with(Property::Y, 0.0)
                .with(Property::Opacity, 1.0),
        )
        .expect("static threshold")
        .with_tween(TweenSpec::new(0.8));
        reg.register(spec, layout);
    }
    reg
}

fn bench_update(c: &mut Criterion) {
    let sections = 200;
    let layout = build_layout(sections);
    let doc = sections as f32 * 400.0 + 800.0;

    c.bench_function("reveal_update_sweep_200", |b| {
        let mut reg = build_registry(&layout, sections);
        let mut scroll = 0.0f32;
        b.iter(|| {
            scroll = (scroll + 37.0) % (doc - 800.0);
            let out = reg.update(Viewport::new(scroll, 1280.0, 800.0, doc), 1.0 / 60.0);
            black_box(out.changes.len());
        });
    });

    c.bench_function("reveal_update_idle_200", |b| {
        let mut reg = build_registry(&layout, sections);
        let vp = Viewport::new(0.0, 1280.0, 800.0, doc);
        reg.update(vp, 0.0);
        b.iter(|| {
            let out = reg.update(black_box(vp), 1.0 / 60.0);
            black_box(out.is_empty());
        });
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
