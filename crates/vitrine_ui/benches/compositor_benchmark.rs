//! Benchmark for the per-frame compositor paths.
//!
//! TARGET: hit-test and full render pass for 1,000 windows well under 1ms
//!
//! Run with: cargo bench --package vitrine_ui --bench compositor_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vitrine_ui::{Button, Compositor, InputState, MouseButton, Point, Rect, RichWindow, UIRenderer};

fn populated(count: u16) -> Compositor {
    let mut compositor = Compositor::new();
    for i in 0..count {
        let offset = f32::from(i % 40) * 10.0;
        let window = RichWindow::new(
            format!("window {i}"),
            Rect::new(offset, offset, 300.0, 200.0),
            i32::from(i % 16),
        )
        .with_child(Button::new("ok", Rect::new(10.0, 150.0, 60.0, 24.0), |_| {}));
        compositor.add_window(window);
    }
    compositor
}

fn benchmark_hit_test(c: &mut Criterion) {
    let compositor = populated(1_000);
    let mut group = c.benchmark_group("hit_test");
    group.throughput(Throughput::Elements(1));

    group.bench_function("window_at_1000", |b| {
        b.iter(|| compositor.window_at(black_box(Point::new(205.0, 205.0))));
    });

    group.bench_function("window_title_at_1000", |b| {
        b.iter(|| compositor.window_title_at(black_box(Point::new(205.0, 205.0))));
    });

    group.finish();
}

fn benchmark_render_pass(c: &mut Criterion) {
    let compositor = populated(1_000);
    let mut renderer = UIRenderer::new(1920.0, 1080.0);

    c.bench_function("draw_all_windows_1000", |b| {
        b.iter(|| {
            renderer.begin_frame();
            compositor.draw_all_windows(&mut renderer);
            black_box(renderer.command_count())
        });
    });
}

fn benchmark_idle_check(c: &mut Criterion) {
    let compositor = populated(1_000);
    let mut input = InputState::new();
    input.mouse_button_down(MouseButton::Left);
    input.begin_frame();

    // Button held, no release edge: the common per-frame case.
    c.bench_function("check_buttons_no_release", |b| {
        b.iter(|| compositor.check_buttons(black_box(&input)));
    });
}

criterion_group!(
    benches,
    benchmark_hit_test,
    benchmark_render_pass,
    benchmark_idle_check
);
criterion_main!(benches);
