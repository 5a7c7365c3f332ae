//! Performance benchmarks for greeting list rendering.
//!
//! Tests full-frame render time for different list sizes and spring
//! stepping cost for many live animations.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greetdeck::anim::Spring;
use greetdeck::app::App;
use greetdeck::state::default_labels;
use greetdeck::storage::MemoryStore;
use greetdeck::ui::render;
use ratatui::{backend::TestBackend, Terminal};

fn build_app(rows: usize) -> App {
    let mut app = App::new(default_labels(rows), Box::new(MemoryStore::new()));
    app.continue_to_greetings();
    app.update_terminal_dimensions(120, 40);
    app
}

/// Benchmark a full-frame draw of the greeting list. Windowing should make
/// this flat across list sizes.
fn bench_greetings_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("greetings_render");

    for rows in [10usize, 100, 1_000, 10_000].iter() {
        let mut app = build_app(*rows);
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_rows", rows)),
            rows,
            |b, _| {
                b.iter(|| {
                    terminal
                        .draw(|f| {
                            render(f, black_box(&app));
                        })
                        .unwrap();
                    app.mark_dirty();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a render with expanded, mid-animation rows in the window.
fn bench_render_with_live_springs(c: &mut Criterion) {
    let mut app = build_app(1_000);
    for index in 0..8 {
        app.toggle_row(index);
    }
    for _ in 0..4 {
        app.tick(); // springs in flight, not settled
    }

    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();

    c.bench_function("greetings_render_animating", |b| {
        b.iter(|| {
            terminal
                .draw(|f| {
                    render(f, black_box(&app));
                })
                .unwrap();
        });
    });
}

/// Benchmark stepping a batch of springs, the per-tick animation cost.
fn bench_spring_step(c: &mut Criterion) {
    c.bench_function("spring_step_1000", |b| {
        let mut springs: Vec<Spring> = (0..1_000).map(|_| Spring::new(0.0, 2.0)).collect();
        b.iter(|| {
            for spring in springs.iter_mut() {
                black_box(spring.step(0.016));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_greetings_render,
    bench_render_with_live_springs,
    bench_spring_step
);
criterion_main!(benches);
