//! Benchmarks for chart configuration and theme toggling
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seller_dashboard::*;

fn bench_chart_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_config");
    let series = SalesSeries::demo();
    let settings = ChartSettings::default();

    for theme in Theme::ALL {
        let palette = ChartPalette::for_theme(theme);

        group.bench_function(format!("build_{}", theme), |b| {
            b.iter(|| ChartConfig::sales_line(black_box(&series), black_box(&palette), &settings))
        });

        let config = ChartConfig::sales_line(&series, &palette, &settings);

        group.bench_function(format!("to_json_{}", theme), |b| {
            b.iter(|| black_box(&config).to_json().unwrap())
        });
    }

    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");

    group.bench_function("toggle_theme", |b| {
        let mut controller = PageController::new(
            HeadlessPage::new(),
            RecordingRenderer::new(),
            MemoryStore::new(),
            DashboardConfig::default(),
        );
        controller.initialize();

        b.iter(|| controller.toggle_theme().unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_chart_config, bench_toggle);
criterion_main!(benches);
