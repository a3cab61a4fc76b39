use chart_kit::api::{ChartStyle, LineChart, LineChartData, XAxisLabels};
use chart_kit::core::{
    BarDataSet, DataPoint, LineDataSet, Rect, Viewport, project_bars, project_line_points,
    x_axis_scale_factor,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(100.0 + (t * 0.05).sin() * 25.0).with_label(format!("{i}"))
        })
        .collect()
}

fn bench_scale_factor(c: &mut Criterion) {
    c.bench_function("x_axis_scale_factor", |b| {
        b.iter(|| x_axis_scale_factor(black_box(12), black_box(Some(30))))
    });
}

fn bench_line_projection_10k(c: &mut Criterion) {
    let set = LineDataSet::new(sample_points(10_000));
    let bounds = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    c.bench_function("line_projection_10k", |b| {
        b.iter(|| {
            let _ = project_line_points(black_box(&set), black_box(bounds))
                .expect("projection should succeed");
        })
    });
}

fn bench_bar_projection_10k(c: &mut Criterion) {
    let set = BarDataSet::new(sample_points(10_000));
    let bounds = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    c.bench_function("bar_projection_10k", |b| {
        b.iter(|| {
            let _ = project_bars(black_box(&set), black_box(bounds))
                .expect("projection should succeed");
        })
    });
}

fn bench_modifier_render_2k(c: &mut Criterion) {
    let style = ChartStyle::default().with_x_axis_title("Index");
    let mut data = LineChartData::new(LineDataSet::new(sample_points(2_000)), style);
    let mut modifier = XAxisLabels::attach(&mut data);
    let viewport = Viewport::new(1600, 900);

    c.bench_function("x_axis_labels_render_2k", |b| {
        b.iter(|| {
            let _ = modifier
                .render(&LineChart::new(&data), black_box(&data), black_box(viewport))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_factor,
    bench_line_projection_10k,
    bench_bar_projection_10k,
    bench_modifier_render_2k
);
criterion_main!(benches);
