use polar_chart::core::{
    OutlineStyle, Point, RadialPlacement, Table, pretty_ticks, reference_circles, segments,
};
use polar_chart::render::{Color, NullRenderer};
use polar_chart::{RadarChart, RadarChartConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_segments_12(c: &mut Criterion) {
    let names: Vec<String> = (0..12).map(|i| format!("v{i}")).collect();
    let values: Vec<f64> = (0..12).map(|i| 0.3 + (i as f64 / 12.0) * 0.7).collect();
    let colors = vec![Color::GRAY; 12];
    let placement = RadialPlacement::new(Point::new(3.0, 2.0), 0.4).with_rotation_deg(90.0);

    c.bench_function("segments_12", |b| {
        b.iter(|| {
            let _ = segments(
                black_box(&names),
                black_box(&values),
                black_box(&colors),
                black_box(placement),
                OutlineStyle::SEGMENT,
            )
            .expect("segments should succeed");
        })
    });
}

fn bench_reference_circles(c: &mut Criterion) {
    let placement = RadialPlacement::new(Point::new(0.0, 0.0), 0.4);

    c.bench_function("ticks_and_reference_circles", |b| {
        b.iter(|| {
            let ticks = pretty_ticks(black_box(3.53), black_box(4));
            let _ = reference_circles(placement, &ticks);
        })
    });
}

fn bench_build_frame_100(c: &mut Criterion) {
    let columns = ["speed", "power", "weight", "range", "price", "comfort"];
    let rows: Vec<(String, Vec<f64>)> = (0..100)
        .map(|i| {
            let t = i as f64;
            let row = (0..columns.len())
                .map(|j| 10.0 + ((t + j as f64) / 7.0).sin() * 5.0 + j as f64)
                .collect();
            (format!("row {i}"), row)
        })
        .collect();
    let table = Table::from_numeric_rows(&columns, rows).expect("valid generated table");
    let chart = RadarChart::new(NullRenderer::default(), RadarChartConfig::default())
        .expect("chart init");

    c.bench_function("build_frame_100_rows", |b| {
        b.iter(|| {
            let _ = chart
                .build_frame(black_box(&table))
                .expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_segments_12,
    bench_reference_circles,
    bench_build_frame_100
);
criterion_main!(benches);
