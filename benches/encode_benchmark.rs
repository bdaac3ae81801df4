use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fm128_radar::models::{
    MissingDataPolicy, ObservationGrid, PointMode, RadarObservationSet, Station, VerticalProfile,
};
use fm128_radar::processors::IntegrityChecker;
use fm128_radar::readers::Fm128Reader;
use fm128_radar::Fm128Writer;
use ndarray::{Array2, Array3};

// Create a synthetic volume for benchmarking
fn create_test_volume(levels: usize, rows: usize, cols: usize) -> RadarObservationSet {
    let shape = (levels, rows, cols);
    let latitude = Array2::from_shape_fn((rows, cols), |(r, _)| 50.0 + r as f64 * 0.01);
    let longitude = Array2::from_shape_fn((rows, cols), |(_, c)| 4.0 + c as f64 * 0.01);

    let elevation = Array3::from_shape_fn(shape, |(l, _, _)| 500.0 + l as f64 * 750.0);
    let reflectivity = Array3::from_shape_fn(shape, |(l, r, c)| ((l + r + c) % 60) as f64);
    // Roughly a third of the upper levels carry no echo
    let missing = Array3::from_shape_fn(shape, |(l, r, c)| l > levels / 2 && (r + c) % 3 == 0);

    RadarObservationSet::new(
        Station::new("NL61", 52.953, 4.790, 50.0),
        NaiveDate::from_ymd_opt(2019, 6, 12)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap(),
        ObservationGrid::shared(latitude, longitude),
        VerticalProfile::new(
            elevation,
            Array3::from_elem(shape, -3.5),
            Array3::zeros(shape),
            Array3::from_elem(shape, 2.0),
            reflectivity,
            Array3::zeros(shape),
            Array3::from_elem(shape, 1.5),
        )
        .with_missing_mask(missing),
    )
}

fn benchmark_encode_volume(c: &mut Criterion) {
    let radars = vec![create_test_volume(14, 360, 240)];
    let writer = Fm128Writer::new().with_point_mode(PointMode::SharedGrid);

    let mut group = c.benchmark_group("encode_volume");
    group.sample_size(10);
    group.bench_function("14x360x240", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64 * 1024 * 1024);
            let summary = writer.write_to(black_box(&radars), &mut out).unwrap();
            black_box((summary.total_points(), out.len()))
        })
    });
    group.finish();
}

fn benchmark_missing_data_policy(c: &mut Criterion) {
    let radars = vec![create_test_volume(6, 60, 60)];
    let mut group = c.benchmark_group("encode_by_policy");

    for policy in [MissingDataPolicy::None, MissingDataPolicy::Mask] {
        let writer = Fm128Writer::new().with_missing_data_policy(policy);
        group.bench_with_input(
            BenchmarkId::new("policy", format!("{:?}", policy)),
            &radars,
            |b, radars| {
                b.iter(|| {
                    let mut out = Vec::new();
                    let summary = writer.write_to(radars, &mut out).unwrap();
                    black_box(summary.total_measurements())
                })
            },
        );
    }
    group.finish();
}

fn benchmark_read_and_check(c: &mut Criterion) {
    let radars = vec![create_test_volume(6, 60, 60), create_test_volume(4, 30, 30)];
    let mut out = Vec::new();
    Fm128Writer::new().write_to(&radars, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    c.bench_function("read_and_check", |b| {
        b.iter(|| {
            let document = Fm128Reader::new().parse_str(black_box(&text)).unwrap();
            let report = IntegrityChecker::new().check_document(&document);
            black_box(report.total_points)
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode_volume,
    benchmark_missing_data_policy,
    benchmark_read_and_check
);
criterion_main!(benches);
