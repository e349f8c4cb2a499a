use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ntnda_image_rs::image_pipeline::{
    ConvertConfig, Frame, FrameConverter, FrameDescriptor, ManualLimits, ScalePolicy,
};

fn generate_mock_frame(width: usize, height: usize) -> Vec<u16> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 4096) as u16);
        }
    }
    data
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (512, 512, "512x512"),
        (1024, 1024, "1024x1024"),
        (2048, 2048, "2048x2048"),
    ];

    for (width, height, label) in sizes {
        let data = generate_mock_frame(width, height);
        let descriptor = FrameDescriptor::from_sizes(&[width, height]);

        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, data| {
            let converter = FrameConverter::new();
            let config = ConvertConfig::default();
            let frame = Frame::new(data, descriptor.clone());

            b.iter(|| converter.convert(black_box(&frame), &config));
        });
    }

    group.finish();
}

fn benchmark_scale_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_policies");
    let data = generate_mock_frame(1024, 1024);
    let frame = Frame::new(&data, FrameDescriptor::from_sizes(&[1024, 1024]));

    let policies = vec![
        (ScalePolicy::Auto, "auto"),
        (ScalePolicy::Manual, "manual"),
    ];

    for (policy, label) in policies {
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            let converter = FrameConverter::new();
            let config = ConvertConfig::builder()
                .policy(policy)
                .manual_limits(ManualLimits::default())
                .build();

            b.iter(|| converter.convert(black_box(&frame), &config));
        });
    }

    group.finish();
}

fn benchmark_limit_reporting_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("limit_reporting_overhead");
    let data = generate_mock_frame(1024, 1024);
    let frame = Frame::new(&data, FrameDescriptor::from_sizes(&[1024, 1024]));
    let converter = FrameConverter::new();

    group.bench_function("manual_with_limits", |b| {
        let config = ConvertConfig::builder()
            .policy(ScalePolicy::Manual)
            .show_limits(true)
            .build();
        b.iter(|| converter.convert(black_box(&frame), &config));
    });

    group.bench_function("manual_without_limits", |b| {
        let config = ConvertConfig::builder()
            .policy(ScalePolicy::Manual)
            .show_limits(false)
            .build();
        b.iter(|| converter.convert(black_box(&frame), &config));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_scale_policies,
    benchmark_limit_reporting_overhead
);
criterion_main!(benches);
