use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::DynamicImage;
use img_forge::processing::FileTask;
use img_forge::{encode_image, format_file_size, resize_to_fit, Config, OutputFormat};
use std::path::Path;
use tempfile::TempDir;

fn bench_resize_to_fit(c: &mut Criterion) {
    let img = DynamicImage::new_rgb8(1920, 1080);

    c.bench_function("resize_1080p_to_640", |b| {
        b.iter(|| resize_to_fit(black_box(img.clone()), Some(640), None))
    });
}

fn bench_encode_jpeg(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("bench.jpg");
    let img = DynamicImage::new_rgb8(640, 480);
    let config = Config {
        format: OutputFormat::Jpg,
        overwrite: true,
        ..Config::default()
    };

    c.bench_function("encode_jpeg_640x480", |b| {
        b.iter(|| encode_image(black_box(&img), &output, &config))
    });
}

fn bench_task_derivation(c: &mut Criterion) {
    let config = Config::default();

    c.bench_function("file_task_derivation", |b| {
        b.iter(|| {
            FileTask::new(
                black_box(Path::new("/in/a/b/photo.png")),
                Path::new("/in"),
                Path::new("/out"),
                &config,
            )
        })
    });
}

fn bench_format_file_size(c: &mut Criterion) {
    c.bench_function("format_file_size", |b| {
        b.iter(|| format_file_size(black_box(123_456_789)))
    });
}

criterion_group!(
    benches,
    bench_resize_to_fit,
    bench_encode_jpeg,
    bench_task_derivation,
    bench_format_file_size
);
criterion_main!(benches);
