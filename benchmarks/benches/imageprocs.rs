/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use aif::aif_core::bytestream::ZCursor;
use aif::aif_core::colorspace::ColorSpace;
use aif::{AifCompression, AifDecoder, AifImage, AifPixelFormat};
use aif_benches::sample_file;
use aif_imageprocs::brighten::Brighten;
use aif_imageprocs::grayscale::ColorConvert;
use aif_imageprocs::traits::OperationsTrait;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn sample_image() -> AifImage {
    let file = sample_file(1920, 1080, ColorSpace::RGB, 4, AifCompression::None);
    AifDecoder::new(ZCursor::new(&file)).decode_image().unwrap()
}

fn bench_operations(c: &mut Criterion) {
    let image = sample_image();
    let mut group = c.benchmark_group("imageprocs: RGB");

    group.throughput(Throughput::Bytes(image.pixels.len() as u64));

    group.bench_function("brighten", |b| {
        b.iter(|| {
            let mut img = image.clone();
            Brighten::new(30).execute(&mut img).unwrap();
            black_box(img)
        })
    });

    group.bench_function("rgb to grayscale", |b| {
        b.iter(|| {
            let mut img = image.clone();
            ColorConvert::new(AifPixelFormat::GRAY8)
                .execute(&mut img)
                .unwrap();
            black_box(img)
        })
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_operations);

criterion_main!(benches);
