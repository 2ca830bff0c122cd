/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use aif::aif_core::colorspace::ColorSpace;
use aif::rle::{compress_row, decompress_row, max_compressed_row_size};
use aif_benches::sample_pixels;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const WIDTH: usize = 4096;

fn bench_rows(c: &mut Criterion, name: &str, max_run: usize) {
    let row = sample_pixels(WIDTH, 1, ColorSpace::RGB, max_run);

    let mut compressed = Vec::with_capacity(max_compressed_row_size(WIDTH, 3));
    compress_row(&row, 3, &mut compressed);

    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(row.len() as u64));

    group.bench_function("compress", |b| {
        let mut out = Vec::with_capacity(max_compressed_row_size(WIDTH, 3));
        b.iter(|| {
            out.clear();
            black_box(compress_row(black_box(&row), 3, &mut out))
        })
    });

    group.bench_function("decompress", |b| {
        let mut out = vec![0; row.len()];
        b.iter(|| black_box(decompress_row(black_box(&compressed), &mut out, 3)))
    });
}

fn bench_rle(c: &mut Criterion) {
    bench_rows(c, "rle: noise", 1);
    bench_rows(c, "rle: short runs", 8);
    bench_rows(c, "rle: long runs", 512);
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_rle);

criterion_main!(benches);
