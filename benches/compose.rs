use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use mosaic::compose;

pub fn compose_benchmarks(c: &mut Criterion) {
    let target = RgbImage::from_fn(70, 65, |x, y| {
        Rgb([(x * 3) as u8, (y * 3) as u8, (x + y) as u8])
    });
    let tiles: Vec<RgbImage> = (0..16u8)
        .map(|i| RgbImage::from_pixel(32, 32, Rgb([i * 16, i * 16, i * 16])))
        .collect();

    c.bench_function("compose_70x65_16_tiles", |bench| {
        bench.iter(|| compose(&target, &tiles, 32))
    });
}

criterion_group!(benches, compose_benchmarks);
criterion_main!(benches);
