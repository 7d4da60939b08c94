use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grayscope::{Raster, energy_ratio, spectrum};

fn gradient_raster(width: usize, height: usize) -> Raster {
    let data: Vec<u8> = (0..width * height)
        .map(|i| ((i * 7) % 256) as u8)
        .collect();
    Raster::grayscale(width, height, data).unwrap()
}

fn bench_spectrum_small(c: &mut Criterion) {
    let raster = gradient_raster(64, 64);
    c.bench_function("spectrum_64x64", |b| b.iter(|| spectrum(black_box(&raster))));
}

fn bench_spectrum_medium(c: &mut Criterion) {
    let raster = gradient_raster(256, 256);
    c.bench_function("spectrum_256x256", |b| {
        b.iter(|| spectrum(black_box(&raster)))
    });
}

fn bench_spectrum_large(c: &mut Criterion) {
    let raster = gradient_raster(640, 480);
    c.bench_function("spectrum_640x480", |b| {
        b.iter(|| spectrum(black_box(&raster)))
    });
}

fn bench_energy_ratio_medium(c: &mut Criterion) {
    let raster = gradient_raster(256, 256);
    c.bench_function("energy_ratio_256x256", |b| {
        b.iter(|| energy_ratio(black_box(&raster)))
    });
}

criterion_group!(
    benches,
    bench_spectrum_small,
    bench_spectrum_medium,
    bench_spectrum_large,
    bench_energy_ratio_medium
);
criterion_main!(benches);
