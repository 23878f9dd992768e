//! Criterion benchmarks for the conversion hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sheetpack::image::ImageRgb8;
use sheetpack::layout::SheetLayout;
use sheetpack::{linearize, pack};

/// Deterministic test sheet with varied pixel values.
fn make_sheet(size: u32) -> ImageRgb8 {
    let mut img = ImageRgb8::new(size, size);
    for y in 0..size {
        for x in 0..size {
            img.set(x, y, ((x & 0xFF) as u8, (y & 0xFF) as u8, ((x ^ y) & 0xFF) as u8));
        }
    }
    img
}

fn bench_linearize(c: &mut Criterion) {
    let mut group = c.benchmark_group("linearize");
    for &size in &[64u32, 256] {
        let img = make_sheet(size);
        let layout = SheetLayout::new(32, 32);
        group.throughput(Throughput::Elements(size as u64 * size as u64));
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| linearize::linearize(black_box(&img), black_box(&layout)).unwrap())
        });
    }
    group.finish();
}

fn bench_linearize_transparent(c: &mut Criterion) {
    let img = make_sheet(256);
    let mut layout = SheetLayout::new(32, 32);
    layout.transparent_from_top_left = true;
    c.bench_function("linearize_transparent_256x256", |b| {
        b.iter(|| linearize::linearize(black_box(&img), black_box(&layout)).unwrap())
    });
}

fn bench_pack(c: &mut Criterion) {
    let pixels: Vec<u16> = (0..65536u32).map(|i| i as u16).collect();
    c.bench_function("pack_64k", |b| b.iter(|| pack::pack(black_box(&pixels))));
}

criterion_group!(
    benches,
    bench_linearize,
    bench_linearize_transparent,
    bench_pack
);
criterion_main!(benches);
