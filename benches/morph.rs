use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use interlace_mask::{
    Bitplane,
    PackWord,
    RefineOrder,
    dilate_horizontal,
    dilate_vertical,
    erode_horizontal,
    erode_vertical,
    refine,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

fn random_plane<W: PackWord>() -> Bitplane<W> {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let mut plane = Bitplane::new(WIDTH, HEIGHT).unwrap();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            plane.set(x, y, rng.random_bool(0.3));
        }
    }
    plane
}

pub fn bench_horizontal(c: &mut Criterion) {
    c.bench_function("dilate_horizontal u64", |b| {
        let src = random_plane::<u64>();
        let mut dest = Bitplane::new(WIDTH, HEIGHT).unwrap();

        b.iter(|| dilate_horizontal(black_box(&mut dest), black_box(&src)))
    });
    c.bench_function("erode_horizontal u64", |b| {
        let src = random_plane::<u64>();
        let mut dest = Bitplane::new(WIDTH, HEIGHT).unwrap();

        b.iter(|| erode_horizontal(black_box(&mut dest), black_box(&src)))
    });
}

pub fn bench_vertical(c: &mut Criterion) {
    c.bench_function("dilate_vertical u64", |b| {
        let src = random_plane::<u64>();
        let mut dest = Bitplane::new(WIDTH, HEIGHT).unwrap();

        b.iter(|| dilate_vertical(black_box(&mut dest), black_box(&src)))
    });
    c.bench_function("erode_vertical u64", |b| {
        let src = random_plane::<u64>();
        let mut dest = Bitplane::new(WIDTH, HEIGHT).unwrap();

        b.iter(|| erode_vertical(black_box(&mut dest), black_box(&src)))
    });
}

pub fn bench_refine(c: &mut Criterion) {
    c.bench_function("refine u64 2 passes", |b| {
        let src = random_plane::<u64>();
        let mut mask = src.clone();
        let mut scratch = Bitplane::new(WIDTH, HEIGHT).unwrap();

        b.iter(|| {
            mask.clone_from(&src);
            refine(
                black_box(&mut mask),
                black_box(&mut scratch),
                black_box(2),
                RefineOrder::DilateFirst,
            )
        })
    });
}

criterion_group!(benches, bench_horizontal, bench_vertical, bench_refine);
criterion_main!(benches);
