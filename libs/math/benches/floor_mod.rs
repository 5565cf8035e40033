use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_lib::modular::{difference_residue, residue_difference, FloorMod, Modulus};
use num_bigint::BigInt;

fn run_floor_mod_bench(c: &mut Criterion) {
    let dividend = -10293817823993_i64;
    c.bench_function("fmod i64", |b| b.iter(|| black_box(dividend).fmod(black_box(256))));
}

fn run_floor_mod_bench_big(c: &mut Criterion) {
    let dividend = -(BigInt::from(1) << 200);
    let divisor = BigInt::from(256);
    c.bench_function("fmod bigint", |b| b.iter(|| black_box(&dividend).fmod(black_box(&divisor))));
}

fn run_sub_bench(c: &mut Criterion) {
    let modulus = Modulus::BYTE;
    c.bench_function("residue_difference", |b| {
        b.iter(|| residue_difference(black_box(5), black_box(10), black_box(modulus)))
    });
    c.bench_function("difference_residue", |b| {
        b.iter(|| difference_residue(black_box(5), black_box(10), black_box(modulus)))
    });
}

criterion_group!(
    name = floor_mod_bench;
    config = Criterion::default();
    targets = run_floor_mod_bench, run_floor_mod_bench_big
);

criterion_group!(
    name = sub_bench;
    config = Criterion::default();
    targets = run_sub_bench
);

criterion_main!(floor_mod_bench, sub_bench);
