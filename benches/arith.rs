use biguint::Uint;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn operand(limbs: usize, seed: u64) -> Uint {
    // Deterministic limb pattern; a weak xorshift is plenty for shaping
    // operands.
    let mut state = seed | 1;
    let raw: Vec<u64> = (0..limbs)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect();
    Uint::from_be_limbs(raw)
}

pub fn bench_mul(c: &mut Criterion) {
    let a64 = operand(64, 0x9e3779b97f4a7c15);
    let b64 = operand(64, 0xd1b54a32d192ed03);
    c.bench_function("mul 64x64 limbs (long)", |b| {
        b.iter(|| black_box(&a64) * black_box(&b64))
    });

    let a512 = operand(512, 0x2545f4914f6cdd1d);
    let b512 = operand(512, 0x94d049bb133111eb);
    c.bench_function("mul 512x512 limbs (karatsuba)", |b| {
        b.iter(|| black_box(&a512) * black_box(&b512))
    });

    let a32 = operand(32, 0xbf58476d1ce4e5b9);
    c.bench_function("mul 32x512 limbs (lopsided)", |b| {
        b.iter(|| black_box(&a32) * black_box(&b512))
    });
}

pub fn bench_divmod(c: &mut Criterion) {
    let dividend = operand(256, 0xff51afd7ed558ccd);
    let divisor = operand(32, 0xc4ceb9fe1a85ec53);
    c.bench_function("divmod 256/32 limbs", |b| {
        b.iter(|| black_box(&dividend).divmod(black_box(&divisor)))
    });

    let small = Uint::from(0xfedcba9876543210u64);
    c.bench_function("divmod 256/1 limbs", |b| {
        b.iter(|| black_box(&dividend).divmod(black_box(&small)))
    });
}

pub fn bench_format(c: &mut Criterion) {
    let value = operand(64, 0x853c49e6748fea9b);
    c.bench_function("format base 10, 64 limbs", |b| {
        b.iter(|| black_box(&value).to_str_radix(10))
    });
    c.bench_function("format base 16, 64 limbs", |b| {
        b.iter(|| black_box(&value).to_str_radix(16))
    });
}

criterion_group!(benches, bench_mul, bench_divmod, bench_format);
criterion_main!(benches);
