// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the quadratic and cubic solvers, one per root shape.

#![allow(missing_docs, reason = "criterion generates undocumented items")]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use rootfinder::{cubic, quadratic, SolveOptions};

fn bench_quadratic(cc: &mut Criterion) {
    let cases = [
        ("quadratic two real roots", [1.0, 0.0, -9.0]),
        ("quadratic double root", [1.0, -10.0, 25.0]),
        ("quadratic conjugate pair", [1.0, 2.0, 5.0]),
    ];
    for (name, [a, b, c]) in cases {
        cc.bench_function(name, |bb| {
            bb.iter(|| quadratic(black_box(a), black_box(b), black_box(c), SolveOptions::all()));
        });
    }
}

fn bench_cubic(cc: &mut Criterion) {
    let cases = [
        ("cubic three real roots", [1.0, -6.0, 11.0, -6.0]),
        ("cubic real root and conjugate pair", [1.0, -13.0, 67.0, -175.0]),
        ("cubic single and double root", [1.0, -7.0, 16.0, -12.0]),
        ("cubic triple root", [1.0, -12.0, 48.0, -64.0]),
    ];
    for (name, [a, b, c, d]) in cases {
        cc.bench_function(name, |bb| {
            bb.iter(|| {
                cubic(
                    black_box(a),
                    black_box(b),
                    black_box(c),
                    black_box(d),
                    SolveOptions::all(),
                )
            });
        });
    }

    cc.bench_function("cubic real only", |bb| {
        bb.iter(|| {
            cubic(
                black_box(1.0),
                black_box(-13.0),
                black_box(67.0),
                black_box(-175.0),
                SolveOptions::real_only(),
            )
        });
    });
}

criterion_group!(benches, bench_quadratic, bench_cubic);
criterion_main!(benches);
