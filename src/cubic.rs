// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs as _;
use crate::epsilon::{clamp_unit, is_negligible};
use crate::{quadratic, Cubic, RootSet, SolveOptions};

/// √3 / 2
const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Find the roots of `a x³ + b x² + c x + d = 0`.
///
/// If `a` is exactly zero this is [`quadratic`]`(b, c, d)`. If `d` is
/// exactly zero, `0` is reported first, followed by the roots of
/// [`quadratic`]`(a, b, c)`.
///
/// Otherwise the cubic is normalized and depressed to `t³ + p t + q` with
/// `x = t - b / 3a` (see [`Cubic::depressed`]) and classified by
/// `Δ = (q/2)² + (p/3)³`:
///
/// - `Δ` and `q` both negligible: the triple root, reported once.
/// - `Δ` negligible: a single root followed by a double root, reported once.
/// - `Δ > 0`: the real root, followed (unless
///   [`real_only`](SolveOptions::real_only)) by a conjugate pair with the
///   positive imaginary part first.
/// - `Δ < 0`: three distinct real roots from the trigonometric form, in the
///   order `k = 0, 1, 2` of `2r cos((φ + 2πk) / 3)`.
///
/// "Negligible" means below [`EPSILON`](crate::EPSILON) in absolute value.
///
/// The coefficients must be finite. Use [`Cubic::try_new`] to check
/// untrusted input.
///
/// ```
/// use rootfinder::{cubic, SolveOptions};
///
/// // (x - 1)(x - 2)(x - 3)
/// let roots = cubic(1.0, -6.0, 11.0, -6.0, SolveOptions::real_only());
/// let mut roots = roots.as_real().unwrap().to_vec();
/// roots.sort_by(f64::total_cmp);
/// for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
///     assert!((root - expected).abs() < 1e-12);
/// }
/// ```
pub fn cubic(a: f64, b: f64, c: f64, d: f64, options: SolveOptions) -> RootSet<3> {
    if a == 0.0 {
        log::trace!("cubic: leading coefficient vanishes, solving as quadratic");
        return quadratic(b, c, d, options).into();
    }
    let mut roots = RootSet::new(options);
    if d == 0.0 {
        log::trace!("cubic: constant term vanishes, factoring out x");
        roots.push_real(0.0);
        roots.extend_from(quadratic(a, b, c, options));
        return roots;
    }

    let dep = Cubic::new(a, b, c, d).depressed();
    let (p, q, shift) = (dep.p, dep.q, dep.shift);
    let disc = dep.discriminant();
    if is_negligible(disc) {
        if is_negligible(q) {
            log::trace!("cubic: triple root");
            roots.push_real(shift);
        } else {
            log::trace!("cubic: single and double root, q = {q:e}");
            let u = (-0.5 * q).cbrt();
            roots.push_real(2.0 * u + shift);
            roots.push_real(-u + shift);
        }
    } else if disc > 0.0 {
        log::trace!("cubic: one real root and a conjugate pair, disc = {disc:e}");
        let sq = disc.sqrt();
        // Real cube roots, so the signs of the radicands survive.
        let u = (-0.5 * q + sq).cbrt();
        let v = (-0.5 * q - sq).cbrt();
        roots.push_real(u + v + shift);
        roots.push_conjugate_pair(-0.5 * (u + v) + shift, HALF_SQRT_3 * (u - v));
    } else {
        log::trace!("cubic: three distinct real roots, disc = {disc:e}");
        // p < 0 here, since a non-negative p would make disc non-negative.
        let r = (-p / 3.0).sqrt();
        let phi = clamp_unit(-q / (2.0 * r * r * r)).acos();
        for k in [0.0, 1.0, 2.0] {
            let angle = (phi + TAU * k) / 3.0;
            roots.push_real(2.0 * r * angle.cos() + shift);
        }
    }
    roots
}
