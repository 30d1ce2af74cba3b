// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs as _;
use crate::epsilon::is_negligible;
use crate::{RootSet, SolveOptions};

/// Find the roots of `a x² + b x + c = 0`.
///
/// If `a` is negligible (see [`EPSILON`](crate::EPSILON)) the equation is
/// solved as the linear `b x + c = 0`. If `b` is negligible as well, the
/// result is empty. Note that this also happens for the all-zero polynomial,
/// which every `x` satisfies.
///
/// Otherwise, with `D = b² - 4ac`:
///
/// - a negligible `D` gives the double root `-b / 2a`, reported once;
/// - a positive `D` gives `(-b + √D) / 2a` followed by `(-b - √D) / 2a`;
/// - a negative `D` gives the conjugate pair `-b / 2a ± i √-D / 2a`, positive
///   imaginary part first, or nothing at all with
///   [`real_only`](SolveOptions::real_only).
///
/// The coefficients must be finite. Use [`Quadratic::try_new`](crate::Quadratic::try_new)
/// to check untrusted input.
///
/// ```
/// use rootfinder::{quadratic, Complex64, SolveOptions};
///
/// let roots = quadratic(1.0, 2.0, 5.0, SolveOptions::default());
/// assert_eq!(
///     roots.as_complex().unwrap(),
///     &[Complex64::new(-1.0, 2.0), Complex64::new(-1.0, -2.0)]
/// );
/// ```
pub fn quadratic(a: f64, b: f64, c: f64, options: SolveOptions) -> RootSet<2> {
    let mut roots = RootSet::new(options);
    if is_negligible(a) {
        if is_negligible(b) {
            log::trace!("quadratic: constant polynomial, no roots reported");
        } else {
            log::trace!("quadratic: linear");
            roots.push_real(-c / b);
        }
        return roots;
    }
    let disc = b * b - 4.0 * a * c;
    let a2 = 2.0 * a;
    if is_negligible(disc) {
        log::trace!("quadratic: double root, D = {disc:e}");
        roots.push_real(-b / a2);
    } else if disc > 0.0 {
        log::trace!("quadratic: two real roots, D = {disc:e}");
        let sq = disc.sqrt();
        roots.push_real((-b + sq) / a2);
        roots.push_real((-b - sq) / a2);
    } else {
        log::trace!("quadratic: conjugate pair, D = {disc:e}");
        roots.push_conjugate_pair(-b / a2, (-disc).sqrt() / a2);
    }
    roots
}
