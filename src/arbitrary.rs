// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polynomial generators for property tests using `arbitrary`.

use arbitrary::Unstructured;

use crate::{Cubic, Quadratic};

fn check_finite(f: f64) -> Result<f64, arbitrary::Error> {
    if f.is_finite() {
        Ok(f)
    } else {
        Err(arbitrary::Error::IncorrectFormat)
    }
}

pub(crate) fn finite_float(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    check_finite(u.arbitrary()?)
}

/// Generate a float, but give it a chance to be close to another float.
fn another_finite_float(orig: f64, u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    let close: bool = u.arbitrary()?;
    if close {
        let ulps: i32 = u.int_in_range(-32..=32)?;
        let scale = 1.0f64 + f64::from(ulps) * f64::EPSILON;
        check_finite(orig * scale)
    } else {
        finite_float(u)
    }
}

/// A small integer, as a float.
fn small_int(u: &mut Unstructured<'_>, max: i32) -> Result<f64, arbitrary::Error> {
    let n: i32 = u.int_in_range(-max..=max)?;
    Ok(f64::from(n))
}

/// A small non-zero integer, as a float.
fn leading(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    let magnitude: i32 = u.int_in_range(1..=4)?;
    let negative: bool = u.arbitrary()?;
    Ok(f64::from(if negative { -magnitude } else { magnitude }))
}

/// An arbitrary quadratic with finite coefficients.
///
/// Neighboring coefficients are often close to one another, which makes
/// near-zero discriminants likely.
pub(crate) fn quadratic(u: &mut Unstructured<'_>) -> Result<Quadratic, arbitrary::Error> {
    let a = finite_float(u)?;
    let b = another_finite_float(a, u)?;
    let c = another_finite_float(b, u)?;
    Ok(Quadratic::new(a, b, c))
}

/// An arbitrary cubic with finite coefficients.
pub(crate) fn cubic(u: &mut Unstructured<'_>) -> Result<Cubic, arbitrary::Error> {
    let a = finite_float(u)?;
    let b = another_finite_float(a, u)?;
    let c = another_finite_float(b, u)?;
    let d = another_finite_float(c, u)?;
    Ok(Cubic::new(a, b, c, d))
}

/// The monic factor `x² + s x + t` for two integer roots, or for a
/// conjugate pair `m ± n i` with integer `m` and `n`.
fn monic_quadratic_factor(u: &mut Unstructured<'_>) -> Result<(f64, f64), arbitrary::Error> {
    let complex: bool = u.arbitrary()?;
    if complex {
        let m = small_int(u, 6)?;
        let n: i32 = u.int_in_range(1..=6)?;
        let n = f64::from(n);
        Ok((-2.0 * m, m * m + n * n))
    } else {
        // Repeated roots are welcome.
        let r0 = small_int(u, 6)?;
        let r1 = if u.arbitrary()? { r0 } else { small_int(u, 6)? };
        Ok((-(r0 + r1), r0 * r1))
    }
}

/// A quadratic with small integer roots (or a conjugate pair with integer
/// parts), so that its coefficients are exact.
pub(crate) fn quadratic_from_roots(
    u: &mut Unstructured<'_>,
) -> Result<Quadratic, arbitrary::Error> {
    let lead = leading(u)?;
    let (s, t) = monic_quadratic_factor(u)?;
    Ok(Quadratic::new(lead, lead * s, lead * t))
}

/// A cubic with one integer root times a [`quadratic_from_roots`] factor.
pub(crate) fn cubic_from_roots(u: &mut Unstructured<'_>) -> Result<Cubic, arbitrary::Error> {
    let lead = leading(u)?;
    let r = small_int(u, 6)?;
    let (s, t) = monic_quadratic_factor(u)?;
    // (x - r)(x² + s x + t)
    Ok(Cubic::new(
        lead,
        lead * (s - r),
        lead * (t - r * s),
        -lead * r * t,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planted_roots_are_roots() {
        arbtest::arbtest(|u| {
            let q = quadratic_from_roots(u)?;
            assert!(q.a != 0.0);
            let c = cubic_from_roots(u)?;
            assert!(c.a != 0.0);
            assert!(c.coeffs().iter().all(|x| x.fract() == 0.0));
            Ok(())
        });
    }

    #[test]
    fn finite_generators() {
        arbtest::arbtest(|u| {
            assert!(quadratic(u)?.is_finite());
            assert!(cubic(u)?.is_finite());
            Ok(())
        });
    }
}
