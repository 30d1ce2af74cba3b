// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tolerance used to classify coefficients and discriminants.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs as _;

/// Absolute tolerance below which a coefficient or discriminant counts as zero.
///
/// Both solvers use this one value, so a quadratic reached through
/// [`cubic`](crate::cubic) is classified exactly like one passed to
/// [`quadratic`](crate::quadratic).
pub const EPSILON: f64 = 1e-14;

/// Is `x` indistinguishable from zero at [`EPSILON`]?
#[inline]
pub(crate) fn is_negligible(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Clamps an `acos` argument back into `[-1, 1]`.
///
/// Rounding can push `-q / (2 r³)` slightly past the unit interval next to a
/// repeated root, and `acos` returns NaN there.
#[inline]
pub(crate) fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}
