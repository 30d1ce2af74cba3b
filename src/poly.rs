// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic and cubic polynomials with real coefficients.

use num_complex::Complex64;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs as _;
use crate::error::check_finite;
use crate::{cubic, quadratic, InvalidInput, RootSet, SolveOptions};

/// The polynomial `a x² + b x + c`.
///
/// Coefficients are stored leading term first, the same order
/// [`quadratic`] takes them in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadratic {
    /// The coefficient of `x²`.
    pub a: f64,
    /// The coefficient of `x`.
    pub b: f64,
    /// The constant term.
    pub c: f64,
}

/// The polynomial `a x³ + b x² + c x + d`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cubic {
    /// The coefficient of `x³`.
    pub a: f64,
    /// The coefficient of `x²`.
    pub b: f64,
    /// The coefficient of `x`.
    pub c: f64,
    /// The constant term.
    pub d: f64,
}

/// A monic cubic with its quadratic term removed: `t³ + p t + q`.
///
/// The roots of the original cubic are `x = t + shift`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepressedCubic {
    /// The coefficient of `t`.
    pub p: f64,
    /// The constant term.
    pub q: f64,
    /// Offset from `t` back to `x`.
    pub shift: f64,
}

impl Quadratic {
    /// Creates a new quadratic.
    ///
    /// The coefficients are not checked; see [`Quadratic::try_new`].
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Quadratic { a, b, c }
    }

    /// Creates a new quadratic, rejecting NaN and infinite coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonFinite`] naming the first bad coefficient.
    pub fn try_new(a: f64, b: f64, c: f64) -> Result<Self, InvalidInput> {
        check_finite(&[a, b, c])?;
        Ok(Quadratic { a, b, c })
    }

    /// The coefficients, leading term first.
    #[inline]
    pub const fn coeffs(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Evaluates the polynomial at a real point.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Evaluates the polynomial at a complex point.
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        (z * self.a + self.b) * z + self.c
    }

    /// The largest absolute value of any coefficient.
    pub fn magnitude(&self) -> f64 {
        self.coeffs().iter().fold(0.0f64, |max, c| max.max(c.abs()))
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.coeffs().iter().all(|c| c.is_finite())
    }

    /// The distinct roots of this quadratic; see [`quadratic`].
    pub fn roots(&self, options: SolveOptions) -> RootSet<2> {
        quadratic(self.a, self.b, self.c, options)
    }
}

impl Cubic {
    /// Creates a new cubic.
    ///
    /// The coefficients are not checked; see [`Cubic::try_new`].
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Cubic { a, b, c, d }
    }

    /// Creates a new cubic, rejecting NaN and infinite coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonFinite`] naming the first bad coefficient.
    ///
    /// ```
    /// use rootfinder::{Cubic, InvalidInput};
    ///
    /// assert_eq!(
    ///     Cubic::try_new(1.0, f64::NAN, 0.0, 1.0),
    ///     Err(InvalidInput::NonFinite { index: 1 })
    /// );
    /// ```
    pub fn try_new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, InvalidInput> {
        check_finite(&[a, b, c, d])?;
        Ok(Cubic { a, b, c, d })
    }

    /// The coefficients, leading term first.
    #[inline]
    pub const fn coeffs(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Evaluates the polynomial at a real point.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Evaluates the polynomial at a complex point.
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        ((z * self.a + self.b) * z + self.c) * z + self.d
    }

    /// The largest absolute value of any coefficient.
    pub fn magnitude(&self) -> f64 {
        self.coeffs().iter().fold(0.0f64, |max, c| max.max(c.abs()))
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.coeffs().iter().all(|c| c.is_finite())
    }

    /// Divides through by `a` and substitutes `x = t - b / 3a`.
    ///
    /// The result is only meaningful when `a` is non-zero.
    pub fn depressed(&self) -> DepressedCubic {
        let b = self.b / self.a;
        let c = self.c / self.a;
        let d = self.d / self.a;
        DepressedCubic {
            p: c - b * b / 3.0,
            q: 2.0 * b * b * b / 27.0 - b * c / 3.0 + d,
            shift: -b / 3.0,
        }
    }

    /// The distinct roots of this cubic; see [`cubic`].
    pub fn roots(&self, options: SolveOptions) -> RootSet<3> {
        cubic(self.a, self.b, self.c, self.d, options)
    }
}

impl DepressedCubic {
    /// `(q/2)² + (p/3)³`, whose sign decides the shape of the roots.
    ///
    /// Negative means three distinct real roots, positive means one real root
    /// and a conjugate pair, and zero means a repeated root.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        let half_q = 0.5 * self.q;
        let third_p = self.p / 3.0;
        half_q * half_q + third_p * third_p * third_p
    }
}

impl From<Quadratic> for Cubic {
    fn from(q: Quadratic) -> Self {
        Cubic::new(0.0, q.a, q.b, q.c)
    }
}
