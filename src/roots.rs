// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root sets and the options that shape them.

use arrayvec::ArrayVec;
use num_complex::Complex64;

/// Options for a single solve.
///
/// ```
/// use rootfinder::{quadratic, SolveOptions};
///
/// // x² + 1 has no real roots.
/// assert_eq!(quadratic(1.0, 0.0, 1.0, SolveOptions::default()).len(), 2);
/// assert!(quadratic(1.0, 0.0, 1.0, SolveOptions::real_only()).is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct SolveOptions {
    /// Drop non-real roots and return the rest as plain `f64`s.
    ///
    /// Defaults to `false`.
    pub real_only: bool,
}

impl SolveOptions {
    /// Options that report every root as a complex number.
    #[inline]
    pub const fn all() -> Self {
        SolveOptions { real_only: false }
    }

    /// Options that report only the real roots.
    #[inline]
    pub const fn real_only() -> Self {
        SolveOptions { real_only: true }
    }

    /// Returns these options with `real_only` set to the given value.
    #[inline]
    #[must_use]
    pub const fn with_real_only(mut self, real_only: bool) -> Self {
        self.real_only = real_only;
        self
    }
}

/// The distinct roots of a polynomial of degree at most `N`.
///
/// A root of multiplicity k is stored once. The order is deterministic but
/// carries no meaning; each solver documents the order it produces.
///
/// Which variant you get depends on [`SolveOptions::real_only`]; an empty set
/// still remembers the mode it was produced in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(
    clippy::exhaustive_enums,
    reason = "a root is either reported as complex or as real"
)]
pub enum RootSet<const N: usize> {
    /// Every root, as a complex number.
    Complex(ArrayVec<Complex64, N>),
    /// Only the real roots.
    Real(ArrayVec<f64, N>),
}

impl<const N: usize> Default for RootSet<N> {
    fn default() -> Self {
        Self::new(SolveOptions::default())
    }
}

impl<const N: usize> RootSet<N> {
    /// An empty set in the mode selected by `options`.
    pub fn new(options: SolveOptions) -> Self {
        if options.real_only {
            RootSet::Real(ArrayVec::new())
        } else {
            RootSet::Complex(ArrayVec::new())
        }
    }

    /// The number of distinct roots.
    pub fn len(&self) -> usize {
        match self {
            RootSet::Complex(roots) => roots.len(),
            RootSet::Real(roots) => roots.len(),
        }
    }

    /// Is the set empty?
    ///
    /// Callers tell "no roots" apart from "some roots" only by this.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Was this set produced with [`SolveOptions::real_only`]?
    pub fn is_real_only(&self) -> bool {
        matches!(self, RootSet::Real(_))
    }

    /// The roots, if this set holds complex roots.
    pub fn as_complex(&self) -> Option<&[Complex64]> {
        match self {
            RootSet::Complex(roots) => Some(roots.as_slice()),
            RootSet::Real(_) => None,
        }
    }

    /// The roots, if this set holds real roots.
    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            RootSet::Complex(_) => None,
            RootSet::Real(roots) => Some(roots.as_slice()),
        }
    }

    /// Iterates over the roots as complex numbers, whatever the mode.
    pub fn iter(&self) -> impl Iterator<Item = Complex64> + '_ {
        (0..self.len()).map(move |i| match self {
            RootSet::Complex(roots) => roots[i],
            RootSet::Real(roots) => Complex64::new(roots[i], 0.0),
        })
    }

    /// Iterates over the real parts of the roots.
    pub fn real_parts(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|z| z.re)
    }

    /// Copies the roots out as complex numbers.
    pub fn to_complex(&self) -> ArrayVec<Complex64, N> {
        self.iter().collect()
    }

    pub(crate) fn push_real(&mut self, x: f64) {
        match self {
            RootSet::Complex(roots) => roots.push(Complex64::new(x, 0.0)),
            RootSet::Real(roots) => roots.push(x),
        }
    }

    /// Pushes `re + i·im` and then `re - i·im`; a no-op for real-only sets.
    pub(crate) fn push_conjugate_pair(&mut self, re: f64, im: f64) {
        if let RootSet::Complex(roots) = self {
            roots.push(Complex64::new(re, im));
            roots.push(Complex64::new(re, -im));
        }
    }

    /// Appends the roots of `other`, converting them to this set's mode.
    ///
    /// Complex roots with a non-zero imaginary part are dropped when
    /// appending to a real-only set.
    pub(crate) fn extend_from<const M: usize>(&mut self, other: RootSet<M>) {
        for z in other.iter() {
            match self {
                RootSet::Complex(roots) => roots.push(z),
                RootSet::Real(roots) if z.im == 0.0 => roots.push(z.re),
                RootSet::Real(_) => {}
            }
        }
    }

    /// Moves the roots of `other` into a set with room for more.
    ///
    /// `N` must be at least `M`.
    pub(crate) fn widen<const M: usize>(other: RootSet<M>) -> Self {
        debug_assert!(M <= N, "cannot widen a root set of {} into {}", M, N);
        match other {
            RootSet::Complex(roots) => RootSet::Complex(roots.into_iter().collect()),
            RootSet::Real(roots) => RootSet::Real(roots.into_iter().collect()),
        }
    }
}

impl From<RootSet<2>> for RootSet<3> {
    fn from(roots: RootSet<2>) -> Self {
        Self::widen(roots)
    }
}
