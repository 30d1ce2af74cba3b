// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form roots of quadratic and cubic polynomials.
//!
//! The rootfinder library solves `a x² + b x + c = 0` and
//! `a x³ + b x² + c x + d = 0` for real coefficients, without iteration. The
//! quadratic formula handles degree two; cubics are reduced to the depressed
//! form `t³ + p t + q = 0` and solved with the trigonometric method when all
//! three roots are real and distinct, and with Cardano's formula otherwise.
//!
//! Roots come back as a [`RootSet`]: complex numbers by default, or plain
//! `f64`s with only the real roots when [`SolveOptions::real_only`] is set.
//! Repeated roots are reported once.
//!
//! # Examples
//!
//! ```
//! use rootfinder::{cubic, Complex64, SolveOptions};
//!
//! // (x - 7)(x - (3 + 4i))(x - (3 - 4i))
//! let roots = cubic(1.0, -13.0, 67.0, -175.0, SolveOptions::default());
//! let expected = [
//!     Complex64::new(7.0, 0.0),
//!     Complex64::new(3.0, 4.0),
//!     Complex64::new(3.0, -4.0),
//! ];
//! for (root, expected) in roots.iter().zip(expected) {
//!     assert!((root - expected).norm() < 1e-9);
//! }
//!
//! // Only the real one.
//! let real = cubic(1.0, -13.0, 67.0, -175.0, SolveOptions::real_only());
//! assert_eq!(real.len(), 1);
//! ```
//!
//! Multiplicity is collapsed:
//!
//! ```
//! use rootfinder::{Cubic, SolveOptions};
//!
//! // (x - 4)³
//! let triple = Cubic::new(1.0, -12.0, 48.0, -64.0);
//! assert_eq!(triple.roots(SolveOptions::real_only()).as_real(), Some(&[4.0][..]));
//! ```
//!
//! # Numerical behavior
//!
//! Coefficients and discriminants are compared against the absolute
//! tolerance [`EPSILON`]. Inputs are expected to be finite; the checked
//! constructors [`Quadratic::try_new`] and [`Cubic::try_new`] reject anything
//! else with [`InvalidInput`].
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `serde` feature derives serialization for the
//! coefficient types, [`SolveOptions`] and [`RootSet`].
//!
//! Each solve logs the branch it took at `trace` level through the [`log`]
//! facade.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    reason = "closed-form formulas read best with the textbook names"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("rootfinder requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

#[cfg(test)]
mod arbitrary;
mod common;
mod cubic;
mod epsilon;
mod error;
mod poly;
mod quadratic;
mod roots;

pub use crate::cubic::cubic;
pub use crate::epsilon::EPSILON;
pub use crate::error::InvalidInput;
pub use crate::poly::{Cubic, DepressedCubic, Quadratic};
pub use crate::quadratic::quadratic;
pub use crate::roots::{RootSet, SolveOptions};

pub use num_complex::Complex64;
