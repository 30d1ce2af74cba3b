// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A polynomial that cannot be solved.
///
/// Only the checked constructors, such as [`Cubic::try_new`](crate::Cubic::try_new),
/// return this. The solvers themselves never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInput {
    /// A coefficient was NaN or infinite.
    NonFinite {
        /// Position of the coefficient, counting from the leading one.
        index: usize,
    },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NonFinite { index } => {
                write!(f, "coefficient {index} is not a finite number")
            }
        }
    }
}

impl core::error::Error for InvalidInput {}

/// Checks that every coefficient is finite.
pub(crate) fn check_finite(coeffs: &[f64]) -> Result<(), InvalidInput> {
    match coeffs.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(InvalidInput::NonFinite { index }),
        None => Ok(()),
    }
}
