// Copyright 2025 the Rootfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that work with either libstd or libm.

/// Defines a trait that chooses between libstd or libm implementations of float methods.
///
/// With `std` enabled the inherent methods on `f64` win, so the trait is
/// only defined for `no_std` builds.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(#[inline]
            fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("rootfinder requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn acos(self) -> Self => acos;
    fn cbrt(self) -> Self => cbrt;
    fn cos(self) -> Self => cos;
    fn sqrt(self) -> Self => sqrt;
}
