//! 2D affine math in homogeneous coordinates.
//!
//! Layout convention:
//! - `Matrix3` stores nine elements in the order they are uploaded to the
//!   vertex shader's `mat3` (the shader reads them column by column).
//! - Translation lives at indices 6 and 7.
//! - `Matrix3::multiply(a, b)` yields the matrix that applies `b` first and
//!   `a` second to a point, so chains are built as `acc = multiply(next, acc)`.

mod error;
mod matrix3;
mod vector2;

pub use error::MathError;
pub use matrix3::{multiply_slices, Matrix3};
pub use vector2::Vector2;

use std::fmt::Debug;

/// Element-wise comparison within an absolute tolerance.
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self, tol: f32) -> bool;
}

/// Panics with both operands printed when `left` and `right` differ by more than `tol`.
pub fn assert_approx_eq<T: ApproxEq + Debug>(left: &T, right: &T, tol: f32) {
    if !left.approx_eq(right, tol) {
        panic!(
            "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n   tol: `{}`",
            left, right, tol
        );
    }
}
