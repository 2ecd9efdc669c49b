//! Fixed-size vectors and square matrices for the graphics engine.
//!
//! Matrices are stored row-major: element `(r, c)` of an `N`x`N` matrix
//! lives at `elements[r * N + c]`.

mod glam_ext;
mod matrix;
mod vector;

pub use matrix::{Mat2, Mat3, Mat4};
pub use vector::{Vec2, Vec3, Vec4};

pub(crate) fn dot<const N: usize>(a: &[f32; N], b: &[f32; N]) -> f32 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs)
}
