//! Core numeric primitives (Vector, Matrix).
//!
//! Per-word feature vectors are `Vector<f32>`; batches are stacked into a
//! row-major `Matrix<f32>`.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
