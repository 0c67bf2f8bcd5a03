//! Fenwick trees (binary indexed trees).
//!
//! - [`Fenwick`]: point update and range sum over a 1D array
//! - [`Fenwick2D`]: absolute cell update and rectangle sum over a 2D grid
//!
//! # Contracts:
//! - Sums use wrapping `i64` arithmetic, overflow never panics
//! - The only aggregate is addition; range queries rely on subtraction being its inverse
//!
pub mod error;
pub mod fenwick;
pub mod fenwick2d;
mod index;

pub use error::{FenwickError, Result};
pub use fenwick::Fenwick;
pub use fenwick2d::Fenwick2D;

/// Element type stored in the trees.
pub type Value = i64;
