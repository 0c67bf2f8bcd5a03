use thiserror::Error;

pub type Result<T> = std::result::Result<T, FenwickError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenwickError {
    /// An update addressed a position the tree does not cover.
    #[error("Index out of range: index {index}, len {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A 2D tree was built from rows of unequal length.
    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl FenwickError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
