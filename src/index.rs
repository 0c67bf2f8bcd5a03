//! Index arithmetic of the implicit tree.
//!
//! Position `i` (1-based) covers the `lowbit(i)` elements ending at `i`.
//! For an array of 13 elements:
//!
//! ```text
//!  i : 1  2  3  4  5  6  7  8  9  10  11  12  13
//!  lo: 1  1  3  1  5  5  7  1  9   9  11  11  13
//! ```
//!
//! `lowbit` is `i & -i`. It needs two's-complement negation of a fixed width integer, which
//! `usize::wrapping_neg` gives us: with `i = a1b` where `b` is all zeros, `-i = !a 1 b`, so
//! the only bit both share is the lowest set one.

#[inline(always)]
pub fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// The next position whose range contains `i`. Walked by updates.
/// `i` must be non-zero, `0` never advances.
#[inline(always)]
pub fn next_index(i: usize) -> usize {
    debug_assert!(i != 0);
    i + lowbit(i)
}

/// The position right before the range covered by `i`. Walked by prefix queries.
#[inline(always)]
pub fn prev_index(i: usize) -> usize {
    i - lowbit(i)
}
