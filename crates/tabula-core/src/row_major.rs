//! Row-major index arithmetic.
//!
//! A strided buffer stores row `r` at `r * stride`. When the stride is a
//! collection's allocated column count and only the first `columns`
//! cells of each row are live, the remaining `stride - columns` cells of
//! every row form the gap that linear traversals skip.

/// Buffer offset of `(row, column)` in a buffer with the given stride.
pub const fn to_linear(row: usize, column: usize, stride: usize) -> usize {
    row * stride + column
}

/// `(row, column)` of a buffer offset with the given stride.
///
/// `stride` must be non-zero.
pub fn from_linear(linear: usize, stride: usize) -> (usize, usize) {
    debug_assert!(stride > 0, "from_linear requires a non-zero stride");
    (linear / stride, linear % stride)
}

/// Number of unused cells at the end of every row.
pub fn gap_per_row(stride: usize, columns: usize) -> usize {
    debug_assert!(columns <= stride, "live columns exceed the row stride");
    stride - columns
}

/// Map a gap-free linear position over `columns`-wide rows to the buffer
/// offset in a buffer with the given stride.
pub fn live_to_buffer(live: usize, columns: usize, stride: usize) -> usize {
    let (row, column) = from_linear(live, columns);
    to_linear(row, column, stride)
}

/// Map a buffer offset back to the gap-free linear position.
///
/// Returns `None` if the offset falls in a row's gap.
pub fn buffer_to_live(offset: usize, columns: usize, stride: usize) -> Option<usize> {
    let (row, column) = from_linear(offset, stride);
    (column < columns).then(|| to_linear(row, column, columns))
}
