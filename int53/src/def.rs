//! Numeric boundary constants for the codec.
//!
//! All boundaries are expressed twice where both forms are needed: as exact
//! integers for integer-only range tests, and as `f64` for comparisons
//! against incoming numbers. The `f64` boundaries of the 64-bit ranges are
//! the first representable values *beyond* the range, because the range
//! maxima themselves (2^63-1, 2^64-1) have no exact `f64` representation.

/// Largest integer an `f64` can represent without loss (2^53).
pub const MAX_INT53: i64 = 9_007_199_254_740_992;

/// Smallest integer an `f64` can represent without loss (-2^53).
pub const MIN_INT53: i64 = -9_007_199_254_740_992;

/// Weight of the high word in a low/high split (2^32).
pub const HIGH_WORD_BASE: f64 = 4_294_967_296.0;

/// First `f64` at or beyond the signed 64-bit maximum (2^63).
/// Any `f64` >= this value exceeds `i64::MAX`.
pub const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// `f64` value of the signed 64-bit minimum (-2^63, exactly representable).
pub const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// First `f64` at or beyond the unsigned 64-bit maximum (2^64).
/// Any `f64` >= this value exceeds `u64::MAX`.
pub const U64_UPPER_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// Number of bytes occupied by one 64-bit cell in a buffer.
pub const CELL_BYTES: usize = 8;

/// Number of bytes in one 32-bit word of a cell.
pub const WORD_BYTES: usize = 4;
