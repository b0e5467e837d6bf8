//! int53 is a small codec that converts 64-bit integers held in byte buffers
//! to and from `f64` "safe integers", which represent integers exactly only
//! within ±2^53.
//!
//! # Overview
//! A 64-bit integer lives in a buffer as an 8-byte cell: a little-endian low
//! word at the cell's offset and a high word four bytes later. The crate
//! provides:
//! - Decoders that read a cell (signed or unsigned interpretation) into an
//!   `f64`
//! - Encoders that write an `f64` into a cell under one of three
//!   out-of-range policies: best-effort, clamping, or signaling
//! - Pair converters that perform the same arithmetic on already-split
//!   low/high words, including a checked variant that returns `f64::NAN`
//!   instead of a silently imprecise result
//! - A native-`i64` narrowing path as a full-width alternative to the pair
//!   converters
//!
//! # Architecture
//! - [`cell`]: buffer-based decoders and encoders
//! - [`pair`]: word-pair converters and native-`i64` narrowing
//! - [`def`]: the numeric boundary constants shared by both
//! - [`error`]: [`RangeError`], returned by the signaling encoders
//! - [`diag`]: advisory diagnostics sink used by debug builds
//!
//! All operations are pure, constant-time arithmetic over caller-owned
//! memory; the crate takes no locks on the buffer and owns no state beyond
//! the diagnostics sink.
//!
//! # Example Usage
//! ```
//! use int53::{decode_i64_to_i53, encode_i53_to_i64_signaling};
//!
//! let mut buf = [0u8; 16];
//! encode_i53_to_i64_signaling(&mut buf, 8, -3_000_000_000.0).unwrap();
//! assert_eq!(decode_i64_to_i53(&buf, 8), -3_000_000_000.0);
//! ```

pub mod cell;
pub mod def;
pub mod diag;
pub mod error;
pub mod pair;

pub use cell::{
    decode_i64_to_i53, decode_u64_to_i53, encode_i53_to_i64, encode_i53_to_i64_clamped,
    encode_i53_to_i64_signaling, encode_i53_to_u64_clamped, encode_i53_to_u64_signaling,
};
pub use error::RangeError;
pub use pair::{i32_pair_to_i53, i32_pair_to_i53_checked, i64_to_i53_checked, u32_pair_to_i53};

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "native-int64")] {
        /// Narrows an `i64` to an `f64` safe integer, returning `f64::NAN`
        /// when the value falls outside ±2^53.
        ///
        /// This is the canonical narrowing entry point. With the
        /// `native-int64` feature it narrows the full-width value directly;
        /// without it, it splits the value into words and goes through
        /// [`pair::i32_pair_to_i53_checked`]. Both strategies agree on every
        /// input.
        pub fn narrow_to_i53(value: i64) -> f64 {
            pair::i64_to_i53_checked(value)
        }
    } else {
        /// Narrows an `i64` to an `f64` safe integer, returning `f64::NAN`
        /// when the value falls outside ±2^53.
        ///
        /// This is the canonical narrowing entry point. With the
        /// `native-int64` feature it narrows the full-width value directly;
        /// without it, it splits the value into words and goes through
        /// [`pair::i32_pair_to_i53_checked`]. Both strategies agree on every
        /// input.
        pub fn narrow_to_i53(value: i64) -> f64 {
            pair::i32_pair_to_i53_checked(value as u32, (value >> 32) as i32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::{MAX_INT53, MIN_INT53};

    #[test]
    fn test_narrowing_strategies_agree() {
        let values = [
            0i64,
            1,
            -1,
            4_294_967_296,
            -4_294_967_297,
            MAX_INT53,
            MAX_INT53 + 1,
            MIN_INT53,
            MIN_INT53 - 1,
            i64::MAX,
            i64::MIN,
        ];
        for v in values {
            let native = pair::i64_to_i53_checked(v);
            let split = pair::i32_pair_to_i53_checked(v as u32, (v >> 32) as i32);
            assert_eq!(native.is_nan(), split.is_nan(), "value {}", v);
            if !native.is_nan() {
                assert_eq!(native, split, "value {}", v);
            }
            let canonical = narrow_to_i53(v);
            assert_eq!(canonical.is_nan(), native.is_nan(), "value {}", v);
            if !canonical.is_nan() {
                assert_eq!(canonical, native, "value {}", v);
            }
        }
    }

    #[test]
    fn test_narrow_accepts_exact_boundaries() {
        assert_eq!(narrow_to_i53(MAX_INT53), MAX_INT53 as f64);
        assert_eq!(narrow_to_i53(MIN_INT53), MIN_INT53 as f64);
        assert!(narrow_to_i53(MAX_INT53 + 1).is_nan());
        assert!(narrow_to_i53(MIN_INT53 - 1).is_nan());
    }
}
