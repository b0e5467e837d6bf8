use thiserror::Error;

/// Range violation reported by the signaling encoders.
///
/// Carries the offending value so callers can log or propagate it. The
/// signaling encoders return this instead of writing a partial cell.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("value {0} is out of range of int64")]
    Int64(f64),
    #[error("value {0} is out of range of uint64")]
    Uint64(f64),
}

impl From<RangeError> for String {
    fn from(error: RangeError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_value() {
        let err = RangeError::Int64(1e19);
        assert_eq!(err.to_string(), "value 10000000000000000000 is out of range of int64");
        let err = RangeError::Uint64(-5.0);
        assert_eq!(err.to_string(), "value -5 is out of range of uint64");
    }

    #[test]
    fn test_error_conversion() {
        let err = RangeError::Uint64(-1.0);
        let s: String = err.into();
        assert!(s.contains("uint64"));
    }
}
