#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MurmurCodeError {
    #[error("rotate amount {bits} out of range for {width}-bit word")]
    RotateOutOfRange { bits: u32, width: u32 },

    #[error("range {offset}+{count} out of bounds for buffer of length {len}")]
    RangeOutOfBounds {
        offset: usize,
        count: usize,
        len: usize,
    },

    #[error("negative value cannot be encoded: {value}")]
    NegativeValue { value: i64 },

    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    #[error("invalid short code: '{code}'")]
    InvalidCode { code: String },

    #[error("short code '{code}' overflows u64")]
    Overflow { code: String },

    #[error("short code length must be at least 1, got {length}")]
    InvalidLength { length: usize },

    #[error("short code already exists: {code}")]
    AlreadyExists { code: String },

    #[error("short code not found: {code}")]
    NotFound { code: String },

    #[error("no free short code after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Broad classification of a [`MurmurCodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something the operation cannot accept.
    InvalidArgument,
    /// A store already holds a different value under the key.
    Conflict,
    /// A store has no value under the key.
    NotFound,
    /// Collision retries ran out.
    Exhausted,
}

impl MurmurCodeError {
    /// Returns the kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::RotateOutOfRange { .. }
            | Self::RangeOutOfBounds { .. }
            | Self::NegativeValue { .. }
            | Self::InvalidAlphabet { .. }
            | Self::InvalidCode { .. }
            | Self::Overflow { .. }
            | Self::InvalidLength { .. } => ErrorKind::InvalidArgument,
            Self::AlreadyExists { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Exhausted { .. } => ErrorKind::Exhausted,
        }
    }
}

pub type Result<T> = std::result::Result<T, MurmurCodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_out_of_range_display() {
        let error = MurmurCodeError::RotateOutOfRange { bits: 32, width: 32 };
        assert_eq!(
            error.to_string(),
            "rotate amount 32 out of range for 32-bit word"
        );
    }

    #[test]
    fn test_range_out_of_bounds_display() {
        let error = MurmurCodeError::RangeOutOfBounds {
            offset: 4,
            count: 10,
            len: 8,
        };
        assert_eq!(
            error.to_string(),
            "range 4+10 out of bounds for buffer of length 8"
        );
    }

    #[test]
    fn test_negative_value_display() {
        let error = MurmurCodeError::NegativeValue { value: -7 };
        assert_eq!(error.to_string(), "negative value cannot be encoded: -7");
    }

    #[test]
    fn test_invalid_code_display() {
        let error = MurmurCodeError::InvalidCode {
            code: "ab!".to_string(),
        };
        assert_eq!(error.to_string(), "invalid short code: 'ab!'");
    }

    #[test]
    fn test_not_found_display() {
        let error = MurmurCodeError::NotFound {
            code: "4Fz9".to_string(),
        };
        assert_eq!(error.to_string(), "short code not found: 4Fz9");
    }

    #[test]
    fn test_invalid_length_display() {
        let error = MurmurCodeError::InvalidLength { length: 0 };
        assert_eq!(
            error.to_string(),
            "short code length must be at least 1, got 0"
        );
    }

    #[test]
    fn test_exhausted_display() {
        let error = MurmurCodeError::Exhausted { attempts: 16 };
        assert_eq!(error.to_string(), "no free short code after 16 attempts");
    }

    #[test]
    fn test_kind_invalid_argument() {
        let errors = [
            MurmurCodeError::RotateOutOfRange { bits: 40, width: 32 },
            MurmurCodeError::NegativeValue { value: -1 },
            MurmurCodeError::InvalidAlphabet {
                reason: "empty".to_string(),
            },
            MurmurCodeError::Overflow {
                code: "zzzzzzzzzzzzz".to_string(),
            },
            MurmurCodeError::InvalidLength { length: 0 },
        ];
        for error in &errors {
            assert_eq!(error.kind(), ErrorKind::InvalidArgument, "{error}");
        }
    }

    #[test]
    fn test_kind_store_errors() {
        let conflict = MurmurCodeError::AlreadyExists {
            code: "a".to_string(),
        };
        let missing = MurmurCodeError::NotFound {
            code: "a".to_string(),
        };
        assert_eq!(conflict.kind(), ErrorKind::Conflict);
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert_eq!(
            MurmurCodeError::Exhausted { attempts: 1 }.kind(),
            ErrorKind::Exhausted
        );
    }

    #[test]
    fn test_error_clone_and_equality() {
        let error1 = MurmurCodeError::AlreadyExists {
            code: "x1".to_string(),
        };
        let error2 = error1.clone();
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_result_type_err() {
        let error = MurmurCodeError::NotFound {
            code: "test".to_string(),
        };
        let result: Result<u64> = Err(error.clone());
        assert_eq!(result, Err(error));
    }
}
