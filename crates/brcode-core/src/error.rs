//! # Error Types
//!
//! Domain-specific error types for brcode-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  brcode-core errors (this file)                                        │
//! │  ├── PayloadError  - Building a payload failed (request or encoding)   │
//! │  └── DecodeError   - Reading/verifying an existing payload failed      │
//! │                                                                         │
//! │  brcode-cli errors (app crate)                                         │
//! │  └── ConfigError   - Merchant profile could not be loaded              │
//! │                                                                         │
//! │  Flow: PayloadError ──► anyhow (CLI) ──► stderr                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Merchant name, city and description are normalized and truncated to
//! their field limits. That loss is defined behavior and never surfaces here.

use thiserror::Error;

// =============================================================================
// Payload Error
// =============================================================================

/// Errors raised while building a payload.
///
/// Validation runs before any TLV is composed, so a caller either gets a
/// complete payload or one of these. Never a partial string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// A required request field is absent or blank.
    ///
    /// ## When This Occurs
    /// - `key` or `merchant_name` is empty after trimming
    /// - A CPF/CNPJ/phone key contains no digits at all
    #[error("{field} is required")]
    MissingRequiredField { field: String },

    /// Key type text is not one of cpf, cnpj, email, phone, random.
    #[error("Invalid Pix key type: '{0}'")]
    InvalidKeyType(String),

    /// A TLV value does not fit the two-digit length field.
    ///
    /// ## When This Occurs
    /// Free-text fields are pre-truncated, so in practice this is the
    /// merchant account block (tag 26) carrying a very long key.
    #[error("Field {tag} is {length} characters long, maximum is {max}")]
    FieldTooLong {
        tag: String,
        length: usize,
        max: usize,
    },

    /// Amount is negative, not finite, or not a valid decimal.
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// TLV tag is not exactly two ASCII digits.
    #[error("Invalid TLV tag: '{0}'")]
    InvalidTag(String),
}

// =============================================================================
// Decode Error
// =============================================================================

/// Errors raised while parsing or verifying an existing payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended in the middle of a tag, length or value.
    #[error("Payload truncated at position {position}")]
    Truncated { position: usize },

    /// Length field is not two decimal digits.
    #[error("Invalid length '{length}' at position {position}")]
    InvalidLength { position: usize, length: String },

    /// Tag is not two decimal digits.
    #[error("Invalid tag '{tag}' at position {position}")]
    InvalidTag { position: usize, tag: String },

    /// Payload does not end with a `6304XXXX` checksum field.
    #[error("Payload has no CRC16 field")]
    MissingChecksum,

    /// Stored checksum does not match the recomputed one.
    #[error("CRC16 mismatch: payload says {actual}, computed {expected}")]
    ChecksumMismatch { expected: String, actual: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PayloadError.
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Convenience type alias for Results with DecodeError.
pub type DecodeResult<T> = Result<T, DecodeError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PayloadError::FieldTooLong {
            tag: "26".to_string(),
            length: 104,
            max: 99,
        };
        assert_eq!(
            err.to_string(),
            "Field 26 is 104 characters long, maximum is 99"
        );

        let err = PayloadError::MissingRequiredField {
            field: "merchant_name".to_string(),
        };
        assert_eq!(err.to_string(), "merchant_name is required");
    }

    #[test]
    fn test_decode_error_messages() {
        let err = DecodeError::ChecksumMismatch {
            expected: "3E12".to_string(),
            actual: "0000".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CRC16 mismatch: payload says 0000, computed 3E12"
        );
        assert_eq!(
            DecodeError::Truncated { position: 7 }.to_string(),
            "Payload truncated at position 7"
        );
    }
}
