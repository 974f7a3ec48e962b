//! # Validation Module
//!
//! Request checks that run before any TLV is composed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront / CLI                                             │
//! │  ├── Deserialization (unknown key type rejected by serde / FromStr)    │
//! │  └── Amount parsing (Amount::from_str / try_from_decimal)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (fail fast, before encoding)                     │
//! │  ├── key present, merchant_name non-blank after normalization          │
//! │  ├── numeric keys contain digits                                       │
//! │  └── amount not negative                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: TLV codec                                                    │
//! │  └── FieldTooLong for values over 99 characters                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::PayloadError;
use crate::key::digits_only;
use crate::money::Amount;
use crate::payload::MAX_MERCHANT_NAME_LEN;
use crate::text::normalize;
use crate::types::{PayloadRequest, PixKeyType};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, PayloadError>;

fn missing(field: &str) -> PayloadError {
    PayloadError::MissingRequiredField {
        field: field.to_string(),
    }
}

/// Validates the Pix key.
///
/// ## Rules
/// - Must not be blank
/// - CPF, CNPJ and phone keys must contain at least one digit, since
///   formatting strips everything else
pub fn validate_key(key: &str, key_type: PixKeyType) -> ValidationResult<()> {
    if key.trim().is_empty() {
        return Err(missing("key"));
    }

    if key_type.is_numeric() && digits_only(key).is_empty() {
        return Err(missing("key"));
    }

    Ok(())
}

/// Validates the merchant name.
///
/// Checks the normalized form, so names made only of combining marks or
/// non-ASCII symbols are rejected instead of producing an empty tag 59.
pub fn validate_merchant_name(name: &str) -> ValidationResult<()> {
    if normalize(name, MAX_MERCHANT_NAME_LEN).trim().is_empty() {
        return Err(missing("merchant_name"));
    }

    Ok(())
}

/// Validates the optional amount.
///
/// ## Rules
/// - Absent or zero: accepted, the payload is open-amount
/// - Negative: rejected
pub fn validate_amount(amount: Option<Amount>) -> ValidationResult<()> {
    match amount {
        Some(amount) if amount.is_negative() => Err(PayloadError::InvalidAmount {
            reason: format!("{} is negative", amount),
        }),
        _ => Ok(()),
    }
}

/// Runs every request-level check.
pub fn validate_request(request: &PayloadRequest) -> ValidationResult<()> {
    validate_key(&request.key, request.key_type)?;
    validate_merchant_name(&request.merchant_name)?;
    validate_amount(request.amount)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("11987654321", PixKeyType::Phone).is_ok());
        assert!(validate_key("loja@example.com", PixKeyType::Email).is_ok());

        assert!(validate_key("", PixKeyType::Email).is_err());
        assert!(validate_key("   ", PixKeyType::Random).is_err());
        assert!(validate_key("(--)", PixKeyType::Phone).is_err());
        assert!(validate_key("abc", PixKeyType::Cpf).is_err());
    }

    #[test]
    fn test_validate_merchant_name() {
        assert!(validate_merchant_name("Bella Arte").is_ok());
        assert_eq!(
            validate_merchant_name(" \t"),
            Err(PayloadError::MissingRequiredField {
                field: "merchant_name".to_string()
            })
        );
    }

    #[test]
    fn test_merchant_name_blank_after_normalization() {
        for name in ["\u{301}\u{302}", "☕", " º "] {
            assert_eq!(
                validate_merchant_name(name),
                Err(PayloadError::MissingRequiredField {
                    field: "merchant_name".to_string()
                }),
                "{name:?}"
            );
        }
        assert!(validate_merchant_name("Café ☕").is_ok());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(None).is_ok());
        assert!(validate_amount(Some(Amount::from_centavos(0))).is_ok());
        assert!(validate_amount(Some(Amount::from_centavos(1050))).is_ok());
        assert!(matches!(
            validate_amount(Some(Amount::from_centavos(-1))),
            Err(PayloadError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_validate_request_checks_key_first() {
        let request = PayloadRequest::new("", PixKeyType::Email, "");
        assert_eq!(
            validate_request(&request),
            Err(PayloadError::MissingRequiredField {
                field: "key".to_string()
            })
        );
    }
}
