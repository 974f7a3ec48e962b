//! # Pix Key Formatting
//!
//! Canonicalizes the merchant's key before it goes into tag 26/01.
//!
//! ## Rules
//! ```text
//! ┌──────────┬──────────────────────────────┬──────────────────────────┐
//! │ Type     │ Input                        │ Output                   │
//! ├──────────┼──────────────────────────────┼──────────────────────────┤
//! │ phone    │ (11) 98765-4321              │ +5511987654321           │
//! │ phone    │ +55 11 98765-4321            │ +5511987654321           │
//! │ cpf      │ 123.456.789-09               │ 12345678909              │
//! │ cnpj     │ 12.345.678/0001-95           │ 12345678000195           │
//! │ email    │ loja@example.com             │ loja@example.com         │
//! │ random   │ 123e4567-e12b-...            │ 123e4567-e12b-...        │
//! └──────────┴──────────────────────────────┴──────────────────────────┘
//! ```
//!
//! No check digits or directory lookups happen here.

use crate::types::PixKeyType;

/// Country calling code prepended to phone keys.
pub const PHONE_COUNTRY_PREFIX: &str = "55";

/// Keeps only ASCII digits.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a raw key according to its type.
///
/// ## Example
/// ```rust
/// use brcode_core::key::format_key;
/// use brcode_core::PixKeyType;
///
/// assert_eq!(format_key("11987654321", PixKeyType::Phone), "+5511987654321");
/// assert_eq!(format_key("123.456.789-09", PixKeyType::Cpf), "12345678909");
/// ```
pub fn format_key(key: &str, key_type: PixKeyType) -> String {
    match key_type {
        PixKeyType::Phone => {
            let digits = digits_only(key);
            if digits.starts_with(PHONE_COUNTRY_PREFIX) {
                format!("+{}", digits)
            } else {
                format!("+{}{}", PHONE_COUNTRY_PREFIX, digits)
            }
        }
        PixKeyType::Cpf | PixKeyType::Cnpj => digits_only(key),
        PixKeyType::Email | PixKeyType::Random => key.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
