//! # Payload Assembly
//!
//! Builds the complete BR Code string from a [`PayloadRequest`].
//!
//! ## Field Layout
//! ```text
//! ┌─────┬───────────────────────────────┬──────────────────────────────────┐
//! │ Tag │ Field                         │ Value                            │
//! ├─────┼───────────────────────────────┼──────────────────────────────────┤
//! │ 00  │ Payload Format Indicator      │ "01"                             │
//! │ 26  │ Merchant Account Information  │ ┌ 00 GUI "br.gov.bcb.pix"        │
//! │     │                               │ ├ 01 formatted key               │
//! │     │                               │ └ 02 description (optional)      │
//! │ 52  │ Merchant Category Code        │ "0000"                           │
//! │ 53  │ Transaction Currency          │ "986" (BRL)                      │
//! │ 54  │ Transaction Amount (optional) │ "10.50"                          │
//! │ 58  │ Country Code                  │ "BR"                             │
//! │ 59  │ Merchant Name                 │ normalized, max 25               │
//! │ 60  │ Merchant City                 │ normalized, max 15               │
//! │ 62  │ Additional Data Field         │ └ 05 reference label "***"       │
//! │ 63  │ CRC16                         │ 4 hex digits                     │
//! └─────┴───────────────────────────────┴──────────────────────────────────┘
//! ```
//!
//! Order is fixed. Readers compare field positions byte for byte.
//!
//! ## Usage
//! ```rust
//! use brcode_core::{assemble, PayloadRequest, PixKeyType};
//!
//! let request = PayloadRequest::new("11987654321", PixKeyType::Phone, "Bella Arte")
//!     .with_city("SAO PAULO");
//! let payload = assemble(&request).unwrap();
//! assert!(payload.starts_with("000201"));
//! assert!(brcode_core::crc::verify(&payload).is_ok());
//! ```

use tracing::debug;

use crate::crc;
use crate::error::{DecodeResult, PayloadResult};
use crate::key::format_key;
use crate::text::normalize;
use crate::tlv::{self, TlvField};
use crate::types::{PayloadConfig, PayloadRequest};
use crate::validation::validate_request;

// =============================================================================
// Fixed Field Values
// =============================================================================

/// Globally unique identifier of the Pix arrangement (tag 26/00).
pub const PIX_GUI: &str = "br.gov.bcb.pix";

/// Payload format indicator (tag 00).
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Merchant category code (tag 52). `0000` = not informed.
pub const MERCHANT_CATEGORY_CODE: &str = "0000";

/// ISO 4217 numeric code for BRL (tag 53).
pub const CURRENCY_BRL: &str = "986";

/// Maximum characters kept from the merchant name.
pub const MAX_MERCHANT_NAME_LEN: usize = 25;

/// Maximum characters kept from the merchant city.
pub const MAX_MERCHANT_CITY_LEN: usize = 15;

/// Maximum characters kept from the description.
pub const MAX_DESCRIPTION_LEN: usize = 25;

/// Top-level tags.
pub mod tags {
    pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
    pub const MERCHANT_ACCOUNT_INFO: &str = "26";
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    pub const TRANSACTION_CURRENCY: &str = "53";
    pub const TRANSACTION_AMOUNT: &str = "54";
    pub const COUNTRY_CODE: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const ADDITIONAL_DATA: &str = "62";
    pub const CRC16: &str = "63";

    /// Subtags of tag 26.
    pub const GUI: &str = "00";
    pub const KEY: &str = "01";
    pub const DESCRIPTION: &str = "02";

    /// Subtag of tag 62.
    pub const REFERENCE_LABEL: &str = "05";
}

// =============================================================================
// Assembly
// =============================================================================

/// Builds a payload with [`PayloadConfig::default`].
pub fn assemble(request: &PayloadRequest) -> PayloadResult<String> {
    assemble_with(request, &PayloadConfig::default())
}

/// Builds a payload with explicit jurisdiction defaults.
///
/// ## Flow
/// ```text
/// validate ──► format key ──► tag 26 ──► 00 52 53 [54] 58 59 60 62
///                                              │
///                                              ▼
///                               "6304" ──► CRC16 ──► append
/// ```
///
/// ## Errors
/// - `MissingRequiredField` / `InvalidAmount` from validation
/// - `FieldTooLong` when tag 26 exceeds 99 characters (very long key)
pub fn assemble_with(request: &PayloadRequest, config: &PayloadConfig) -> PayloadResult<String> {
    validate_request(request)?;

    let merchant_account = merchant_account_info(request)?;

    let mut fields = vec![
        TlvField::new(tags::PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT_INDICATOR),
        TlvField::new(tags::MERCHANT_ACCOUNT_INFO, merchant_account),
        TlvField::new(tags::MERCHANT_CATEGORY_CODE, MERCHANT_CATEGORY_CODE),
        TlvField::new(tags::TRANSACTION_CURRENCY, CURRENCY_BRL),
    ];

    if let Some(amount) = request.amount.filter(|a| a.is_positive()) {
        fields.push(TlvField::new(tags::TRANSACTION_AMOUNT, amount.to_payload_string()));
    }

    let city = request
        .merchant_city
        .as_deref()
        .map(|city| normalize(city, MAX_MERCHANT_CITY_LEN))
        .filter(|city| !city.trim().is_empty())
        .unwrap_or_else(|| normalize(&config.default_city, MAX_MERCHANT_CITY_LEN));

    fields.push(TlvField::new(tags::COUNTRY_CODE, config.country_code.as_str()));
    fields.push(TlvField::new(
        tags::MERCHANT_NAME,
        normalize(&request.merchant_name, MAX_MERCHANT_NAME_LEN),
    ));
    fields.push(TlvField::new(tags::MERCHANT_CITY, city));
    fields.push(TlvField::new(
        tags::ADDITIONAL_DATA,
        tlv::encode(tags::REFERENCE_LABEL, &config.reference_label)?,
    ));

    let payload = crc::append_checksum(&tlv::compose(&fields)?);

    debug!(
        key_type = %request.key_type,
        length = payload.len(),
        checksum = &payload[payload.len() - crc::CHECKSUM_LEN..],
        "Assembled BR Code payload"
    );

    Ok(payload)
}

/// Builds the value of tag 26.
fn merchant_account_info(request: &PayloadRequest) -> PayloadResult<String> {
    let mut fields = vec![
        TlvField::new(tags::GUI, PIX_GUI),
        TlvField::new(tags::KEY, format_key(&request.key, request.key_type)),
    ];

    if let Some(description) = request
        .description
        .as_deref()
        .map(|d| normalize(d, MAX_DESCRIPTION_LEN))
        .filter(|d| !d.trim().is_empty())
    {
        fields.push(TlvField::new(tags::DESCRIPTION, description));
    }

    tlv::compose(&fields)
}

// =============================================================================
// Reading Payloads
// =============================================================================

/// Verifies the checksum and returns the top-level fields, tag 63 included.
///
/// ## Example
/// ```rust
/// use brcode_core::{assemble, payload::parse, PayloadRequest, PixKeyType};
///
/// let request = PayloadRequest::new("loja@example.com", PixKeyType::Email, "Loja");
/// let fields = parse(&assemble(&request).unwrap()).unwrap();
/// assert_eq!(fields.first().unwrap().tag, "00");
/// assert_eq!(fields.last().unwrap().tag, "63");
/// ```
pub fn parse(payload: &str) -> DecodeResult<Vec<TlvField>> {
    crc::verify(payload)?;
    tlv::decode(payload)
}

// =============================================================================
// Unit Tests
// =============================================================================
