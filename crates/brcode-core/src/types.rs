//! # Domain Types
//!
//! Input types for payload assembly.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PayloadRequest  │   │   PixKeyType    │   │ PayloadConfig   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  key            │   │  Cpf            │   │  default_city   │       │
//! │  │  key_type ──────┼──►│  Cnpj           │   │  country_code   │       │
//! │  │  merchant_name  │   │  Email          │   │  reference_label│       │
//! │  │  merchant_city? │   │  Phone          │   └─────────────────┘       │
//! │  │  amount?        │   │  Random         │                             │
//! │  │  description?   │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is transient: built per call, consumed once, dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::PayloadError;
use crate::money::Amount;

// =============================================================================
// Pix Key Type
// =============================================================================

/// The kind of Pix key a merchant registered.
///
/// Only key formatting depends on this; see [`crate::key::format_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PixKeyType {
    /// Individual taxpayer number (11 digits).
    Cpf,
    /// Company taxpayer number (14 digits).
    Cnpj,
    /// E-mail address.
    Email,
    /// Mobile phone number, emitted in `+55...` form.
    Phone,
    /// Random key (EVP), a UUID issued by the bank.
    Random,
}

impl PixKeyType {
    /// All variants, in declaration order.
    pub const ALL: [PixKeyType; 5] = [
        PixKeyType::Cpf,
        PixKeyType::Cnpj,
        PixKeyType::Email,
        PixKeyType::Phone,
        PixKeyType::Random,
    ];

    /// Returns true if formatting keeps only the digits of the key.
    pub fn is_numeric(&self) -> bool {
        matches!(self, PixKeyType::Cpf | PixKeyType::Cnpj | PixKeyType::Phone)
    }
}

impl fmt::Display for PixKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixKeyType::Cpf => write!(f, "cpf"),
            PixKeyType::Cnpj => write!(f, "cnpj"),
            PixKeyType::Email => write!(f, "email"),
            PixKeyType::Phone => write!(f, "phone"),
            PixKeyType::Random => write!(f, "random"),
        }
    }
}

impl FromStr for PixKeyType {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpf" => Ok(PixKeyType::Cpf),
            "cnpj" => Ok(PixKeyType::Cnpj),
            "email" | "e-mail" => Ok(PixKeyType::Email),
            "phone" | "telefone" => Ok(PixKeyType::Phone),
            "random" | "evp" => Ok(PixKeyType::Random),
            _ => Err(PayloadError::InvalidKeyType(s.to_string())),
        }
    }
}

// =============================================================================
// Payload Request
// =============================================================================

/// Everything the caller supplies for one payload.
///
/// ## Lossy Fields
/// `merchant_name` (25), `merchant_city` (15) and `description` (25) are
/// normalized to uppercase ASCII-ish text and truncated to those lengths.
/// Callers should not expect them back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PayloadRequest {
    /// Pix key as configured by the merchant (raw, unformatted).
    pub key: String,

    /// How to interpret and format `key`.
    pub key_type: PixKeyType,

    /// Merchant name shown in the payer's app.
    pub merchant_name: String,

    /// Merchant city. Falls back to [`PayloadConfig::default_city`].
    #[serde(default)]
    pub merchant_city: Option<String>,

    /// Fixed amount. Absent or zero means the payer types the amount.
    #[serde(default)]
    pub amount: Option<Amount>,

    /// Free text shown to the payer, carried inside the merchant account block.
    #[serde(default)]
    pub description: Option<String>,
}

impl PayloadRequest {
    /// Creates a request with only the required fields.
    pub fn new(
        key: impl Into<String>,
        key_type: PixKeyType,
        merchant_name: impl Into<String>,
    ) -> Self {
        PayloadRequest {
            key: key.into(),
            key_type,
            merchant_name: merchant_name.into(),
            merchant_city: None,
            amount: None,
            description: None,
        }
    }

    /// Sets the merchant city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.merchant_city = Some(city.into());
        self
    }

    /// Sets a fixed amount.
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// =============================================================================
// Payload Config
// =============================================================================

/// Jurisdiction defaults passed explicitly to the assembler.
///
/// The encoding itself (tag order, GUI, currency) never changes; only these
/// literals do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadConfig {
    /// City used when the request has none.
    #[serde(default = "default_city")]
    pub default_city: String,

    /// ISO 3166-1 alpha-2 country code for tag 58.
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Reference label for tag 62/05. `***` means "no transaction id".
    #[serde(default = "default_reference_label")]
    pub reference_label: String,
}

fn default_city() -> String {
    "SAO PAULO".to_string()
}

fn default_country_code() -> String {
    "BR".to_string()
}

fn default_reference_label() -> String {
    "***".to_string()
}

impl Default for PayloadConfig {
    fn default() -> Self {
        PayloadConfig {
            default_city: default_city(),
            country_code: default_country_code(),
            reference_label: default_reference_label(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
