//! # brcode-core: Pix BR Code Payload Encoder
//!
//! Builds the merchant-presented payment string a payer's banking app reads
//! from a QR code (or from "Pix copia e cola"). Pure functions, no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Checkout                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Storefront / brcode-cli (merchant profile, amount)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PayloadRequest                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brcode-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   text    │  │    key    │  │    tlv    │  │    crc    │  │   │
//! │  │   │ normalize │  │format_key │  │  encode   │  │  CRC16    │  │   │
//! │  │   └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  │   │
//! │  │         └──────────────┴──────┬───────┴──────────────┘        │   │
//! │  │                        ┌──────▼──────┐                         │   │
//! │  │                        │   payload   │                         │   │
//! │  │                        │  assemble   │                         │   │
//! │  │                        └─────────────┘                         │   │
//! │  │   NO I/O • NO NETWORK • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ String ("000201...6304XXXX")           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              QR renderer / copy-paste (external)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Request, key type and jurisdiction config
//! - [`money`] - Amount type with integer centavos
//! - [`error`] - Domain error types
//! - [`validation`] - Request checks run before encoding
//! - [`text`] - Diacritic stripping and truncation
//! - [`key`] - Pix key canonicalization
//! - [`tlv`] - Tag-length-value encode/decode
//! - [`crc`] - CRC-16/CCITT-FALSE and payload verification
//! - [`payload`] - Field ordering and final assembly
//!
//! ## Example Usage
//!
//! ```rust
//! use brcode_core::{assemble, Amount, PayloadRequest, PixKeyType};
//!
//! let request = PayloadRequest::new("11987654321", PixKeyType::Phone, "Bella Arte")
//!     .with_city("São Paulo")
//!     .with_amount(Amount::from_centavos(1050));
//!
//! let payload = assemble(&request).unwrap();
//! assert!(payload.contains("540510.50"));
//! assert!(payload.contains("5910BELLA ARTE"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod crc;
pub mod error;
pub mod key;
pub mod money;
pub mod payload;
pub mod text;
pub mod tlv;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{DecodeError, DecodeResult, PayloadError, PayloadResult};
pub use money::Amount;
pub use payload::{assemble, assemble_with};
pub use types::*;
