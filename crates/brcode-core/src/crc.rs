//! # CRC16 Checksum
//!
//! CRC-16/CCITT-FALSE as required for the payload's tag 63.
//!
//! ## Parameters
//! ```text
//! ┌──────────────┬──────────┐
//! │ width        │ 16       │
//! │ polynomial   │ 0x1021   │
//! │ init         │ 0xFFFF   │
//! │ reflect in   │ no       │
//! │ reflect out  │ no       │
//! │ xor out      │ 0x0000   │
//! │ check        │ 0x29B1   │  ("123456789")
//! └──────────────┴──────────┘
//! ```
//!
//! ## The Self-Referential Rule
//! The checksum covers the whole payload *including* the literal `"6304"`
//! (tag 63, length 04) and excluding only the four hex digits themselves:
//! ```text
//! 000201 ... 62070503*** 6304 │ 3E12
//! └──────── CRC input ───────┘ └ value
//! ```

use crate::error::{DecodeError, DecodeResult};

/// Generator polynomial (x^16 + x^12 + x^5 + 1).
pub const POLYNOMIAL: u16 = 0x1021;

/// Initial register value.
pub const INITIAL: u16 = 0xFFFF;

/// Tag and length of the checksum field, included in the CRC input.
pub const CHECKSUM_PREFIX: &str = "6304";

/// Number of hex digits in the checksum value.
pub const CHECKSUM_LEN: usize = 4;

/// Computes CRC-16/CCITT-FALSE over `data`, bit by bit, MSB first.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = INITIAL;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Returns the checksum of `text` as four uppercase hex digits.
///
/// `text` is hashed as UTF-8 bytes. Assembled payloads are always ASCII,
/// so this is one byte per character.
///
/// ## Example
/// ```rust
/// use brcode_core::crc::checksum;
///
/// assert_eq!(checksum("123456789"), "29B1");
/// assert_eq!(checksum(""), "FFFF");
/// ```
pub fn checksum(text: &str) -> String {
    format!("{:04X}", crc16(text.as_bytes()))
}

/// Appends `"6304"` and the checksum over `body + "6304"`.
///
/// `body` is every field before tag 63.
pub fn append_checksum(body: &str) -> String {
    let mut payload = String::with_capacity(body.len() + CHECKSUM_PREFIX.len() + CHECKSUM_LEN);
    payload.push_str(body);
    payload.push_str(CHECKSUM_PREFIX);
    let crc = checksum(&payload);
    payload.push_str(&crc);
    payload
}

/// Verifies the trailing `6304XXXX` of a complete payload.
///
/// ## Errors
/// - `MissingChecksum`: payload does not end in `6304` + four characters
/// - `ChecksumMismatch`: stored value differs from the recomputed one
///   (compared case-insensitively)
pub fn verify(payload: &str) -> DecodeResult<()> {
    let suffix_len = CHECKSUM_PREFIX.len() + CHECKSUM_LEN;
    if payload.len() < suffix_len || !payload.is_char_boundary(payload.len() - CHECKSUM_LEN) {
        return Err(DecodeError::MissingChecksum);
    }

    let (covered, actual) = payload.split_at(payload.len() - CHECKSUM_LEN);
    if !covered.ends_with(CHECKSUM_PREFIX) {
        return Err(DecodeError::MissingChecksum);
    }

    let expected = checksum(covered);
    if !expected.eq_ignore_ascii_case(actual) {
        return Err(DecodeError::ChecksumMismatch {
            expected,
            actual: actual.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
