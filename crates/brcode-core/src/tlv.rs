//! # TLV Codec
//!
//! Tag-length-value primitive used for every payload field.
//!
//! ## Wire Format
//! ```text
//! ┌────────┬────────┬──────────────────────────┐
//! │ tag    │ length │ value                    │
//! │ 2 dig. │ 2 dig. │ 0..=99 characters        │
//! └────────┴────────┴──────────────────────────┘
//!
//!   "59" + "10" + "BELLA ARTE"  ──►  "5910BELLA ARTE"
//! ```
//!
//! Nested blocks (tags 26 and 62) are just a composed TLV string used as
//! the value of an outer field. There are no separators or terminators.
//!
//! The encoder never truncates. A value longer than 99 characters is an
//! error; shortening free text is the caller's job.

use crate::error::{DecodeError, DecodeResult, PayloadError, PayloadResult};

/// Largest value the two-digit length field can describe.
pub const MAX_VALUE_LEN: usize = 99;

// =============================================================================
// TLV Field
// =============================================================================

/// One tag-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    pub tag: String,
    pub value: String,
}

impl TlvField {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        TlvField {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Encodes this field.
    pub fn encode(&self) -> PayloadResult<String> {
        encode(&self.tag, &self.value)
    }

    /// Parses this field's value as a nested TLV sequence.
    pub fn nested(&self) -> DecodeResult<Vec<TlvField>> {
        decode(&self.value)
    }
}

/// Returns true when `tag` is exactly two ASCII digits.
fn is_valid_tag(tag: &str) -> bool {
    tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Encoding
// =============================================================================

/// Encodes a single field as `tag ++ %02d(len) ++ value`.
///
/// Length is counted in characters.
///
/// ## Example
/// ```rust
/// use brcode_core::tlv::encode;
///
/// assert_eq!(encode("53", "986").unwrap(), "5303986");
/// assert!(encode("26", &"x".repeat(100)).is_err());
/// ```
pub fn encode(tag: &str, value: &str) -> PayloadResult<String> {
    if !is_valid_tag(tag) {
        return Err(PayloadError::InvalidTag(tag.to_string()));
    }

    let length = value.chars().count();
    if length > MAX_VALUE_LEN {
        return Err(PayloadError::FieldTooLong {
            tag: tag.to_string(),
            length,
            max: MAX_VALUE_LEN,
        });
    }

    Ok(format!("{}{:02}{}", tag, length, value))
}

/// Concatenates the encodings of `fields` in the given order.
pub fn compose(fields: &[TlvField]) -> PayloadResult<String> {
    let mut out = String::new();
    for field in fields {
        out.push_str(&field.encode()?);
    }
    Ok(out)
}

// =============================================================================
// Decoding
// =============================================================================

/// Parses a flat TLV sequence.
///
/// Positions in errors are character offsets into `input`.
///
/// ## Example
/// ```rust
/// use brcode_core::tlv::decode;
///
/// let fields = decode("000201").unwrap();
/// assert_eq!(fields[0].tag, "00");
/// assert_eq!(fields[0].value, "01");
/// ```
pub fn decode(input: &str) -> DecodeResult<Vec<TlvField>> {
    let chars: Vec<char> = input.chars().collect();
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let tag = take(&chars, pos, 2)?;
        if !is_valid_tag(&tag) {
            return Err(DecodeError::InvalidTag { position: pos, tag });
        }

        let length_text = take(&chars, pos + 2, 2)?;
        let length: usize = match length_text.parse() {
            Ok(n) if length_text.bytes().all(|b| b.is_ascii_digit()) => n,
            _ => {
                return Err(DecodeError::InvalidLength {
                    position: pos + 2,
                    length: length_text,
                })
            }
        };

        let value = take(&chars, pos + 4, length)?;
        fields.push(TlvField { tag, value });
        pos += 4 + length;
    }

    Ok(fields)
}

/// Returns `len` characters starting at `start`, or `Truncated`.
fn take(chars: &[char], start: usize, len: usize) -> DecodeResult<String> {
    chars
        .get(start..start + len)
        .map(|slice| slice.iter().collect())
        .ok_or(DecodeError::Truncated {
            position: chars.len(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
