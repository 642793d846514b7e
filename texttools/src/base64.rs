//! Standard Base64 (RFC 4648 §4) encoding and strict decoding
//!
//! Decoding only accepts canonical Base64: input that passes the alphabet and
//! length checks is decoded, re-encoded and compared with the original. Any
//! difference (stray padding bits, bytes that are not UTF-8) rejects the input
//! instead of returning a lossy result.

use crate::result::TransformResult;
use ::base64::alphabet;
use ::base64::engine::general_purpose::STANDARD;
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use ::base64::Engine;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Decoder that accepts any bit pattern in the final group.
/// Canonicality is checked by re-encoding, not by the decoder.
const PERMISSIVE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

static ALPHABET: OnceLock<Regex> = OnceLock::new();

fn alphabet_pattern() -> &'static Regex {
    ALPHABET.get_or_init(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").expect("static pattern"))
}

/// Why a Base64 input was rejected
///
/// Messages are stable; callers may match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    #[error("Invalid Base64 format: contains invalid characters")]
    InvalidCharacters,

    #[error("Invalid Base64 format: length must be multiple of 4")]
    InvalidLength,

    #[error("Invalid Base64 format: failed verification")]
    FailedVerification,

    /// Decoder fault after validation passed
    #[error("Decoding failed: {0}")]
    Internal(String),
}

/// Encode the UTF-8 bytes of `text` as padded standard Base64
pub fn encode(text: &str) -> TransformResult {
    TransformResult::Success(STANDARD.encode(text.as_bytes()))
}

/// Validate and decode canonical standard Base64 into UTF-8 text
pub fn check(text: &str) -> Result<String, Base64Error> {
    if !alphabet_pattern().is_match(text) {
        return Err(Base64Error::InvalidCharacters);
    }

    if text.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }

    let bytes = PERMISSIVE
        .decode(text)
        .map_err(|e| Base64Error::Internal(e.to_string()))?;
    let decoded = String::from_utf8_lossy(&bytes).into_owned();

    if STANDARD.encode(decoded.as_bytes()) != text {
        return Err(Base64Error::FailedVerification);
    }

    Ok(decoded)
}

/// Decode `text`, reporting the first failed check as the result's error
pub fn decode(text: &str) -> TransformResult {
    check(text).into()
}
