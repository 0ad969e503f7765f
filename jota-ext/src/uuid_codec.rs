//! UUID shortening: canonical form ↔ compact representation in nine bases
//!
//! The canonical UUID is treated as its 128-bit value. Power-of-two bases
//! that have standard byte encodings go through the `hex` and `base64`
//! crates; the alphabetic bases (32, 36, 58, 62) share one div-mod radix
//! codec over the 128-bit value.

use crate::helpers::{optional_str, require_str};
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use jota_core::{ExtError, Json, Slot};
use jota_plugin::{ExtensionFunction, FunctionMeta, ParamSpec, ParamType};
use uuid::Uuid;

const BASE32_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz234567";
const BASE36_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE62_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Supported compact representations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Base2,
    Base10,
    Base16,
    Base32,
    Base36,
    Base58,
    Base62,
    Base64,
    Base64Url,
}

impl Base {
    pub const DEFAULT: Base = Base::Base62;

    pub fn parse(name: &str) -> Result<Self, ExtError> {
        match name {
            "base2" => Ok(Base::Base2),
            "base10" => Ok(Base::Base10),
            "base16" => Ok(Base::Base16),
            "base32" => Ok(Base::Base32),
            "base36" => Ok(Base::Base36),
            "base58" => Ok(Base::Base58),
            "base62" => Ok(Base::Base62),
            "base64" => Ok(Base::Base64),
            "base64url" => Ok(Base::Base64Url),
            other => Err(ExtError::unsupported_base(other)),
        }
    }

}

/// Encode a 128-bit value in an arbitrary alphabet
fn encode_radix(mut value: u128, alphabet: &str) -> String {
    let digits: Vec<char> = alphabet.chars().collect();
    let radix = digits.len() as u128;
    if value == 0 {
        return digits[0].to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(digits[(value % radix) as usize]);
        value /= radix;
    }
    out.iter().rev().collect()
}

/// Decode a string written in an arbitrary alphabet back to its 128-bit value
fn decode_radix(encoded: &str, alphabet: &str) -> Result<u128, ExtError> {
    let radix = alphabet.chars().count() as u128;
    let mut value: u128 = 0;
    for c in encoded.chars() {
        let digit = alphabet
            .chars()
            .position(|a| a == c)
            .ok_or_else(ExtError::invalid_encoded_uuid)? as u128;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(ExtError::invalid_encoded_uuid)?;
    }
    Ok(value)
}

/// Validate a canonical UUID and encode it in the given base
pub fn shorten(uuid: &str, base: Base) -> Result<String, ExtError> {
    let parsed = Uuid::parse_str(uuid).map_err(|_| ExtError::invalid_uuid())?;
    let encoded = match base {
        Base::Base2 => format!("{:b}", parsed.as_u128()),
        Base::Base10 => parsed.as_u128().to_string(),
        Base::Base16 => hex::encode(parsed.as_bytes()),
        Base::Base64 => STANDARD_NO_PAD.encode(parsed.as_bytes()),
        Base::Base64Url => URL_SAFE_NO_PAD.encode(parsed.as_bytes()),
        Base::Base32 => encode_radix(parsed.as_u128(), BASE32_ALPHABET),
        Base::Base36 => encode_radix(parsed.as_u128(), BASE36_ALPHABET),
        Base::Base58 => encode_radix(parsed.as_u128(), BASE58_ALPHABET),
        Base::Base62 => encode_radix(parsed.as_u128(), BASE62_ALPHABET),
    };
    Ok(encoded)
}

/// Decode a compact representation back to the canonical UUID form
pub fn unshorten(encoded: &str, base: Base) -> Result<String, ExtError> {
    let uuid = match base {
        Base::Base2 => u128::from_str_radix(encoded, 2)
            .map(Uuid::from_u128)
            .map_err(|_| ExtError::invalid_encoded_uuid())?,
        Base::Base10 => encoded
            .parse::<u128>()
            .map(Uuid::from_u128)
            .map_err(|_| ExtError::invalid_encoded_uuid())?,
        Base::Base16 => bytes_to_uuid(hex::decode(encoded).map_err(|_| ExtError::invalid_encoded_uuid())?)?,
        Base::Base64 => {
            bytes_to_uuid(STANDARD_NO_PAD.decode(encoded).map_err(|_| ExtError::invalid_encoded_uuid())?)?
        }
        Base::Base64Url => {
            bytes_to_uuid(URL_SAFE_NO_PAD.decode(encoded).map_err(|_| ExtError::invalid_encoded_uuid())?)?
        }
        Base::Base32 => Uuid::from_u128(decode_radix(encoded, BASE32_ALPHABET)?),
        Base::Base36 => Uuid::from_u128(decode_radix(encoded, BASE36_ALPHABET)?),
        Base::Base58 => Uuid::from_u128(decode_radix(encoded, BASE58_ALPHABET)?),
        Base::Base62 => Uuid::from_u128(decode_radix(encoded, BASE62_ALPHABET)?),
    };
    Ok(uuid.hyphenated().to_string())
}

fn bytes_to_uuid(bytes: Vec<u8>) -> Result<Uuid, ExtError> {
    let array: [u8; 16] = bytes
        .try_into()
        .map_err(|_| ExtError::invalid_encoded_uuid())?;
    Ok(Uuid::from_bytes(array))
}

// ============ ShortenUuid ============

pub struct ShortenUuid;

static SHORTEN_PARAMS: [ParamSpec; 2] = [
    ParamSpec::required("uuid", ParamType::String, "Canonical UUID"),
    ParamSpec::optional("base", ParamType::String, "Target base (default base62)"),
];

static SHORTEN_EXAMPLES: [&str; 1] =
    ["shortenUuid(\"1b49aa30-e719-11e6-9835-f723b46a2688\", \"base36\") → compact form"];

impl ExtensionFunction for ShortenUuid {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "shortenUuid",
            description: "Encode a canonical UUID in a compact base",
            params: &SHORTEN_PARAMS,
            returns: ParamType::String,
            examples: &SHORTEN_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        let uuid = require_str(args, 0, "shortenUuid", "uuid")?;
        let base = match optional_str(args, 1, "shortenUuid", "base")? {
            Some(name) => Base::parse(name)?,
            None => Base::DEFAULT,
        };
        shorten(uuid, base).map(|s| Some(Json::String(s)))
    }
}

// ============ UnshortenUuid ============

pub struct UnshortenUuid;

static UNSHORTEN_PARAMS: [ParamSpec; 2] = [
    ParamSpec::required("encoded", ParamType::String, "Compact UUID form"),
    ParamSpec::optional("base", ParamType::String, "Source base (default base62)"),
];

static UNSHORTEN_EXAMPLES: [&str; 1] =
    ["unshortenUuid(shortenUuid(id, \"base58\"), \"base58\") → id"];

impl ExtensionFunction for UnshortenUuid {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "unshortenUuid",
            description: "Decode a compact UUID form back to canonical",
            params: &UNSHORTEN_PARAMS,
            returns: ParamType::String,
            examples: &UNSHORTEN_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        let encoded = require_str(args, 0, "unshortenUuid", "encoded")?;
        let base = match optional_str(args, 1, "unshortenUuid", "base")? {
            Some(name) => Base::parse(name)?,
            None => Base::DEFAULT,
        };
        unshorten(encoded, base).map(|s| Some(Json::String(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = "1b49aa30-e719-11e6-9835-f723b46a2688";

    #[test]
    fn test_base36_is_lowercase_alphanumeric() {
        let out = shorten(SAMPLE, Base::Base36).unwrap();
        assert!(!out.is_empty());
        assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_round_trip_all_bases() {
        for base in [
            Base::Base2,
            Base::Base10,
            Base::Base16,
            Base::Base32,
            Base::Base36,
            Base::Base58,
            Base::Base62,
            Base::Base64,
            Base::Base64Url,
        ] {
            let short = shorten(SAMPLE, base).unwrap();
            assert_eq!(unshorten(&short, base).unwrap(), SAMPLE, "base {:?}", base);
        }
    }

    #[test]
    fn test_base16_matches_hex_digits() {
        assert_eq!(
            shorten(SAMPLE, Base::Base16).unwrap(),
            SAMPLE.replace('-', "")
        );
    }

    #[test]
    fn test_invalid_uuid() {
        let err = shorten("not-a-uuid", Base::Base36).unwrap_err();
        assert_eq!(err.code, jota_core::codes::INVALID_UUID);
        assert_eq!(err.message, "Invalid UUID");
    }

    #[test]
    fn test_unsupported_base() {
        let err = Base::parse("base99").unwrap_err();
        assert_eq!(err.code, jota_core::codes::INVALID_BASE);
    }

    #[test]
    fn test_unshorten_rejects_foreign_digits() {
        let err = unshorten("!!!", Base::Base36).unwrap_err();
        assert_eq!(err.code, jota_core::codes::INVALID_UUID);
        assert_eq!(err.message, "Invalid encoded UUID");
    }

    #[test]
    fn test_radix_codec_zero() {
        assert_eq!(encode_radix(0, BASE36_ALPHABET), "0");
        assert_eq!(decode_radix("0", BASE36_ALPHABET).unwrap(), 0);
    }

    #[test]
    fn test_plugin_default_base_round_trip() {
        let short = ShortenUuid.call(&[Some(json!(SAMPLE))]).unwrap().unwrap();
        let back = UnshortenUuid.call(&[Some(short)]).unwrap().unwrap();
        assert_eq!(back, json!(SAMPLE));
    }
}
