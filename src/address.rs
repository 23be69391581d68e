//! Fixed-width byte types and their string conversions.
//!
//! Sui addresses are 32-byte values, but they are written in several formats:
//! - Short form: "0x2"
//! - Full form: "0x0000000000000000000000000000000000000000000000000000000000000002"
//! - Without prefix: "2"
//!
//! Short forms are left-padded to the full width on parse. Object digests are
//! 32-byte values written in base58.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ConversionError;

/// A 32-byte Sui address, also used for object and package ids.
///
/// Serializes as 32 raw bytes with no length prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SuiAddress([u8; 32]);

impl SuiAddress {
    /// Address width in bytes.
    pub const LENGTH: usize = 32;

    /// The all-zero address.
    pub const ZERO: Self = Self([0; Self::LENGTH]);

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse a hex literal, with or without `0x` prefix.
    ///
    /// Short forms are accepted: `0x2` parses to `0x00..02`.
    pub fn from_hex(s: &str) -> Result<Self, ConversionError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > Self::LENGTH * 2 {
            return Err(ConversionError::InvalidAddress {
                input: s.to_string(),
                reason: format!("expected 1 to {} hex characters", Self::LENGTH * 2),
            });
        }
        let full = format!("{digits:0>64}");
        let bytes = hex::decode(&full).map_err(|e| ConversionError::InvalidAddress {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        let mut out = [0u8; Self::LENGTH];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
        if bytes.len() != Self::LENGTH {
            return Err(ConversionError::InvalidLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; Self::LENGTH];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    /// Full-form hex string: `0x` followed by 64 hex characters.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for SuiAddress {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for SuiAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress({})", self.to_hex())
    }
}

/// A 32-byte object content digest, written in base58.
///
/// Unlike addresses, digests serialize as a length-prefixed byte string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectDigest([u8; 32]);

impl ObjectDigest {
    /// Digest width in bytes.
    pub const LENGTH: usize = 32;

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_base58(s: &str) -> Result<Self, ConversionError> {
        let bytes = bs58::decode(s.trim())
            .into_vec()
            .map_err(|e| ConversionError::InvalidDigest {
                input: s.to_string(),
                reason: e.to_string(),
            })?;
        if bytes.len() != Self::LENGTH {
            return Err(ConversionError::InvalidLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; Self::LENGTH];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }
}

impl Serialize for ObjectDigest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.0)
    }
}

impl FromStr for ObjectDigest {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl fmt::Display for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl fmt::Debug for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectDigest({})", self.to_base58())
    }
}
