//! Canonical encoding helpers.
//!
//! BCS is the canonical form: equal values encode to equal bytes, with no
//! framing beyond ULEB128 variant indices and sequence lengths. That is what
//! makes the output hashable and signable downstream.

use serde::Serialize;

use crate::error::TransactionError;

/// Encode a wire value to canonical BCS bytes.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, TransactionError> {
    Ok(bcs::to_bytes(value)?)
}

/// Encode a wire value to BCS and render it as standard base64.
pub fn to_base64<T: Serialize>(value: &T) -> Result<String, TransactionError> {
    use base64::Engine;
    let bytes = to_bytes(value)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}
