//! Sui transaction construction and canonical encoding.
//!
//! This crate models the Sui transaction payload as closed enums, encodes it
//! with BCS (the ledger's canonical binary format), and provides an
//! incremental builder for programmable transactions:
//!
//! - **Wire types** ([`transaction`], [`type_tag`]): [`TransactionData`],
//!   [`Command`], [`CallArg`], [`Argument`], [`TypeTag`]; variant order is
//!   the wire contract.
//! - **Builder** ([`builder`]): [`TransactionBuilder`] grows the
//!   input/command graph, resolves cross-references by index, and finalizes
//!   it, repeatably, into canonical bytes.
//! - **Conversions** ([`address`]): [`SuiAddress`] (hex) and
//!   [`ObjectDigest`] (base58) fixed-width types with fallible parsing.
//!
//! Decoding payloads, signing, gas estimation, and network submission are
//! out of scope.
//!
//! ```
//! use sui_tx_builder::{SuiAddress, TransactionBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tx = TransactionBuilder::new();
//! let amount = tx.pure(&1_000_000u64)?;
//! let coin = tx.split_coins(tx.gas(), vec![amount]);
//! let recipient = tx.pure(&SuiAddress::from_hex("0x9")?)?;
//! tx.transfer_objects(vec![coin], recipient);
//! let kind_bytes = tx.build_kind()?;
//! assert!(!kind_bytes.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod builder;
pub mod encoding;
pub mod error;
pub mod transaction;
pub mod type_tag;

// Re-export the public surface at the crate root
pub use address::{ObjectDigest, SuiAddress};
pub use builder::TransactionBuilder;
pub use error::{ConversionError, TransactionError};
pub use transaction::{
    Argument, CallArg, Command, GasData, MoveCall, ObjectArg, ObjectRef,
    ProgrammableTransaction, SharedObjectRef, TransactionData, TransactionDataV1,
    TransactionExpiration, TransactionKind, UnresolvedObject,
};
pub use type_tag::{StructTag, TypeTag, MAX_TYPE_NESTING_DEPTH};
