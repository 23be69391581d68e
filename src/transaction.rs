//! Transaction payload wire types.
//!
//! Every "one of N" protocol concept here is a closed enum whose variant
//! order is the BCS index actually sent on the wire; reordering any of them
//! produces a payload the execution engine rejects or misinterprets. The
//! types serialize only; decoding a payload back from bytes is out of scope.

use serde::Serialize;

use crate::address::{ObjectDigest, SuiAddress};
use crate::type_tag::TypeTag;

/// Versioned transaction payload, the unit that gets hashed and signed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TransactionData {
    V1(TransactionDataV1),
}

/// Version 1 payload.
///
/// `expiration` carries its own "not set" case; `TransactionExpiration::None`
/// encodes as a single zero byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDataV1 {
    pub kind: TransactionKind,
    pub sender: SuiAddress,
    pub gas_data: GasData,
    pub expiration: TransactionExpiration,
}

/// Transaction kinds. The system kinds are payload-free markers here; only
/// programmable transactions are assembled by this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TransactionKind {
    ProgrammableTransaction(ProgrammableTransaction),
    ChangeEpoch,
    Genesis,
    ConsensusCommitPrologue,
}

/// An ordered command list over an append-only input pool.
///
/// Commands may consume earlier commands' outputs by index, forming a DAG in
/// which edges always point backwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgrammableTransaction {
    pub inputs: Vec<CallArg>,
    pub commands: Vec<Command>,
}

/// One entry of the input pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CallArg {
    /// A BCS-encoded literal value.
    Pure(Vec<u8>),
    /// A reference to an on-chain object.
    Object(ObjectArg),
    /// A literal whose encoding is deferred to an external resolver.
    UnresolvedPure(serde_json::Value),
    /// An object known only by id, missing version and digest data until an
    /// external resolver fills them in.
    UnresolvedObject(UnresolvedObject),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedObject {
    pub object_id: SuiAddress,
}

/// How an object input is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ObjectArg {
    /// An owned or immutable object at a specific version.
    ImmOrOwnedObject(ObjectRef),
    /// A shared object; `mutable` controls whether the transaction asks for
    /// write access.
    SharedObject(SharedObjectRef),
    /// An object to be received by one of the transaction's objects.
    Receiving(ObjectRef),
}

/// A single programmable command.
///
/// Variant order is the wire index. `MoveCall` is boxed to keep the enum
/// small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    /// A call to an entry or public Move function.
    MoveCall(Box<MoveCall>),
    /// Send objects to an address. The objects must have public transfer or
    /// be newly created.
    TransferObjects {
        objects: Vec<Argument>,
        address: Argument,
    },
    /// Split amounts off a coin, producing one new coin per amount.
    SplitCoins {
        coin: Argument,
        amounts: Vec<Argument>,
    },
    /// Merge source coins into the destination coin.
    MergeCoins {
        destination: Argument,
        sources: Vec<Argument>,
    },
    /// Publish a package from compiled module bytes and its transitive
    /// dependencies.
    Publish {
        modules: Vec<Vec<u8>>,
        dependencies: Vec<SuiAddress>,
    },
    /// Build a Move vector from elements of one type. The type must be given
    /// explicitly when the elements alone do not determine it.
    MakeMoveVec {
        element_type: Option<TypeTag>,
        elements: Vec<Argument>,
    },
    /// Upgrade a published package using its upgrade ticket.
    Upgrade {
        modules: Vec<Vec<u8>>,
        dependencies: Vec<SuiAddress>,
        package: SuiAddress,
        ticket: Argument,
    },
}

impl Command {
    /// Every argument reference the command consumes, for validation.
    pub(crate) fn arguments(&self) -> Vec<&Argument> {
        match self {
            Command::MoveCall(call) => call.arguments.iter().collect(),
            Command::TransferObjects { objects, address } => {
                objects.iter().chain(std::iter::once(address)).collect()
            }
            Command::SplitCoins { coin, amounts } => {
                std::iter::once(coin).chain(amounts.iter()).collect()
            }
            Command::MergeCoins {
                destination,
                sources,
            } => std::iter::once(destination).chain(sources.iter()).collect(),
            Command::Publish { .. } => Vec::new(),
            Command::MakeMoveVec { elements, .. } => elements.iter().collect(),
            Command::Upgrade { ticket, .. } => vec![ticket],
        }
    }
}

/// Target function of a `MoveCall` plus its type and value arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveCall {
    pub package: SuiAddress,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<Argument>,
}

/// Reference to a value available to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Argument {
    /// The transaction's gas coin. Not an index into the input pool.
    GasCoin,
    /// An entry of the input pool.
    Input(u16),
    /// The result of an earlier command.
    Result(u16),
    /// One output of an earlier multi-output command: command index, then
    /// position within its results.
    NestedResult(u16, u16),
}

/// Reference to an owned or immutable object at a specific version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRef {
    pub object_id: SuiAddress,
    pub version: u64,
    pub digest: ObjectDigest,
}

/// Reference to a shared object by the version at which it became shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedObjectRef {
    pub object_id: SuiAddress,
    pub initial_shared_version: u64,
    pub mutable: bool,
}

/// How execution cost is funded: the payment object set, its owner, the unit
/// price, and the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasData {
    pub payment: Vec<ObjectRef>,
    pub owner: SuiAddress,
    pub price: u64,
    pub budget: u64,
}

/// Until when the transaction may execute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TransactionExpiration {
    /// No expiry.
    #[default]
    None,
    /// Valid only until the end of the given epoch.
    Epoch(u64),
}
