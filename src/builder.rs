//! Incremental programmable-transaction builder.
//!
//! A [`TransactionBuilder`] owns one payload under construction. Inputs and
//! commands only grow, so every index handed out stays valid for the
//! builder's lifetime. Building is a read-only projection, not a state
//! transition: the builder stays mutable afterwards and can be built again.

use serde::Serialize;
use tracing::debug;

use crate::address::SuiAddress;
use crate::encoding;
use crate::error::TransactionError;
use crate::transaction::{
    Argument, CallArg, Command, GasData, MoveCall, ObjectArg, ObjectRef,
    ProgrammableTransaction, TransactionData, TransactionDataV1, TransactionExpiration,
    TransactionKind,
};
use crate::type_tag::{TypeTag, MAX_TYPE_NESTING_DEPTH};

/// Builder for a programmable transaction payload.
///
/// Gas fields and the sender start unset; a full [`build`](Self::build)
/// refuses to run until all of them are set, while
/// [`build_kind`](Self::build_kind) encodes the command graph alone.
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
    sender: Option<SuiAddress>,
    gas_payment: Option<Vec<ObjectRef>>,
    gas_owner: Option<SuiAddress>,
    gas_price: Option<u64>,
    gas_budget: Option<u64>,
    expiration: TransactionExpiration,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Field setters (last write wins)
    // -------------------------------------------------------------------------

    pub fn set_sender(&mut self, sender: SuiAddress) -> &mut Self {
        self.sender = Some(sender);
        self
    }

    pub fn set_gas_price(&mut self, price: u64) -> &mut Self {
        self.gas_price = Some(price);
        self
    }

    pub fn set_gas_budget(&mut self, budget: u64) -> &mut Self {
        self.gas_budget = Some(budget);
        self
    }

    pub fn set_gas_payment(&mut self, payment: Vec<ObjectRef>) -> &mut Self {
        self.gas_payment = Some(payment);
        self
    }

    pub fn set_gas_owner(&mut self, owner: SuiAddress) -> &mut Self {
        self.gas_owner = Some(owner);
        self
    }

    pub fn set_expiration(&mut self, expiration: TransactionExpiration) -> &mut Self {
        self.expiration = expiration;
        self
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Append an input and return the argument referencing it.
    ///
    /// The Nth input added (0-indexed) is always `Argument::Input(N)`:
    /// inputs are never removed, so issued indices stay valid.
    pub fn add_input(&mut self, input: CallArg) -> Argument {
        let index = self.inputs.len() as u16;
        self.inputs.push(input);
        Argument::Input(index)
    }

    /// BCS-encode a literal value and add it as a `Pure` input.
    pub fn pure<T: Serialize>(&mut self, value: &T) -> Result<Argument, TransactionError> {
        let bytes = encoding::to_bytes(value)?;
        Ok(self.add_input(CallArg::Pure(bytes)))
    }

    /// Add an object reference input.
    pub fn object(&mut self, object: ObjectArg) -> Argument {
        self.add_input(CallArg::Object(object))
    }

    /// Index of the first existing object input referencing `object_id`.
    ///
    /// Only `Object` inputs participate; `Pure` and unresolved inputs never
    /// match, even when their payload happens to contain the same bytes.
    /// A miss is a normal negative result: the caller adds a new input.
    pub fn find_input_index(&self, object_id: &SuiAddress) -> Option<u16> {
        self.inputs
            .iter()
            .position(|input| {
                let CallArg::Object(object) = input else {
                    return false;
                };
                match object {
                    ObjectArg::ImmOrOwnedObject(reference) => reference.object_id == *object_id,
                    ObjectArg::SharedObject(reference) => reference.object_id == *object_id,
                    ObjectArg::Receiving(reference) => reference.object_id == *object_id,
                }
            })
            .map(|index| index as u16)
    }

    /// The gas-coin sentinel argument. Not an index into the input pool.
    pub fn gas(&self) -> Argument {
        Argument::GasCoin
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Append a command and return its position, usable for result chaining.
    pub fn add_command(&mut self, command: Command) -> u16 {
        let index = self.commands.len() as u16;
        self.commands.push(command);
        index
    }

    /// Call a Move function. Returns the argument referencing the call's
    /// result; a call with several outputs is consumed through
    /// `Argument::NestedResult(index, position)` instead.
    pub fn move_call(
        &mut self,
        package: SuiAddress,
        module: impl Into<String>,
        function: impl Into<String>,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<Argument>,
    ) -> Result<Argument, TransactionError> {
        check_type_nesting(type_arguments.iter())?;
        let index = self.add_command(Command::MoveCall(Box::new(MoveCall {
            package,
            module: module.into(),
            function: function.into(),
            type_arguments,
            arguments,
        })));
        Ok(Argument::Result(index))
    }

    /// Send objects to an address.
    pub fn transfer_objects(&mut self, objects: Vec<Argument>, address: Argument) -> Argument {
        Argument::Result(self.add_command(Command::TransferObjects { objects, address }))
    }

    /// Split amounts off a coin. The result holds one new coin per amount.
    pub fn split_coins(&mut self, coin: Argument, amounts: Vec<Argument>) -> Argument {
        Argument::Result(self.add_command(Command::SplitCoins { coin, amounts }))
    }

    /// Merge source coins into the destination coin.
    pub fn merge_coins(&mut self, destination: Argument, sources: Vec<Argument>) -> Argument {
        Argument::Result(self.add_command(Command::MergeCoins {
            destination,
            sources,
        }))
    }

    /// Publish a package. The result is the package's upgrade capability.
    pub fn publish(&mut self, modules: Vec<Vec<u8>>, dependencies: Vec<SuiAddress>) -> Argument {
        Argument::Result(self.add_command(Command::Publish {
            modules,
            dependencies,
        }))
    }

    /// Build a Move vector from elements. `element_type` is required when the
    /// elements alone do not determine it (empty or non-object vectors).
    pub fn make_move_vec(
        &mut self,
        element_type: Option<TypeTag>,
        elements: Vec<Argument>,
    ) -> Result<Argument, TransactionError> {
        check_type_nesting(element_type.iter())?;
        Ok(Argument::Result(self.add_command(Command::MakeMoveVec {
            element_type,
            elements,
        })))
    }

    /// Upgrade a published package using its upgrade ticket. The result is
    /// the upgrade receipt.
    pub fn upgrade(
        &mut self,
        modules: Vec<Vec<u8>>,
        dependencies: Vec<SuiAddress>,
        package: SuiAddress,
        ticket: Argument,
    ) -> Argument {
        Argument::Result(self.add_command(Command::Upgrade {
            modules,
            dependencies,
            package,
            ticket,
        }))
    }

    // -------------------------------------------------------------------------
    // Build
    // -------------------------------------------------------------------------

    /// Encode the full versioned payload to canonical bytes.
    pub fn build(&self) -> Result<Vec<u8>, TransactionError> {
        let data = self.transaction_data()?;
        debug!(
            inputs = self.inputs.len(),
            commands = self.commands.len(),
            "encoding full transaction payload"
        );
        encoding::to_bytes(&data)
    }

    /// Encode only the transaction kind: the command graph without sender,
    /// gas, or expiration. Skips the completeness checks a full build runs.
    pub fn build_kind(&self) -> Result<Vec<u8>, TransactionError> {
        self.validate_references()?;
        debug!(
            inputs = self.inputs.len(),
            commands = self.commands.len(),
            "encoding transaction kind"
        );
        encoding::to_bytes(&self.kind())
    }

    /// [`build`](Self::build), rendered as standard base64.
    pub fn build_base64(&self) -> Result<String, TransactionError> {
        let data = self.transaction_data()?;
        encoding::to_base64(&data)
    }

    /// [`build_kind`](Self::build_kind), rendered as standard base64.
    pub fn build_kind_base64(&self) -> Result<String, TransactionError> {
        self.validate_references()?;
        encoding::to_base64(&self.kind())
    }

    /// Finalize the current state into an immutable payload without encoding
    /// it. Validates argument references and field completeness; reads the
    /// builder's state without consuming it.
    pub fn transaction_data(&self) -> Result<TransactionData, TransactionError> {
        self.validate_references()?;
        let sender = self.sender.ok_or(TransactionError::MissingSender)?;
        let gas_data = self.gas_data()?;
        Ok(TransactionData::V1(TransactionDataV1 {
            kind: self.kind(),
            sender,
            gas_data,
            expiration: self.expiration,
        }))
    }

    fn kind(&self) -> TransactionKind {
        TransactionKind::ProgrammableTransaction(ProgrammableTransaction {
            inputs: self.inputs.clone(),
            commands: self.commands.clone(),
        })
    }

    fn gas_data(&self) -> Result<GasData, TransactionError> {
        let missing = |field| TransactionError::IncompleteGasData { missing: field };
        Ok(GasData {
            payment: self.gas_payment.clone().ok_or_else(|| missing("payment"))?,
            owner: self.gas_owner.ok_or_else(|| missing("owner"))?,
            price: self.gas_price.ok_or_else(|| missing("price"))?,
            budget: self.gas_budget.ok_or_else(|| missing("budget"))?,
        })
    }

    /// Every `Input` must address an existing input, and every `Result` or
    /// `NestedResult` must address a strictly earlier command. Arguments
    /// issued by this builder satisfy both by construction; this is the
    /// boundary check for hand-assembled arguments.
    fn validate_references(&self) -> Result<(), TransactionError> {
        for (position, command) in self.commands.iter().enumerate() {
            for argument in command.arguments() {
                match *argument {
                    Argument::Input(index) if (index as usize) >= self.inputs.len() => {
                        return Err(TransactionError::InputIndexOutOfBounds {
                            command: position,
                            index,
                            inputs: self.inputs.len(),
                        });
                    }
                    Argument::Result(index) | Argument::NestedResult(index, _)
                        if (index as usize) >= position =>
                    {
                        return Err(TransactionError::ResultNotYetAvailable {
                            command: position,
                            index,
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

fn check_type_nesting<'a>(
    mut tags: impl Iterator<Item = &'a TypeTag>,
) -> Result<(), TransactionError> {
    if tags.any(|tag| tag.exceeds_depth(MAX_TYPE_NESTING_DEPTH)) {
        return Err(TransactionError::TypeNestingTooDeep {
            max: MAX_TYPE_NESTING_DEPTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ObjectDigest;

    fn object_ref(id: &str) -> ObjectRef {
        ObjectRef {
            object_id: SuiAddress::from_hex(id).unwrap(),
            version: 1,
            digest: ObjectDigest::new([0u8; 32]),
        }
    }

    #[test]
    fn test_add_input_issues_sequential_indices() {
        let mut tx = TransactionBuilder::new();
        for expected in 0..4u16 {
            let argument = tx.add_input(CallArg::Pure(vec![expected as u8]));
            assert_eq!(argument, Argument::Input(expected));
        }
    }

    #[test]
    fn test_gas_is_the_sentinel() {
        let tx = TransactionBuilder::new();
        assert_eq!(tx.gas(), Argument::GasCoin);
    }

    #[test]
    fn test_find_input_index_matches_all_object_shapes() {
        let mut tx = TransactionBuilder::new();
        tx.object(ObjectArg::ImmOrOwnedObject(object_ref("0x1")));
        tx.object(ObjectArg::SharedObject(crate::transaction::SharedObjectRef {
            object_id: SuiAddress::from_hex("0x2").unwrap(),
            initial_shared_version: 1,
            mutable: false,
        }));
        tx.object(ObjectArg::Receiving(object_ref("0x3")));

        for (id, expected) in [("0x1", 0u16), ("0x2", 1), ("0x3", 2)] {
            let target = SuiAddress::from_hex(id).unwrap();
            assert_eq!(tx.find_input_index(&target), Some(expected));
        }
        let absent = SuiAddress::from_hex("0x4").unwrap();
        assert_eq!(tx.find_input_index(&absent), None);
    }

    #[test]
    fn test_find_input_index_prefers_lowest_index() {
        let mut tx = TransactionBuilder::new();
        tx.object(ObjectArg::ImmOrOwnedObject(object_ref("0x5")));
        tx.object(ObjectArg::Receiving(object_ref("0x5")));
        let target = SuiAddress::from_hex("0x5").unwrap();
        assert_eq!(tx.find_input_index(&target), Some(0));
    }

    #[test]
    fn test_find_input_index_ignores_pure_inputs() {
        let mut tx = TransactionBuilder::new();
        let address = SuiAddress::from_hex("0x9").unwrap();
        // A pure input whose bytes are exactly the address must not match
        tx.pure(&address).unwrap();
        assert_eq!(tx.find_input_index(&address), None);
    }

    #[test]
    fn test_input_reference_validated_at_build() {
        let mut tx = TransactionBuilder::new();
        tx.transfer_objects(vec![Argument::Input(3)], Argument::GasCoin);
        let err = tx.build_kind().unwrap_err();
        assert!(matches!(
            err,
            TransactionError::InputIndexOutOfBounds {
                command: 0,
                index: 3,
                inputs: 0
            }
        ));
    }

    #[test]
    fn test_forward_result_reference_rejected() {
        let mut tx = TransactionBuilder::new();
        // Command 0 consuming its own result can only be hand-assembled
        tx.transfer_objects(vec![Argument::Result(0)], Argument::GasCoin);
        let err = tx.build_kind().unwrap_err();
        assert!(matches!(
            err,
            TransactionError::ResultNotYetAvailable {
                command: 0,
                index: 0
            }
        ));
    }

    #[test]
    fn test_move_call_rejects_oversized_type_nesting() {
        let mut deep = TypeTag::U8;
        for _ in 0..MAX_TYPE_NESTING_DEPTH {
            deep = TypeTag::Vector(Box::new(deep));
        }
        let mut tx = TransactionBuilder::new();
        let err = tx
            .move_call(SuiAddress::ZERO, "m", "f", vec![deep], vec![])
            .unwrap_err();
        assert!(matches!(err, TransactionError::TypeNestingTooDeep { .. }));
        // The rejected command must not have been appended
        assert_eq!(tx.build_kind().unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_helpers_chain_result_indices() {
        let mut tx = TransactionBuilder::new();
        let first = tx.split_coins(Argument::GasCoin, vec![]);
        let second = tx.merge_coins(Argument::GasCoin, vec![first]);
        let third = tx.make_move_vec(Some(TypeTag::U64), vec![second]).unwrap();
        assert_eq!(first, Argument::Result(0));
        assert_eq!(second, Argument::Result(1));
        assert_eq!(third, Argument::Result(2));
    }
}
