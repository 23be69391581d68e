//! Move type tags.
//!
//! A type tag names a Move runtime type, either a primitive, a vector of
//! another type, or a fully qualified struct. Vectors and struct type
//! parameters nest further tags through owned boxes, so a tag is always a
//! tree: no sharing, no cycles.

use serde::Serialize;

use crate::address::SuiAddress;

/// Maximum nesting depth accepted for a type tag tree.
///
/// Tag depth is caller controlled; the ceiling keeps encode-time recursion
/// bounded.
pub const MAX_TYPE_NESTING_DEPTH: usize = 32;

/// A Move runtime type.
///
/// Variant order is the wire index and must not change. `U16`, `U32` and
/// `U256` sit after `Struct` because they were added to the protocol later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
    U16,
    U32,
    U256,
}

impl TypeTag {
    /// Whether the tree nests deeper than `limit` levels.
    pub(crate) fn exceeds_depth(&self, limit: usize) -> bool {
        if limit == 0 {
            return true;
        }
        match self {
            TypeTag::Vector(element) => element.exceeds_depth(limit - 1),
            TypeTag::Struct(tag) => tag
                .type_params
                .iter()
                .any(|param| param.exceeds_depth(limit - 1)),
            _ => false,
        }
    }
}

/// A fully qualified Move struct type, e.g. `0x2::sui::SUI`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructTag {
    pub address: SuiAddress,
    pub module: String,
    pub name: String,
    pub type_params: Vec<TypeTag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_vector(depth: usize) -> TypeTag {
        let mut tag = TypeTag::U8;
        for _ in 0..depth {
            tag = TypeTag::Vector(Box::new(tag));
        }
        tag
    }

    #[test]
    fn test_wire_indices_are_stable() {
        assert_eq!(bcs::to_bytes(&TypeTag::Bool).unwrap(), vec![0]);
        assert_eq!(bcs::to_bytes(&TypeTag::U8).unwrap(), vec![1]);
        assert_eq!(bcs::to_bytes(&TypeTag::U64).unwrap(), vec![2]);
        assert_eq!(bcs::to_bytes(&TypeTag::U128).unwrap(), vec![3]);
        assert_eq!(bcs::to_bytes(&TypeTag::Address).unwrap(), vec![4]);
        assert_eq!(bcs::to_bytes(&TypeTag::Signer).unwrap(), vec![5]);
        assert_eq!(bcs::to_bytes(&TypeTag::U16).unwrap(), vec![8]);
        assert_eq!(bcs::to_bytes(&TypeTag::U32).unwrap(), vec![9]);
        assert_eq!(bcs::to_bytes(&TypeTag::U256).unwrap(), vec![10]);
    }

    #[test]
    fn test_vector_nests_inline() {
        let tag = TypeTag::Vector(Box::new(TypeTag::U64));
        assert_eq!(bcs::to_bytes(&tag).unwrap(), vec![6, 2]);
    }

    #[test]
    fn test_struct_tag_encoding() {
        let tag = TypeTag::Struct(Box::new(StructTag {
            address: SuiAddress::from_hex("0x2").unwrap(),
            module: "sui".to_string(),
            name: "SUI".to_string(),
            type_params: vec![],
        }));
        let bytes = bcs::to_bytes(&tag).unwrap();
        assert_eq!(bytes[0], 7);
        // 32-byte address, then length-prefixed module and name, empty params
        assert_eq!(bytes[32], 2);
        assert_eq!(&bytes[33..37], b"\x03sui");
        assert_eq!(&bytes[37..41], b"\x03SUI");
        assert_eq!(bytes[41], 0);
        assert_eq!(bytes.len(), 42);
    }

    #[test]
    fn test_depth_ceiling_boundary() {
        // A bare tag occupies one level, so MAX - 1 wrappers still fit
        assert!(!nested_vector(MAX_TYPE_NESTING_DEPTH - 1).exceeds_depth(MAX_TYPE_NESTING_DEPTH));
        assert!(nested_vector(MAX_TYPE_NESTING_DEPTH).exceeds_depth(MAX_TYPE_NESTING_DEPTH));
    }

    #[test]
    fn test_depth_counts_struct_params() {
        let deep = TypeTag::Struct(Box::new(StructTag {
            address: SuiAddress::ZERO,
            module: "m".to_string(),
            name: "T".to_string(),
            type_params: vec![nested_vector(MAX_TYPE_NESTING_DEPTH)],
        }));
        assert!(deep.exceeds_depth(MAX_TYPE_NESTING_DEPTH));
    }
}
