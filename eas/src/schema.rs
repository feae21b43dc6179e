//! Schema signature parsing and attestation data encoding.
//!
//! [`SchemaEncoder`] parses a comma-separated schema description (e.g.
//! `"uint256,bytes32,string"`) into an ordered type signature and encodes
//! matching [`SchemaItem`] values into the canonical ABI byte form carried
//! by attestation payloads. Byte-level coding is delegated to
//! `alloy-dyn-abi`; this module only lines values up against the signature
//! and applies one normalization rule (`bytes32` values given as text are
//! UTF-8 data, not hex).

use std::str::FromStr;

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{Address, B256, Bytes, I256, U256, hex};
use serde::{Deserialize, Serialize};

use crate::error::EasError;

/// A value to encode into an attestation data slot.
///
/// Deserialization is untagged: JSON booleans, non-negative numbers,
/// negative numbers, and strings map to the variants in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaValue {
    /// Boolean value.
    Bool(bool),
    /// Unsigned 64-bit integer value.
    Uint(u64),
    /// Signed 64-bit integer value.
    Int(i64),
    /// Text value. Also carries hex text for `address` and bytes slots.
    Str(String),
}

impl From<bool> for SchemaValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for SchemaValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<i64> for SchemaValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SchemaValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for SchemaValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// One named value of an attestation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaItem {
    /// Field name, carried for caller bookkeeping; not used in encoding.
    pub name: String,
    /// Declared type name, carried for caller bookkeeping; encoding is
    /// positional against the schema signature.
    #[serde(rename = "type")]
    pub ty: String,
    /// The value to encode.
    pub value: SchemaValue,
}

impl SchemaItem {
    /// Creates a new schema item.
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        value: impl Into<SchemaValue>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }
}

/// Encodes attestation data against a fixed schema signature.
///
/// An encoder is stateless and reusable across [`encode`](Self::encode)
/// calls, provided the value count and order match the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEncoder {
    signature: Vec<String>,
}

impl SchemaEncoder {
    /// Parses a comma-separated schema description into a type signature.
    ///
    /// Tokens are trimmed. Type names are not validated here; an invalid
    /// name only surfaces when [`encode`](Self::encode) hands it to the ABI
    /// coder. An empty description yields an empty signature.
    #[must_use]
    pub fn new(schema: &str) -> Self {
        let signature = schema
            .split(',')
            .map(str::trim)
            .filter(|ty| !ty.is_empty())
            .map(str::to_owned)
            .collect();
        Self { signature }
    }

    /// Returns the ordered type names of the signature.
    #[must_use]
    pub fn signature(&self) -> &[String] {
        &self.signature
    }

    /// ABI-encodes `items` positionally against the signature.
    ///
    /// Values are matched to signature slots by position; the declared
    /// `type` on each item is not consulted. Encoding the same items twice
    /// yields byte-identical output.
    ///
    /// # Errors
    ///
    /// - [`EasError::SchemaMismatch`] if the value count differs from the
    ///   signature length.
    /// - [`EasError::ValueCoercion`] if a value cannot be represented as its
    ///   slot type.
    /// - [`EasError::Abi`] if a type name does not parse as an ABI type.
    pub fn encode(&self, items: &[SchemaItem]) -> Result<Bytes, EasError> {
        if items.len() != self.signature.len() {
            return Err(EasError::SchemaMismatch {
                expected: self.signature.len(),
                actual: items.len(),
            });
        }

        let mut values = Vec::with_capacity(items.len());
        for (index, (ty, item)) in self.signature.iter().zip(items).enumerate() {
            values.push(slot_value(index, ty, &item.value)?);
        }

        #[cfg(feature = "telemetry")]
        tracing::debug!(signature = ?self.signature, values = ?values, "Encoding schema data");

        Ok(DynSolValue::Tuple(values).abi_encode_params().into())
    }
}

/// Converts one value into the [`DynSolValue`] for its signature slot.
fn slot_value(index: usize, ty: &str, value: &SchemaValue) -> Result<DynSolValue, EasError> {
    // bytes32 text is UTF-8 data, not hex.
    if ty == "bytes32" {
        if let SchemaValue::Str(text) = value {
            return utf8_word(index, ty, text);
        }
    }

    let coercion = |reason: String| EasError::ValueCoercion {
        index,
        ty: ty.to_owned(),
        reason,
    };

    let sol_type = DynSolType::parse(ty)?;
    match (value, &sol_type) {
        (SchemaValue::Bool(b), DynSolType::Bool) => Ok(DynSolValue::Bool(*b)),
        (SchemaValue::Uint(u), DynSolType::Uint(bits)) => {
            Ok(DynSolValue::Uint(U256::from(*u), *bits))
        }
        (SchemaValue::Int(i), DynSolType::Int(bits)) => {
            let int = I256::try_from(*i).map_err(|e| coercion(e.to_string()))?;
            Ok(DynSolValue::Int(int, *bits))
        }
        (SchemaValue::Str(s), DynSolType::String) => Ok(DynSolValue::String(s.clone())),
        (SchemaValue::Str(s), DynSolType::Address) => {
            let address = Address::from_str(s).map_err(|e| coercion(e.to_string()))?;
            Ok(DynSolValue::Address(address))
        }
        (SchemaValue::Str(s), DynSolType::Bytes) => {
            let bytes = hex::decode(s).map_err(|e| coercion(e.to_string()))?;
            Ok(DynSolValue::Bytes(bytes))
        }
        (SchemaValue::Str(s), DynSolType::FixedBytes(size)) => {
            let bytes = hex::decode(s).map_err(|e| coercion(e.to_string()))?;
            if bytes.len() > *size {
                return Err(coercion(format!(
                    "{} bytes do not fit in bytes{size}",
                    bytes.len()
                )));
            }
            let mut word = [0u8; 32];
            word[..bytes.len()].copy_from_slice(&bytes);
            Ok(DynSolValue::FixedBytes(B256::from(word), *size))
        }
        _ => Err(coercion(format!("cannot encode {value:?} as `{ty}`"))),
    }
}

/// Builds a 32-byte word from UTF-8 text for a `bytes32` slot.
fn utf8_word(index: usize, ty: &str, text: &str) -> Result<DynSolValue, EasError> {
    let bytes = text.as_bytes();
    if bytes.len() > 32 {
        return Err(EasError::ValueCoercion {
            index,
            ty: ty.to_owned(),
            reason: format!("{} UTF-8 bytes do not fit in bytes32", bytes.len()),
        });
    }
    let mut word = [0u8; 32];
    word[..bytes.len()].copy_from_slice(bytes);
    Ok(DynSolValue::FixedBytes(B256::from(word), 32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_splits_and_trims() {
        let encoder = SchemaEncoder::new("uint256, bytes32 ,string");
        assert_eq!(encoder.signature(), ["uint256", "bytes32", "string"]);
    }

    #[test]
    fn test_empty_description_yields_empty_signature() {
        assert!(SchemaEncoder::new("").signature().is_empty());
        assert!(SchemaEncoder::new("   ").signature().is_empty());
    }

    #[test]
    fn test_encode_known_vector() {
        let encoder = SchemaEncoder::new("uint256,bytes32,string");
        let items = [
            SchemaItem::new("amount", "uint256", 42u64),
            SchemaItem::new("tag", "bytes32", "hello"),
            SchemaItem::new("note", "string", "world"),
        ];

        let encoded = encoder.encode(&items).unwrap();
        let expected = hex!(
            "000000000000000000000000000000000000000000000000000000000000002a"
            "68656c6c6f000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000000000000000000000000000060"
            "0000000000000000000000000000000000000000000000000000000000000005"
            "776f726c64000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(encoded.as_ref(), &expected[..]);

        // Stateless and reusable: same input, byte-identical output.
        assert_eq!(encoder.encode(&items).unwrap(), encoded);
    }

    #[test]
    fn test_encode_address_and_bool() {
        let encoder = SchemaEncoder::new("address,bool");
        let items = [
            SchemaItem::new("who", "address", "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
            SchemaItem::new("ok", "bool", true),
        ];

        let encoded = encoder.encode(&items).unwrap();
        let expected = hex!(
            "000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045"
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(encoded.as_ref(), &expected[..]);
    }

    #[test]
    fn test_encode_arity_mismatch() {
        let encoder = SchemaEncoder::new("uint256,bytes32");
        let items = [SchemaItem::new("amount", "uint256", 42u64)];

        match encoder.encode(&items) {
            Err(EasError::SchemaMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_encode_rejects_items_against_empty_signature() {
        let encoder = SchemaEncoder::new("");
        let items = [SchemaItem::new("amount", "uint256", 1u64)];
        assert!(matches!(
            encoder.encode(&items),
            Err(EasError::SchemaMismatch {
                expected: 0,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_encode_oversized_bytes32_text() {
        let encoder = SchemaEncoder::new("bytes32");
        let items = [SchemaItem::new(
            "tag",
            "bytes32",
            "a string well beyond thirty-two bytes long",
        )];
        assert!(matches!(
            encoder.encode(&items),
            Err(EasError::ValueCoercion { index: 0, .. })
        ));
    }

    #[test]
    fn test_encode_value_type_mismatch() {
        let encoder = SchemaEncoder::new("uint256");
        let items = [SchemaItem::new("amount", "uint256", "not a number")];
        assert!(matches!(
            encoder.encode(&items),
            Err(EasError::ValueCoercion { .. })
        ));
    }

    #[test]
    fn test_encode_invalid_type_name() {
        let encoder = SchemaEncoder::new("uint257");
        let items = [SchemaItem::new("amount", "uint257", 1u64)];
        assert!(matches!(encoder.encode(&items), Err(EasError::Abi(_))));
    }

    #[test]
    fn test_schema_item_json_roundtrip() {
        let item = SchemaItem::new("amount", "uint256", 42u64);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"amount","type":"uint256","value":42}"#);

        let parsed: SchemaItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_schema_value_untagged_deserialization() {
        assert_eq!(
            serde_json::from_str::<SchemaValue>("true").unwrap(),
            SchemaValue::Bool(true)
        );
        assert_eq!(
            serde_json::from_str::<SchemaValue>("42").unwrap(),
            SchemaValue::Uint(42)
        );
        assert_eq!(
            serde_json::from_str::<SchemaValue>("-3").unwrap(),
            SchemaValue::Int(-3)
        );
        assert_eq!(
            serde_json::from_str::<SchemaValue>("\"hello\"").unwrap(),
            SchemaValue::Str("hello".to_owned())
        );
    }
}
