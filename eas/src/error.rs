//! Error types for EAS deployment lookups, handle construction, and schema
//! encoding.

use alloy_primitives::ChainId;
use alloy_transport::TransportError;

use crate::contracts::ContractKind;

/// Errors raised by this crate.
///
/// Every failure is terminal for the requested operation; retry and fallback
/// policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum EasError {
    /// No known EAS deployment exists for the chain.
    #[error("Unsupported chain id {0}")]
    UnsupportedChain(ChainId),
    /// The address failed validation before a handle was constructed.
    #[error("Invalid {0} contract address")]
    InvalidAddress(ContractKind),
    /// The number of supplied values differs from the schema signature length.
    #[error("Schema signature has {expected} fields but {actual} values were supplied")]
    SchemaMismatch {
        /// Number of fields declared by the signature.
        expected: usize,
        /// Number of values supplied to `encode`.
        actual: usize,
    },
    /// A supplied value cannot be represented as its schema slot type.
    #[error("Schema slot {index} (`{ty}`): {reason}")]
    ValueCoercion {
        /// Zero-based position of the offending slot.
        index: usize,
        /// Declared type name of the slot.
        ty: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Error from the ABI coder, propagated unchanged.
    #[error(transparent)]
    Abi(#[from] alloy_dyn_abi::Error),
    /// RPC transport error while querying the connected chain.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
