//! Solidity interface definitions and handle factories for the EAS contracts.
//!
//! Contains the minimal ABI surface needed by this crate:
//! - [`ISchemaRegistry`] - schema registration and retrieval
//! - [`IEAS`] - attestation creation, revocation, and lookup
//!
//! Handles are bound to a caller-supplied provider; call semantics (encoding,
//! gas, confirmations) are owned by `alloy-contract`.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_sol_types::sol;

use crate::error::EasError;

sol! {
    /// EAS Schema Registry interface.
    ///
    /// Only the functions used by this crate are declared.
    ///
    /// Reference: <https://github.com/ethereum-attestation-service/eas-contracts>
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface ISchemaRegistry {
        struct SchemaRecord {
            bytes32 uid;
            address resolver;
            bool revocable;
            string schema;
        }

        function register(string calldata schema, address resolver, bool revocable) external returns (bytes32);
        function getSchema(bytes32 uid) external view returns (SchemaRecord);
        function version() external view returns (string);
    }
}

sol! {
    /// EAS core contract interface.
    ///
    /// Only the functions used by this crate are declared.
    ///
    /// Reference: <https://github.com/ethereum-attestation-service/eas-contracts>
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface IEAS {
        struct AttestationRequestData {
            address recipient;
            uint64 expirationTime;
            bool revocable;
            bytes32 refUID;
            bytes data;
            uint256 value;
        }

        struct AttestationRequest {
            bytes32 schema;
            AttestationRequestData data;
        }

        struct RevocationRequestData {
            bytes32 uid;
            uint256 value;
        }

        struct RevocationRequest {
            bytes32 schema;
            RevocationRequestData data;
        }

        struct Attestation {
            bytes32 uid;
            bytes32 schema;
            uint64 time;
            uint64 expirationTime;
            uint64 revocationTime;
            bytes32 refUID;
            address recipient;
            address attester;
            bool revocable;
            bytes data;
        }

        function attest(AttestationRequest calldata request) external payable returns (bytes32);
        function revoke(RevocationRequest calldata request) external payable;
        function getAttestation(bytes32 uid) external view returns (Attestation);
        function isAttestationValid(bytes32 uid) external view returns (bool);
        function getSchemaRegistry() external view returns (address);
        function timestamp(bytes32 data) external returns (uint64);
        function getTimestamp(bytes32 data) external view returns (uint64);
        function version() external view returns (string);
    }
}

/// The contract kind a factory was asked to construct.
///
/// Carried in [`EasError::InvalidAddress`] so the message names the contract
/// whose address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    /// The Schema Registry contract.
    SchemaRegistry,
    /// The EAS core contract.
    EasCore,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaRegistry => f.write_str("Schema Registry"),
            Self::EasCore => f.write_str("EAS"),
        }
    }
}

/// Creates a Schema Registry handle at `address`, bound to `provider`.
///
/// Each call produces an independent handle; no state is shared between
/// handles.
///
/// # Errors
///
/// Returns [`EasError::InvalidAddress`] if `address` is not a well-formed
/// account address.
pub fn schema_registry<P: Provider>(
    address: &str,
    provider: P,
) -> Result<ISchemaRegistry::ISchemaRegistryInstance<P>, EasError> {
    let address = parse_address(address, ContractKind::SchemaRegistry)?;
    Ok(ISchemaRegistry::new(address, provider))
}

/// Creates an EAS core handle at `address`, bound to `provider`.
///
/// # Errors
///
/// Returns [`EasError::InvalidAddress`] if `address` is not a well-formed
/// account address.
pub fn eas_core<P: Provider>(
    address: &str,
    provider: P,
) -> Result<IEAS::IEASInstance<P>, EasError> {
    let address = parse_address(address, ContractKind::EasCore)?;
    Ok(IEAS::new(address, provider))
}

fn parse_address(address: &str, kind: ContractKind) -> Result<Address, EasError> {
    Address::from_str(address).map_err(|_| EasError::InvalidAddress(kind))
}
