//! Known EAS contract deployments per chain.
//!
//! The table is compiled-in static data: contract addresses are fixed at
//! deployment time and do not change for the lifetime of a release, so
//! baking them in avoids a network round-trip merely to discover them. No
//! mutation API is exposed.

use alloy_primitives::{Address, ChainId, address};
use alloy_provider::Provider;
use serde::Serialize;

use crate::error::EasError;

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET: ChainId = 1;

/// Optimism Mainnet chain ID.
pub const OPTIMISM_MAINNET: ChainId = 10;

/// Base Mainnet chain ID.
pub const BASE_MAINNET: ChainId = 8453;

/// Arbitrum One chain ID.
pub const ARBITRUM_ONE: ChainId = 42161;

/// Arbitrum Nova chain ID.
pub const ARBITRUM_NOVA: ChainId = 42170;

/// Polygon Mainnet chain ID.
pub const POLYGON_MAINNET: ChainId = 137;

/// Scroll Mainnet chain ID.
pub const SCROLL_MAINNET: ChainId = 534352;

/// Linea Mainnet chain ID.
pub const LINEA_MAINNET: ChainId = 59144;

/// Sepolia (testnet) chain ID.
pub const SEPOLIA: ChainId = 11_155_111;

/// Optimism Sepolia (testnet) chain ID.
pub const OPTIMISM_SEPOLIA: ChainId = 11_155_420;

/// Optimism Goerli (testnet) chain ID.
pub const OPTIMISM_GOERLI: ChainId = 420;

/// Base Sepolia (testnet) chain ID.
pub const BASE_SEPOLIA: ChainId = 84532;

/// Base Goerli (testnet) chain ID.
pub const BASE_GOERLI: ChainId = 84531;

/// Arbitrum Goerli (testnet) chain ID.
pub const ARBITRUM_GOERLI: ChainId = 421_613;

/// Polygon Mumbai (testnet) chain ID.
pub const POLYGON_MUMBAI: ChainId = 80001;

/// Linea Goerli (testnet) chain ID.
pub const LINEA_GOERLI: ChainId = 59140;

/// Scroll Sepolia (testnet) chain ID.
pub const SCROLL_SEPOLIA: ChainId = 534_351;

/// Schema Registry predeploy address on OP-stack chains.
pub const OP_PREDEPLOY_SCHEMA_REGISTRY: Address =
    address!("4200000000000000000000000000000000000020");

/// EAS predeploy address on OP-stack chains.
pub const OP_PREDEPLOY_EAS: Address = address!("4200000000000000000000000000000000000021");

/// Schema Registry address shared by Linea and the Goerli-era testnets
/// (same deployer account and nonce on each chain).
pub const SHARED_SCHEMA_REGISTRY: Address = address!("55D26f9ae0203EF95494AE4C170eD35f4Cf77797");

/// EAS address shared by Linea and the Goerli-era testnets.
pub const SHARED_EAS: Address = address!("aEF4103A04090071165F78D45D83A0C0782c2B2a");

/// EAS contract addresses on one chain.
///
/// Returned records are shared, read-only data; the optional contracts are
/// only deployed on some chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// EIP-155 chain ID.
    pub chain_id: ChainId,
    /// Human-readable network name. Informational only, never a lookup key.
    pub network: &'static str,
    /// Schema Registry contract address.
    pub schema_registry: Address,
    /// EAS core contract address.
    pub eas: Address,
    /// EIP-712 proxy contract address, where deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eip712_proxy: Option<Address>,
    /// Indexer contract address, where deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexer: Option<Address>,
}

/// All known EAS deployments.
pub const DEPLOYMENTS: &[Deployment] = &[
    Deployment {
        chain_id: ETHEREUM_MAINNET,
        network: "ethereum",
        schema_registry: address!("A7b39296258348C78294F95B872b282326A97BDF"),
        eas: address!("A1207F3BBa224E2c9c3c6D5aF63D0eb1582Ce587"),
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: OPTIMISM_MAINNET,
        network: "optimism",
        schema_registry: OP_PREDEPLOY_SCHEMA_REGISTRY,
        eas: OP_PREDEPLOY_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: BASE_MAINNET,
        network: "base",
        schema_registry: OP_PREDEPLOY_SCHEMA_REGISTRY,
        eas: OP_PREDEPLOY_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: ARBITRUM_ONE,
        network: "arbitrum-one",
        schema_registry: address!("A310da9c5B885E7fb3fbA9D66E9Ba6Df512b78eB"),
        eas: address!("bD75f629A22Dc1ceD33dDA0b68c546A1c035c458"),
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: ARBITRUM_NOVA,
        network: "arbitrum-nova",
        schema_registry: address!("49563d0DA8DF38ef2eBF9C1167270334D72cE0AE"),
        eas: address!("6d3dC0Fe5351087E3Af3bDe8eB3F7350ed894fc3"),
        eip712_proxy: Some(address!("Ebf2DeeD690F8A68b8248d6a12231ee70ED2154A")),
        indexer: Some(address!("7182Be5e84aFEe9Dc29C69D081F8A0FA834d6CB8")),
    },
    Deployment {
        chain_id: POLYGON_MAINNET,
        network: "polygon",
        schema_registry: address!("7876EEF51A891E737AF8ba5A5E0f0Fd29073D5a7"),
        eas: address!("5E634ef5355f45A855d02D66eCD687b1502AF790"),
        eip712_proxy: Some(address!("4be71865917C7907ccA531270181D9B7dD4f2733")),
        indexer: Some(address!("12d0f50Eb2d67b14293bdDA2C248358f3dfE5308")),
    },
    Deployment {
        chain_id: SCROLL_MAINNET,
        network: "scroll",
        schema_registry: address!("D2CDF46556543316e7D34e8eDc4624e2bB95e3B6"),
        eas: address!("C47300428b6AD2c7D03BB76D05A176058b47E6B0"),
        eip712_proxy: Some(address!("77b7DA1c40762Cd8AFfE2069b575328EfD4D9801")),
        indexer: Some(address!("8314bc1B2f7F286cb4f0323FE7119C0F99D4A083")),
    },
    Deployment {
        chain_id: LINEA_MAINNET,
        network: "linea",
        schema_registry: SHARED_SCHEMA_REGISTRY,
        eas: SHARED_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: SEPOLIA,
        network: "sepolia",
        schema_registry: address!("0a7E2Ff54e76B8E6659aedc9103FB21c038050D0"),
        eas: address!("C2679fBD37d54388Ce493F1DB75320D236e1815e"),
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: OPTIMISM_SEPOLIA,
        network: "optimism-sepolia",
        schema_registry: OP_PREDEPLOY_SCHEMA_REGISTRY,
        eas: OP_PREDEPLOY_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: OPTIMISM_GOERLI,
        network: "optimism-goerli",
        schema_registry: OP_PREDEPLOY_SCHEMA_REGISTRY,
        eas: OP_PREDEPLOY_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: BASE_SEPOLIA,
        network: "base-sepolia",
        schema_registry: OP_PREDEPLOY_SCHEMA_REGISTRY,
        eas: OP_PREDEPLOY_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: BASE_GOERLI,
        network: "base-goerli",
        schema_registry: OP_PREDEPLOY_SCHEMA_REGISTRY,
        eas: OP_PREDEPLOY_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: ARBITRUM_GOERLI,
        network: "arbitrum-goerli",
        schema_registry: SHARED_SCHEMA_REGISTRY,
        eas: SHARED_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: POLYGON_MUMBAI,
        network: "polygon-mumbai",
        schema_registry: SHARED_SCHEMA_REGISTRY,
        eas: SHARED_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: LINEA_GOERLI,
        network: "linea-goerli",
        schema_registry: SHARED_SCHEMA_REGISTRY,
        eas: SHARED_EAS,
        eip712_proxy: None,
        indexer: None,
    },
    Deployment {
        chain_id: SCROLL_SEPOLIA,
        network: "scroll-sepolia",
        schema_registry: SHARED_SCHEMA_REGISTRY,
        eas: SHARED_EAS,
        eip712_proxy: Some(address!("B3574f76b1720E61FdA98702c7016674CD6Eaa7b")),
        indexer: Some(address!("7C2cb1eDC328491da52de2a0afc44D3B0Ae7ee17")),
    },
];

/// Looks up the EAS deployment for a chain ID.
///
/// # Errors
///
/// Returns [`EasError::UnsupportedChain`] if the chain has no known
/// deployment.
pub fn deployment(chain_id: ChainId) -> Result<&'static Deployment, EasError> {
    DEPLOYMENTS
        .iter()
        .find(|d| d.chain_id == chain_id)
        .ok_or(EasError::UnsupportedChain(chain_id))
}

/// Looks up the EAS deployment for the chain the provider is connected to.
///
/// Asks the provider for the active chain ID, then performs the same lookup
/// as [`deployment`].
///
/// # Errors
///
/// Returns [`EasError::Transport`] if the chain ID query fails, or
/// [`EasError::UnsupportedChain`] if the connected chain has no known
/// deployment.
pub async fn connected_deployment<P: Provider>(
    provider: &P,
) -> Result<&'static Deployment, EasError> {
    let chain_id = provider.get_chain_id().await?;
    deployment(chain_id)
}
