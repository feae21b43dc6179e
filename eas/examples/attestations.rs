//! Reads a schema record and an attestation from Ethereum mainnet, then
//! encodes a schema payload locally.
//!
//! Run with: `cargo run --example attestations`

use alloy_primitives::b256;
use alloy_provider::ProviderBuilder;
use eas::{SchemaEncoder, SchemaItem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider = ProviderBuilder::new().connect_http("https://rpc.ankr.com/eth".parse()?);

    // Contract addresses of the connected chain.
    let deployment = eas::connected_deployment(&provider).await?;
    println!(
        "network: {} (chain id {})",
        deployment.network, deployment.chain_id
    );

    let registry = eas::schema_registry(&deployment.schema_registry.to_string(), provider.clone())?;
    let core = eas::eas_core(&deployment.eas.to_string(), provider)?;

    let schema_uid = b256!("d100943957d0f72cf5f93d55bea0dda8083817cd20af71863fe7efbb88eeb1ba");
    let record = registry.getSchema(schema_uid).call().await?;
    println!("schema: {}", record.schema);

    let uid = b256!("ff08bbf3d3e6e0992fc70ab9b9370416be59e87897c3d42b20549901d2cccc3e");
    let attestation = core.getAttestation(uid).call().await?;
    println!("attester: {}", attestation.attester);

    let encoder = SchemaEncoder::new("uint256,bytes32,string");
    let data = encoder.encode(&[
        SchemaItem::new("amount", "uint256", 42u64),
        SchemaItem::new("tag", "bytes32", "hello"),
        SchemaItem::new("note", "string", "world"),
    ])?;
    println!("encoded: {data}");

    Ok(())
}
