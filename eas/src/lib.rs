#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Ethereum Attestation Service (EAS) support for alloy-based applications.
//!
//! EAS is an on-chain protocol for issuing and verifying signed claims
//! ("attestations") against declared data schemas. This crate bundles the
//! pieces needed to talk to the EAS contracts from Rust: a compiled-in
//! registry of per-chain contract deployments, typed handles for the Schema
//! Registry and EAS core contracts, and an encoder that turns schema
//! descriptions plus values into canonical attestation data bytes.
//!
//! # Modules
//!
//! - [`deployments`] - Known EAS contract deployments per chain
//! - [`contracts`] - Contract interfaces and provider-bound handle factories
//! - [`schema`] - Schema signature parsing and attestation data encoding
//! - [`error`] - Error types
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of schema encoding
//!
//! # Example
//!
//! ```ignore
//! use alloy_provider::ProviderBuilder;
//!
//! let provider = ProviderBuilder::new().connect_http("http://127.0.0.1:8545".parse()?);
//!
//! let deployment = eas::connected_deployment(&provider).await?;
//! let registry = eas::schema_registry(&deployment.schema_registry.to_string(), provider)?;
//! let record = registry.getSchema(schema_uid).call().await?;
//! ```

pub mod contracts;
pub mod deployments;
pub mod error;
pub mod schema;

pub use contracts::{ContractKind, IEAS, ISchemaRegistry, eas_core, schema_registry};
pub use deployments::{DEPLOYMENTS, Deployment, connected_deployment, deployment};
pub use error::EasError;
pub use schema::{SchemaEncoder, SchemaItem, SchemaValue};
