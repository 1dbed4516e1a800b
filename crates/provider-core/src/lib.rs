//! # provider-core
//!
//! Model of the contract a Terraform plugin host expects from a provider:
//! field schemas, resource / data-source tables, configuration access and
//! diagnostics. The RPC transport that carries these to the host lives
//! outside this crate.
//!
//! ## Modules
//!
//! - **schema**: Field schemas, env-var defaults, definition checks
//! - **diagnostics**: Validation of raw configuration blocks
//! - **resource_data**: Resolved reads / computed writes for one block
//! - **resource**: Resource and data-source definitions, read handlers
//! - **provider**: Generic provider with a configure step and meta value
//! - **error**: Crate error type

pub mod error;
pub mod schema;
pub mod diagnostics;
pub mod resource_data;
pub mod resource;
pub mod provider;

pub use diagnostics::{Diagnostic, Severity};
pub use error::{ProviderError, ProviderResult};
pub use provider::Provider;
pub use resource::{ReadHandler, Resource};
pub use resource_data::ResourceData;
pub use schema::{Schema, SchemaMap, ValueType};
