//! # terraform-provider-vsphere
//!
//! VMware vSphere provider: the `provider "vsphere"` block, connection
//! bootstrap, and the resource and data-source tables served to the plugin
//! host.
//!
//! ## Modules
//!
//! - **config**: Connection parameters, client construction, debug tracing
//! - **provider**: Provider schema, configure step, registry
//! - **resources**: Managed resource types
//! - **data_sources**: Data sources and their inventory reads

pub mod config;
pub mod data_sources;
pub mod provider;
pub mod resources;

pub use config::{Config, DEFAULT_API_TIMEOUT};
pub use provider::{provider, provider_configure, provider_schema};

use provider_core::Resource;
use vsphere_api::VsphereClient;

/// A resource or data source served by this provider.
pub type VsphereResource = Resource<VsphereClient>;
