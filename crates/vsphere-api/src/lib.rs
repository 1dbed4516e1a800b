//! # vsphere-api
//!
//! Thin vSphere REST API client used by the Terraform provider to open an
//! authenticated session and resolve inventory objects.
//!
//! ## Modules
//!
//! - **types**: Connection config and inventory summaries
//! - **error**: Crate-specific error types
//! - **vsphere**: HTTP client with session-based auth
//! - **inventory**: Datacenter / host lookups
//! - **debug**: Per-round-trip trace files

pub mod types;
pub mod error;
pub mod debug;
pub mod vsphere;
pub mod inventory;

pub use debug::DebugTrace;
pub use error::{VmwareError, VmwareErrorKind, VmwareResult};
pub use inventory::InventoryManager;
pub use types::{DatacenterSummary, HostSummary, VsphereConfig};
pub use vsphere::VsphereClient;
