//! Data sources.
//!
//! `vsphere_datacenter` and `vsphere_host` resolve names through the REST
//! inventory API. `vsphere_vmfs_disks` needs the host storage system, which
//! the REST API does not expose, so it is declared without a reader.

pub mod datacenter;
pub mod host;
pub mod vmfs_disks;
