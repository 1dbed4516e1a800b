//! Datacenter / host lookups via the vSphere REST API.

use crate::error::{VmwareError, VmwareResult};
use crate::types::*;
use crate::vsphere::VsphereClient;

/// Inventory queries used to resolve names into managed-object IDs.
pub struct InventoryManager<'a> {
    client: &'a VsphereClient,
}

impl<'a> InventoryManager<'a> {
    pub fn new(client: &'a VsphereClient) -> Self {
        Self { client }
    }

    // ── Datacenters ─────────────────────────────────────────────────

    /// List all datacenters.
    pub async fn list_datacenters(&self) -> VmwareResult<Vec<DatacenterSummary>> {
        self.client
            .get::<Vec<DatacenterSummary>>("/api/vcenter/datacenter")
            .await
    }

    /// Resolve a datacenter by name, or the default one when `name` is empty.
    pub async fn find_datacenter(&self, name: &str) -> VmwareResult<DatacenterSummary> {
        let found = if name.is_empty() {
            self.list_datacenters().await?
        } else {
            self.client
                .get_with_params::<Vec<DatacenterSummary>>(
                    "/api/vcenter/datacenter",
                    &[("names".into(), name.to_string())],
                )
                .await?
        };
        pick_one(found, "datacenter", name)
    }

    // ── Hosts ───────────────────────────────────────────────────────

    /// List hosts in a datacenter.
    pub async fn list_hosts_in_datacenter(
        &self,
        datacenter: &str,
    ) -> VmwareResult<Vec<HostSummary>> {
        self.client
            .get_with_params::<Vec<HostSummary>>(
                "/api/vcenter/host",
                &[("datacenters".into(), datacenter.to_string())],
            )
            .await
    }

    /// Resolve a host in `datacenter` by name, or the default one when
    /// `name` is empty.
    pub async fn find_host(&self, datacenter: &str, name: &str) -> VmwareResult<HostSummary> {
        let found = if name.is_empty() {
            self.list_hosts_in_datacenter(datacenter).await?
        } else {
            self.client
                .get_with_params::<Vec<HostSummary>>(
                    "/api/vcenter/host",
                    &[
                        ("datacenters".into(), datacenter.to_string()),
                        ("names".into(), name.to_string()),
                    ],
                )
                .await?
        };
        pick_one(found, "host", name)
    }
}

/// Reduce a filtered listing to exactly one object.
///
/// An empty `name` asks for the default object, which only exists when the
/// listing holds a single entry.
pub fn pick_one<T>(mut found: Vec<T>, kind: &str, name: &str) -> VmwareResult<T> {
    match (found.len(), name.is_empty()) {
        (1, _) => Ok(found.remove(0)),
        (0, true) => Err(VmwareError::not_found(format!("No default {kind} found"))),
        (0, false) => Err(VmwareError::not_found(format!("{kind} '{name}' not found"))),
        (n, true) => Err(VmwareError::new(
            crate::error::VmwareErrorKind::Other,
            format!("Default {kind} resolves to multiple instances ({n}), please specify"),
        )),
        (n, false) => Err(VmwareError::new(
            crate::error::VmwareErrorKind::Other,
            format!("Path '{name}' resolves to multiple {kind}s ({n})"),
        )),
    }
}
