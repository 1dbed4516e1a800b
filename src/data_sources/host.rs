//! `vsphere_host` data source.

use crate::resources::fields;
use crate::VsphereResource;

use async_trait::async_trait;
use provider_core::{ProviderError, ProviderResult, ReadHandler, Resource, ResourceData, Schema};
use vsphere_api::{InventoryManager, VsphereClient};

pub fn data_source() -> VsphereResource {
    Resource::new(
        "Looks up an ESXi host in a datacenter.",
        fields([
            (
                "name",
                Schema::string()
                    .optional()
                    .description("The name of the host. Can be omitted if the datacenter holds a single host."),
            ),
            (
                "datacenter_id",
                Schema::string()
                    .required()
                    .description("The managed object ID of the datacenter to look for the host in."),
            ),
        ]),
    )
    .with_reader(ReadHost)
}

struct ReadHost;

#[async_trait]
impl ReadHandler<VsphereClient> for ReadHost {
    async fn read(&self, client: &VsphereClient, d: &mut ResourceData) -> ProviderResult<()> {
        let name = d.get_string("name")?;
        let datacenter = d.get_string("datacenter_id")?;

        let host = InventoryManager::new(client)
            .find_host(&datacenter, &name)
            .await
            .map_err(ProviderError::client)?;

        log::debug!("host {:?} in {datacenter} resolved to {}", host.name, host.host);
        d.set("name", host.name)?;
        d.set_id(host.host);
        Ok(())
    }
}
