//! `vsphere_datacenter` data source.

use crate::resources::fields;
use crate::VsphereResource;

use async_trait::async_trait;
use provider_core::{ProviderError, ProviderResult, ReadHandler, Resource, ResourceData, Schema};
use vsphere_api::{InventoryManager, VsphereClient};

pub fn data_source() -> VsphereResource {
    Resource::new(
        "Looks up a datacenter by name.",
        fields([(
            "name",
            Schema::string()
                .optional()
                .description("The name of the datacenter. Can be omitted if there is only one datacenter in your inventory."),
        )]),
    )
    .with_reader(ReadDatacenter)
}

struct ReadDatacenter;

#[async_trait]
impl ReadHandler<VsphereClient> for ReadDatacenter {
    async fn read(&self, client: &VsphereClient, d: &mut ResourceData) -> ProviderResult<()> {
        let name = d.get_string("name")?;
        let dc = InventoryManager::new(client)
            .find_datacenter(&name)
            .await
            .map_err(ProviderError::client)?;

        log::debug!("datacenter {:?} resolved to {}", dc.name, dc.datacenter);
        d.set("name", dc.name)?;
        d.set_id(dc.datacenter);
        Ok(())
    }
}
