//! `vsphere_vmfs_datastore`

use super::{datastore_summary_fields, fields, placement_fields};
use crate::VsphereResource;

use provider_core::{Resource, Schema, ValueType};

pub fn resource() -> VsphereResource {
    let mut schema = fields([
        (
            "name",
            Schema::string()
                .required()
                .description("The name of the datastore."),
        ),
        (
            "host_system_id",
            Schema::string()
                .required()
                .force_new()
                .description("The managed object ID of the host to set up the datastore on."),
        ),
        (
            "disks",
            Schema::list(ValueType::String)
                .required()
                .min_items(1)
                .description("The disks to add to the datastore."),
        ),
    ]);
    schema.extend(placement_fields());
    schema.extend(datastore_summary_fields());

    Resource::new("Creates a VMFS datastore on local or shared disks of an ESXi host.", schema)
}
