//! `vsphere_vmfs_disks` data source.

use crate::resources::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema, ValueType};

pub fn data_source() -> VsphereResource {
    Resource::new(
        "Lists the SCSI disks of a host that can be used for VMFS datastores.",
        fields([
            (
                "host_system_id",
                Schema::string()
                    .required()
                    .description("The managed object ID of the host to search for disks on."),
            ),
            (
                "rescan",
                Schema::bool()
                    .optional()
                    .default(false)
                    .description("Rescan the system for disks before querying. This may lengthen the time it takes to gather information."),
            ),
            (
                "filter",
                Schema::string()
                    .optional()
                    .description("A regular expression to filter the disks against. Only disks with canonical names that match will be included."),
            ),
            (
                "disks",
                Schema::list(ValueType::String)
                    .computed()
                    .description("The names of the disks discovered by the search."),
            ),
        ]),
    )
}
