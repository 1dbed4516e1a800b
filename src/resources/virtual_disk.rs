//! `vsphere_virtual_disk`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema};

pub fn resource() -> VsphereResource {
    Resource::new(
        "Manages a standalone virtual disk (VMDK) in a datastore.",
        fields([
            (
                "size",
                Schema::int()
                    .required()
                    .force_new()
                    .description("Size of the disk, in GB."),
            ),
            (
                "vmdk_path",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The path, including filename, of the virtual disk to be created."),
            ),
            (
                "datastore",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The name of the datastore in which to create the disk."),
            ),
            (
                "type",
                Schema::string()
                    .optional()
                    .force_new()
                    .default("eagerZeroedThick")
                    .description("The type of disk to create: thin, eagerZeroedThick or lazy."),
            ),
            (
                "adapter_type",
                Schema::string()
                    .optional()
                    .force_new()
                    .default("lsiLogic")
                    .description("The adapter type for this virtual disk: ide, busLogic or lsiLogic."),
            ),
            (
                "datacenter",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("The name of the datacenter in which to create the disk."),
            ),
        ]),
    )
}
