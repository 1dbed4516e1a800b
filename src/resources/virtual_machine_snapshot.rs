//! `vsphere_virtual_machine_snapshot`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema};

pub fn resource() -> VsphereResource {
    Resource::new(
        "Manages a snapshot of a virtual machine.",
        fields([
            (
                "virtual_machine_uuid",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The UUID of the virtual machine to snapshot."),
            ),
            (
                "snapshot_name",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The name of the snapshot."),
            ),
            (
                "description",
                Schema::string()
                    .required()
                    .force_new()
                    .description("A description for the snapshot."),
            ),
            (
                "memory",
                Schema::bool()
                    .required()
                    .force_new()
                    .description("If set, the snapshot includes a dump of the virtual machine's memory."),
            ),
            (
                "quiesce",
                Schema::bool()
                    .required()
                    .force_new()
                    .description("If set, the guest file system is quiesced before the snapshot is taken."),
            ),
            (
                "remove_children",
                Schema::bool()
                    .optional()
                    .force_new()
                    .description("If set, child snapshots are removed along with this one."),
            ),
            (
                "consolidate",
                Schema::bool()
                    .optional()
                    .force_new()
                    .description("If set, disks are consolidated after the snapshot is removed."),
            ),
        ]),
    )
}
