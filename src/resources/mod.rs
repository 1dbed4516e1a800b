//! Managed resource types.
//!
//! Each submodule exposes `resource()`, the field map of one resource type.
//! Create/update/delete handling is carried by the plugin host side.

pub mod datacenter;
pub mod file;
pub mod folder;
pub mod host_port_group;
pub mod host_virtual_switch;
pub mod license;
pub mod nas_datastore;
pub mod virtual_disk;
pub mod virtual_machine;
pub mod virtual_machine_snapshot;
pub mod vmfs_datastore;

use provider_core::{Schema, SchemaMap, ValueType};

/// Build a field map from `(name, schema)` pairs.
pub(crate) fn fields<const N: usize>(entries: [(&str, Schema); N]) -> SchemaMap {
    entries
        .into_iter()
        .map(|(key, schema)| (key.to_string(), schema))
        .collect()
}

/// Computed summary attributes shared by the datastore resources.
pub(crate) fn datastore_summary_fields() -> SchemaMap {
    fields([
        (
            "accessible",
            Schema::bool()
                .computed()
                .description("The connectivity status of the datastore."),
        ),
        (
            "capacity",
            Schema::int()
                .computed()
                .description("Maximum capacity of the datastore, in MB."),
        ),
        (
            "free_space",
            Schema::int()
                .computed()
                .description("Available space of this datastore, in MB."),
        ),
        (
            "maintenance_mode",
            Schema::string()
                .computed()
                .description("The current maintenance mode state of the datastore."),
        ),
        (
            "multiple_host_access",
            Schema::bool()
                .computed()
                .description("If true, more than one host in the datacenter has been configured with access to the datastore."),
        ),
        (
            "uncommitted_space",
            Schema::int()
                .computed()
                .description("Total additional storage space, in MB, potentially used by all virtual machines on this datastore."),
        ),
        (
            "url",
            Schema::string()
                .computed()
                .description("The unique locator for the datastore."),
        ),
    ])
}

/// Optional `folder` and `tags`, common to several resources.
pub(crate) fn placement_fields() -> SchemaMap {
    fields([
        (
            "folder",
            Schema::string()
                .optional()
                .description("The path to the folder to put this object in."),
        ),
        (
            "tags",
            Schema::set(ValueType::String)
                .optional()
                .description("A list of tag IDs to apply to this object."),
        ),
    ])
}
