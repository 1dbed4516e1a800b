//! `vsphere_host_port_group`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema, SchemaMap, ValueType};

pub fn resource() -> VsphereResource {
    Resource::new(
        "Manages a port group on a standard virtual switch of an ESXi host.",
        fields([
            (
                "name",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The name of the port group."),
            ),
            (
                "host_system_id",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The managed object ID of the host to set the port group up on."),
            ),
            (
                "virtual_switch_name",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The name of the virtual switch to bind this port group to."),
            ),
            (
                "vlan_id",
                Schema::int()
                    .optional()
                    .default(0)
                    .description("The VLAN ID/trunk mode for this port group."),
            ),
            (
                "computed_policy",
                Schema::map(ValueType::String)
                    .computed()
                    .description("The effective network policy after inheritance."),
            ),
            (
                "key",
                Schema::string()
                    .computed()
                    .description("The linkable identifier for this port group."),
            ),
            (
                "ports",
                Schema::block_list(port_fields())
                    .computed()
                    .description("The ports that currently exist and are used on this port group."),
            ),
        ])
        .into_iter()
        .chain(super::host_virtual_switch::policy_fields())
        .collect(),
    )
}

fn port_fields() -> SchemaMap {
    fields([
        ("key", Schema::string().computed()),
        ("mac_addresses", Schema::list(ValueType::String).computed()),
        ("type", Schema::string().computed()),
    ])
}
