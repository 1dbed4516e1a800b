//! `vsphere_virtual_machine`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema, SchemaMap, ValueType};

pub fn resource() -> VsphereResource {
    Resource::new(
        "Provides a VMware vSphere virtual machine resource.",
        fields([
            (
                "name",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The virtual machine name."),
            ),
            (
                "folder",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("The folder to group the virtual machine in."),
            ),
            (
                "vcpu",
                Schema::int()
                    .required()
                    .description("The number of virtual CPUs to allocate."),
            ),
            (
                "memory",
                Schema::int()
                    .required()
                    .description("The amount of RAM (in MB) to allocate."),
            ),
            (
                "memory_reservation",
                Schema::int()
                    .optional()
                    .default(0)
                    .force_new()
                    .description("The amount of RAM (in MB) to reserve physical memory resource for."),
            ),
            (
                "datacenter",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("The name of a datacenter in which to launch the virtual machine."),
            ),
            (
                "cluster",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("Name of a cluster in which to launch the virtual machine."),
            ),
            (
                "resource_pool",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("The name of a resource pool in which to launch the virtual machine."),
            ),
            (
                "linked_clone",
                Schema::bool()
                    .optional()
                    .default(false)
                    .force_new()
                    .description("Specifies if the new machine is a linked clone of another."),
            ),
            (
                "gateway",
                Schema::string()
                    .optional()
                    .force_new()
                    .deprecated("Please use network_interface.ipv4_gateway"),
            ),
            (
                "domain",
                Schema::string()
                    .optional()
                    .force_new()
                    .default("vsphere.local")
                    .description("A FQDN for the virtual machine."),
            ),
            (
                "time_zone",
                Schema::string()
                    .optional()
                    .force_new()
                    .default("Etc/UTC")
                    .description("The time zone to set on the virtual machine."),
            ),
            (
                "dns_suffixes",
                Schema::list(ValueType::String)
                    .optional()
                    .force_new()
                    .description("List of name resolution suffixes for the virtual network adapter."),
            ),
            (
                "dns_servers",
                Schema::list(ValueType::String)
                    .optional()
                    .force_new()
                    .description("List of DNS servers for the virtual network adapter."),
            ),
            (
                "boot_delay",
                Schema::int()
                    .optional()
                    .force_new()
                    .description("Time in seconds to wait for machine network to be ready."),
            ),
            (
                "skip_customization",
                Schema::bool()
                    .optional()
                    .default(false)
                    .force_new()
                    .description("Skip virtual machine customization (useful if OS is not in the guest OS support matrix)."),
            ),
            (
                "enable_disk_uuid",
                Schema::bool()
                    .optional()
                    .default(false)
                    .force_new()
                    .description("Expose the UUIDs of attached virtual disks to the virtual machine."),
            ),
            (
                "detach_unknown_disks_on_delete",
                Schema::bool()
                    .optional()
                    .default(false)
                    .description("Detach disks not managed by this resource before destroying the virtual machine."),
            ),
            (
                "uuid",
                Schema::string()
                    .computed()
                    .description("The instance UUID of the virtual machine."),
            ),
            (
                "moid",
                Schema::string()
                    .computed()
                    .description("The managed object ID of the virtual machine."),
            ),
            (
                "custom_configuration_parameters",
                Schema::map(ValueType::String)
                    .optional()
                    .force_new()
                    .description("A map of custom configuration parameters to set on the virtual machine."),
            ),
            (
                "windows_opt_config",
                Schema::block_list(windows_opt_config_fields())
                    .optional()
                    .force_new()
                    .max_items(1)
                    .description("Extra options for customizing Windows guests."),
            ),
            (
                "network_interface",
                Schema::block_list(network_interface_fields())
                    .required()
                    .min_items(1)
                    .description("Network interfaces of the virtual machine."),
            ),
            (
                "disk",
                Schema::block_list(disk_fields())
                    .required()
                    .min_items(1)
                    .description("Virtual disks of the virtual machine."),
            ),
            (
                "cdrom",
                Schema::block_list(cdrom_fields())
                    .optional()
                    .force_new()
                    .description("CD-ROM devices mounted from ISO files in a datastore."),
            ),
        ]),
    )
}

fn windows_opt_config_fields() -> SchemaMap {
    fields([
        ("product_key", Schema::string().optional().force_new()),
        ("admin_password", Schema::string().optional().sensitive().force_new()),
        ("domain_user", Schema::string().optional().force_new()),
        ("domain", Schema::string().optional().force_new()),
        ("domain_user_password", Schema::string().optional().sensitive().force_new()),
    ])
}

fn network_interface_fields() -> SchemaMap {
    fields([
        (
            "label",
            Schema::string()
                .required()
                .force_new()
                .description("Label of the port group to attach the interface to."),
        ),
        ("ip_address", Schema::string().optional().computed().deprecated("Please use ipv4_address")),
        ("subnet_mask", Schema::string().optional().computed().deprecated("Please use ipv4_prefix_length")),
        ("ipv4_address", Schema::string().optional().computed()),
        ("ipv4_prefix_length", Schema::int().optional().computed()),
        ("ipv4_gateway", Schema::string().optional().computed()),
        ("ipv6_address", Schema::string().optional().computed()),
        ("ipv6_prefix_length", Schema::int().optional().computed()),
        ("ipv6_gateway", Schema::string().optional().computed()),
        ("adapter_type", Schema::string().optional().force_new()),
        ("mac_address", Schema::string().optional().computed()),
    ])
}

fn disk_fields() -> SchemaMap {
    fields([
        ("uuid", Schema::string().computed()),
        ("key", Schema::int().computed()),
        (
            "template",
            Schema::string()
                .optional()
                .conflicts_with(&["vmdk"])
                .description("Template to clone this disk from."),
        ),
        (
            "type",
            Schema::string()
                .optional()
                .default("eager_zeroed")
                .description("Provisioning type of the disk: thin, lazy or eager_zeroed."),
        ),
        ("datastore", Schema::string().optional()),
        ("size", Schema::int().optional().description("Size of the disk, in GB.")),
        ("name", Schema::string().optional()),
        ("iops", Schema::int().optional()),
        (
            "vmdk",
            Schema::string()
                .optional()
                .conflicts_with(&["template"])
                .description("Path to an existing VMDK to attach."),
        ),
        ("bootable", Schema::bool().optional()),
        ("keep_on_remove", Schema::bool().optional()),
        ("controller_type", Schema::string().optional().default("scsi")),
    ])
}

fn cdrom_fields() -> SchemaMap {
    fields([
        ("datastore", Schema::string().required().force_new()),
        ("path", Schema::string().required().force_new()),
    ])
}
