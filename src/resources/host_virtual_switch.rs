//! `vsphere_host_virtual_switch`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema, SchemaMap, ValueType};

pub fn resource() -> VsphereResource {
    let mut schema = fields([
        (
            "name",
            Schema::string()
                .required()
                .force_new()
                .description("The name of the virtual switch."),
        ),
        (
            "host_system_id",
            Schema::string()
                .required()
                .force_new()
                .description("The managed object ID of the host to set the virtual switch up on."),
        ),
        (
            "mtu",
            Schema::int()
                .optional()
                .default(1500)
                .description("The maximum transmission unit (MTU) of the virtual switch in bytes."),
        ),
        (
            "number_of_ports",
            Schema::int()
                .optional()
                .default(128)
                .description("The number of ports that this virtual switch is configured to use."),
        ),
        (
            "network_adapters",
            Schema::list(ValueType::String)
                .required()
                .description("The list of network adapters to bind to this virtual switch."),
        ),
        (
            "beacon_interval",
            Schema::int()
                .optional()
                .default(1)
                .description("Determines how often, in seconds, a beacon should be sent to probe for the validity of a link."),
        ),
        (
            "link_discovery_operation",
            Schema::string()
                .optional()
                .default("listen")
                .description("Whether to advertise or listen for link discovery: advertise, both, listen or none."),
        ),
        (
            "link_discovery_protocol",
            Schema::string()
                .optional()
                .default("cdp")
                .description("The discovery protocol type. Valid value is cdp."),
        ),
    ]);
    // The switch owns its uplinks, so its NIC order lists are mandatory.
    schema.extend(policy_fields());
    schema.insert(
        "standby_nics".to_string(),
        Schema::list(ValueType::String)
            .required()
            .description("List of standby network adapters used for load balancing."),
    );
    schema.insert(
        "active_nics".to_string(),
        Schema::list(ValueType::String)
            .required()
            .description("List of active network adapters used for load balancing."),
    );

    Resource::new("Manages a standard virtual switch on an ESXi host.", schema)
}

/// Teaming, security and shaping policy shared with port groups, where every
/// setting is optional and inherited when unset.
pub(crate) fn policy_fields() -> SchemaMap {
    fields([
        (
            "active_nics",
            Schema::list(ValueType::String)
                .optional()
                .description("List of active network adapters used for load balancing."),
        ),
        (
            "standby_nics",
            Schema::list(ValueType::String)
                .optional()
                .description("List of standby network adapters used for failover."),
        ),
        (
            "check_beacon",
            Schema::bool()
                .optional()
                .description("Enable beacon probing on the ports this policy applies to."),
        ),
        (
            "teaming_policy",
            Schema::string()
                .optional()
                .description("The network adapter teaming policy: loadbalance_ip, loadbalance_srcmac, loadbalance_srcid or failover_explicit."),
        ),
        (
            "notify_switches",
            Schema::bool()
                .optional()
                .description("If true, the teaming policy will notify the broadcast network of a NIC failover."),
        ),
        (
            "failback",
            Schema::bool()
                .optional()
                .description("If true, the teaming policy will re-activate failed interfaces higher in precedence when they come back up."),
        ),
        (
            "allow_promiscuous",
            Schema::bool()
                .optional()
                .description("Enable promiscuous mode on the network."),
        ),
        (
            "allow_forged_transmits",
            Schema::bool()
                .optional()
                .description("Controls whether or not the virtual network adapter is allowed to send network traffic with a different MAC address than that of its own."),
        ),
        (
            "allow_mac_changes",
            Schema::bool()
                .optional()
                .description("Controls whether or not the Media Access Control (MAC) address can be changed."),
        ),
        (
            "shaping_enabled",
            Schema::bool()
                .optional()
                .description("Enable traffic shaping on this virtual switch or port group."),
        ),
        (
            "shaping_average_bandwidth",
            Schema::int()
                .optional()
                .description("The average bandwidth in bits per second if traffic shaping is enabled."),
        ),
        (
            "shaping_peak_bandwidth",
            Schema::int()
                .optional()
                .description("The peak bandwidth during bursts in bits per second if traffic shaping is enabled."),
        ),
        (
            "shaping_burst_size",
            Schema::int()
                .optional()
                .description("The maximum burst size allowed in bytes if traffic shaping is enabled."),
        ),
    ])
}
