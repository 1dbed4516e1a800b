//! `vsphere_nas_datastore`

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
            "host_system_ids",
            Schema::set(ValueType::String)
                .required()
                .description("The managed object IDs of the hosts to mount the datastore on."),
        ),
        (
            "remote_hosts",
            Schema::list(ValueType::String)
                .required()
                .force_new()
                .min_items(1)
                .description("The hostnames or IP addresses of the remote servers. Only one element should be present for NFS v3."),
        ),
        (
            "remote_path",
            Schema::string()
                .required()
                .force_new()
                .description("The remote path of the mount point."),
        ),
        (
            "access_mode",
            Schema::string()
                .optional()
                .force_new()
                .default("readWrite")
                .description("Access mode for the mount point: readOnly or readWrite."),
        ),
        (
            "type",
            Schema::string()
                .optional()
                .force_new()
                .default("NFS")
                .description("The type of NAS volume: NFS (NFS v3) or NFS41 (NFS v4.1)."),
        ),
        (
            "security_type",
            Schema::string()
                .optional()
                .force_new()
                .description("The security type to use: AUTH_SYS, SEC_KRB5 or SEC_KRB5I."),
        ),
        (
            "protocol_endpoint",
            Schema::string()
                .computed()
                .description("Indicates that this NAS volume is a protocol endpoint."),
        ),
    ]);
    schema.extend(placement_fields());
    schema.extend(datastore_summary_fields());

    Resource::new("Mounts an NFS datastore on a set of ESXi hosts.", schema)
}
