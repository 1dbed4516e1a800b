//! `vsphere_datacenter`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema, ValueType};

pub fn resource() -> VsphereResource {
    Resource::new(
        "Provides a VMware vSphere datacenter resource.",
        fields([
            (
                "name",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The name of the datacenter."),
            ),
            (
                "folder",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("The folder in which to create the datacenter."),
            ),
            (
                "tags",
                Schema::set(ValueType::String)
                    .optional()
                    .description("A list of tag IDs to apply to this object."),
            ),
            (
                "custom_attributes",
                Schema::map(ValueType::String)
                    .optional()
                    .description("A map of custom attribute IDs to string values."),
            ),
            (
                "moid",
                Schema::string()
                    .computed()
                    .description("Managed object ID of the datacenter."),
            ),
        ]),
    )
}
