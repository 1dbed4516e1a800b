//! `vsphere_folder`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema, ValueType};

pub fn resource() -> VsphereResource {
    Resource::new(
        "Manages an inventory folder.",
        fields([
            (
                "path",
                Schema::string()
                    .required()
                    .description("The path of the folder, relative to the datacenter and folder type."),
            ),
            (
                "type",
                Schema::string()
                    .required()
                    .force_new()
                    .description("The type of the folder: vm, host, datacenter, datastore or network."),
            ),
            (
                "datacenter_id",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("The ID of the datacenter. Not used for datacenter folders."),
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
        ]),
    )
}
