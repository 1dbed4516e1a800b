//! `vsphere_license`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema, ValueType};

pub fn resource() -> VsphereResource {
    Resource::new(
        "Adds a license key to the vCenter license manager.",
        fields([
            (
                "license_key",
                Schema::string()
                    .required()
                    .force_new()
                    .sensitive()
                    .description("The license key to add."),
            ),
            (
                "labels",
                Schema::map(ValueType::String)
                    .optional()
                    .description("Key/value labels attached to the license."),
            ),
            (
                "edition_key",
                Schema::string()
                    .computed()
                    .description("The product edition of the license key."),
            ),
            (
                "name",
                Schema::string()
                    .computed()
                    .description("The display name of the license."),
            ),
            (
                "total",
                Schema::int()
                    .computed()
                    .description("Total number of units contained in the license."),
            ),
            (
                "used",
                Schema::int()
                    .computed()
                    .description("The number of units assigned to this license."),
            ),
        ]),
    )
}
