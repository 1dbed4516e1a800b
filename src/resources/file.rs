//! `vsphere_file`

use super::fields;
use crate::VsphereResource;

use provider_core::{Resource, Schema};

pub fn resource() -> VsphereResource {
    Resource::new(
        "Uploads or copies a file into a vSphere datastore.",
        fields([
            (
                "source_datacenter",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("The datacenter of the source file when copying."),
            ),
            (
                "datacenter",
                Schema::string()
                    .optional()
                    .description("The datacenter the destination datastore belongs to."),
            ),
            (
                "source_datastore",
                Schema::string()
                    .optional()
                    .force_new()
                    .description("The datastore of the source file when copying."),
            ),
            (
                "datastore",
                Schema::string()
                    .required()
                    .description("The destination datastore."),
            ),
            (
                "source_file",
                Schema::string()
                    .required()
                    .force_new()
                    .description("Path of the local or datastore file to upload or copy."),
            ),
            (
                "destination_file",
                Schema::string()
                    .required()
                    .description("Path of the file inside the destination datastore."),
            ),
            (
                "create_directories",
                Schema::bool()
                    .optional()
                    .description("Create the parent directories of destination_file if missing."),
            ),
        ]),
    )
}
