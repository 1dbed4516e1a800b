//! The vSphere provider definition.

use crate::config::Config;
use crate::{data_sources, resources};

use provider_core::{Provider, ProviderError, ProviderResult, ResourceData, Schema, SchemaMap};
use vsphere_api::VsphereClient;

/// Provider with every vSphere resource and data source registered.
pub fn provider() -> Provider<VsphereClient> {
    Provider::new(provider_schema(), provider_configure)
        .with_resource("vsphere_datacenter", resources::datacenter::resource())
        .with_resource("vsphere_file", resources::file::resource())
        .with_resource("vsphere_folder", resources::folder::resource())
        .with_resource("vsphere_host_port_group", resources::host_port_group::resource())
        .with_resource("vsphere_host_virtual_switch", resources::host_virtual_switch::resource())
        .with_resource("vsphere_license", resources::license::resource())
        .with_resource("vsphere_virtual_disk", resources::virtual_disk::resource())
        .with_resource("vsphere_virtual_machine", resources::virtual_machine::resource())
        .with_resource("vsphere_nas_datastore", resources::nas_datastore::resource())
        .with_resource("vsphere_vmfs_datastore", resources::vmfs_datastore::resource())
        .with_resource(
            "vsphere_virtual_machine_snapshot",
            resources::virtual_machine_snapshot::resource(),
        )
        .with_data_source("vsphere_datacenter", data_sources::datacenter::data_source())
        .with_data_source("vsphere_host", data_sources::host::data_source())
        .with_data_source("vsphere_vmfs_disks", data_sources::vmfs_disks::data_source())
}

/// Fields of the `provider "vsphere"` block.
pub fn provider_schema() -> SchemaMap {
    resources::fields([
        (
            "user",
            Schema::string()
                .required()
                .env_default("VSPHERE_USER")
                .description("The user name for vSphere API operations."),
        ),
        (
            "password",
            Schema::string()
                .required()
                .sensitive()
                .env_default("VSPHERE_PASSWORD")
                .description("The user password for vSphere API operations."),
        ),
        (
            "vsphere_server",
            Schema::string()
                .optional()
                .env_default("VSPHERE_SERVER")
                .description("The vSphere Server name for vSphere API operations."),
        ),
        (
            "allow_unverified_ssl",
            Schema::bool()
                .optional()
                .env_default_or("VSPHERE_ALLOW_UNVERIFIED_SSL", false)
                .description("If set, VMware vSphere client will permit unverifiable SSL certificates."),
        ),
        (
            "vcenter_server",
            Schema::string()
                .optional()
                .env_default("VSPHERE_VCENTER")
                .deprecated("This field has been renamed to vsphere_server."),
        ),
        (
            "client_debug",
            Schema::bool()
                .optional()
                .env_default_or("VSPHERE_CLIENT_DEBUG", false)
                .description("Enable client request/response debug tracing."),
        ),
        (
            "client_debug_path_run",
            Schema::string()
                .optional()
                .env_default_or("VSPHERE_CLIENT_DEBUG_PATH_RUN", "")
                .description("Client debug trace directory for a single run."),
        ),
        (
            "client_debug_path",
            Schema::string()
                .optional()
                .env_default_or("VSPHERE_CLIENT_DEBUG_PATH", "")
                .description("Base directory for client debug traces."),
        ),
    ])
}

/// Configure step: resolve the connection parameters and log in.
pub async fn provider_configure(d: ResourceData) -> ProviderResult<VsphereClient> {
    let config = config_from_resource_data(&d)?;
    log::debug!("configuring vSphere provider: {config:?}");
    config.client().await
}

/// Assemble [`Config`] from the provider block.
pub fn config_from_resource_data(d: &ResourceData) -> ProviderResult<Config> {
    Ok(Config {
        user: d.get_string("user")?,
        password: d.get_string("password")?,
        insecure_flag: d.get_bool("allow_unverified_ssl")?,
        vsphere_server: resolve_server(d)?,
        debug: d.get_bool("client_debug")?,
        debug_path_run: d.get_string("client_debug_path_run")?,
        debug_path: d.get_string("client_debug_path")?,
    })
}

// Once vcenter_server is removed, vsphere_server becomes a required field
// read inline above.
fn resolve_server(d: &ResourceData) -> ProviderResult<String> {
    let mut server = d.get_string("vsphere_server")?;

    if server.is_empty() {
        server = d.get_string("vcenter_server")?;
    }

    if server.is_empty() {
        return Err(ProviderError::config(
            "One of vsphere_server or [deprecated] vcenter_server must be provided.",
        ));
    }

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;
    use std::sync::Arc;

    const SERVER_VARS: [&str; 2] = ["VSPHERE_SERVER", "VSPHERE_VCENTER"];

    fn clear_server_env() {
        for var in SERVER_VARS {
            std::env::remove_var(var);
        }
    }

    fn data(raw: serde_json::Value) -> ResourceData {
        ResourceData::from_value(Arc::new(provider_schema()), raw).unwrap()
    }

    #[test]
    #[serial]
    fn both_server_fields_empty_is_a_configuration_error() {
        clear_server_env();
        let d = data(json!({"user": "u", "password": "p"}));
        let err = config_from_resource_data(&d).unwrap_err();
        assert!(matches!(err, ProviderError::Config(_)));
        assert_eq!(
            err.to_string(),
            "One of vsphere_server or [deprecated] vcenter_server must be provided."
        );
    }

    #[test]
    #[serial]
    fn explicit_empty_strings_count_as_unset() {
        clear_server_env();
        let d = data(json!({
            "user": "u",
            "password": "p",
            "vsphere_server": "",
            "vcenter_server": ""
        }));
        assert!(config_from_resource_data(&d).is_err());
    }

    #[test]
    #[serial]
    fn deprecated_field_alone_is_used() {
        clear_server_env();
        let d = data(json!({"user": "u", "password": "p", "vcenter_server": "legacy-vc"}));
        let config = config_from_resource_data(&d).unwrap();
        assert_eq!(config.vsphere_server, "legacy-vc");
    }

    #[test]
    #[serial]
    fn primary_field_wins_over_deprecated() {
        clear_server_env();
        let d = data(json!({
            "user": "u",
            "password": "p",
            "vsphere_server": "vc-new",
            "vcenter_server": "vc-old"
        }));
        assert_eq!(config_from_resource_data(&d).unwrap().vsphere_server, "vc-new");
    }

    #[test]
    #[serial]
    fn server_can_come_from_environment() {
        clear_server_env();
        std::env::set_var("VSPHERE_VCENTER", "env-legacy");
        let d = data(json!({"user": "u", "password": "p"}));
        assert_eq!(config_from_resource_data(&d).unwrap().vsphere_server, "env-legacy");

        std::env::set_var("VSPHERE_SERVER", "env-primary");
        assert_eq!(config_from_resource_data(&d).unwrap().vsphere_server, "env-primary");
        clear_server_env();
    }

    #[test]
    #[serial]
    fn remaining_fields_are_mapped() {
        clear_server_env();
        let d = data(json!({
            "user": "administrator@vsphere.local",
            "password": "pw",
            "vsphere_server": "vc",
            "allow_unverified_ssl": true,
            "client_debug": "true",
            "client_debug_path": "/tmp/vsphere",
            "client_debug_path_run": "run-1"
        }));
        let config = config_from_resource_data(&d).unwrap();
        assert_eq!(
            config,
            Config {
                user: "administrator@vsphere.local".into(),
                password: "pw".into(),
                insecure_flag: true,
                vsphere_server: "vc".into(),
                debug: true,
                debug_path_run: "run-1".into(),
                debug_path: "/tmp/vsphere".into(),
            }
        );
    }

    #[test]
    fn schema_declares_env_defaults() {
        let schema = provider_schema();
        let user = serde_json::to_value(&schema["user"]).unwrap();
        assert_eq!(user["default_func"]["var"], "VSPHERE_USER");
        assert!(schema["password"].sensitive);
        assert_eq!(
            schema["vcenter_server"].deprecated.as_deref(),
            Some("This field has been renamed to vsphere_server.")
        );
        assert!(schema["vsphere_server"].optional);
    }

    #[test]
    fn provider_definition_is_consistent() {
        provider().internal_validate().unwrap();
    }

    #[test]
    fn registry_contents() {
        let p = provider();
        assert_eq!(p.resource_names().count(), 11);
        assert_eq!(
            p.data_source_names().collect::<Vec<_>>(),
            vec!["vsphere_datacenter", "vsphere_host", "vsphere_vmfs_disks"]
        );
    }
}
