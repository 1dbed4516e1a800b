use provider_core::{ProviderError, Severity};
use serde_json::json;
use serial_test::serial;
use terraform_provider_vsphere::provider;

const ENV_VARS: [&str; 8] = [
    "VSPHERE_USER",
    "VSPHERE_PASSWORD",
    "VSPHERE_SERVER",
    "VSPHERE_ALLOW_UNVERIFIED_SSL",
    "VSPHERE_VCENTER",
    "VSPHERE_CLIENT_DEBUG",
    "VSPHERE_CLIENT_DEBUG_PATH_RUN",
    "VSPHERE_CLIENT_DEBUG_PATH",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[tokio::test]
#[serial]
async fn configure_without_any_server_fails() {
    clear_env();
    let p = provider();
    let err = p
        .configure(json!({"user": "admin", "password": "pw"}))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "One of vsphere_server or [deprecated] vcenter_server must be provided."
    );
    assert!(p.meta().await.is_none());
}

#[tokio::test]
#[serial]
async fn credentials_are_required() {
    clear_env();
    let p = provider();
    match p.configure(json!({"vsphere_server": "vc"})).await {
        Err(ProviderError::Validation(diags)) => {
            let summaries: Vec<_> = diags.iter().map(|d| d.summary.clone()).collect();
            assert!(summaries.contains(&"\"user\": required field is not set".to_string()));
            assert!(summaries.contains(&"\"password\": required field is not set".to_string()));
        }
        other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
#[serial]
async fn credentials_can_come_from_environment() {
    clear_env();
    std::env::set_var("VSPHERE_USER", "admin");
    std::env::set_var("VSPHERE_PASSWORD", "pw");
    let diags = provider().validate(&json!({"vsphere_server": "vc"})).unwrap();
    assert!(diags.is_empty(), "{diags:?}");
    clear_env();
}

#[tokio::test]
#[serial]
async fn malformed_server_is_a_client_error() {
    clear_env();
    let p = provider();
    let err = p
        .configure(json!({"user": "admin", "password": "pw", "vsphere_server": "https://"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Client(_)), "{err}");
}

#[test]
#[serial]
fn deprecated_server_field_warns() {
    clear_env();
    let diags = provider()
        .validate(&json!({"user": "admin", "password": "pw", "vcenter_server": "vc"}))
        .unwrap();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert_eq!(
        diags[0].summary,
        "\"vcenter_server\": [DEPRECATED] This field has been renamed to vsphere_server."
    );
}

#[test]
#[serial]
fn unknown_provider_keys_are_rejected() {
    clear_env();
    let diags = provider()
        .validate(&json!({"user": "a", "password": "b", "server": "vc"}))
        .unwrap();
    assert!(diags
        .iter()
        .any(|d| d.is_error() && d.summary == "invalid or unknown key: server"));
}

#[tokio::test]
async fn data_source_reads_need_a_configured_provider() {
    let p = provider();
    let err = p
        .read_data_source("vsphere_datacenter", json!({"name": "dc1"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotConfigured));

    let err = p
        .read_data_source("vsphere_vmfs_disks", json!({"host_system_id": "host-9"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::ReadNotSupported(_)));

    let err = p.read_data_source("vsphere_cluster", json!({})).await.unwrap_err();
    assert!(matches!(err, ProviderError::UnknownDataSource(_)));
}

#[test]
fn schema_document_lists_every_type() {
    let doc = provider().schema_json();

    let resources = doc["resource_schemas"].as_object().unwrap();
    for name in [
        "vsphere_datacenter",
        "vsphere_file",
        "vsphere_folder",
        "vsphere_host_port_group",
        "vsphere_host_virtual_switch",
        "vsphere_license",
        "vsphere_virtual_disk",
        "vsphere_virtual_machine",
        "vsphere_nas_datastore",
        "vsphere_vmfs_datastore",
        "vsphere_virtual_machine_snapshot",
    ] {
        assert!(resources.contains_key(name), "missing resource {name}");
    }
    assert_eq!(resources.len(), 11);

    let data_sources = doc["data_source_schemas"].as_object().unwrap();
    assert_eq!(data_sources.len(), 3);
    assert_eq!(doc["provider"]["password"]["sensitive"], json!(true));
    assert_eq!(doc["provider"]["user"]["required"], json!(true));
}

#[test]
fn every_definition_is_consistent() {
    provider().internal_validate().unwrap();
}
