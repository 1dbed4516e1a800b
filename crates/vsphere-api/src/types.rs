//! Shared types for the vSphere REST API.

use crate::error::{VmwareError, VmwareResult};
use serde::{Deserialize, Serialize};
use url::Url;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Connection / Config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Top-level configuration for connecting to a vCenter / ESXi host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsphereConfig {
    /// `https`, or `http` when the server string asks for it explicitly
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// vCenter or ESXi hostname / IP (e.g. "vcenter.lab.local")
    pub host: String,
    /// Port (default 443)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Username (e.g. "administrator@vsphere.local")
    pub username: String,
    /// Password
    #[serde(skip_serializing)]
    pub password: String,
    /// Skip TLS certificate verification (self-signed labs)
    #[serde(default)]
    pub insecure: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_scheme() -> String { "https".to_string() }
fn default_port() -> u16 { 443 }
fn default_timeout() -> u64 { 30 }

impl Default for VsphereConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: String::new(),
            username: String::new(),
            password: String::new(),
            port: 443,
            insecure: false,
            timeout_secs: 30,
        }
    }
}

impl VsphereConfig {
    /// Build a config from a server string such as `vcenter.lab.local`,
    /// `10.0.0.5:8443` or `https://vcenter.lab.local`.
    pub fn for_server(server: &str) -> VmwareResult<Self> {
        let server = server.trim();
        if server.is_empty() {
            return Err(VmwareError::endpoint("Server address is empty"));
        }

        let url = if server.contains("://") {
            Url::parse(server)?
        } else {
            Url::parse(&format!("https://{server}"))?
        };

        let scheme = url.scheme();
        if scheme != "https" && scheme != "http" {
            return Err(VmwareError::endpoint(format!(
                "Unsupported scheme '{scheme}' in server address '{server}'"
            )));
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| VmwareError::endpoint(format!("No host in server address '{server}'")))?
            .to_string();

        Ok(Self {
            scheme: scheme.to_string(),
            host,
            port: url.port_or_known_default().unwrap_or_else(default_port),
            ..Self::default()
        })
    }

    /// `scheme://host:port`
    pub fn endpoint(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Host (ESXi)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostConnectionState {
    Connected,
    Disconnected,
    NotResponding,
    #[serde(other)]
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostPowerState {
    PoweredOn,
    PoweredOff,
    Standby,
    #[serde(other)]
    #[default]
    Unknown,
}

/// Entry of `GET /api/vcenter/host`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSummary {
    pub host: String,
    pub name: String,
    #[serde(default)]
    pub connection_state: HostConnectionState,
    #[serde(default)]
    pub power_state: Option<HostPowerState>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Datacenter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Entry of `GET /api/vcenter/datacenter`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatacenterSummary {
    pub datacenter: String,
    pub name: String,
}
