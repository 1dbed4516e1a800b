//! Connection parameters and client construction.

use provider_core::{ProviderError, ProviderResult};
use vsphere_api::{DebugTrace, VsphereClient, VsphereConfig};

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Timeout applied to every vSphere API request.
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Connection parameters assembled once per provider instantiation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub user: String,
    pub password: String,
    pub insecure_flag: bool,
    pub vsphere_server: String,
    pub debug: bool,
    pub debug_path_run: String,
    pub debug_path: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("insecure_flag", &self.insecure_flag)
            .field("vsphere_server", &self.vsphere_server)
            .field("debug", &self.debug)
            .field("debug_path_run", &self.debug_path_run)
            .field("debug_path", &self.debug_path)
            .finish()
    }
}

impl Config {
    /// Settings handed to the REST client.
    pub fn client_config(&self) -> ProviderResult<VsphereConfig> {
        let mut config =
            VsphereConfig::for_server(&self.vsphere_server).map_err(ProviderError::client)?;
        config.username = self.user.clone();
        config.password = self.password.clone();
        config.insecure = self.insecure_flag;
        config.timeout_secs = DEFAULT_API_TIMEOUT.as_secs();
        Ok(config)
    }

    /// Build and log in the API client.
    pub async fn client(&self) -> ProviderResult<VsphereClient> {
        let debug_dir = self.enable_debug()?;

        let mut client =
            VsphereClient::new(&self.client_config()?).map_err(ProviderError::client)?;
        if let Some(dir) = debug_dir {
            client = client.with_debug_trace(DebugTrace::new(dir));
        }

        client.login().await.map_err(ProviderError::client)?;
        log::info!("VMware vSphere client configured for URL: {}", self.vsphere_server);

        Ok(client)
    }

    /// Prepare the directory that receives client debug traces.
    ///
    /// Returns `None` when debugging is off. The base directory is
    /// `debug_path` (default `~/.govmomi`) plus `debug`; each run gets a
    /// timestamped subdirectory unless `debug_path_run` names one, in which
    /// case that directory is emptied and reused.
    pub fn enable_debug(&self) -> ProviderResult<Option<PathBuf>> {
        if !self.debug {
            return Ok(None);
        }

        let base = if self.debug_path.is_empty() {
            dirs::home_dir()
                .ok_or_else(|| {
                    ProviderError::config("cannot determine home directory for client debug logs")
                })?
                .join(".govmomi")
        } else {
            PathBuf::from(&self.debug_path)
        }
        .join("debug");

        let run = if self.debug_path_run.is_empty() {
            let now = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S%.9f");
            base.join(now.to_string())
        } else {
            let run = base.join(&self.debug_path_run);
            match std::fs::remove_dir_all(&run) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(ProviderError::config(format!(
                        "cannot clear client debug directory {}: {e}",
                        run.display()
                    )))
                }
            }
            run
        };

        create_private_dir(&run).map_err(|e| {
            ProviderError::config(format!(
                "cannot create client debug directory {}: {e}",
                run.display()
            ))
        })?;

        log::debug!("vSphere client debug traces go to {}", run.display());
        Ok(Some(run))
    }
}

#[cfg(unix)]
fn create_private_dir(path: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
