//! vSphere REST API HTTP client with session-based authentication.
//!
//! Communicates with vCenter / ESXi via `https://{host}/api/...`.
//! Manages session lifecycle (create / delete) and provides typed helpers.

use crate::debug::DebugTrace;
use crate::error::{VmwareError, VmwareErrorKind, VmwareResult};
use crate::types::VsphereConfig;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const SESSION_HEADER: &str = "vmware-api-session-id";

/// vSphere REST API client.
pub struct VsphereClient {
    client: Client,
    base_url: String,
    session_id: Option<String>,
    config: VsphereConfig,
    trace: Option<DebugTrace>,
}

impl VsphereClient {
    /// Build a new client from config (does NOT create a session yet).
    pub fn new(config: &VsphereConfig) -> VmwareResult<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| VmwareError::connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.endpoint(),
            session_id: None,
            config: config.clone(),
            trace: None,
        })
    }

    /// Write every round trip into `trace`'s directory.
    pub fn with_debug_trace(mut self, trace: DebugTrace) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Base URL for API calls.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether we have an active session.
    pub fn is_connected(&self) -> bool {
        self.session_id.is_some()
    }

    /// Current session ID (if any).
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Current config.
    pub fn config(&self) -> &VsphereConfig {
        &self.config
    }

    pub fn debug_trace(&self) -> Option<&DebugTrace> {
        self.trace.as_ref()
    }

    // ── Session management ──────────────────────────────────────────

    /// Create a new API session (POST /api/session).
    pub async fn login(&mut self) -> VmwareResult<String> {
        let url = format!("{}/api/session", self.base_url);

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?;

        let status = resp.status();
        // Never trace the session token itself.
        self.record("POST", &url, status, "");

        if status == StatusCode::UNAUTHORIZED {
            return Err(VmwareError::auth("Invalid credentials"));
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(VmwareError::api(
                status.as_u16(),
                format!("Login failed: {body}"),
            ));
        }

        // Session ID comes back as a quoted JSON string
        let session_id: String = resp.json().await.map_err(|e| {
            VmwareError::parse(format!("Failed to parse session response: {e}"))
        })?;

        log::debug!("vSphere session created on {}", self.base_url);
        self.session_id = Some(session_id.clone());
        Ok(session_id)
    }

    /// Delete the current session (DELETE /api/session).
    pub async fn logout(&mut self) -> VmwareResult<()> {
        if let Some(ref sid) = self.session_id {
            let url = format!("{}/api/session", self.base_url);
            let result = self
                .client
                .delete(&url)
                .header(SESSION_HEADER, sid.as_str())
                .send()
                .await;
            match result {
                Ok(resp) => self.record("DELETE", &url, resp.status(), ""),
                Err(e) => log::warn!("vSphere logout failed: {e}"),
            }
        }
        self.session_id = None;
        Ok(())
    }

    // ── HTTP helpers ────────────────────────────────────────────────

    fn require_session(&self) -> VmwareResult<&str> {
        self.session_id
            .as_deref()
            .ok_or_else(|| VmwareError::connection("Not logged in, no active session"))
    }

    /// GET a JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> VmwareResult<T> {
        self.get_with_params(path, &[]).await
    }

    /// GET a JSON response with query params (borrowed).
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> VmwareResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let borrowed: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let req = self.request(Method::GET, &url)?.query(&borrowed);
        let text = self.execute(Method::GET, &url, req).await?;
        Self::parse_body(&text)
    }

    // ── Internal helpers ────────────────────────────────────────────

    fn request(&self, method: Method, url: &str) -> VmwareResult<RequestBuilder> {
        let sid = self.require_session()?;
        Ok(self
            .client
            .request(method, url)
            .header(SESSION_HEADER, sid))
    }

    async fn execute(&self, method: Method, url: &str, req: RequestBuilder) -> VmwareResult<String> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            VmwareError::parse(format!("Failed to read response body: {e}"))
        })?;
        self.record(method.as_str(), url, status, &body);
        Self::check_status(status, body)
    }

    fn record(&self, method: &str, url: &str, status: StatusCode, body: &str) {
        if let Some(ref trace) = self.trace {
            if let Err(e) = trace.record(method, url, status.as_u16(), body) {
                log::warn!("Failed to write vSphere debug trace: {e}");
            }
        }
    }

    fn check_status(status: StatusCode, body: String) -> VmwareResult<String> {
        if status.is_success() {
            return Ok(body);
        }

        let code = status.as_u16();
        match status {
            StatusCode::UNAUTHORIZED => Err(VmwareError::auth(format!("Session expired or invalid: {body}"))),
            StatusCode::FORBIDDEN => Err(VmwareError::new(
                VmwareErrorKind::AccessDenied,
                format!("Access denied: {body}"),
            )),
            StatusCode::NOT_FOUND => Err(VmwareError::not_found(format!("Resource not found: {body}"))),
            _ => Err(VmwareError::api(code, format!("API error {code}: {body}"))),
        }
    }

    fn parse_body<T: DeserializeOwned>(text: &str) -> VmwareResult<T> {
        if text.is_empty() {
            // Some vSphere endpoints return empty body for success
            return serde_json::from_str("null").map_err(|e| {
                VmwareError::parse(format!("Cannot deserialise empty response: {e}"))
            });
        }

        serde_json::from_str(text).map_err(|e| {
            let end = text.char_indices().nth(500).map(|(i, _)| i).unwrap_or(text.len());
            VmwareError::parse(format!("JSON parse error: {e}, body: {}", &text[..end]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DatacenterSummary;

    fn client() -> VsphereClient {
        let mut config = VsphereConfig::for_server("vc.example.com:8443").unwrap();
        config.username = "administrator@vsphere.local".into();
        config.password = "secret".into();
        VsphereClient::new(&config).unwrap()
    }

    #[test]
    fn base_url_follows_config() {
        let c = client();
        assert_eq!(c.base_url(), "https://vc.example.com:8443");
        assert!(!c.is_connected());
        assert!(c.session_id().is_none());
    }

    #[tokio::test]
    async fn requests_without_session_fail_fast() {
        let c = client();
        let err = c
            .get::<Vec<DatacenterSummary>>("/api/vcenter/datacenter")
            .await
            .unwrap_err();
        assert_eq!(err.kind, VmwareErrorKind::ConnectionError);
    }

    #[tokio::test]
    async fn logout_without_session_is_a_no_op() {
        let mut c = client();
        c.logout().await.unwrap();
        assert!(!c.is_connected());
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            VsphereClient::check_status(StatusCode::NOT_FOUND, "gone".into())
                .unwrap_err()
                .kind,
            VmwareErrorKind::NotFound
        );
        assert_eq!(
            VsphereClient::check_status(StatusCode::FORBIDDEN, String::new())
                .unwrap_err()
                .kind,
            VmwareErrorKind::AccessDenied
        );
        assert_eq!(
            VsphereClient::check_status(StatusCode::BAD_GATEWAY, String::new())
                .unwrap_err()
                .kind,
            VmwareErrorKind::ApiError(502)
        );
        assert_eq!(
            VsphereClient::check_status(StatusCode::OK, "[]".into()).unwrap(),
            "[]"
        );
    }

    #[test]
    fn empty_body_parses_as_null() {
        let parsed: Option<Vec<DatacenterSummary>> = VsphereClient::parse_body("").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn datacenter_list_parses() {
        let parsed: Vec<DatacenterSummary> =
            VsphereClient::parse_body(r#"[{"datacenter":"datacenter-3","name":"dc1"}]"#).unwrap();
        assert_eq!(parsed[0].datacenter, "datacenter-3");
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = VsphereClient::parse_body::<Vec<DatacenterSummary>>("<html>").unwrap_err();
        assert_eq!(err.kind, VmwareErrorKind::ParseError);
    }
}
