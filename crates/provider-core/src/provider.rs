//! Generic provider: schema, resource tables and the configure step.
//!
//! `M` is whatever the configure function produces (for vSphere, the
//! logged-in API client). It is stored once configuration succeeds and is
//! handed to every read handler.

use crate::diagnostics::{has_errors, validate_config, Diagnostic};
use crate::error::{ProviderError, ProviderResult};
use crate::resource::Resource;
use crate::resource_data::ResourceData;
use crate::schema::{self, SchemaMap};

use futures::future::{BoxFuture, FutureExt};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Turns the provider block into the meta value.
pub type ConfigureFunc<M> =
    Box<dyn Fn(ResourceData) -> BoxFuture<'static, ProviderResult<M>> + Send + Sync>;

pub struct Provider<M> {
    schema: Arc<SchemaMap>,
    resources: BTreeMap<String, Resource<M>>,
    data_sources: BTreeMap<String, Resource<M>>,
    configure_func: ConfigureFunc<M>,
    meta: RwLock<Option<Arc<M>>>,
}

impl<M: Send + Sync + 'static> Provider<M> {
    pub fn new<F, Fut>(schema: SchemaMap, configure: F) -> Self
    where
        F: Fn(ResourceData) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProviderResult<M>> + Send + 'static,
    {
        Self {
            schema: Arc::new(schema),
            resources: BTreeMap::new(),
            data_sources: BTreeMap::new(),
            configure_func: Box::new(move |d| configure(d).boxed()),
            meta: RwLock::new(None),
        }
    }

    pub fn with_resource(mut self, name: &str, resource: Resource<M>) -> Self {
        self.resources.insert(name.to_string(), resource);
        self
    }

    pub fn with_data_source(mut self, name: &str, data_source: Resource<M>) -> Self {
        self.data_sources.insert(name.to_string(), data_source);
        self
    }

    // ── Registry ────────────────────────────────────────────────

    pub fn schema(&self) -> &SchemaMap {
        &self.schema
    }

    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn data_source_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }

    pub fn resource(&self, name: &str) -> ProviderResult<&Resource<M>> {
        self.resources
            .get(name)
            .ok_or_else(|| ProviderError::UnknownResource(name.to_string()))
    }

    pub fn data_source(&self, name: &str) -> ProviderResult<&Resource<M>> {
        self.data_sources
            .get(name)
            .ok_or_else(|| ProviderError::UnknownDataSource(name.to_string()))
    }

    /// Full schema document: provider block, resources, data sources.
    pub fn schema_json(&self) -> Value {
        let resources: Map<String, Value> = self
            .resources
            .iter()
            .map(|(name, r)| (name.clone(), r.schema_json()))
            .collect();
        let data_sources: Map<String, Value> = self
            .data_sources
            .iter()
            .map(|(name, r)| (name.clone(), r.schema_json()))
            .collect();

        json!({
            "provider": self.schema.as_ref(),
            "resource_schemas": resources,
            "data_source_schemas": data_sources,
        })
    }

    /// Check the provider block and every registered resource definition.
    pub fn internal_validate(&self) -> ProviderResult<()> {
        let mut problems = Vec::new();

        if let Err(e) = schema::internal_validate(&self.schema) {
            problems.push(format!("provider: {e}"));
        }
        for (name, r) in &self.resources {
            if let Err(e) = r.internal_validate() {
                problems.push(format!("resource {name}: {e}"));
            }
        }
        for (name, r) in &self.data_sources {
            if let Err(e) = r.internal_validate() {
                problems.push(format!("data source {name}: {e}"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ProviderError::InvalidSchema(problems.join("\n")))
        }
    }

    // ── Configuration ───────────────────────────────────────────

    /// Validate a provider block without configuring.
    pub fn validate(&self, raw: &Value) -> ProviderResult<Vec<Diagnostic>> {
        Ok(validate_config(&self.schema, &as_object(raw)?))
    }

    /// Validate and configure. Warnings are returned; errors abort and
    /// leave any previous configuration untouched.
    pub async fn configure(&self, raw: Value) -> ProviderResult<Vec<Diagnostic>> {
        let diags = self.validate(&raw)?;
        if has_errors(&diags) {
            return Err(ProviderError::Validation(diags));
        }

        let d = ResourceData::from_value(Arc::clone(&self.schema), raw)?;
        let meta = (self.configure_func)(d).await?;
        *self.meta.write().await = Some(Arc::new(meta));

        log::debug!("provider configured with {} warning(s)", diags.len());
        Ok(diags)
    }

    /// Meta produced by the last successful configure.
    pub async fn meta(&self) -> Option<Arc<M>> {
        self.meta.read().await.clone()
    }

    // ── Data sources ────────────────────────────────────────────

    /// Read data source `name` and return its resulting state.
    pub async fn read_data_source(&self, name: &str, raw: Value) -> ProviderResult<Map<String, Value>> {
        let ds = self.data_source(name)?;

        let diags = validate_config(ds.schema(), &as_object(&raw)?);
        if has_errors(&diags) {
            return Err(ProviderError::Validation(diags));
        }

        let reader = ds
            .reader()
            .ok_or_else(|| ProviderError::ReadNotSupported(name.to_string()))?;
        let meta = self.meta().await.ok_or(ProviderError::NotConfigured)?;

        let mut d = ds.data(raw)?;
        reader.read(&meta, &mut d).await?;
        log::debug!("read data source {name}: id={}", d.id());
        d.state()
    }
}

fn as_object(raw: &Value) -> ProviderResult<Map<String, Value>> {
    match raw {
        Value::Object(map) => Ok(map.clone()),
        Value::Null => Ok(Map::new()),
        other => Err(ProviderError::config(format!(
            "configuration must be an object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ReadHandler;
    use crate::schema::Schema;
    use async_trait::async_trait;

    struct Lookup;

    #[async_trait]
    impl ReadHandler<String> for Lookup {
        async fn read(&self, meta: &String, d: &mut ResourceData) -> ProviderResult<()> {
            let name = d.get_string("name")?;
            d.set_id(format!("{meta}/{name}"));
            Ok(())
        }
    }

    fn fields(entries: Vec<(&str, Schema)>) -> SchemaMap {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    async fn configure_endpoint(d: ResourceData) -> ProviderResult<String> {
        let endpoint = d.get_string("endpoint")?;
        if endpoint == "refuse" {
            return Err(ProviderError::config("refused"));
        }
        Ok(endpoint)
    }

    fn provider() -> Provider<String> {
        Provider::new(
            fields(vec![
                ("endpoint", Schema::string().required()),
                ("old_endpoint", Schema::string().optional().deprecated("Use endpoint.")),
            ]),
            configure_endpoint,
        )
        .with_resource(
            "thing",
            Resource::new("thing", fields(vec![("name", Schema::string().required())])),
        )
        .with_data_source(
            "thing",
            Resource::new("thing", fields(vec![("name", Schema::string().required())]))
                .with_reader(Lookup),
        )
        .with_data_source("opaque", Resource::new("opaque", SchemaMap::new()))
    }

    #[tokio::test]
    async fn configure_stores_meta_and_returns_warnings() {
        let p = provider();
        assert!(p.meta().await.is_none());

        let diags = p
            .configure(json!({"endpoint": "api", "old_endpoint": "x"}))
            .await
            .unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(p.meta().await.as_deref(), Some(&"api".to_string()));
    }

    #[tokio::test]
    async fn validation_errors_abort_configure() {
        let p = provider();
        let err = p.configure(json!({})).await.unwrap_err();
        match err {
            ProviderError::Validation(diags) => {
                assert_eq!(diags[0].summary, "\"endpoint\": required field is not set")
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(p.meta().await.is_none());
    }

    #[tokio::test]
    async fn configure_func_errors_propagate() {
        let p = provider();
        let err = p.configure(json!({"endpoint": "refuse"})).await.unwrap_err();
        assert_eq!(err.to_string(), "refused");
        assert!(p.meta().await.is_none());
    }

    #[tokio::test]
    async fn read_requires_configuration() {
        let p = provider();
        let err = p
            .read_data_source("thing", json!({"name": "a"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured));
    }

    #[tokio::test]
    async fn read_returns_state_with_id() {
        let p = provider();
        p.configure(json!({"endpoint": "api"})).await.unwrap();
        let state = p.read_data_source("thing", json!({"name": "a"})).await.unwrap();
        assert_eq!(state["id"], json!("api/a"));
        assert_eq!(state["name"], json!("a"));
    }

    #[tokio::test]
    async fn unknown_and_declared_only_data_sources() {
        let p = provider();
        p.configure(json!({"endpoint": "api"})).await.unwrap();
        assert!(matches!(
            p.read_data_source("missing", Value::Null).await,
            Err(ProviderError::UnknownDataSource(_))
        ));
        assert!(matches!(
            p.read_data_source("opaque", Value::Null).await,
            Err(ProviderError::ReadNotSupported(_))
        ));
    }

    #[test]
    fn registry_and_schema_document() {
        let p = provider();
        assert_eq!(p.resource_names().collect::<Vec<_>>(), vec!["thing"]);
        assert_eq!(p.data_source_names().collect::<Vec<_>>(), vec!["opaque", "thing"]);
        assert!(p.resource("nope").is_err());
        p.internal_validate().unwrap();

        let doc = p.schema_json();
        assert_eq!(doc["provider"]["endpoint"]["required"], json!(true));
        assert!(doc["resource_schemas"]["thing"].is_object());
        assert!(doc["data_source_schemas"]["opaque"].is_object());
    }
}
