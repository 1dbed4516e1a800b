//! Resources and data sources.

use crate::error::ProviderResult;
use crate::resource_data::ResourceData;
use crate::schema::{self, SchemaMap};

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Refreshes a block from the remote API using the configured meta
/// (typically the API client).
#[async_trait]
pub trait ReadHandler<M>: Send + Sync {
    async fn read(&self, meta: &M, d: &mut ResourceData) -> ProviderResult<()>;
}

/// A resource type or data source: its field schema and, where supported,
/// how to read it.
pub struct Resource<M> {
    description: String,
    schema: Arc<SchemaMap>,
    reader: Option<Arc<dyn ReadHandler<M>>>,
}

impl<M: Send + Sync + 'static> Resource<M> {
    pub fn new(description: impl Into<String>, schema: SchemaMap) -> Self {
        Self {
            description: description.into(),
            schema: Arc::new(schema),
            reader: None,
        }
    }

    pub fn with_reader(mut self, reader: impl ReadHandler<M> + 'static) -> Self {
        self.reader = Some(Arc::new(reader));
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &SchemaMap {
        &self.schema
    }

    pub fn can_read(&self) -> bool {
        self.reader.is_some()
    }

    pub(crate) fn reader(&self) -> Option<Arc<dyn ReadHandler<M>>> {
        self.reader.clone()
    }

    /// Wrap a raw configuration block for this resource.
    pub fn data(&self, raw: Value) -> ProviderResult<ResourceData> {
        ResourceData::from_value(Arc::clone(&self.schema), raw)
    }

    pub fn internal_validate(&self) -> ProviderResult<()> {
        schema::internal_validate(&self.schema)
    }

    pub fn schema_json(&self) -> Value {
        json!({
            "description": self.description,
            "attributes": self.schema.as_ref(),
        })
    }
}
