//! Read/write access to one configuration block.

use crate::error::{ProviderError, ProviderResult};
use crate::schema::{Schema, SchemaMap};

use serde_json::{Map, Value};
use std::sync::Arc;

/// Configuration of a provider, resource or data-source block, plus the
/// values computed while handling it.
#[derive(Debug, Clone)]
pub struct ResourceData {
    schema: Arc<SchemaMap>,
    raw: Map<String, Value>,
    computed: Map<String, Value>,
    id: String,
}

impl ResourceData {
    pub fn new(schema: Arc<SchemaMap>, raw: Map<String, Value>) -> Self {
        Self {
            schema,
            raw,
            computed: Map::new(),
            id: String::new(),
        }
    }

    /// Build from a JSON object; `null` is an empty block.
    pub fn from_value(schema: Arc<SchemaMap>, raw: Value) -> ProviderResult<Self> {
        match raw {
            Value::Object(map) => Ok(Self::new(schema, map)),
            Value::Null => Ok(Self::new(schema, Map::new())),
            other => Err(ProviderError::config(format!(
                "configuration must be an object, got {other}"
            ))),
        }
    }

    pub fn schema(&self) -> &SchemaMap {
        &self.schema
    }

    fn field(&self, key: &str) -> ProviderResult<&Schema> {
        self.schema
            .get(key)
            .ok_or_else(|| ProviderError::UnknownField(key.to_string()))
    }

    /// Whether configuration sets `key` explicitly.
    pub fn is_set(&self, key: &str) -> bool {
        self.raw.get(key).is_some_and(|v| !v.is_null())
    }

    /// Resolved value of `key`: computed, then configured, then the field's
    /// defaults, then the zero value of its type.
    pub fn get(&self, key: &str) -> ProviderResult<Value> {
        let field = self.field(key)?;

        let value = self
            .computed
            .get(key)
            .or_else(|| self.raw.get(key).filter(|v| !v.is_null()))
            .cloned()
            .or_else(|| field.resolve_default());

        match value {
            Some(v) => field.value_type.coerce(&v).map_err(|message| ProviderError::InvalidValue {
                key: key.to_string(),
                message,
            }),
            None => Ok(field.value_type.zero_value()),
        }
    }

    pub fn get_string(&self, key: &str) -> ProviderResult<String> {
        match self.get(key)? {
            Value::String(s) => Ok(s),
            other => Err(self.wrong_type(key, "string", &other)),
        }
    }

    pub fn get_bool(&self, key: &str) -> ProviderResult<bool> {
        match self.get(key)? {
            Value::Bool(b) => Ok(b),
            other => Err(self.wrong_type(key, "bool", &other)),
        }
    }

    pub fn get_int(&self, key: &str) -> ProviderResult<i64> {
        match self.get(key)? {
            Value::Number(n) if n.is_i64() => Ok(n.as_i64().unwrap_or_default()),
            other => Err(self.wrong_type(key, "int", &other)),
        }
    }

    pub fn get_list(&self, key: &str) -> ProviderResult<Vec<Value>> {
        match self.get(key)? {
            Value::Array(items) => Ok(items),
            other => Err(self.wrong_type(key, "list", &other)),
        }
    }

    fn wrong_type(&self, key: &str, wanted: &str, got: &Value) -> ProviderError {
        ProviderError::InvalidValue {
            key: key.to_string(),
            message: format!("field is not a {wanted} (value {got})"),
        }
    }

    /// Record a computed value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> ProviderResult<()> {
        let field = self.field(key)?;
        let value = field
            .value_type
            .coerce(&value.into())
            .map_err(|message| ProviderError::InvalidValue {
                key: key.to_string(),
                message,
            })?;
        self.computed.insert(key.to_string(), value);
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Every field's resolved value plus `id`.
    pub fn state(&self) -> ProviderResult<Map<String, Value>> {
        let mut state = Map::new();
        for key in self.schema.keys() {
            state.insert(key.clone(), self.get(key)?);
        }
        state.insert("id".to_string(), Value::String(self.id.clone()));
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    fn schema() -> Arc<SchemaMap> {
        Arc::new(
            [
                ("name", Schema::string().required()),
                ("ports", Schema::int().optional().default(128)),
                (
                    "insecure",
                    Schema::bool()
                        .optional()
                        .env_default_or("PROVIDER_CORE_TEST_INSECURE", false),
                ),
                ("server", Schema::string().optional().env_default("PROVIDER_CORE_TEST_SERVER")),
                ("moid", Schema::string().computed()),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        )
    }

    fn data(raw: Value) -> ResourceData {
        ResourceData::from_value(schema(), raw).unwrap()
    }

    #[test]
    fn configured_values_win() {
        let d = data(json!({"name": "dc1", "ports": 64}));
        assert_eq!(d.get_string("name").unwrap(), "dc1");
        assert_eq!(d.get_int("ports").unwrap(), 64);
        assert!(d.is_set("name"));
        assert!(!d.is_set("server"));
    }

    #[test]
    fn static_default_then_zero_value() {
        let d = data(json!({}));
        assert_eq!(d.get_int("ports").unwrap(), 128);
        assert_eq!(d.get_string("moid").unwrap(), "");
    }

    #[test]
    #[serial]
    fn env_default_is_coerced_to_field_type() {
        std::env::set_var("PROVIDER_CORE_TEST_INSECURE", "1");
        let d = data(json!({}));
        assert!(d.get_bool("insecure").unwrap());
        std::env::remove_var("PROVIDER_CORE_TEST_INSECURE");
        assert!(!d.get_bool("insecure").unwrap());
    }

    #[test]
    #[serial]
    fn empty_env_var_counts_as_unset() {
        std::env::set_var("PROVIDER_CORE_TEST_SERVER", "");
        let d = data(json!({}));
        assert_eq!(d.get_string("server").unwrap(), "");
        std::env::set_var("PROVIDER_CORE_TEST_SERVER", "vc.example.com");
        assert_eq!(d.get_string("server").unwrap(), "vc.example.com");
        std::env::remove_var("PROVIDER_CORE_TEST_SERVER");
    }

    #[test]
    #[serial]
    fn configuration_beats_environment() {
        std::env::set_var("PROVIDER_CORE_TEST_SERVER", "from-env");
        let d = data(json!({"server": "from-config"}));
        assert_eq!(d.get_string("server").unwrap(), "from-config");
        std::env::remove_var("PROVIDER_CORE_TEST_SERVER");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut d = data(json!({}));
        assert!(matches!(d.get("nope"), Err(ProviderError::UnknownField(_))));
        assert!(d.set("nope", "x").is_err());
    }

    #[test]
    fn set_and_state() {
        let mut d = data(json!({"name": "dc1"}));
        d.set("moid", "datacenter-21").unwrap();
        d.set_id("datacenter-21");

        let state = d.state().unwrap();
        assert_eq!(state["moid"], json!("datacenter-21"));
        assert_eq!(state["id"], json!("datacenter-21"));
        assert_eq!(state["ports"], json!(128));
        assert_eq!(state["name"], json!("dc1"));
    }

    #[test]
    fn non_object_configuration_is_rejected() {
        assert!(ResourceData::from_value(schema(), json!([1, 2])).is_err());
        assert!(ResourceData::from_value(schema(), Value::Null).is_ok());
    }

    #[test]
    fn invalid_configured_value() {
        let d = data(json!({"ports": "lots"}));
        assert!(matches!(
            d.get_int("ports"),
            Err(ProviderError::InvalidValue { .. })
        ));
    }
}
