//! Field schemas for provider, resource and data-source blocks.
//!
//! A [`SchemaMap`] describes one configuration block: every field's value
//! type, whether the practitioner must, may, or cannot set it, where its
//! default comes from, and its deprecation status.

use crate::error::{ProviderError, ProviderResult};

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Field name → field schema, ordered for stable output.
pub type SchemaMap = BTreeMap<String, Schema>;

// ─── Value types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "elem", rename_all = "snake_case")]
pub enum ValueType {
    String,
    Bool,
    Int,
    Float,
    List(Box<Elem>),
    Set(Box<Elem>),
    Map(Box<Elem>),
}

/// Element of a collection: a scalar or a nested block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Elem {
    Value(ValueType),
    Block(SchemaMap),
}

impl ValueType {
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Set(_) | Self::Map(_))
    }

    /// Value read back for a field nobody set.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::String => Value::String(String::new()),
            Self::Bool => Value::Bool(false),
            Self::Int => Value::from(0),
            Self::Float => Value::from(0.0),
            Self::List(_) | Self::Set(_) => Value::Array(Vec::new()),
            Self::Map(_) => Value::Object(Map::new()),
        }
    }

    /// Convert `value` to this type, accepting the string forms that
    /// environment variables and loosely typed configuration produce.
    pub fn coerce(&self, value: &Value) -> Result<Value, String> {
        match (self, value) {
            (Self::String, Value::String(_)) => Ok(value.clone()),
            (Self::String, Value::Bool(b)) => Ok(Value::String(b.to_string())),
            (Self::String, Value::Number(n)) => Ok(Value::String(n.to_string())),

            (Self::Bool, Value::Bool(_)) => Ok(value.clone()),
            (Self::Bool, Value::String(s)) => parse_bool(s)
                .map(Value::Bool)
                .ok_or_else(|| format!("cannot parse '{s}' as bool")),

            (Self::Int, Value::Number(n)) => n
                .as_i64()
                .map(Value::from)
                .ok_or_else(|| format!("'{n}' is not an integer")),
            (Self::Int, Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| format!("cannot parse '{s}' as int")),

            (Self::Float, Value::Number(n)) => n
                .as_f64()
                .map(Value::from)
                .ok_or_else(|| format!("'{n}' is not a number")),
            (Self::Float, Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(Value::from)
                .map_err(|_| format!("cannot parse '{s}' as float")),

            (Self::List(elem) | Self::Set(elem), Value::Array(items)) => items
                .iter()
                .map(|item| elem.coerce(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),

            (Self::Map(elem), Value::Object(entries)) => entries
                .iter()
                .map(|(k, v)| elem.coerce(v).map(|v| (k.clone(), v)))
                .collect::<Result<Map<_, _>, _>>()
                .map(Value::Object),

            (_, other) => Err(format!("expected {}, got {}", self.name(), json_kind(other))),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
        }
    }
}

impl Elem {
    fn coerce(&self, value: &Value) -> Result<Value, String> {
        match (self, value) {
            (Self::Value(ty), v) => ty.coerce(v),
            (Self::Block(_), Value::Object(_)) => Ok(value.clone()),
            (Self::Block(_), other) => Err(format!("expected block, got {}", json_kind(other))),
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Boolean spellings accepted from strings (same set as Go's `strconv.ParseBool`).
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

// ─── Defaults ───────────────────────────────────────────────────────────────

/// Default computed at read time rather than declared statically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefaultFunc {
    /// The environment variable when set and non-empty, else `fallback`.
    Env { var: String, fallback: Option<Value> },
}

impl DefaultFunc {
    pub fn resolve(&self) -> Option<Value> {
        match self {
            Self::Env { var, fallback } => match std::env::var(var) {
                Ok(v) if !v.is_empty() => Some(Value::String(v)),
                _ => fallback.clone(),
            },
        }
    }
}

// ─── Field schema ───────────────────────────────────────────────────────────

fn is_false(b: &bool) -> bool {
    !*b
}

/// Schema of a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub computed: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub force_new: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_func: Option<DefaultFunc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts_with: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl Schema {
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: false,
            optional: false,
            computed: false,
            force_new: false,
            sensitive: false,
            default: None,
            default_func: None,
            description: None,
            deprecated: None,
            conflicts_with: Vec::new(),
            min_items: None,
            max_items: None,
        }
    }

    pub fn string() -> Self {
        Self::new(ValueType::String)
    }

    pub fn bool() -> Self {
        Self::new(ValueType::Bool)
    }

    pub fn int() -> Self {
        Self::new(ValueType::Int)
    }

    pub fn float() -> Self {
        Self::new(ValueType::Float)
    }

    pub fn list(elem: ValueType) -> Self {
        Self::new(ValueType::List(Box::new(Elem::Value(elem))))
    }

    pub fn set(elem: ValueType) -> Self {
        Self::new(ValueType::Set(Box::new(Elem::Value(elem))))
    }

    pub fn map(elem: ValueType) -> Self {
        Self::new(ValueType::Map(Box::new(Elem::Value(elem))))
    }

    /// Repeatable nested block.
    pub fn block_list(fields: SchemaMap) -> Self {
        Self::new(ValueType::List(Box::new(Elem::Block(fields))))
    }

    // ── Builders ────────────────────────────────────────────────

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Default to environment variable `var`, with no fallback.
    pub fn env_default(self, var: &str) -> Self {
        self.env_default_func(var, None)
    }

    /// Default to environment variable `var`, else `fallback`.
    pub fn env_default_or(self, var: &str, fallback: impl Into<Value>) -> Self {
        self.env_default_func(var, Some(fallback.into()))
    }

    fn env_default_func(mut self, var: &str, fallback: Option<Value>) -> Self {
        self.default_func = Some(DefaultFunc::Env {
            var: var.to_string(),
            fallback,
        });
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }

    pub fn conflicts_with(mut self, keys: &[&str]) -> Self {
        self.conflicts_with = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn min_items(mut self, n: usize) -> Self {
        self.min_items = Some(n);
        self
    }

    pub fn max_items(mut self, n: usize) -> Self {
        self.max_items = Some(n);
        self
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Set only by the provider, never by configuration.
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }

    /// Default applied when configuration leaves the field unset.
    pub fn resolve_default(&self) -> Option<Value> {
        self.default_func
            .as_ref()
            .and_then(DefaultFunc::resolve)
            .or_else(|| self.default.clone())
    }

    /// Nested block fields, for `block_list` schemas.
    pub fn block(&self) -> Option<&SchemaMap> {
        match &self.value_type {
            ValueType::List(elem) | ValueType::Set(elem) => match elem.as_ref() {
                Elem::Block(fields) => Some(fields),
                Elem::Value(_) => None,
            },
            _ => None,
        }
    }
}

// ─── Definition checks ──────────────────────────────────────────────────────

/// Check a block definition for contradictions.
pub fn internal_validate(fields: &SchemaMap) -> ProviderResult<()> {
    let mut problems = Vec::new();
    collect_problems(fields, "", &mut problems);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ProviderError::InvalidSchema(problems.join("; ")))
    }
}

fn collect_problems(fields: &SchemaMap, prefix: &str, problems: &mut Vec<String>) {
    for (key, field) in fields {
        let path = format!("{prefix}{key}");

        if field.required && field.optional {
            problems.push(format!("{path}: optional and required cannot both be set"));
        }
        if field.required && field.computed {
            problems.push(format!("{path}: cannot be both required and computed"));
        }
        if !field.required && !field.optional && !field.computed {
            problems.push(format!("{path}: one of optional, required, or computed must be set"));
        }
        if field.required && field.default.is_some() {
            problems.push(format!("{path}: default must be nil if required"));
        }
        if field.is_computed_only() {
            if field.default.is_some() || field.default_func.is_some() {
                problems.push(format!("{path}: default cannot be set with computed-only"));
            }
            if field.force_new {
                problems.push(format!("{path}: force_new cannot be set with computed-only"));
            }
        }
        if field.deprecated.is_some() && field.required {
            problems.push(format!("{path}: deprecated fields must be optional"));
        }
        for target in &field.conflicts_with {
            if !fields.contains_key(target) {
                problems.push(format!("{path}: conflicts_with references unknown field {target}"));
            }
            if field.required {
                problems.push(format!("{path}: required fields cannot have conflicts_with"));
            }
        }
        if (field.min_items.is_some() || field.max_items.is_some())
            && !matches!(field.value_type, ValueType::List(_) | ValueType::Set(_))
        {
            problems.push(format!("{path}: min_items/max_items only apply to lists and sets"));
        }
        if let Some(block) = field.block() {
            collect_problems(block, &format!("{path}."), problems);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(entries: Vec<(&str, Schema)>) -> SchemaMap {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn bool_coercion_accepts_go_spellings() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(ValueType::Bool.coerce(&json!(s)).unwrap(), json!(true));
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(ValueType::Bool.coerce(&json!(s)).unwrap(), json!(false));
        }
        assert!(ValueType::Bool.coerce(&json!("yes")).is_err());
    }

    #[test]
    fn int_coercion() {
        assert_eq!(ValueType::Int.coerce(&json!("42")).unwrap(), json!(42));
        assert_eq!(ValueType::Int.coerce(&json!(7)).unwrap(), json!(7));
        assert!(ValueType::Int.coerce(&json!(1.5)).is_err());
        assert!(ValueType::Int.coerce(&json!([1])).is_err());
    }

    #[test]
    fn list_coercion_checks_every_element() {
        let ty = Schema::list(ValueType::Int).value_type;
        assert_eq!(ty.coerce(&json!(["1", 2])).unwrap(), json!([1, 2]));
        assert!(ty.coerce(&json!(["x"])).is_err());
    }

    #[test]
    fn zero_values() {
        assert_eq!(ValueType::String.zero_value(), json!(""));
        assert_eq!(ValueType::Bool.zero_value(), json!(false));
        assert_eq!(Schema::map(ValueType::String).value_type.zero_value(), json!({}));
    }

    #[test]
    fn static_default_is_used_without_default_func() {
        let s = Schema::int().optional().default(128);
        assert_eq!(s.resolve_default(), Some(json!(128)));
    }

    #[test]
    fn well_formed_block_passes() {
        let block = fields(vec![
            ("name", Schema::string().required().force_new()),
            ("mtu", Schema::int().optional().default(1500)),
            ("key", Schema::string().computed()),
            ("old", Schema::string().optional().deprecated("use name")),
            (
                "disk",
                Schema::block_list(fields(vec![("size", Schema::int().required())]))
                    .required()
                    .min_items(1),
            ),
        ]);
        internal_validate(&block).unwrap();
    }

    #[test]
    fn contradictions_are_reported_with_paths() {
        let block = fields(vec![
            ("both", Schema::string().required().optional()),
            ("none", Schema::string()),
            ("req_default", Schema::string().required().default("x")),
            ("dep", Schema::string().required().deprecated("gone")),
            ("conflict", Schema::string().optional().conflicts_with(&["missing"])),
            ("count", Schema::int().optional().max_items(2)),
            (
                "disk",
                Schema::block_list(fields(vec![("size", Schema::int())])).optional(),
            ),
        ]);
        let msg = internal_validate(&block).unwrap_err().to_string();
        assert!(msg.contains("both: optional and required"));
        assert!(msg.contains("none: one of optional, required, or computed"));
        assert!(msg.contains("req_default: default must be nil"));
        assert!(msg.contains("dep: deprecated fields must be optional"));
        assert!(msg.contains("unknown field missing"));
        assert!(msg.contains("count: min_items/max_items"));
        assert!(msg.contains("disk.size: one of optional"));
    }

    #[test]
    fn computed_only_cannot_force_new() {
        let block = fields(vec![("id", Schema::string().computed().force_new())]);
        assert!(internal_validate(&block).is_err());
    }

    #[test]
    fn schema_serializes_without_empty_flags() {
        let s = Schema::string()
            .required()
            .env_default("VSPHERE_USER")
            .description("user");
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["type"], json!({"kind": "string"}));
        assert_eq!(v["required"], json!(true));
        assert!(v.get("optional").is_none());
        assert_eq!(
            v["default_func"],
            json!({"kind": "env", "var": "VSPHERE_USER", "fallback": null})
        );
    }
}
