//! Configuration diagnostics.
//!
//! Validation never stops at the first problem: every check pushes a
//! [`Diagnostic`] so the practitioner sees all of them in one run. Errors
//! block configuration; warnings (deprecations) are passed back to the host.

use crate::schema::{Schema, SchemaMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ─── Shared types ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: Option<String>,
    /// Dotted path of the offending field, e.g. `disk.0.size`.
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }

    pub fn warning(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(summary)
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "Error: {}", self.summary)?,
            Severity::Warning => write!(f, "Warning: {}", self.summary)?,
        }
        if let Some(ref detail) = self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

pub fn has_errors(diags: &[Diagnostic]) -> bool {
    diags.iter().any(Diagnostic::is_error)
}

// ─── Validation ─────────────────────────────────────────────────────────────

/// Check a raw configuration block against its schema.
pub fn validate_config(fields: &SchemaMap, raw: &Map<String, Value>) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    validate_block(fields, raw, "", &mut diags);
    diags
}

fn validate_block(
    fields: &SchemaMap,
    raw: &Map<String, Value>,
    prefix: &str,
    diags: &mut Vec<Diagnostic>,
) {
    for key in raw.keys() {
        if !fields.contains_key(key) {
            diags.push(
                Diagnostic::error(format!("invalid or unknown key: {prefix}{key}"))
                    .with_attribute(format!("{prefix}{key}")),
            );
        }
    }

    for (key, field) in fields {
        let path = format!("{prefix}{key}");
        match raw.get(key).filter(|v| !v.is_null()) {
            Some(value) => validate_set_field(fields, raw, field, value, &path, diags),
            None => validate_unset_field(field, &path, diags),
        }
    }
}

fn validate_set_field(
    fields: &SchemaMap,
    raw: &Map<String, Value>,
    field: &Schema,
    value: &Value,
    path: &str,
    diags: &mut Vec<Diagnostic>,
) {
    if field.is_computed_only() {
        diags.push(
            Diagnostic::error(format!("\"{path}\": this field cannot be set"))
                .with_attribute(path),
        );
        return;
    }

    if let Some(ref message) = field.deprecated {
        log::warn!("deprecated field {path} is set");
        diags.push(
            Diagnostic::warning(format!("\"{path}\": [DEPRECATED] {message}"))
                .with_attribute(path),
        );
    }

    for other in &field.conflicts_with {
        if fields.contains_key(other) && raw.get(other).is_some_and(|v| !v.is_null()) {
            diags.push(
                Diagnostic::error(format!("\"{path}\": conflicts with {other}"))
                    .with_attribute(path),
            );
        }
    }

    if let Err(message) = field.value_type.coerce(value) {
        diags.push(
            Diagnostic::error(format!("\"{path}\": {message}")).with_attribute(path),
        );
        return;
    }

    if let Value::Array(items) = value {
        if let Some(min) = field.min_items.filter(|min| items.len() < *min) {
            diags.push(
                Diagnostic::error(format!(
                    "\"{path}\": attribute supports {min} item minimum, config has {} declared",
                    items.len()
                ))
                .with_attribute(path),
            );
        }
        if let Some(max) = field.max_items.filter(|max| items.len() > *max) {
            diags.push(
                Diagnostic::error(format!(
                    "\"{path}\": attribute supports {max} item maximum, config has {} declared",
                    items.len()
                ))
                .with_attribute(path),
            );
        }
        if let Some(block) = field.block() {
            for (i, item) in items.iter().enumerate() {
                if let Value::Object(nested) = item {
                    validate_block(block, nested, &format!("{path}.{i}."), diags);
                }
            }
        }
    }
}

fn validate_unset_field(field: &Schema, path: &str, diags: &mut Vec<Diagnostic>) {
    match field.resolve_default() {
        Some(value) => {
            if let Err(message) = field.value_type.coerce(&value) {
                let mut diag = Diagnostic::error(format!("\"{path}\": {message}")).with_attribute(path);
                if let Some(crate::schema::DefaultFunc::Env { ref var, .. }) = field.default_func {
                    diag = diag.with_detail(format!("value taken from environment variable {var}"));
                }
                diags.push(diag);
            }
        }
        None if field.required => diags.push(
            Diagnostic::error(format!("\"{path}\": required field is not set"))
                .with_attribute(path),
        ),
        None => {}
    }
}
