//! CMS schema definitions for blocks and documents.
//!
//! Schemas are declarative: the authoring tool consumes them (served as JSON
//! by `GET /api/schema`), and the server uses them only to validate snapshots
//! and format preview labels. Renderers never consult them.

pub mod blocks;
pub mod common;
pub mod documents;
mod field;
pub mod preview;
pub mod slug;

use serde::Serialize;
use serde_json::Value;

use crate::content::BlockRegistry;

pub use field::{FieldDefinition, FieldKind, FieldOptions, ListOption, Rule, RuleKind, Severity};
pub use preview::{PreviewConfig, PreviewLabel, Selection};
pub use slug::create_slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Object,
    Document,
}

/// Tab grouping fields in the document editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldGroup {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
}

/// Schema of one block or document type.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaType {
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SchemaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FieldGroup>,
    pub fields: Vec<FieldDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewConfig>,
}

/// One problem found while validating a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path to the offending field, e.g. `pageBuilder[0].title`.
    pub path: String,
    pub severity: Severity,
    pub message: String,
}

impl SchemaType {
    fn with_kind(name: &str, title: &str, kind: SchemaKind) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            kind,
            description: None,
            icon: None,
            groups: Vec::new(),
            fields: Vec::new(),
            preview: None,
        }
    }

    pub fn object(name: &str, title: &str) -> Self {
        Self::with_kind(name, title, SchemaKind::Object)
    }

    pub fn document(name: &str, title: &str) -> Self {
        Self::with_kind(name, title, SchemaKind::Document)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn group(mut self, name: &str, title: &str, default: bool) -> Self {
        self.groups.push(FieldGroup {
            name: name.to_string(),
            title: title.to_string(),
            default,
        });
        self
    }

    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn preview(mut self, preview: PreviewConfig) -> Self {
        self.preview = Some(preview);
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a value against this schema's own fields.
    ///
    /// Recurses into inline objects and arrays of inline objects. Named
    /// member types are not resolved; use [`SchemaCatalog::validate`] for that.
    pub fn validate(&self, value: &Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        validate_fields(&self.fields, value, "", &|_| None, &mut issues);
        issues
    }

    /// List-view label for a value of this type.
    pub fn preview_label(&self, value: &Value) -> PreviewLabel {
        match &self.preview {
            Some(preview) => preview.label(value),
            None => PreviewConfig::new(&[("title", "title")]).label(value),
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}.{child}")
    }
}

fn validate_fields<'s>(
    fields: &[FieldDefinition],
    value: &Value,
    path: &str,
    resolve: &dyn Fn(&str) -> Option<&'s SchemaType>,
    issues: &mut Vec<ValidationIssue>,
) {
    for field in fields {
        let field_value = value.get(&field.name);
        let field_path = join_path(path, &field.name);
        for rule in &field.rules {
            if rule.violated_by(field_value) {
                issues.push(ValidationIssue {
                    path: field_path.clone(),
                    severity: rule.severity,
                    message: rule.message.clone(),
                });
            }
        }
        if let Some(field_value) = field_value {
            validate_nested(field, field_value, &field_path, resolve, issues);
        }
    }
}

fn validate_nested<'s>(
    field: &FieldDefinition,
    value: &Value,
    path: &str,
    resolve: &dyn Fn(&str) -> Option<&'s SchemaType>,
    issues: &mut Vec<ValidationIssue>,
) {
    match (&field.kind, value) {
        (FieldKind::Object, Value::Object(_)) => {
            validate_fields(&field.fields, value, path, resolve, issues);
        }
        (FieldKind::Named(name), Value::Object(_)) => {
            if let Some(schema) = resolve(name) {
                validate_fields(&schema.fields, value, path, resolve, issues);
            }
        }
        (FieldKind::Array, Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                if let Some(member) = array_member(&field.of, item) {
                    validate_nested(member, item, &item_path, resolve, issues);
                }
            }
        }
        _ => {}
    }
}

/// Member definition matching an array item's `_type`, or the only member.
fn array_member<'f>(members: &'f [FieldDefinition], item: &Value) -> Option<&'f FieldDefinition> {
    let item_type = item.get("_type").and_then(|t| t.as_str());
    match item_type {
        Some(t) => members
            .iter()
            .find(|m| m.name == t || m.kind.type_name() == t)
            .or_else(|| (members.len() == 1).then(|| &members[0])),
        None => (members.len() == 1).then(|| &members[0]),
    }
}

/// Every schema the site knows: registered blocks, shared object types and
/// documents.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaCatalog {
    pub blocks: Vec<SchemaType>,
    pub objects: Vec<SchemaType>,
    pub documents: Vec<SchemaType>,
}

impl SchemaCatalog {
    pub fn new(registry: &BlockRegistry) -> Self {
        Self {
            blocks: registry.schema_list().into_iter().cloned().collect(),
            objects: common::object_types(),
            documents: documents::all(registry.tags()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SchemaType> {
        self.blocks
            .iter()
            .chain(&self.objects)
            .chain(&self.documents)
            .find(|s| s.name == name)
    }

    /// Validate a value against a named schema, resolving named member types.
    pub fn validate(&self, name: &str, value: &Value) -> Option<Vec<ValidationIssue>> {
        let schema = self.get(name)?;
        let mut issues = Vec::new();
        validate_fields(&schema.fields, value, "", &|n| self.get(n), &mut issues);
        Some(issues)
    }

    /// Validate a document against the schema named by its `_type`.
    pub fn validate_document(&self, value: &Value) -> Option<Vec<ValidationIssue>> {
        let doc_type = value.get("_type")?.as_str()?;
        self.validate(doc_type, value)
    }

    pub fn preview(&self, name: &str, value: &Value) -> Option<PreviewLabel> {
        self.get(name).map(|s| s.preview_label(value))
    }
}
