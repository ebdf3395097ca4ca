//! Field descriptors and validation rules.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Kind of an authoring field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Text,
    Slug,
    Url,
    Boolean,
    Image,
    RichText,
    Array,
    Object,
    Reference,
    /// A named object type such as `button` or `customUrl`.
    Named(String),
}

impl FieldKind {
    pub fn type_name(&self) -> &str {
        match self {
            FieldKind::String => "string",
            FieldKind::Text => "text",
            FieldKind::Slug => "slug",
            FieldKind::Url => "url",
            FieldKind::Boolean => "boolean",
            FieldKind::Image => "image",
            FieldKind::RichText => "richText",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
            FieldKind::Reference => "reference",
            FieldKind::Named(name) => name,
        }
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.type_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

/// One validation rule with its severity and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub rule: RuleKind,
    pub severity: Severity,
    pub message: String,
}

impl Rule {
    pub fn required() -> Self {
        Self {
            rule: RuleKind::Required,
            severity: Severity::Error,
            message: "Required".to_string(),
        }
    }

    pub fn min_length(n: usize) -> Self {
        Self {
            rule: RuleKind::MinLength(n),
            severity: Severity::Error,
            message: format!("Must be at least {n} characters"),
        }
    }

    pub fn max_length(n: usize) -> Self {
        Self {
            rule: RuleKind::MaxLength(n),
            severity: Severity::Error,
            message: format!("Must be at most {n} characters"),
        }
    }

    pub fn warning(mut self, message: impl Into<String>) -> Self {
        self.severity = Severity::Warning;
        self.message = message.into();
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.severity = Severity::Error;
        self.message = message.into();
        self
    }

    /// Whether `value` violates this rule. Length rules ignore absent values.
    pub fn violated_by(&self, value: Option<&Value>) -> bool {
        match self.rule {
            RuleKind::Required => is_blank(value),
            RuleKind::MinLength(n) => length(value).is_some_and(|len| len < n),
            RuleKind::MaxLength(n) => length(value).is_some_and(|len| len > n),
        }
    }
}

/// Absent, null, blank string, empty array, or a slug with no `current`.
pub(crate) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) if map.get("_type").and_then(|t| t.as_str()) == Some("slug") => {
            is_blank(map.get("current"))
        }
        Some(_) => false,
    }
}

/// Character count for strings, item count for arrays.
fn length(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Choice offered by a string field's drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOption {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<ListOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Field a slug is generated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl FieldOptions {
    fn is_empty(&self) -> bool {
        self == &FieldOptions::default()
    }
}

/// Declarative description of one authoring field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
    #[serde(skip_serializing_if = "FieldOptions::is_empty")]
    pub options: FieldOptions,
    /// Nested fields of an inline object.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
    /// Allowed members of an array.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub of: Vec<FieldDefinition>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            title: None,
            description: None,
            group: None,
            rules: Vec::new(),
            initial_value: None,
            options: FieldOptions::default(),
            fields: Vec::new(),
            of: Vec::new(),
        }
    }

    /// Array member referring to a named type (`{ type: "button" }`).
    pub fn member(type_name: &str) -> Self {
        Self::new(type_name, FieldKind::Named(type_name.to_string()))
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::required())
    }

    pub fn initial_value(mut self, value: Value) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn list(mut self, choices: &[(&str, &str)]) -> Self {
        self.options.list = choices
            .iter()
            .map(|(title, value)| ListOption {
                title: title.to_string(),
                value: value.to_string(),
            })
            .collect();
        self
    }

    pub fn hotspot(mut self) -> Self {
        self.options.hotspot = Some(true);
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.options.rows = Some(rows);
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.options.source = Some(source.into());
        self
    }

    pub fn fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    pub fn of(mut self, members: Vec<FieldDefinition>) -> Self {
        self.of = members;
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| r.rule == RuleKind::Required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_rule() {
        let rule = Rule::required();
        assert!(rule.violated_by(None));
        assert!(rule.violated_by(Some(&Value::Null)));
        assert!(rule.violated_by(Some(&json!("  "))));
        assert!(rule.violated_by(Some(&json!([]))));
        assert!(rule.violated_by(Some(&json!({ "_type": "slug" }))));
        assert!(!rule.violated_by(Some(&json!({ "_type": "slug", "current": "/" }))));
        assert!(!rule.violated_by(Some(&json!(false))));
        assert!(!rule.violated_by(Some(&json!("x"))));
    }

    #[test]
    fn length_rules_count_characters_and_skip_absent() {
        let min = Rule::min_length(3);
        assert!(min.violated_by(Some(&json!("ab"))));
        assert!(!min.violated_by(Some(&json!("äbc"))));
        assert!(!min.violated_by(None));
        let max = Rule::max_length(2);
        assert!(max.violated_by(Some(&json!([1, 2, 3]))));
        assert!(!max.violated_by(Some(&json!(42))));
    }

    #[test]
    fn field_serializes_for_authoring_ui() {
        let field = FieldDefinition::new("style", FieldKind::String)
            .title("Style")
            .list(&[("Simple Center", "simple")])
            .initial_value(json!("gradient"));
        let value = serde_json::to_value(&field).unwrap_or_default();
        assert_eq!(value["type"], "string");
        assert_eq!(value["initialValue"], "gradient");
        assert_eq!(value["options"]["list"][0]["value"], "simple");
        assert!(value.get("rules").is_none());
    }
}
