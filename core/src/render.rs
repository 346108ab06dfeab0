#![deny(missing_docs)]

//! # Display Rendering
//!
//! Pure formatting over document snapshots. Every function here is total:
//! partial input degrades to a fallback, never a failure. Rendering is a
//! function from snapshot to output, recomputed on every state change.

use crate::document::{HttpMethod, Info, Operation, ParamLocation, Parameter, Response, Schema};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::Write;

/// Depth at which [`render_model`] stops descending into nested schemas.
///
/// Schema nodes may reference each other, so deep nests are truncated
/// rather than followed indefinitely.
pub const MAX_RENDER_DEPTH: usize = 8;

/// Title shown when the document declares none.
const FALLBACK_TITLE: &str = "API Documentation";

/// Type shown when neither `type` nor `schema.type` is declared.
const FALLBACK_TYPE: &str = "object";

/// Description placeholder for parameters without one.
const MISSING_DESCRIPTION: &str = "-";

/// One row of the parameter table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRow {
    /// Parameter name.
    pub name: String,
    /// Location the parameter is supplied in.
    pub location: ParamLocation,
    /// Resolved type: own `type`, else `schema.type`, else `"object"`.
    pub type_name: String,
    /// Required indicator.
    pub required: bool,
    /// Description, `"-"` when absent.
    pub description: String,
}

/// Produces one row per parameter, in input order. No dedup, no sort.
pub fn parameter_rows(parameters: &[Parameter]) -> Vec<ParameterRow> {
    parameters
        .iter()
        .map(|param| ParameterRow {
            name: param.name.clone(),
            location: param.location,
            type_name: param
                .type_name
                .as_deref()
                .or_else(|| param.schema.as_ref().and_then(Schema::type_name))
                .unwrap_or(FALLBACK_TYPE)
                .to_string(),
            required: param.required,
            description: param
                .description
                .clone()
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        })
        .collect()
}

/// Three-way classification of a response status code.
///
/// Fixed rule keyed on the first digit: `2xx` is success, `4xx` is a
/// caller issue, everything else (including `3xx`, `5xx`, and non-numeric
/// codes) is other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Leading `2`.
    Success,
    /// Leading `4`.
    ClientIssue,
    /// Anything else.
    Other,
}

impl StatusClass {
    /// Short lowercase label for display.
    pub fn label(self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::ClientIssue => "client",
            StatusClass::Other => "other",
        }
    }
}

/// Classifies a status-code string by its first character.
pub fn classify_status(code: &str) -> StatusClass {
    match code.chars().next() {
        Some('2') => StatusClass::Success,
        Some('4') => StatusClass::ClientIssue,
        _ => StatusClass::Other,
    }
}

/// One entry of the response list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEntry {
    /// Status-code string as written in the document.
    pub code: String,
    /// Display classification.
    pub class: StatusClass,
    /// Description, empty when absent.
    pub description: String,
    /// Pretty-printed schema dump, when a schema is declared.
    pub schema_dump: Option<String>,
}

/// Produces one entry per declared response, in document order.
pub fn response_entries(responses: &IndexMap<String, Response>) -> Vec<ResponseEntry> {
    responses
        .iter()
        .map(|(code, response)| ResponseEntry {
            code: code.clone(),
            class: classify_status(code),
            description: response.description.clone().unwrap_or_default(),
            schema_dump: response.schema.as_ref().map(render_model),
        })
        .collect()
}

/// Pretty-prints a schema for human reading.
///
/// JSON-shaped, two-space indent. Containers nested past
/// [`MAX_RENDER_DEPTH`] are truncated to `{...}` / `[...]` instead of
/// being descended into.
pub fn render_model(schema: &Schema) -> String {
    let mut out = String::new();
    write_value(&mut out, schema.as_value(), 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
            } else if depth >= MAX_RENDER_DEPTH {
                out.push_str("{...}");
            } else {
                out.push_str("{\n");
                let last = map.len() - 1;
                for (i, (key, child)) in map.iter().enumerate() {
                    let _ = write!(out, "{}{:?}: ", "  ".repeat(depth + 1), key);
                    write_value(out, child, depth + 1);
                    if i != last {
                        out.push(',');
                    }
                    out.push('\n');
                }
                let _ = write!(out, "{}}}", "  ".repeat(depth));
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
            } else if depth >= MAX_RENDER_DEPTH {
                out.push_str("[...]");
            } else {
                out.push_str("[\n");
                let last = items.len() - 1;
                for (i, child) in items.iter().enumerate() {
                    out.push_str(&"  ".repeat(depth + 1));
                    write_value(out, child, depth + 1);
                    if i != last {
                        out.push(',');
                    }
                    out.push('\n');
                }
                let _ = write!(out, "{}]", "  ".repeat(depth));
            }
        }
        scalar => {
            let _ = write!(out, "{}", scalar);
        }
    }
}

/// Display accent for an HTTP method badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodAccent {
    /// GET.
    Primary,
    /// POST.
    Success,
    /// PUT.
    Warning,
    /// DELETE.
    Danger,
    /// Everything else.
    Neutral,
}

/// Maps a method to its badge accent.
pub fn method_accent(method: HttpMethod) -> MethodAccent {
    match method {
        HttpMethod::Get => MethodAccent::Primary,
        HttpMethod::Post => MethodAccent::Success,
        HttpMethod::Put => MethodAccent::Warning,
        HttpMethod::Delete => MethodAccent::Danger,
        _ => MethodAccent::Neutral,
    }
}

/// Document title with a fallback for untitled documents.
pub fn document_title(info: &Info) -> &str {
    info.title.as_deref().unwrap_or(FALLBACK_TITLE)
}

/// The operation's declared body parameter, if any.
///
/// Feeds the request-body schema panel. Note that the composer's body
/// editor is governed by the method, not by this declaration.
pub fn body_parameter(operation: &Operation) -> Option<&Parameter> {
    operation
        .parameters
        .iter()
        .find(|param| param.location == ParamLocation::Body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parameter_rows_empty_input() {
        assert!(parameter_rows(&[]).is_empty());
    }

    #[test]
    fn test_parameter_row_type_resolution() {
        let parameters: Vec<Parameter> = serde_json::from_value(json!([
            {"name": "id", "in": "path", "required": true, "type": "string"},
            {"name": "payload", "in": "body", "schema": {"type": "array"}},
            {"name": "blob", "in": "body"}
        ]))
        .unwrap();

        let rows = parameter_rows(&parameters);
        assert_eq!(rows[0].type_name, "string");
        assert_eq!(rows[1].type_name, "array");
        assert_eq!(rows[2].type_name, "object");
        assert!(rows[0].required);
        assert!(!rows[1].required);
        assert_eq!(rows[2].description, "-");
    }

    #[test]
    fn test_classify_status_buckets() {
        assert_eq!(classify_status("200"), StatusClass::Success);
        assert_eq!(classify_status("201"), StatusClass::Success);
        assert_eq!(classify_status("404"), StatusClass::ClientIssue);
        assert_eq!(classify_status("301"), StatusClass::Other);
        assert_eq!(classify_status("500"), StatusClass::Other);
        assert_eq!(classify_status("default"), StatusClass::Other);
        assert_eq!(classify_status(""), StatusClass::Other);
    }

    #[test]
    fn test_response_entries_keep_order_and_schema() {
        let responses: IndexMap<String, Response> = serde_json::from_value(json!({
            "404": {"description": "missing"},
            "200": {"description": "ok", "schema": {"type": "object"}}
        }))
        .unwrap();

        let entries = response_entries(&responses);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].code, "404");
        assert!(entries[0].schema_dump.is_none());
        assert_eq!(entries[1].class, StatusClass::Success);
        assert!(entries[1].schema_dump.as_deref().unwrap().contains("object"));
    }

    #[test]
    fn test_render_model_shapes() {
        let schema = Schema(json!({"type": "object", "properties": {"tags": ["a", 1, null]}}));
        let dump = render_model(&schema);
        assert_eq!(
            dump,
            "{\n  \"type\": \"object\",\n  \"properties\": {\n    \"tags\": [\n      \"a\",\n      1,\n      null\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_render_model_truncates_deep_nesting() {
        let mut value = json!({"leaf": true});
        for _ in 0..(MAX_RENDER_DEPTH + 4) {
            value = json!({"next": value});
        }

        let dump = render_model(&Schema(value));
        assert!(dump.contains("{...}"));
        assert!(!dump.contains("leaf"));
    }

    #[test]
    fn test_method_accents() {
        assert_eq!(method_accent(HttpMethod::Get), MethodAccent::Primary);
        assert_eq!(method_accent(HttpMethod::Post), MethodAccent::Success);
        assert_eq!(method_accent(HttpMethod::Put), MethodAccent::Warning);
        assert_eq!(method_accent(HttpMethod::Delete), MethodAccent::Danger);
        assert_eq!(method_accent(HttpMethod::Patch), MethodAccent::Neutral);
        assert_eq!(method_accent(HttpMethod::Head), MethodAccent::Neutral);
    }

    #[test]
    fn test_document_title_fallback() {
        assert_eq!(document_title(&Info::default()), "API Documentation");
        let info = Info {
            title: Some("Pets".into()),
            ..Info::default()
        };
        assert_eq!(document_title(&info), "Pets");
    }

    #[test]
    fn test_body_parameter_lookup() {
        let operation: Operation = serde_json::from_value(json!({
            "parameters": [
                {"name": "id", "in": "path"},
                {"name": "pet", "in": "body", "schema": {"type": "object"}}
            ]
        }))
        .unwrap();
        assert_eq!(body_parameter(&operation).unwrap().name, "pet");
        assert!(body_parameter(&Operation::default()).is_none());
    }
}
