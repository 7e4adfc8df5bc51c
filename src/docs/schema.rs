//! Property extraction from JSON Schema documents.

use serde_json::Value;

/// One documented property of a configuration section.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    /// The property name as defined in the schema.
    pub name: String,
    /// The JSON Schema type ("string", "number", "boolean").
    pub type_name: String,
    /// Human-readable description of the property.
    pub description: String,
    /// String rendering of the default value, or "-" when absent.
    pub default_value: String,
}

/// Extracts property information from a JSON Schema document.
///
/// Walks the "properties" object and turns each entry into a
/// [`PropertyInfo`] suitable for table rendering. Returns an empty
/// vector for schemas without properties.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use odymenu::docs::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "settle_delay_ms": {
///             "type": "integer",
///             "description": "Pause settle delay",
///             "default": 100
///         }
///     }
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "settle_delay_ms");
/// assert_eq!(properties[0].default_value, "100");
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    schema
        .get("properties")
        .and_then(|props| props.as_object())
        .map(build_properties)
        .unwrap_or_default()
}

fn build_properties(props_obj: &serde_json::Map<String, Value>) -> Vec<PropertyInfo> {
    props_obj
        .iter()
        .map(|(name, property)| PropertyInfo {
            name: name.clone(),
            type_name: get_type(property),
            description: get_description(property),
            default_value: get_default_value(property),
        })
        .collect()
}

fn get_type(property: &Value) -> String {
    property
        .get("type")
        .and_then(|type_of| type_of.as_str())
        .unwrap_or("unknown")
        .to_string()
}

fn get_description(property: &Value) -> String {
    property
        .get("description")
        .and_then(|desc| desc.as_str())
        .unwrap_or("No description provided")
        .to_string()
}

fn get_default_value(property: &Value) -> String {
    property
        .get("default")
        .map(|def_val| match def_val {
            Value::String(s) => format!("\"{s}\""),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            _ => def_val.to_string(),
        })
        .unwrap_or("-".to_string())
}
