use super::{PropertyInfo, SectionInfo, extract_property_info, generator::DocsError};

const TABLE_HEADER: &str =
    "| Property | Type | Description | Default |\n|----------|------|-------------|---------|";

/// Generates a markdown table documenting configuration properties.
///
/// Creates a formatted table with property names, types, descriptions,
/// and default values for display in documentation.
pub fn generate_property_table(config_path: &str, properties: &[PropertyInfo]) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let property_rows = properties
        .iter()
        .map(|prop| {
            format!(
                "| `{}` | `{}` | {} | `{}` |",
                prop.name, prop.type_name, prop.description, prop.default_value
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "**Config path:** `{}`\n\n{}\n{}\n",
        config_path, TABLE_HEADER, property_rows
    )
}

/// Generates a complete markdown reference page for a config section.
///
/// # Errors
///
/// Returns `DocsError::SchemaConversion` if schema serialization fails.
pub fn generate_section_page(section: &SectionInfo) -> Result<String, DocsError> {
    let schema_value =
        serde_json::to_value((section.schema_fn)()).map_err(|e| DocsError::SchemaConversion {
            section: section.name.clone(),
            details: e.to_string(),
        })?;

    let properties = extract_property_info(&schema_value);

    Ok(format!(
        "# {} Section\n\n{}\n\n{}",
        title_case(&section.name),
        section.description,
        generate_property_table(&format!("[{}]", section.name), &properties)
    ))
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars.as_str().chars()).collect())
        .unwrap_or_default()
}
