//! Documentation generation for configuration schemas.
//!
//! Renders markdown reference pages for the configuration sections from
//! their JSON Schema, so the docs never drift from the structs.

mod generator;
mod markdown;
mod schema;

pub use generator::{DocsError, DocsGenerator};
pub use markdown::{generate_property_table, generate_section_page};
pub use schema::{PropertyInfo, extract_property_info};

use schemars::{Schema, schema_for};

use crate::config::{ApiConfig, GeneralConfig, PlaybackConfig};

/// Schema generator function for one configuration section.
pub type SchemaFn = fn() -> Schema;

/// Metadata for one top-level configuration section.
pub struct SectionInfo {
    /// Section name as it appears in the TOML file (e.g., "playback").
    pub name: String,
    /// Human-readable description of what the section controls.
    pub description: String,
    /// Schema generator for the section's config struct.
    pub schema_fn: SchemaFn,
}

/// Returns metadata for every configuration section.
pub fn get_all_sections() -> Vec<SectionInfo> {
    vec![
        SectionInfo {
            name: "general".to_string(),
            description: "Process-wide settings such as the log level.".to_string(),
            schema_fn: || schema_for!(GeneralConfig),
        },
        SectionInfo {
            name: "api".to_string(),
            description: "Platform REST API endpoint and request timeouts.".to_string(),
            schema_fn: || schema_for!(ApiConfig),
        },
        SectionInfo {
            name: "playback".to_string(),
            description: "Visibility thresholds and timing for the dish video carousel."
                .to_string(),
            schema_fn: || schema_for!(PlaybackConfig),
        },
    ]
}

/// Retrieves one section's metadata by name.
pub fn get_section_by_name(name: &str) -> Option<SectionInfo> {
    get_all_sections()
        .into_iter()
        .find(|section| section.name == name)
}
