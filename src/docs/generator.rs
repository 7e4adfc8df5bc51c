use std::{fs, path::Path};

use thiserror::Error;

use super::{SectionInfo, generate_section_page, get_all_sections, get_section_by_name};

/// Generates markdown reference pages for configuration sections.
pub struct DocsGenerator {
    output_dir: String,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output_dir: "docs/config".to_string(),
        }
    }
}

impl DocsGenerator {
    /// Creates a new documentation generator with default output directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom output directory for generated documentation.
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Generates documentation for all configuration sections.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if the output directory cannot be
    /// created or a page cannot be written.
    pub fn generate_all(&self) -> Result<(), DocsError> {
        fs::create_dir_all(&self.output_dir).map_err(|err| {
            DocsError::FileWrite(format!("Failed to create output directory: {err}"))
        })?;

        let sections = get_all_sections();

        for section in &sections {
            self.generate_single_section(section)?;
        }

        println!("Generated documentation for {} sections", sections.len());
        Ok(())
    }

    /// Generates documentation for a specific section by name.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::InvalidSectionName` if the section doesn't exist.
    pub fn generate_section_by_name(&self, section_name: &str) -> Result<(), DocsError> {
        let section = get_section_by_name(section_name)
            .ok_or_else(|| DocsError::InvalidSectionName(section_name.to_string()))?;

        self.generate_single_section(&section)
    }

    /// Returns the names of all documentable sections.
    pub fn list_sections(&self) -> Vec<String> {
        get_all_sections()
            .into_iter()
            .map(|section| section.name)
            .collect()
    }

    fn generate_single_section(&self, section: &SectionInfo) -> Result<(), DocsError> {
        let content = generate_section_page(section)?;
        let filename = format!("{}.md", section.name);
        let filepath = Path::new(&self.output_dir).join(filename);

        fs::write(&filepath, content).map_err(|err| DocsError::FileWrite(err.to_string()))?;

        println!("Generated {}", filepath.display());
        Ok(())
    }
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// A page or directory could not be written.
    #[error("{0}")]
    FileWrite(String),

    /// The requested section is not part of the configuration.
    #[error("Unknown configuration section '{0}'")]
    InvalidSectionName(String),

    /// A schema could not be serialized to JSON.
    #[error("Failed to convert schema for section '{section}': {details}")]
    SchemaConversion {
        /// The section whose schema failed.
        section: String,
        /// Serialization failure details.
        details: String,
    },
}
