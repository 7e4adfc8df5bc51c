//! Generates the configuration reference pages from the schema.
use clap::{Parser, Subcommand};
use odymenu::docs::DocsGenerator;

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(about = "Generate configuration reference for odymenu")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate pages for every configuration section
    All {
        /// Output directory for the generated pages
        #[arg(short, long, default_value = "docs/config")]
        output: String,
    },
    /// Generate the page for a single section
    Section {
        /// Section name, e.g. "playback"
        name: String,
        /// Output directory for the generated page
        #[arg(short, long, default_value = "docs/config")]
        output: String,
    },
    /// List documentable sections
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::All { output } => {
            let generator = DocsGenerator::new().with_output_dir(output);
            generator.generate_all()?;
        }
        Commands::Section { name, output } => {
            let generator = DocsGenerator::new().with_output_dir(output);
            generator.generate_section_by_name(&name)?;
        }
        Commands::List => {
            let generator = DocsGenerator::new();
            println!("Available sections:");
            for section in generator.list_sections() {
                println!("  - {section}");
            }
        }
    }

    Ok(())
}
