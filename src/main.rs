//! Odymenu command-line entry point.
//!
//! Routes category/command invocations to the CLI service. Plain CLI
//! commands log to the console only; anything long-running would use
//! the file-backed subscriber instead.

use std::{env, error::Error, fs, process};

use odymenu::{
    cli::{CliService, formatting::format_error},
    config::{Config, ConfigPaths},
    tracing_config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    tracing_config::init()?;
    ensure_directories()?;

    run_cli_command(&args[1..]).await
}

/// Executes CLI commands through the CliService.
///
/// Parses command line arguments and routes them to the appropriate
/// command handler.
///
/// # Arguments
/// * `args` - Command line arguments (excluding program name)
///
/// # Errors
/// Returns error if configuration loading fails.
async fn run_cli_command(args: &[String]) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let cli_service = CliService::new(config);

    let category = args.first().map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    if category == "help" {
        println!("{}", render_help(&cli_service));
        return Ok(());
    }

    match cli_service
        .execute_command(category, command, command_args)
        .await
    {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

fn render_help(cli_service: &CliService) -> String {
    let mut lines = vec![
        "Usage: odymenu <category> <command> [args...]".to_string(),
        String::new(),
        "Available commands:".to_string(),
    ];

    for (category, commands) in cli_service.list_all() {
        lines.push(format!("  {category}"));
        for command in commands {
            lines.push(format!("    {command}"));
        }
    }

    lines.join("\n")
}

fn ensure_directories() -> Result<(), Box<dyn Error>> {
    let config_dir = ConfigPaths::config_dir()?;
    fs::create_dir_all(&config_dir)?;
    Ok(())
}
