//! Shotmatch CLI Binary
//!
//! Command-line interface for the shotmatch reconciliation tool.

use clap::Parser;
use shotmatch::cli::{Cli, RunContext};
use shotmatch::config::ConfigLoader;
use shotmatch::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Shotmatch CLI starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing workspace: {}", e);
            eprintln!("{}", shotmatch::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", shotmatch::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(if file.is_absolute() {
            file.clone()
        } else {
            cli.workspace.join(file)
        });
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_logging_config_default() {
        let temp = tempfile::tempdir().unwrap();
        let ws = temp.path().to_string_lossy();
        let cli = Cli::try_parse_from(["shotmatch", "--workspace", ws.as_ref(), "show"]).unwrap();
        let config = build_logging_config(&cli);
        assert!(config.enabled, "default should have logging enabled");
        assert_eq!(config.output, "stderr", "default output should be stderr");
        assert_eq!(config.level, "info", "default level should be info");
    }

    #[test]
    fn test_build_logging_config_quiet() {
        let cli = Cli::try_parse_from(["shotmatch", "--quiet", "show"]).unwrap();
        let config = build_logging_config(&cli);
        assert!(!config.enabled, "quiet should disable logging");
    }

    #[test]
    fn test_build_logging_config_explicit_level_wins_over_verbose() {
        let temp = tempfile::tempdir().unwrap();
        let ws = temp.path().to_string_lossy();
        let cli = Cli::try_parse_from([
            "shotmatch",
            "--workspace",
            ws.as_ref(),
            "--verbose",
            "--log-level",
            "warn",
            "--log-output",
            "file",
            "--log-file",
            "logs/run.log",
            "show",
        ])
        .unwrap();
        let config = build_logging_config(&cli);
        assert_eq!(config.level, "warn");
        assert_eq!(config.output, "file");
        assert_eq!(config.file, Some(temp.path().join("logs/run.log")));
    }

    #[test]
    fn test_parse_process_flags() {
        let cli = Cli::try_parse_from([
            "shotmatch",
            "process",
            "--no-thumbnails",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            shotmatch::cli::Commands::Process {
                no_thumbnails,
                video,
                format,
            } => {
                assert!(no_thumbnails);
                assert!(video.is_none());
                assert_eq!(format, "json");
            }
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_import_requires_both_inputs() {
        assert!(Cli::try_parse_from(["shotmatch", "import", "--xytech", "x.txt"]).is_err());
    }
}
