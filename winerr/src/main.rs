//! winerr - Windows error code lookup
//!
//! Resolves NTSTATUS and Win32 error values to their symbolic names and
//! descriptions, decodes NTSTATUS bit fields, and exports the catalogs as
//! JSON.
//!
//! Exit status: 0 when the query matched, 2 when it did not, 1 on error.

#![forbid(unsafe_code)]

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{Catalogs, Outcome, OutputContext};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use winerr_common::{Family, LogConfig, OutputFormat, Settings, init_logging};

#[derive(Parser)]
#[command(name = "winerr")]
#[command(author, version, about = "Look up NTSTATUS and Win32 error codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Extra TOML definition files to merge into the built-in catalogs
    #[arg(short, long = "definitions", value_name = "FILE", global = true)]
    definitions: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the code with a given value (decimal, 0x-hex or negative)
    Lookup {
        value: String,

        /// Restrict the search to one family (ntstatus or win32)
        #[arg(short, long)]
        family: Option<Family>,
    },

    /// Find the code with an exact symbolic name
    Name { name: String },

    /// List every known code
    List {
        #[arg(short, long)]
        family: Option<Family>,
    },

    /// Split a value into NTSTATUS fields and resolve what it wraps
    Decode { value: String },

    /// Export the catalogs as JSON
    ///
    /// Without --output-dir the document is printed to stdout. With it,
    /// error-codes.json and error-codes.schema.json are written there.
    Export {
        #[arg(short, long)]
        family: Option<Family>,

        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print the JSON Schema of the export document
    Schema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(cli);
    if let Err(err) = &result {
        eprintln!("error: {err:#}");
    }
    ExitCode::from(exit_status(&result))
}

fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Found) => 0,
        Ok(Outcome::NotFound) => 2,
        Err(_) => 1,
    }
}

/// Layers the global flags over the environment-derived settings.
fn apply_flags(cli: &Cli, settings: &mut Settings) {
    if cli.json {
        settings.format.override_cli(OutputFormat::Json);
    }
    if !cli.definitions.is_empty() {
        settings.definitions.override_cli(cli.definitions.clone());
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let mut settings = Settings::from_env()?;
    apply_flags(&cli, &mut settings);

    let mut log_config = LogConfig::from_settings(&settings);
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    init_logging(&log_config)?;
    debug!(
        format = %settings.format.value,
        format_source = %settings.format.describe(),
        definitions = settings.definitions.value.len(),
        "settings loaded"
    );

    let catalogs = Catalogs::load(&settings.definitions.value)?;
    let ctx = OutputContext::new(settings.format.value);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match cli.command {
        Commands::Lookup { value, family } => {
            commands::lookup(&ctx, &mut out, &catalogs, &value, family)?
        }
        Commands::Name { name } => commands::name(&ctx, &mut out, &catalogs, &name)?,
        Commands::List { family } => commands::list(&ctx, &mut out, &catalogs, family)?,
        Commands::Decode { value } => commands::decode(&ctx, &mut out, &catalogs, &value)?,
        Commands::Export { family, output_dir } => commands::export(
            &ctx,
            &mut out,
            &catalogs,
            family,
            output_dir.as_deref(),
        )?,
        Commands::Schema => commands::schema(&ctx, &mut out)?,
    };
    out.flush().context("failed to flush stdout")?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use winerr_common::config::{ConfigSource, Sourced};

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_override_settings() {
        let cli = Cli::try_parse_from(["winerr", "--json", "-d", "site.toml", "lookup", "5"])
            .unwrap();
        let mut settings = Settings::default();
        apply_flags(&cli, &mut settings);

        assert_eq!(settings.format.value, OutputFormat::Json);
        assert_eq!(settings.format.source, ConfigSource::CommandLine);
        assert_eq!(settings.definitions.value, vec![PathBuf::from("site.toml")]);
        assert_eq!(settings.definitions.source, ConfigSource::CommandLine);
        assert!(matches!(cli.command, Commands::Lookup { ref value, family: None } if value == "5"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "winerr", "list", "--family", "win32", "-d", "a.toml", "-d", "b.toml",
        ])
        .unwrap();
        let mut settings = Settings::default();
        apply_flags(&cli, &mut settings);

        assert_eq!(
            settings.definitions.value,
            vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
        );
        assert_eq!(settings.format.source, ConfigSource::Default);
        assert!(matches!(cli.command, Commands::List { family: Some(Family::Win32) }));
    }

    #[test]
    fn test_absent_flags_keep_settings() {
        let cli = Cli::try_parse_from(["winerr", "schema"]).unwrap();
        let mut settings = Settings::default();
        settings.format = Sourced::from_env(OutputFormat::Json, "WINERR_FORMAT");
        apply_flags(&cli, &mut settings);

        assert_eq!(settings.format.source, ConfigSource::Environment);
        assert!(settings.definitions.value.is_empty());
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["winerr", "--json"]).is_err());
    }

    #[test]
    fn test_exit_status_mapping() {
        assert_eq!(exit_status(&Ok(Outcome::Found)), 0);
        assert_eq!(exit_status(&Ok(Outcome::NotFound)), 2);
        assert_eq!(exit_status(&Err(anyhow::anyhow!("boom"))), 1);
    }
}
