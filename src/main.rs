use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use covx::config::Config;
use covx::jacoco::{self, CoverageResult};
use covx::output;

const CONFIG_FILE: &str = "covx.toml";

#[derive(Parser)]
#[command(name = "covx")]
#[command(about = "Extract line-coverage metrics from JaCoCo XML reports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: covx.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single report file
    Parse {
        /// Path to the JaCoCo XML report
        report: PathBuf,

        /// SDK name to attach to the results
        #[arg(short, long)]
        sdk: String,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse every report configured in covx.toml
    All {
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List SDKs configured in covx.toml
    List,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { report, sdk, json } => cmd_parse(&report, &sdk, json),
        Commands::All { json } => cmd_all(cli.config, json),
        Commands::List => cmd_list(cli.config),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    Config::load(&path).with_context(|| format!("Could not load {}", path.display()))
}

fn cmd_parse(report: &Path, sdk: &str, json: bool) -> Result<()> {
    let results = jacoco::parse_report(report, sdk)
        .with_context(|| format!("Could not parse {}", report.display()))?;

    emit(&results, json)
}

fn cmd_all(config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;

    let mut results: Vec<CoverageResult> = Vec::new();
    for sdk in config.sdk_names() {
        let path = config.report_path(sdk)?;
        let sdk_results = jacoco::parse_report(&path, sdk)
            .with_context(|| format!("Could not parse {}", path.display()))?;
        results.extend(sdk_results);
    }

    emit(&results, json)
}

fn cmd_list(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;

    println!("{}", config.project.name.bold());
    for sdk in config.sdk_names() {
        println!("  {}", sdk);
    }

    Ok(())
}

fn emit(results: &[CoverageResult], json: bool) -> Result<()> {
    if json {
        println!("{}", output::to_json(results)?);
    } else {
        output::print_table(results);
    }

    Ok(())
}
