//! CLI Adapter.

mod meta;
mod render;
mod scripts;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::config::load_config;
use super::context::AppContext;
use super::logging::init_logging;
use crate::domain::{AppError, to_env_var_name};

#[derive(Parser)]
#[command(name = "ztp")]
#[command(version)]
#[command(
    about = "Generate cloud-init user-data templates and render provisioning payloads",
    long_about = None
)]
struct Cli {
    /// Path to a ztp.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a template from a deployment description and render its payload
    #[clap(visible_alias = "r")]
    Render(render::RenderArgs),
    /// Generate a template from a deployment description and print it
    #[clap(visible_alias = "g")]
    Generate(render::GenerateArgs),
    /// Inspect the meta-templates used for generation
    Meta {
        #[command(subcommand)]
        command: meta::MetaCommands,
    },
    /// List injected scripts and the environment variables they read
    Scripts,
    /// Print the environment variable name derived from a parameter name
    EnvName {
        /// Parameter name, e.g. ServerName
        word: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    let ctx = AppContext::from_config(&config)?;

    match cli.command {
        Commands::Render(args) => render::run_render(&ctx, args),
        Commands::Generate(args) => render::run_generate(&ctx, args),
        Commands::Meta { command } => meta::run_meta(&ctx, command),
        Commands::Scripts => scripts::run_scripts(&ctx),
        Commands::EnvName { word } => {
            println!("{}", to_env_var_name(&word));
            Ok(())
        }
    }
}
