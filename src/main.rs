// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { recipe, json } => commands::show(recipe.as_deref(), json),
        Commands::Resolve { recipe, os, json } => commands::resolve(recipe.as_deref(), os, json),
        Commands::Generate {
            recipe,
            out_dir,
            os,
            build_type,
        } => commands::generate(recipe.as_deref(), &out_dir, os, build_type),
        Commands::Validate { recipe } => commands::validate(&recipe),
        Commands::Completions { shell } => {
            commands::completions(shell);
            Ok(())
        }
    }
}
