mod cli;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "scenename=trace,scenename_parser=trace".to_string()
        } else {
            "scenename=info,scenename_parser=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;
    let parser_config = config.parser_config(cli.delimiter.as_deref(), cli.release_type)?;
    let parser = scenename_parser::Parser::new(parser_config);

    let record = parser
        .parse(&cli.name)
        .with_context(|| format!("Failed to parse {:?}", cli.name))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        render::render_json(&mut out, &record)?;
    } else {
        render::render_text(&mut out, &record)?;
    }
    out.flush()?;

    Ok(())
}
