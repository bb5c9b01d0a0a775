use anyhow::{Context, Result};
use clap::Parser;

use space_missions::cli::{execute, QueryCli};
use space_missions::data::query::QueryEngine;

fn main() -> Result<()> {
    env_logger::init();

    let cli = QueryCli::parse();
    let dataset = cli.source.load()?;
    let result = execute(&QueryEngine::new(&dataset), &cli.command);

    let out = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .context("serialising result")?;
    println!("{out}");
    Ok(())
}
