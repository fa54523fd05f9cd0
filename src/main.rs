use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use product_ledger_lib::bootstrap::{
    default_data_dir, init_tracing_subscriber, resolve_config, AppRuntime,
};
use product_ledger_lib::cli::Cli;
use product_ledger_lib::dispatch;
use product_ledger_lib::render::{render_error, render_view};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let data_dir = default_data_dir()?;
    let config = resolve_config(cli.config.clone(), &data_dir)?;

    init_tracing_subscriber(config.log_dir.as_deref(), config.log_level.as_deref())
        .context("Failed to initialize tracing")?;
    tracing::debug!(command = ?cli.command, "Starting");

    let runtime = AppRuntime::from_config(&config);
    runtime.restore().await;

    match dispatch(&runtime, cli.command).await {
        Ok(view) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render_view(&view));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(category = ?err.category, "Command failed: {}", err.message);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&err)?);
            } else {
                eprintln!("{}", render_error(&err));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
