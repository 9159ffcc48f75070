use crate::{
    commands::Commands,
    config::DbSettings,
    conn::{open_store, pinger_for},
    env::EnvManager,
    error::{CliError, ExitCode},
    params::page_size_param,
};
use clap::Parser;
use connectors::sql::base::store::DatabaseKind;
use paginator::{
    repository::RecordRepository,
    sample::{load_sample_file, populate_sample_data},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod conn;
mod env;
mod error;
mod output;
mod params;

#[derive(Parser)]
#[command(
    name = "pagetoken",
    version = "0.1.0",
    about = "Continuation-token pagination over a records table"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Connection URL (mysql://, postgres:// or memory://); overrides the environment"
    )]
    url: Option<String>,

    #[arg(long, global = true, help = "Load variables from this .env file")]
    env_file: Option<String>,

    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!("{}", err);
        std::process::exit(err.exit_code().as_i32());
    }
    std::process::exit(ExitCode::Success.as_i32());
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut env = EnvManager::new();
    if let Some(path) = &cli.env_file {
        env.load_from_file(path)?;
    }
    let settings = DbSettings::from_env(&env, cli.url.as_deref())?;
    let display = settings.redacted_url();

    match cli.command {
        Commands::Init { sample_file } => {
            let repo = repository(&settings, &display, false).await?;
            repo.create_table().await?;
            info!("Created table '{}'", repo.table());

            if let Some(path) = sample_file {
                let records = load_sample_file(&path).await?;
                let inserted = populate_sample_data(&repo, &records).await?;
                info!("Loaded {} of {} sample records from {}", inserted, records.len(), path);
            }
        }
        Commands::Insert {
            resource_id,
            resource_type,
            context,
        } => {
            let repo = repository(&settings, &display, true).await?;
            let record = repo
                .insert(&resource_id, &resource_type, context.as_deref())
                .await?;
            output::print_record(&record, cli.pretty)?;
        }
        Commands::List => {
            let repo = repository(&settings, &display, true).await?;
            let records = repo.get_all().await?;
            output::print_records(&records, cli.pretty)?;
        }
        Commands::Page { token, page_size } => {
            let repo = repository(&settings, &display, true).await?;
            let page_size = page_size_param(page_size.as_deref());
            let page = repo.get_paginated(&token, page_size).await?;
            output::print_page(&page, cli.pretty)?;
        }
        Commands::Walk {
            page_size,
            max_pages,
        } => {
            let repo = repository(&settings, &display, true).await?;
            let page_size = page_size_param(page_size.as_deref());
            let mut token = String::new();
            let mut pages = 0usize;
            let mut rows = 0usize;

            loop {
                let page = repo.get_paginated(&token, page_size).await?;
                pages += 1;
                rows += page.records.len();
                output::print_page(&page, cli.pretty)?;

                match page.next_continuation_token {
                    Some(next) if max_pages.is_none_or(|max| pages < max) => token = next,
                    _ => break,
                }
            }
            info!("Walked {} pages, {} records", pages, rows);
        }
        Commands::TestConn => {
            pinger_for(&settings.url, &display)?.ping().await?;
        }
    }

    Ok(())
}

/// Opens the configured store. A memory store starts with nothing, so unless
/// the caller is about to create the table it gets an empty one here.
async fn repository(
    settings: &DbSettings,
    display: &str,
    ensure_table: bool,
) -> Result<RecordRepository, CliError> {
    let store = open_store(&settings.url, display).await?;
    let needs_table = ensure_table && store.kind() == DatabaseKind::Memory;
    let repo = RecordRepository::new(store, settings.table.clone());
    if needs_table {
        repo.create_table().await?;
    }
    Ok(repo)
}
