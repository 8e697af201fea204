use catalog::FundCatalog;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::load_config_from;
use ledger::{Ledger, SharedLedger};
use notifier::TracingNotifier;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Fondo application.
#[tokio::main]
async fn main() {
    // Initialize structured logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            if let Err(e) = handle_serve(args).await {
                eprintln!("Error while serving: {}", e);
            }
        }
        Commands::Funds(args) => {
            if let Err(e) = handle_funds(args) {
                eprintln!("Error listing funds: {}", e);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A modular platform for subscribing to investment and pension funds.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server for the fund subscription platform.
    Serve(ServeArgs),

    /// Print the configured fund catalog.
    Funds(FundsArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[derive(Parser)]
struct FundsArgs {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Wires the catalog, the ledger, the notifier service, and the web server
/// together and runs until interrupted.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = load_config_from(&args.config)?;

    let catalog = Arc::new(FundCatalog::from_seed(&config.funds)?);
    let ledger = SharedLedger::new(Ledger::new(catalog, config.wallet.opening_balance)?);

    // The notifier service consumes the ledger's event stream in the
    // background for as long as the server runs.
    let event_rx = ledger.subscribe_events();
    tokio::spawn(notifier::run_notifier_service(
        TracingNotifier,
        config.notifications.clone(),
        event_rx,
    ));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    web_server::run_server(addr, ledger).await
}

/// Renders the seeded catalog as a table, the way clients see it.
fn handle_funds(args: FundsArgs) -> anyhow::Result<()> {
    let config = load_config_from(&args.config)?;
    let catalog = FundCatalog::from_seed(&config.funds)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Category", "Risk level", "Minimum investment"]);
    for fund in catalog.funds() {
        table.add_row(vec![
            fund.id.to_string(),
            fund.name.clone(),
            fund.category.to_string(),
            fund.risk_level.to_string(),
            format!("${}", fund.minimum_investment),
        ]);
    }

    println!("{table}");
    println!(
        "Opening balance: ${} across {} funds.",
        config.wallet.opening_balance,
        catalog.len()
    );

    Ok(())
}
