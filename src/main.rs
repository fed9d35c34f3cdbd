use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use tally::client::{CounterRemote, HttpCounterClient};
use tally::config::{ClientConfig, Config};
use tally::logging::{init_file_tracing, init_tracing, ui_log_path};
use tally::server::CounterServer;
use tally::store::{CounterAction, SharedStore, SqliteCounterStore};

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "A persisted counter with a terminal client")]
struct Cli {
    /// Config file (default: ~/.config/tally/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the counter RPC server
    Serve {
        /// Bind address (host:port)
        #[arg(long)]
        bind: Option<String>,
        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Open the interactive counter
    Ui {
        /// Server base URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the current counter as JSON
    Get {
        /// Server base URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Apply increment, decrement or reset and print the result
    Update {
        action: CounterAction,
        /// Server base URL
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Serve { bind, database } => {
            init_tracing();
            serve(config, bind, database).await
        }
        Command::Ui { url } => {
            let log_path = ui_log_path();
            init_file_tracing(&log_path)
                .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
            let client = HttpCounterClient::new(&client_config(config, url))?;
            tally::ui::run(client).await?;
            Ok(())
        }
        Command::Get { url } => {
            init_tracing();
            let client = HttpCounterClient::new(&client_config(config, url))?;
            let record = client.get_counter().await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Command::Update { action, url } => {
            init_tracing();
            let client = HttpCounterClient::new(&client_config(config, url))?;
            let record = client.update_counter(action).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
    }
}

async fn serve(
    mut config: Config,
    bind: Option<String>,
    database: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind_addr = bind;
    }
    if let Some(database) = database {
        config.store.database_path = database;
    }
    config.validate()?;

    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind_addr))?;

    let db_path = &config.store.database_path;
    let store = SqliteCounterStore::open(db_path)
        .with_context(|| format!("Failed to open database '{}'", db_path.display()))?;
    tracing::info!(path = %db_path.display(), "Opened counter database");

    let server = CounterServer::bind(addr, SharedStore::new(store))
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    server.run().await?;
    Ok(())
}

fn client_config(config: Config, url: Option<String>) -> ClientConfig {
    let mut client = config.client;
    if let Some(url) = url {
        client.base_url = url;
    }
    client
}
