//! Database administration CLI.

use clap::{Parser, Subcommand};
use scribe_infra::{DatabaseConfig, DatabaseGateway};

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "Scribe database administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop all tables and recreate the schema. Existing data is lost.
    InitDb {
        /// Database URL, e.g. sqlite://scribe.sqlite?mode=rwc
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();

    match cli.command {
        Commands::InitDb { database_url } => {
            let mut config = DatabaseConfig::from_env();
            if let Some(url) = database_url {
                config.url = url;
            }

            tracing::info!(url = %config.url, "Initializing database schema");

            let gateway = DatabaseGateway::connect(&config).await?;
            gateway.initialize_schema().await?;

            println!("Initialized the database.");
        }
    }

    Ok(())
}
