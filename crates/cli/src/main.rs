use clap::{Parser, Subcommand};
use eyre::Result;
use inscribe_core::{GenerationClient, TransactionConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an inscription for a transaction
    Generate {
        /// Path to the transaction JSON file
        #[arg(long = "tx", short = 't')]
        tx_path: String,
    },
    /// Look up the inscription stored for a transaction hash
    Lookup {
        /// Transaction hash (0x hex)
        #[arg(long = "hash", short = 'x')]
        hash: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = GenerationClient::from_env();

    match &cli.command {
        Commands::Generate { tx_path } => {
            let config = TransactionConfig::from_file(tx_path)?;
            let tx = config.to_transaction()?;
            let text = client.generate(&tx).await?;
            println!("Inscription: {}", text);
        }
        Commands::Lookup { hash } => {
            let body = client.get_generated(hash).await?;
            println!("{}", body);
        }
    }

    Ok(())
}
