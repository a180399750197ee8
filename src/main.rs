use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::application::scoring::breakdown;
use receipt_points::domain::ports::{ReceiptStoreBox, ReceiptStoreFactory};
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_points::infrastructure::sharded::ShardedReceiptStore;
use receipt_points::interfaces::http;
use receipt_points::interfaces::json::receipt_reader::ReceiptReader;
use receipt_points::telemetry;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the receipt HTTP service
    Serve {
        /// Address to listen on
        #[arg(long, env = "RECEIPT_POINTS_BIND", default_value = "0.0.0.0:8080")]
        bind: String,

        /// Number of store shards. One keeps a single lock over all receipts.
        #[arg(long, env = "RECEIPT_POINTS_SHARDS", default_value_t = 1)]
        shards: usize,
    },
    /// Score a receipt JSON file and print its points
    Score {
        /// Receipt JSON file
        input: PathBuf,

        /// Print the per-rule breakdown as JSON
        #[arg(long)]
        breakdown: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init();

    match cli.command {
        Command::Serve { bind, shards } => {
            let store: ReceiptStoreBox = if shards > 1 {
                let factory: ReceiptStoreFactory =
                    Box::new(|| Box::new(InMemoryReceiptStore::new()) as ReceiptStoreBox);
                Box::new(ShardedReceiptStore::new(shards, factory))
            } else {
                Box::new(InMemoryReceiptStore::new())
            };

            let listener = TcpListener::bind(&bind).await.into_diagnostic()?;
            let processor = Arc::new(ReceiptProcessor::new(store));
            http::serve(listener, processor).await.into_diagnostic()?;
        }
        Command::Score {
            input,
            breakdown: show_breakdown,
        } => {
            let file = File::open(&input).into_diagnostic()?;
            let receipt = ReceiptReader::new(file).receipt().into_diagnostic()?;

            let scored = breakdown(&receipt);
            if show_breakdown {
                let report = serde_json::json!({
                    "points": scored.total(),
                    "breakdown": scored,
                });
                println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
            } else {
                println!("{}", scored.total());
            }
        }
    }

    Ok(())
}
