mod controller;
mod relay;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use controller::Controller;
use recap_core::helpers::creativity;
use recap_core::helpers::dto::Endpoints;
use recap_core::helpers::pricing;
use recap_core::session::handler::{SessionStore, SessionTotals};
use relay::RelayClient;

#[derive(Parser)]
#[command(name = "recap", version, about = "Summarize text through the recap relay")]
struct Cli {
    /// Where the session database lives.
    #[arg(long, env = "RECAP_DB_PATH", default_value = "recap_db", global = true)]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize text from the argument, a file, or stdin.
    Summarize {
        text: Option<String>,

        /// Read the text to summarize from a file.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Creativity level, 0 (factual) to 10 (visionary).
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=10))]
        creativity: u8,
    },
    /// Show the estimated cost of a summarization without sending it.
    Estimate {
        text: Option<String>,

        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Show the persisted session totals.
    Session,
    /// Reset the persisted session totals.
    Clear,
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_totals(totals: &SessionTotals) {
    println!(
        "Session total: ${:.4} across {} summaries",
        totals.total_cost, totals.summary_count
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let db = sled::open(&cli.db_path)?;
    let session = SessionStore::new(&db)?;

    match cli.command {
        Command::Summarize {
            text,
            file,
            creativity,
        } => {
            let input = read_input(text, file)?;
            if input.trim().is_empty() {
                eprintln!("Please enter some text to summarize.");
                std::process::exit(1);
            }

            let relay = RelayClient::new(Endpoints::Summarize.to_string());
            let controller = Controller::new(relay, session);

            println!(
                "Creativity: {} (temperature {:.1})",
                creativity::label(creativity),
                creativity::temperature(creativity)
            );
            println!("Estimated cost: ${:.4}", controller.estimate(&input));
            println!("Generating your summary...");

            match controller.summarize(&input, creativity).await {
                Ok(outcome) => {
                    println!();
                    println!("{}", outcome.summary);
                    println!();
                    print_totals(&outcome.totals);
                }
                Err(e) => {
                    eprintln!("Sorry, an error occurred: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Estimate { text, file } => {
            let input = read_input(text, file)?;
            let words = pricing::word_count(&input);
            println!(
                "{} words, estimated cost ${:.4}",
                words,
                pricing::estimate_cost(words)
            );
        }
        Command::Session => print_totals(&session.load()),
        Command::Clear => {
            session.clear()?;
            print_totals(&session.load());
        }
    }

    Ok(())
}
