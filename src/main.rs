//! WebSearch-RS command-line entry point

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use websearch_rs::{report, research, Coordinator, Depth, Settings};

#[derive(Parser)]
#[command(
    name = "websearch",
    version = websearch_rs::VERSION,
    about = "Multi-provider web search from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the web across all available providers
    Search {
        /// Search query
        query: String,
        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = 10)]
        num_results: usize,
        /// Provider to use ("auto" queries all of them)
        #[arg(short, long, default_value = "auto")]
        provider: String,
        /// Emit raw JSON instead of a formatted report
        #[arg(long)]
        json: bool,
    },
    /// Research a topic with multiple query variants
    Research {
        /// Research topic
        topic: String,
        /// Research depth
        #[arg(short, long, default_value = "standard")]
        depth: Depth,
        /// Emit raw JSON instead of a formatted report
        #[arg(long)]
        json: bool,
    },
    /// Show provider availability and rate limits
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env();
    let coordinator = Coordinator::from_settings(&settings)?;

    match cli.command {
        Command::Search {
            query,
            num_results,
            provider,
            json,
        } => {
            if num_results == 0 {
                bail!("--num-results must be greater than zero");
            }

            if provider.eq_ignore_ascii_case("auto") {
                let result = coordinator.search_all(&query, num_results).await;
                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    println!("{}", report::aggregate(&result));
                }
            } else {
                let result = coordinator.search_one(&query, num_results, &provider).await;
                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    println!("{}", report::outcome(&result));
                }
            }
        }
        Command::Research { topic, depth, json } => {
            let entries = research::run_research(&coordinator, &topic, depth).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{}", report::research(&topic, depth, &entries));
            }
        }
        Command::Status => {
            println!("{}", report::provider_status(&coordinator.provider_status()));
        }
    }

    Ok(())
}
