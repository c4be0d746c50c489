use clap::{Parser, Subcommand};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "responder-cli")]
#[command(about = "Demo driver for the AutoOps fault-injection responder", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hit the health route and print the outcome
    Health,
    /// Trigger a bounded CPU stress run and time it
    Stress,
    /// Trigger the deterministic arithmetic failure
    Error,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(&cli.url).send().await?;
            print_response(res).await?;
        }
        Commands::Stress => {
            let start = Instant::now();
            let res = client.get(format!("{}/stress", cli.url)).send().await?;
            let elapsed = start.elapsed();
            print_response(res).await?;
            println!("elapsed: {:.1}s", elapsed.as_secs_f64());
        }
        Commands::Error => {
            let res = client.get(format!("{}/error", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        println!("{} {}", status, body);
    } else {
        eprintln!("{} {}", status, body);
    }
    Ok(())
}
