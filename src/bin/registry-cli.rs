use std::process::ExitCode;

use clap::{Parser, Subcommand};
use reqwest::Url;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "registry-cli")]
#[command(about = "Command-line client for the Club Registry API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service and database health
    Health,
    /// List all students
    Students,
    /// Show one student by external student id
    Student { studid: String },
    /// List all clubs
    Clubs,
    /// Create a club
    AddClub { name: String },
    /// List registrations with their club
    Registrations,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = &cli.url;

    let res = match cli.command {
        Commands::Health => client.get(endpoint(base, &["health"])?).send().await?,
        Commands::Students => client.get(endpoint(base, &["students"])?).send().await?,
        Commands::Student { studid } => {
            client
                .get(endpoint(base, &["students", &studid])?)
                .send()
                .await?
        }
        Commands::Clubs => client.get(endpoint(base, &["clubs"])?).send().await?,
        Commands::AddClub { name } => {
            client
                .post(endpoint(base, &["clubs"])?)
                .json(&json!({ "club_name": name }))
                .send()
                .await?
        }
        Commands::Registrations => {
            client
                .get(endpoint(base, &["registrations"])?)
                .send()
                .await?
        }
    };

    print_response(res).await
}

/// Append percent-encoded path segments to the API base URL.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("{} cannot be used as an API base URL", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let json = serde_json::from_str::<Value>(&text).ok();

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        match json.as_ref().and_then(|j| j.get("message")).and_then(Value::as_str) {
            Some(message) => eprintln!("Message: {}", message),
            None if !text.is_empty() => eprintln!("Body: {}", text),
            None => {}
        }
        return Ok(ExitCode::FAILURE);
    }

    match json {
        Some(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        None => println!("{}", text),
    }
    Ok(ExitCode::SUCCESS)
}
