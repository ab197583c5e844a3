//! CLI tool to print a user's contribution summary as JSON.
//!
//! Usage:
//!   cargo run --bin fetch-summary -- octocat --token ghp_xxx
//!
//! Reads `GITHUB_TOKEN`, `SHOWCASE_GITHUB_API_URL` and
//! `SHOWCASE_HTTP_TIMEOUT_SECS` like the server does. `RUST_ENV` is not needed.

use std::env;

use secrecy::SecretString;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use showcase_lib::config::GitHubSettings;
use showcase_lib::services::{ContributionAggregator, GitHubClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let args: Vec<String> = env::args().skip(1).collect();

    let args = match parse_args(&args) {
        Ok(Command::Fetch(args)) => args,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    let settings = match GitHubSettings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let client = match GitHubClient::new(&settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let aggregator = ContributionAggregator::new(client);

    let token = args
        .token
        .filter(|t| !t.trim().is_empty())
        .map(SecretString::from);

    let summary = match aggregator.summarize(&args.username, token.as_ref()).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let rendered = if args.compact {
        serde_json::to_string(&summary)
    } else {
        serde_json::to_string_pretty(&summary)
    };

    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: failed to serialize summary: {}", e);
            std::process::exit(1);
        }
    }
}

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Fetch(FetchArgs),
}

#[derive(Debug, PartialEq, Eq)]
struct FetchArgs {
    username: String,
    token: Option<String>,
    compact: bool,
}

/// Parse arguments, excluding the program name.
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut username: Option<String> = None;
    let mut token: Option<String> = None;
    let mut compact = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--token" | "-t" => {
                i += 1;
                match args.get(i) {
                    Some(value) => token = Some(value.clone()),
                    None => return Err(format!("{} requires a value", args[i - 1])),
                }
            }
            "--compact" | "-c" => {
                compact = true;
            }
            "--help" | "-h" => {
                return Ok(Command::Help);
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown argument: {}", arg));
            }
            arg => {
                if username.is_some() {
                    return Err("only one username may be given".to_string());
                }
                username = Some(arg.to_string());
            }
        }
        i += 1;
    }

    let username = username.ok_or_else(|| "<username> is required".to_string())?;

    Ok(Command::Fetch(FetchArgs {
        username,
        token,
        compact,
    }))
}

fn print_usage() {
    eprintln!(
        r#"
Usage: fetch-summary <username> [OPTIONS]

Fetch a GitHub user's profile, repositories, pull requests and recent
public activity, and print the aggregated summary as JSON.

Arguments:
  <username>            GitHub login

Options:
  -t, --token <TOKEN>   GitHub token for this call (overrides GITHUB_TOKEN)
  -c, --compact         Print JSON on a single line
  -h, --help            Show this help message

Environment:
  GITHUB_TOKEN                 Default token (optional)
  SHOWCASE_GITHUB_API_URL      API base URL (default: https://api.github.com)
  SHOWCASE_HTTP_TIMEOUT_SECS   Request timeout in seconds (optional)
"#
    );
}
