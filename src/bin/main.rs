//! google-cse CLI - search a Google Custom Search engine from the terminal
//!
//! Queries the XML API and prints the parsed result page, either as a
//! human-readable listing or as JSON.

use clap::{Parser, ValueEnum};
use colored::*;
use google_cse::{CseClient, CseConfig, SearchOptions};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "google-cse")]
#[command(about = "Google Custom Search XML API client")]
#[command(version)]
struct Cli {
    /// Search query
    query: String,

    /// Custom Search Engine ID
    #[arg(long, env = "GOOGLE_CSE_CX")]
    cx: String,

    /// Result page number (overrides --offset)
    #[arg(short, long)]
    page: Option<u32>,

    /// Zero-based offset of the first result
    #[arg(long)]
    offset: Option<u32>,

    /// Number of results per page
    #[arg(short = 'n', long, default_value_t = 10)]
    per_page: u32,

    /// Extra request parameter as key=value (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    params: Vec<(String, String)>,

    /// Use plain HTTP instead of HTTPS
    #[arg(long)]
    insecure: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 3)]
    timeout_secs: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
    Simple,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got \"{raw}\""))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = CseConfig::new(&cli.cx);
    config.secure = !cli.insecure;
    config.timeout = Duration::from_secs(cli.timeout_secs);
    for (key, value) in &cli.params {
        config.default_params.insert(key.clone(), value.clone());
    }

    let options = SearchOptions {
        offset: cli.offset.map(Into::into),
        per_page: Some(cli.per_page.into()),
        page: cli.page.map(Into::into),
    };

    let client = CseClient::new(config)?;
    let page = client.search(&cli.query, &options).await?;

    display_result_set(&cli.query, &page, &cli.format);
    Ok(())
}

fn display_result_set(query: &str, page: &google_cse::ResultSet, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "total_entries": page.total_entries,
                "per_page": page.per_page,
                "start_index": page.start_index,
                "end_index": page.end_index,
                "current_page": page.current_page(),
                "total_pages": page.total_pages(),
                "suggestion": page.suggestion,
                "results": page.results,
            });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap());
        }
        OutputFormat::Simple => {
            for (i, result) in page.results.iter().enumerate() {
                println!("{}. {}", page.offset() + i as u64 + 1, result.title);
                println!("   {}", result.url);
                println!("   {}", result.excerpt);
                println!();
            }
        }
        OutputFormat::Table => {
            println!(
                "{} {}",
                "Search results for".bold(),
                format!("\"{query}\"").bold().blue()
            );
            println!("{}", "─".repeat(80).dimmed());

            if let Some(suggestion) = &page.suggestion {
                println!("{} {}", "Did you mean:".bold(), suggestion.yellow());
                println!();
            }

            for (i, result) in page.results.iter().enumerate() {
                let position = page.offset() + i as u64 + 1;
                println!("{}. {}", position.to_string().bold(), result.title.bold());
                println!("   {}", result.url.blue().underline());
                if !result.excerpt.is_empty() {
                    println!("   {}", result.excerpt.italic());
                }
                println!();
            }

            if page.total_entries == 0 {
                println!("{}", "No matches.".dimmed());
            } else {
                println!(
                    "{} {} {} {} {}",
                    "Page".bold(),
                    page.current_page().to_string().bold(),
                    "of".bold(),
                    page.total_pages().to_string().bold(),
                    format!("({} matches)", page.total_entries).dimmed()
                );
            }
        }
    }
}
