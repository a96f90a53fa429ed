//! Smoke test for the portfolio's public links.
//!
//! Fetches each link once without following redirects. Anything but a 200 fails,
//! and any failure makes the process exit with status 1.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::{redirect::Policy, Client};
use tracing_subscriber::EnvFilter;

const PORTFOLIO_LINKS: [&str; 4] = [
    "https://rohan-chavan.vercel.app/",
    "https://github.com/RohanChavan0701",
    "https://www.linkedin.com/in/rohan-chavan-708532200/",
    "https://rohan-chavan.vercel.app/images/projects/Rohan_Chavan_Resume.pdf",
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Check that the portfolio's public links respond")]
struct Args {
    /// Links to check (defaults to the portfolio's public links)
    urls: Vec<String>,

    /// Per-link timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 10)]
    timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LinkStatus {
    Ok,
    Status(u16),
    Error(String),
    Timeout,
}

impl LinkStatus {
    fn is_ok(&self) -> bool {
        matches!(self, LinkStatus::Ok)
    }

    fn label(&self) -> String {
        match self {
            LinkStatus::Ok => "OK".to_string(),
            LinkStatus::Status(code) => format!("FAILED ({code})"),
            LinkStatus::Error(_) => "FAILED (ERROR)".to_string(),
            LinkStatus::Timeout => "FAILED (TIMEOUT)".to_string(),
        }
    }

    fn error(&self) -> Option<&str> {
        match self {
            LinkStatus::Error(message) => Some(message),
            LinkStatus::Timeout => Some("Request timeout"),
            _ => None,
        }
    }
}

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .redirect(Policy::none())
        .user_agent(concat!("link-check/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")
}

async fn check_link(client: &Client, url: &str) -> LinkStatus {
    match client.get(url).send().await {
        Ok(response) if response.status().as_u16() == 200 => LinkStatus::Ok,
        Ok(response) => LinkStatus::Status(response.status().as_u16()),
        Err(e) if e.is_timeout() => LinkStatus::Timeout,
        Err(e) => LinkStatus::Error(e.to_string()),
    }
}

/// Checks every link in order, printing a report. Returns whether all passed.
async fn check_all(client: &Client, urls: &[String]) -> bool {
    let mut all_ok = true;
    for url in urls {
        let status = check_link(client, url).await;
        tracing::debug!("{url}: {status:?}");

        println!("{} {url}", if status.is_ok() { "✅" } else { "❌" });
        println!("   Status: {}", status.label());
        if let Some(error) = status.error() {
            println!("   Error: {error}");
        }
        println!();

        all_ok &= status.is_ok();
    }
    all_ok
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let urls = if args.urls.is_empty() {
        PORTFOLIO_LINKS.iter().map(|s| s.to_string()).collect()
    } else {
        args.urls
    };
    let client = build_client(Duration::from_secs(args.timeout_secs))?;

    println!("🔍 Checking portfolio links...\n");
    if check_all(&client, &urls).await {
        println!("🎉 All links are working correctly!");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("⚠️  Some links failed. Please check the errors above.");
        Ok(ExitCode::FAILURE)
    }
}
