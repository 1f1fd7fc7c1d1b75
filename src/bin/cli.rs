//! Command-line front-end: submits a URL to a running pagesnap server,
//! prints the per-profile gallery summary, and optionally exports every
//! chunk to local image files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pagesnap::api::models::FullPageScreenshot;
use pagesnap::client::AnalyzeClient;
use pagesnap::export::{self, ExportFormat};
use pagesnap::session::{Phase, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    Desktop,
    Mobile,
    Both,
}

#[derive(Parser)]
#[command(name = "pagesnap-cli", about = "Capture chunked full-page screenshots of a website")]
struct Args {
    /// Website URL to analyze
    url: String,

    /// Base URL of the pagesnap server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server: String,

    /// Export chunks into this directory after analysis
    #[arg(long)]
    out: Option<PathBuf>,

    /// Image format for exported chunks
    #[arg(long, value_enum, default_value_t = ExportFormat::Png)]
    format: ExportFormat,

    /// Which viewport profile to export
    #[arg(long, value_enum, default_value_t = ProfileArg::Both)]
    profile: ProfileArg,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args = Args::parse();
    let mut session = Session::new();

    let Some(url) = session.submit(&args.url) else {
        report_failure(&session);
        return ExitCode::FAILURE;
    };

    let client = AnalyzeClient::new(&args.server);
    match client.analyze(&url).await {
        Ok(result) => session.complete(result),
        Err(err) => session.fail(err.to_string()),
    }

    let result = match session.phase() {
        Phase::Success(result) => result.clone(),
        _ => {
            report_failure(&session);
            return ExitCode::FAILURE;
        }
    };

    print_summary(&result.desktop);
    print_summary(&result.mobile);

    if let Some(dir) = args.out {
        let selected: Vec<&FullPageScreenshot> = match args.profile {
            ProfileArg::Desktop => vec![&result.desktop],
            ProfileArg::Mobile => vec![&result.mobile],
            ProfileArg::Both => vec![&result.desktop, &result.mobile],
        };

        for screenshot in selected {
            match export::export_screenshot(screenshot, &dir, args.format) {
                Ok(written) => {
                    println!("Exported {} {} chunk(s) to {}", written.len(), screenshot.profile, dir.display());
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn report_failure(session: &Session) {
    if let Phase::Failed(message) = session.phase() {
        eprintln!("Error: {}", message);
    }
}

fn print_summary(screenshot: &FullPageScreenshot) {
    let max = screenshot.chunks.first().map(|c| c.height).unwrap_or(0);
    println!(
        "{} screenshot: {}px height, {} chunks of {}px max",
        screenshot.profile,
        screenshot.total_height,
        screenshot.chunks.len(),
        max
    );
    for chunk in &screenshot.chunks {
        println!("  chunk {}: {}px", chunk.chunk_number, chunk.height);
    }
}
