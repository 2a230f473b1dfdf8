//! REST + page server for contractor benchmark reports
//!
//! Usage:
//!   ./target/release/api_server [options]
//!
//! Options:
//!   --port PORT               Port to listen on (default: 8080)
//!   --host HOST               Address to bind (default: 0.0.0.0)
//!   --variant VARIANT         Default comparison set: summary | full
//!   --residual-policy POLICY  pass-through | clamp
//!   --benchmarks FILE         TOML benchmark overrides
//!
//! Endpoints:
//!   GET  /                    Landing page with the assessment form
//!   GET  /report?...          Report page
//!   GET  /api/v1/health       Health check
//!   GET  /api/v1/benchmarks   Active benchmark table
//!   GET  /api/v1/report?...   Report as JSON
//!   POST /api/v1/encode       Input JSON -> report query string

use anyhow::Result;
use clap::Parser;
use contractor_benchmark::api::{self, ReportService};
use contractor_benchmark::config::ReportArgs;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "api_server")]
#[command(about = "Serve contractor benchmark reports over HTTP")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "BENCHMARK_PORT", default_value = "8080")]
    port: u16,

    /// Address to bind
    #[arg(long, env = "BENCHMARK_HOST", default_value = "0.0.0.0")]
    host: String,

    #[command(flatten)]
    report: ReportArgs,
}

fn print_banner(addr: &SocketAddr, cli: &Cli) {
    println!("============================================================");
    println!("            CONTRACTOR BENCHMARK REPORT SERVER");
    println!("============================================================");
    println!();
    println!("  Listening:        http://{}/", addr);
    println!("  Default variant:  {}", cli.report.variant);
    println!("  Residual policy:  {}", cli.report.residual_policy);
    if let Some(path) = &cli.report.benchmarks {
        println!("  Benchmarks:       {}", path.display());
    }
    println!();
    println!("Endpoints:");
    println!("  GET  /                   Assessment form");
    println!("  GET  /report             Report page");
    println!("  GET  /api/v1/health      Health check");
    println!("  GET  /api/v1/benchmarks  Benchmark table");
    println!("  GET  /api/v1/report      Report JSON");
    println!("  POST /api/v1/encode      Encode input");
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let cli = Cli::parse();
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;

    let benchmarks = cli.report.load_benchmarks()?;
    let service = Arc::new(ReportService::new(benchmarks, cli.report.options()));

    print_banner(&addr, &cli);

    let app = api::router(service);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
