//! Print a benchmark report for a report query string
//!
//! Run: ./target/release/contractor_benchmark "businessType=hvac&employees=12&revenue=500000"

use anyhow::Result;
use clap::Parser;
use contractor_benchmark::api::ReportService;
use contractor_benchmark::config::ReportArgs;
use contractor_benchmark::format::{dollars, number, percent};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "contractor_benchmark")]
#[command(about = "Compare contractor metrics against industry benchmarks")]
struct Cli {
    /// Query string as produced by the assessment form (leading '?' optional)
    query: String,

    /// Print the derived report as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    report: ReportArgs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = ReportService::new(cli.report.load_benchmarks()?, cli.report.options());
    let report = service.report_for_query(&cli.query, None);
    debug!("Decoded input: {:?}", report.input);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.derived)?);
        return Ok(());
    }

    let input = &report.input;
    let derived = &report.derived;

    println!("\n{}", "=".repeat(60));
    println!("          YOUR BUSINESS PERFORMANCE REPORT");
    println!("{}\n", "=".repeat(60));

    println!("COMPANY OVERVIEW");
    println!("{}", "-".repeat(40));
    println!("  Business type:   {}", input.business_type.label());
    println!("  Employees:       {}", number(input.employees));
    println!("  Annual revenue:  {}", dollars(input.revenue));

    println!("\nCOST BREAKDOWN");
    println!("{}", "-".repeat(40));
    for slice in &derived.cost_breakdown {
        println!("  {:<16} {:>10}", slice.label, percent(slice.value));
    }

    println!("\nLEAD CONVERSION");
    println!("{}", "-".repeat(40));
    for slice in &derived.conversion_split {
        println!("  {:<16} {:>10}", slice.label, percent(slice.value));
    }

    println!("\nPERFORMANCE VS. INDUSTRY BENCHMARKS");
    println!("{}", "-".repeat(60));
    println!("  {:<24} {:>10} {:>10} {:>10}", "Metric", "You", "Benchmark", "Gap");
    for c in &derived.comparisons {
        println!(
            "  {:<24} {:>10} {:>10} {:>10}",
            c.label,
            number(c.yours),
            number(c.benchmark),
            number(c.gap())
        );
    }

    println!("\nKEY INSIGHTS");
    println!("{}", "-".repeat(40));
    if derived.advisories.is_empty() {
        println!("  On or above benchmark for margin, conversion and lead cost.");
    }
    for advisory in &derived.advisories {
        println!("  * {}", advisory.message());
    }
    println!();

    Ok(())
}
