//! Command line and environment configuration shared by the binaries

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::benchmarks::Benchmarks;
use crate::insights::{ReportOptions, ReportVariant, ResidualPolicy};

/// Report settings common to the server and the CLI
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Comparison set: summary or full
    #[arg(long, env = "BENCHMARK_VARIANT", default_value = "summary")]
    pub variant: ReportVariant,

    /// Residual handling when cost shares exceed 100%: pass-through or clamp
    #[arg(long, env = "BENCHMARK_RESIDUAL_POLICY", default_value = "pass-through")]
    pub residual_policy: ResidualPolicy,

    /// TOML file overriding industry benchmark values
    #[arg(long, env = "BENCHMARK_CONFIG")]
    pub benchmarks: Option<PathBuf>,
}

impl ReportArgs {
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            variant: self.variant,
            residual_policy: self.residual_policy,
        }
    }

    /// Industry table, or the override file when one is given
    pub fn load_benchmarks(&self) -> Result<Benchmarks> {
        match &self.benchmarks {
            Some(path) => {
                info!("Loading benchmark overrides from {}", path.display());
                Benchmarks::load(path)
            }
            None => Ok(Benchmarks::INDUSTRY),
        }
    }
}
