//! Industry benchmark table
//!
//! Reference values a contractor's numbers are compared against. The table is
//! fixed at compile time; a deployment may override individual values from a
//! TOML file at startup, after which it is shared read-only.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialBenchmarks {
    pub profit_margin: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesMarketingBenchmarks {
    pub monthly_leads: f64,
    pub conversion_rate: f64,
    pub lead_cost: f64,
    pub marketing_spend: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPerformanceBenchmarks {
    pub avg_project_size: f64,
    pub project_win_rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Benchmarks {
    pub financial: FinancialBenchmarks,
    pub sales_marketing: SalesMarketingBenchmarks,
    pub project_performance: ProjectPerformanceBenchmarks,
}

impl Benchmarks {
    /// Published industry averages for small contracting firms
    pub const INDUSTRY: Benchmarks = Benchmarks {
        financial: FinancialBenchmarks {
            profit_margin: 15.0,
            labor_cost: 40.0,
            overhead_cost: 20.0,
        },
        sales_marketing: SalesMarketingBenchmarks {
            monthly_leads: 50.0,
            conversion_rate: 25.0,
            lead_cost: 150.0,
            marketing_spend: 10.0,
        },
        project_performance: ProjectPerformanceBenchmarks {
            avg_project_size: 75_000.0,
            project_win_rate: 40.0,
        },
    };

    /// Parse an override table. Anything the file leaves out keeps its
    /// industry value.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let benchmarks: Benchmarks = toml::from_str(raw)?;
        Ok(benchmarks)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading benchmark file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("parsing benchmark file {}", path.display()))
    }
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self::INDUSTRY
    }
}

impl Default for FinancialBenchmarks {
    fn default() -> Self {
        Benchmarks::INDUSTRY.financial
    }
}

impl Default for SalesMarketingBenchmarks {
    fn default() -> Self {
        Benchmarks::INDUSTRY.sales_marketing
    }
}

impl Default for ProjectPerformanceBenchmarks {
    fn default() -> Self {
        Benchmarks::INDUSTRY.project_performance
    }
}
