//! Benchmark comparison and advisory selection.
//!
//! [`derive_report`] is a pure function of the input, the benchmark table and
//! the report options. Nothing here allocates beyond the returned report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::benchmarks::Benchmarks;
use crate::models::BenchmarkInput;

/// How residual percentages ("Other Costs", "Not Converted") are reported
/// when the known components fall outside [0, 100].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResidualPolicy {
    /// Report `100 - parts` as is, negative when the parts exceed 100
    #[default]
    PassThrough,
    /// Clamp the residual into [0, 100]
    Clamp,
}

impl ResidualPolicy {
    fn apply(self, residual: f64) -> f64 {
        match self {
            ResidualPolicy::PassThrough => residual,
            ResidualPolicy::Clamp => residual.clamp(0.0, 100.0),
        }
    }
}

impl FromStr for ResidualPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass-through" | "passthrough" => Ok(ResidualPolicy::PassThrough),
            "clamp" => Ok(ResidualPolicy::Clamp),
            other => Err(format!(
                "unknown residual policy '{}' (expected pass-through or clamp)",
                other
            )),
        }
    }
}

impl fmt::Display for ResidualPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResidualPolicy::PassThrough => f.write_str("pass-through"),
            ResidualPolicy::Clamp => f.write_str("clamp"),
        }
    }
}

/// Which set of side-by-side comparisons the report carries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportVariant {
    /// Leads, lead cost and win rate
    #[default]
    Summary,
    /// Every benchmarked metric
    Full,
}

impl ReportVariant {
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            ReportVariant::Summary => &[Metric::MonthlyLeads, Metric::LeadCost, Metric::ProjectWinRate],
            ReportVariant::Full => &[
                Metric::MonthlyLeads,
                Metric::LeadCost,
                Metric::ProjectWinRate,
                Metric::ProfitMargin,
                Metric::LaborCost,
                Metric::OverheadCost,
                Metric::AvgProjectSize,
                Metric::ConversionRate,
            ],
        }
    }
}

impl FromStr for ReportVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(ReportVariant::Summary),
            "full" => Ok(ReportVariant::Full),
            other => Err(format!(
                "unknown report variant '{}' (expected summary or full)",
                other
            )),
        }
    }
}

impl fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportVariant::Summary => f.write_str("summary"),
            ReportVariant::Full => f.write_str("full"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    pub variant: ReportVariant,
    pub residual_policy: ResidualPolicy,
}

/// Metrics that have a benchmark counterpart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    MonthlyLeads,
    LeadCost,
    ProjectWinRate,
    ProfitMargin,
    LaborCost,
    OverheadCost,
    AvgProjectSize,
    ConversionRate,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::MonthlyLeads => "Monthly Leads",
            Metric::LeadCost => "Lead Cost ($)",
            Metric::ProjectWinRate => "Project Win Rate (%)",
            Metric::ProfitMargin => "Profit Margin (%)",
            Metric::LaborCost => "Labor Cost (%)",
            Metric::OverheadCost => "Overhead Cost (%)",
            Metric::AvgProjectSize => "Avg Project Size ($)",
            Metric::ConversionRate => "Conversion Rate (%)",
        }
    }

    fn yours(self, input: &BenchmarkInput) -> f64 {
        match self {
            Metric::MonthlyLeads => input.monthly_leads,
            Metric::LeadCost => input.lead_cost,
            Metric::ProjectWinRate => input.project_win_rate,
            Metric::ProfitMargin => input.profit_margin,
            Metric::LaborCost => input.labor_cost,
            Metric::OverheadCost => input.overhead_cost,
            Metric::AvgProjectSize => input.avg_project_size,
            Metric::ConversionRate => input.conversion_rate,
        }
    }

    fn benchmark(self, b: &Benchmarks) -> f64 {
        match self {
            Metric::MonthlyLeads => b.sales_marketing.monthly_leads,
            Metric::LeadCost => b.sales_marketing.lead_cost,
            Metric::ProjectWinRate => b.project_performance.project_win_rate,
            Metric::ProfitMargin => b.financial.profit_margin,
            Metric::LaborCost => b.financial.labor_cost,
            Metric::OverheadCost => b.financial.overhead_cost,
            Metric::AvgProjectSize => b.project_performance.avg_project_size,
            Metric::ConversionRate => b.sales_marketing.conversion_rate,
        }
    }
}

/// One segment of a breakdown chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
}

/// Your value next to the benchmark for one metric
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub metric: Metric,
    pub label: &'static str,
    pub yours: f64,
    pub benchmark: f64,
}

impl Comparison {
    pub fn gap(&self) -> f64 {
        self.yours - self.benchmark
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Advisory {
    PricingStrategy,
    LeadQualification,
    MarketingChannelEfficiency,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::PricingStrategy => {
                "Your profit margin is below industry average. Consider reviewing pricing strategy."
            }
            Advisory::LeadQualification => {
                "Lead conversion rate could be improved through better qualification processes."
            }
            Advisory::MarketingChannelEfficiency => {
                "Your cost per lead is higher than benchmark. Review marketing channels for efficiency."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedReport {
    pub cost_breakdown: [ChartSlice; 4],
    pub conversion_split: [ChartSlice; 2],
    pub comparisons: Vec<Comparison>,
    pub advisories: Vec<Advisory>,
}

impl DerivedReport {
    pub fn other_costs(&self) -> f64 {
        self.cost_breakdown[3].value
    }

    pub fn not_converted(&self) -> f64 {
        self.conversion_split[1].value
    }
}

/// Compare `input` against `benchmarks`.
pub fn derive_report(
    input: &BenchmarkInput,
    benchmarks: &Benchmarks,
    options: ReportOptions,
) -> DerivedReport {
    let policy = options.residual_policy;

    let other = 100.0 - input.labor_cost - input.overhead_cost - input.profit_margin;
    let cost_breakdown = [
        ChartSlice { label: "Labor Cost", value: input.labor_cost },
        ChartSlice { label: "Overhead", value: input.overhead_cost },
        ChartSlice { label: "Profit Margin", value: input.profit_margin },
        ChartSlice { label: "Other Costs", value: policy.apply(other) },
    ];

    let conversion_split = [
        ChartSlice { label: "Converted", value: input.conversion_rate },
        ChartSlice { label: "Not Converted", value: policy.apply(100.0 - input.conversion_rate) },
    ];

    let comparisons = options
        .variant
        .metrics()
        .iter()
        .map(|&metric| Comparison {
            metric,
            label: metric.label(),
            yours: metric.yours(input),
            benchmark: metric.benchmark(benchmarks),
        })
        .collect();

    let checks = [
        (
            input.profit_margin < benchmarks.financial.profit_margin,
            Advisory::PricingStrategy,
        ),
        (
            input.conversion_rate < benchmarks.sales_marketing.conversion_rate,
            Advisory::LeadQualification,
        ),
        (
            input.lead_cost > benchmarks.sales_marketing.lead_cost,
            Advisory::MarketingChannelEfficiency,
        ),
    ];
    let advisories = checks
        .into_iter()
        .filter_map(|(triggered, advisory)| triggered.then_some(advisory))
        .collect();

    DerivedReport {
        cost_breakdown,
        conversion_split,
        comparisons,
        advisories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn report(input: &BenchmarkInput) -> DerivedReport {
        derive_report(input, &Benchmarks::INDUSTRY, ReportOptions::default())
    }

    #[test]
    fn test_other_costs_residual() {
        let input = BenchmarkInput {
            labor_cost: 40.0,
            overhead_cost: 20.0,
            profit_margin: 15.0,
            ..Default::default()
        };
        assert_eq!(report(&input).other_costs(), 25.0);
    }

    #[test]
    fn test_other_costs_goes_negative_by_default() {
        let input = BenchmarkInput {
            labor_cost: 50.0,
            overhead_cost: 40.0,
            profit_margin: 20.0,
            ..Default::default()
        };
        assert_eq!(report(&input).other_costs(), -10.0);
    }

    #[test]
    fn test_clamp_policy() {
        let input = BenchmarkInput {
            labor_cost: 50.0,
            overhead_cost: 40.0,
            profit_margin: 20.0,
            conversion_rate: 120.0,
            ..Default::default()
        };
        let options = ReportOptions {
            residual_policy: ResidualPolicy::Clamp,
            ..Default::default()
        };
        let clamped = derive_report(&input, &Benchmarks::INDUSTRY, options);

        assert_eq!(clamped.other_costs(), 0.0);
        assert_eq!(clamped.not_converted(), 0.0);
        // components are never touched
        assert_eq!(clamped.cost_breakdown[0].value, 50.0);
        assert_eq!(clamped.conversion_split[0].value, 120.0);
    }

    #[test]
    fn test_conversion_split_bounds() {
        let full = BenchmarkInput { conversion_rate: 100.0, ..Default::default() };
        let none = BenchmarkInput { conversion_rate: 0.0, ..Default::default() };

        assert_eq!(report(&full).not_converted(), 0.0);
        assert_eq!(report(&none).not_converted(), 100.0);
    }

    #[test]
    fn test_only_pricing_advisory() {
        let input = BenchmarkInput {
            profit_margin: 10.0,
            conversion_rate: 30.0,
            lead_cost: 100.0,
            ..Default::default()
        };
        assert_eq!(report(&input).advisories, vec![Advisory::PricingStrategy]);
    }

    #[test]
    fn test_all_advisories_in_order() {
        let input = BenchmarkInput {
            profit_margin: 5.0,
            conversion_rate: 10.0,
            lead_cost: 400.0,
            ..Default::default()
        };
        assert_eq!(
            report(&input).advisories,
            vec![
                Advisory::PricingStrategy,
                Advisory::LeadQualification,
                Advisory::MarketingChannelEfficiency,
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        // exactly at benchmark triggers nothing
        let input = BenchmarkInput {
            profit_margin: 15.0,
            conversion_rate: 25.0,
            lead_cost: 150.0,
            ..Default::default()
        };
        assert!(report(&input).advisories.is_empty());
    }

    #[test]
    fn test_summary_comparisons() {
        let input = BenchmarkInput {
            monthly_leads: 30.0,
            lead_cost: 180.0,
            project_win_rate: 35.0,
            ..Default::default()
        };
        let comparisons = report(&input).comparisons;

        let labels: Vec<_> = comparisons.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Monthly Leads", "Lead Cost ($)", "Project Win Rate (%)"]);
        assert_eq!(comparisons[0].yours, 30.0);
        assert_eq!(comparisons[0].benchmark, 50.0);
        assert_eq!(comparisons[1].gap(), 30.0);
    }

    #[test]
    fn test_full_variant_covers_every_metric() {
        let options = ReportOptions {
            variant: ReportVariant::Full,
            ..Default::default()
        };
        let input = BenchmarkInput { avg_project_size: 60_000.0, ..Default::default() };
        let report = derive_report(&input, &Benchmarks::INDUSTRY, options);

        assert_eq!(report.comparisons.len(), 8);
        let size = report
            .comparisons
            .iter()
            .find(|c| c.metric == Metric::AvgProjectSize)
            .unwrap();
        assert_eq!(size.benchmark, 75_000.0);
        assert_eq!(size.gap(), -15_000.0);
    }

    #[test]
    fn test_custom_benchmarks() {
        let mut benchmarks = Benchmarks::INDUSTRY;
        benchmarks.financial.profit_margin = 8.0;
        let input = BenchmarkInput { profit_margin: 10.0, conversion_rate: 50.0, ..Default::default() };

        let report = derive_report(&input, &benchmarks, ReportOptions::default());
        assert!(report.advisories.is_empty());
    }

    #[test]
    fn test_policy_and_variant_parse() {
        assert_eq!("clamp".parse::<ResidualPolicy>(), Ok(ResidualPolicy::Clamp));
        assert_eq!("pass-through".parse::<ResidualPolicy>(), Ok(ResidualPolicy::PassThrough));
        assert!("round".parse::<ResidualPolicy>().is_err());
        assert_eq!("full".parse::<ReportVariant>(), Ok(ReportVariant::Full));
        assert!("detailed".parse::<ReportVariant>().is_err());
    }

    proptest! {
        #[test]
        fn prop_report_is_deterministic(
            labor in 0.0f64..100.0,
            overhead in 0.0f64..100.0,
            margin in 0.0f64..100.0,
            conversion in 0.0f64..100.0,
            lead_cost in 0.0f64..1000.0,
        ) {
            let input = BenchmarkInput {
                labor_cost: labor,
                overhead_cost: overhead,
                profit_margin: margin,
                conversion_rate: conversion,
                lead_cost,
                ..Default::default()
            };
            let options = ReportOptions { variant: ReportVariant::Full, ..Default::default() };
            prop_assert_eq!(
                derive_report(&input, &Benchmarks::INDUSTRY, options),
                derive_report(&input, &Benchmarks::INDUSTRY, options)
            );
        }

        #[test]
        fn prop_clamped_residuals_stay_in_range(
            labor in 0.0f64..200.0,
            overhead in 0.0f64..200.0,
            margin in -50.0f64..200.0,
            conversion in -50.0f64..200.0,
        ) {
            let input = BenchmarkInput {
                labor_cost: labor,
                overhead_cost: overhead,
                profit_margin: margin,
                conversion_rate: conversion,
                ..Default::default()
            };
            let options = ReportOptions { residual_policy: ResidualPolicy::Clamp, ..Default::default() };
            let report = derive_report(&input, &Benchmarks::INDUSTRY, options);
            prop_assert!((0.0..=100.0).contains(&report.other_costs()));
            prop_assert!((0.0..=100.0).contains(&report.not_converted()));
        }
    }
}
