//! Shared report logic for the HTML pages and the JSON API

use tracing::debug;

use crate::benchmarks::Benchmarks;
use crate::codec;
use crate::insights::{derive_report, DerivedReport, ReportOptions, ReportVariant};
use crate::models::BenchmarkInput;

/// Read-only state behind every request
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    benchmarks: Benchmarks,
    options: ReportOptions,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub input: BenchmarkInput,
    pub derived: DerivedReport,
    pub variant: ReportVariant,
}

impl ReportService {
    pub fn new(benchmarks: Benchmarks, options: ReportOptions) -> Self {
        Self { benchmarks, options }
    }

    pub fn benchmarks(&self) -> &Benchmarks {
        &self.benchmarks
    }

    pub fn options(&self) -> ReportOptions {
        self.options
    }

    /// Decode a report query string and derive its report. `variant`
    /// overrides the configured default.
    pub fn report_for_query(&self, query: &str, variant: Option<ReportVariant>) -> Report {
        let input = codec::decode(query);
        self.report_for_input(input, variant)
    }

    pub fn report_for_input(&self, input: BenchmarkInput, variant: Option<ReportVariant>) -> Report {
        let options = ReportOptions {
            variant: variant.unwrap_or(self.options.variant),
            ..self.options
        };
        let derived = derive_report(&input, &self.benchmarks, options);
        debug!(
            business_type = input.business_type.as_param(),
            variant = %options.variant,
            advisories = derived.advisories.len(),
            "Derived report"
        );
        Report {
            input,
            derived,
            variant: options.variant,
        }
    }
}
