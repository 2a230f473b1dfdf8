use serde::{Deserialize, Serialize};

use crate::codec;

/// Contracting trade the business reports under
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Electrical,
    Plumbing,
    Hvac,
    General,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl From<&str> for BusinessType {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "electrical" => BusinessType::Electrical,
            "plumbing" => BusinessType::Plumbing,
            "hvac" => BusinessType::Hvac,
            "general" => BusinessType::General,
            _ => BusinessType::Unspecified,
        }
    }
}

impl BusinessType {
    pub const ALL: [BusinessType; 4] = [
        BusinessType::Electrical,
        BusinessType::Plumbing,
        BusinessType::Hvac,
        BusinessType::General,
    ];

    /// Value carried in the query string
    pub fn as_param(&self) -> &'static str {
        match self {
            BusinessType::Electrical => "electrical",
            BusinessType::Plumbing => "plumbing",
            BusinessType::Hvac => "hvac",
            BusinessType::General => "general",
            BusinessType::Unspecified => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::Electrical => "Electrical",
            BusinessType::Plumbing => "Plumbing",
            BusinessType::Hvac => "HVAC",
            BusinessType::General => "General",
            BusinessType::Unspecified => "Unspecified",
        }
    }
}

/// Self-reported business metrics collected by the landing page form.
///
/// Percent-valued fields are expected in [0, 100] but nothing enforces it;
/// the form's min/max attributes are hints only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BenchmarkInput {
    pub business_type: BusinessType,
    pub employees: f64,
    pub revenue: f64,
    pub profit_margin: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
    pub monthly_leads: f64,
    pub conversion_rate: f64,
    pub lead_cost: f64,
    pub marketing_spend: f64,
    pub avg_project_size: f64,
    pub project_win_rate: f64,
}

impl BenchmarkInput {
    /// Return a new snapshot with one field replaced.
    ///
    /// `key` is the query parameter name; unknown keys leave the snapshot
    /// unchanged. Numeric text goes through [`codec::parse_number`].
    pub fn with_field(&self, key: &str, raw: &str) -> Self {
        let mut next = self.clone();
        if key == "businessType" {
            next.business_type = BusinessType::from(raw);
        } else if let Some(slot) = next.numeric_field_mut(key) {
            *slot = codec::parse_number(raw);
        }
        next
    }

    /// Numeric fields paired with their query keys, in form order
    pub fn numeric_fields(&self) -> [(&'static str, f64); 11] {
        [
            ("employees", self.employees),
            ("revenue", self.revenue),
            ("profitMargin", self.profit_margin),
            ("laborCost", self.labor_cost),
            ("overheadCost", self.overhead_cost),
            ("monthlyLeads", self.monthly_leads),
            ("conversionRate", self.conversion_rate),
            ("leadCost", self.lead_cost),
            ("marketingSpend", self.marketing_spend),
            ("avgProjectSize", self.avg_project_size),
            ("projectWinRate", self.project_win_rate),
        ]
    }

    pub(crate) fn numeric_field_mut(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "employees" => Some(&mut self.employees),
            "revenue" => Some(&mut self.revenue),
            "profitMargin" => Some(&mut self.profit_margin),
            "laborCost" => Some(&mut self.labor_cost),
            "overheadCost" => Some(&mut self.overhead_cost),
            "monthlyLeads" => Some(&mut self.monthly_leads),
            "conversionRate" => Some(&mut self.conversion_rate),
            "leadCost" => Some(&mut self.lead_cost),
            "marketingSpend" => Some(&mut self.marketing_spend),
            "avgProjectSize" => Some(&mut self.avg_project_size),
            "projectWinRate" => Some(&mut self.project_win_rate),
            _ => None,
        }
    }
}
