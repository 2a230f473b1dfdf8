//! Query string codec for the form → report navigation.
//!
//! The report URL's query string is the whole contract between the landing
//! page and the report page. Decoding is total: missing keys take their
//! default and unparseable numbers are coerced to zero, so a report can
//! always be rendered.

use tracing::warn;

use crate::models::{BenchmarkInput, BusinessType};

/// Query keys in form order
pub const FIELD_KEYS: [&str; 12] = [
    "businessType",
    "employees",
    "revenue",
    "profitMargin",
    "laborCost",
    "overheadCost",
    "monthlyLeads",
    "conversionRate",
    "leadCost",
    "marketingSpend",
    "avgProjectSize",
    "projectWinRate",
];

/// Path of the report page
pub const REPORT_PATH: &str = "/report";

/// Parse one numeric field.
///
/// Surrounding whitespace is ignored and empty text is zero. Text that does
/// not parse as a finite number (`abc`, `NaN`, `inf`) is also zero.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Serialize every field as a urlencoded key/value pair
pub fn encode(input: &BenchmarkInput) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(FIELD_KEYS.len());
    pairs.push(("businessType", input.business_type.as_param().to_string()));
    for (key, value) in input.numeric_fields() {
        pairs.push((key, value.to_string()));
    }

    serde_urlencoded::to_string(&pairs).unwrap_or_else(|e| {
        warn!("Failed to encode benchmark input: {}", e);
        String::new()
    })
}

fn query_pairs(query: &str) -> Option<Vec<(String, String)>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    match serde_urlencoded::from_str(query) {
        Ok(pairs) => Some(pairs),
        Err(e) => {
            warn!("Malformed report query, using defaults: {}", e);
            None
        }
    }
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// First value of `key` in a query string, with or without the leading `?`
pub fn query_value(query: &str, key: &str) -> Option<String> {
    let pairs = query_pairs(query)?;
    first(&pairs, key).map(str::to_string)
}

/// Rebuild a [`BenchmarkInput`] from a query string, with or without the
/// leading `?`. The first occurrence of a repeated key wins.
pub fn decode(query: &str) -> BenchmarkInput {
    let Some(pairs) = query_pairs(query) else {
        return BenchmarkInput::default();
    };

    let mut input = BenchmarkInput {
        business_type: BusinessType::from(first(&pairs, "businessType").unwrap_or("")),
        ..Default::default()
    };
    for key in &FIELD_KEYS[1..] {
        if let Some(slot) = input.numeric_field_mut(key) {
            *slot = parse_number(first(&pairs, key).unwrap_or("0"));
        }
    }
    input
}

/// Link to the report page for this input
pub fn report_url(input: &BenchmarkInput) -> String {
    format!("{}?{}", REPORT_PATH, encode(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> BenchmarkInput {
        BenchmarkInput {
            business_type: BusinessType::Electrical,
            employees: 12.0,
            revenue: 500_000.0,
            profit_margin: 18.0,
            labor_cost: 38.5,
            overhead_cost: 22.0,
            monthly_leads: 40.0,
            conversion_rate: 30.0,
            lead_cost: 95.0,
            marketing_spend: 8.0,
            avg_project_size: 12_500.0,
            project_win_rate: 45.0,
        }
    }

    #[test]
    fn test_encode_carries_every_field() {
        let query = encode(&sample());
        for key in FIELD_KEYS {
            assert!(query.contains(&format!("{}=", key)), "missing {}", key);
        }
        assert!(query.contains("businessType=electrical"));
        assert!(query.contains("employees=12&"));
        assert!(query.contains("laborCost=38.5"));
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(decode(&encode(&sample())), sample());
    }

    #[test]
    fn test_missing_employees_is_zero() {
        let input = decode("businessType=plumbing&revenue=250000");
        assert_eq!(input.employees, 0.0);
        assert_eq!(input.revenue, 250_000.0);
        assert_eq!(input.business_type, BusinessType::Plumbing);
    }

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(decode(""), BenchmarkInput::default());
        assert_eq!(decode("?"), BenchmarkInput::default());
    }

    #[test]
    fn test_leading_question_mark() {
        assert_eq!(decode("?employees=7").employees, 7.0);
    }

    #[test]
    fn test_non_numeric_coerces_to_zero() {
        let input = decode("employees=a+dozen&revenue=NaN&leadCost=inf&profitMargin=");
        assert_eq!(input.employees, 0.0);
        assert_eq!(input.revenue, 0.0);
        assert_eq!(input.lead_cost, 0.0);
        assert_eq!(input.profit_margin, 0.0);
    }

    #[test]
    fn test_parse_number_policy() {
        assert_eq!(parse_number(" 42 "), 42.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("-5"), -5.0);
        assert_eq!(parse_number("12abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(decode("employees=3&employees=9").employees, 3.0);
    }

    #[test]
    fn test_query_value_first_occurrence() {
        assert_eq!(query_value("?variant=full&variant=summary", "variant").as_deref(), Some("full"));
        assert_eq!(query_value("employees=3", "variant"), None);
    }

    #[test]
    fn test_unknown_business_type() {
        let input = decode("businessType=roofing&employees=4");
        assert_eq!(input.business_type, BusinessType::Unspecified);
        assert_eq!(input.employees, 4.0);
    }

    #[test]
    fn test_percent_encoded_values() {
        assert_eq!(decode("revenue=%2012500%20").revenue, 12_500.0);
    }

    #[test]
    fn test_report_url() {
        let url = report_url(&BenchmarkInput::default());
        assert!(url.starts_with("/report?businessType=&employees=0"));
    }

    fn business_type() -> impl Strategy<Value = BusinessType> {
        prop_oneof![
            Just(BusinessType::Electrical),
            Just(BusinessType::Plumbing),
            Just(BusinessType::Hvac),
            Just(BusinessType::General),
            Just(BusinessType::Unspecified),
        ]
    }

    prop_compose! {
        fn any_input()(
            business_type in business_type(),
            counts in proptest::array::uniform3(0.0f64..1e7),
            percents in proptest::array::uniform6(0.0f64..=100.0),
            money in proptest::array::uniform2(0.0f64..1e6),
        ) -> BenchmarkInput {
            BenchmarkInput {
                business_type,
                employees: counts[0],
                revenue: counts[1],
                monthly_leads: counts[2],
                profit_margin: percents[0],
                labor_cost: percents[1],
                overhead_cost: percents[2],
                conversion_rate: percents[3],
                marketing_spend: percents[4],
                project_win_rate: percents[5],
                lead_cost: money[0],
                avg_project_size: money[1],
            }
        }
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(input in any_input()) {
            prop_assert_eq!(decode(&encode(&input)), input);
        }

        #[test]
        fn prop_decode_never_yields_non_finite(query in ".*") {
            let input = decode(&query);
            for (_, value) in input.numeric_fields() {
                prop_assert!(value.is_finite());
            }
        }
    }
}
