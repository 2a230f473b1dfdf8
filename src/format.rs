//! Display helpers shared by the HTML pages and the terminal report

/// Up to two decimals, trailing zeros dropped: `12`, `12.5`, `-10`
pub fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Thousands separators with up to three decimals: `500,000`, `500,000.5`
pub fn thousands(value: f64) -> String {
    let text = format!("{:.3}", value.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

pub fn dollars(value: f64) -> String {
    format!("${}", thousands(value))
}

pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number(12.0), "12");
        assert_eq!(number(12.5), "12.5");
        assert_eq!(number(33.333), "33.33");
        assert_eq!(number(-10.0), "-10");
        assert_eq!(number(-0.001), "0");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(500_000.0), "500,000");
        assert_eq!(thousands(-2500.0), "-2,500");
        assert_eq!(thousands(-0.0001), "0");
    }

    #[test]
    fn test_thousands_keeps_fraction() {
        assert_eq!(thousands(500_000.5), "500,000.5");
        assert_eq!(thousands(1_234_567.125), "1,234,567.125");
        assert_eq!(thousands(1.23456), "1.235");
    }

    #[test]
    fn test_dollars_and_percent() {
        assert_eq!(dollars(75_000.0), "$75,000");
        assert_eq!(percent(25.0), "25%");
    }
}
