//! Server-rendered HTML for the landing page and the report page.
//!
//! Charts are plain tables with CSS bar widths; there is no client script.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::benchmarks::Benchmarks;
use crate::codec::{self, REPORT_PATH};
use crate::format::{dollars, number, percent};
use crate::insights::{ChartSlice, Comparison, ReportVariant};
use crate::models::BusinessType;

use super::service::Report;

struct FormField {
    key: &'static str,
    label: &'static str,
    placeholder: &'static str,
    percent: bool,
}

const FORM_FIELDS: [FormField; 11] = [
    FormField { key: "employees", label: "Number of Employees", placeholder: "Total number of employees", percent: false },
    FormField { key: "revenue", label: "Annual Revenue ($)", placeholder: "Enter your annual revenue", percent: false },
    FormField { key: "profitMargin", label: "Profit Margin (%)", placeholder: "Net profit as a percent of revenue", percent: true },
    FormField { key: "laborCost", label: "Labor Cost (%)", placeholder: "Labor as a percent of revenue", percent: true },
    FormField { key: "overheadCost", label: "Overhead Cost (%)", placeholder: "Overhead as a percent of revenue", percent: true },
    FormField { key: "monthlyLeads", label: "Monthly Leads", placeholder: "Leads received per month", percent: false },
    FormField { key: "conversionRate", label: "Conversion Rate (%)", placeholder: "Percentage of leads converted", percent: true },
    FormField { key: "leadCost", label: "Average Lead Cost ($)", placeholder: "Cost to acquire a lead", percent: false },
    FormField { key: "marketingSpend", label: "Marketing Spend (%)", placeholder: "Marketing as a percent of revenue", percent: true },
    FormField { key: "avgProjectSize", label: "Average Project Size ($)", placeholder: "Typical contract value", percent: false },
    FormField { key: "projectWinRate", label: "Project Win Rate (%)", placeholder: "Percentage of bids won", percent: true },
];

const PALETTE: [&str; 4] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4"];

const STYLE: &str = r##"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
.hero { background: linear-gradient(#2563eb, #1e40af); color: #fff; padding: 4rem 1rem; text-align: center; }
.features { display: flex; gap: 1.5rem; justify-content: center; flex-wrap: wrap; margin-top: 2rem; }
.feature { background: rgba(255,255,255,0.1); border-radius: 8px; padding: 1.5rem; max-width: 18rem; text-align: left; }
.container { max-width: 60rem; margin: 0 auto; padding: 2rem 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1.5rem; margin-bottom: 2rem; }
form label { display: block; font-weight: 600; margin-top: 1rem; }
form input, form select { width: 100%; padding: 0.5rem; }
button { margin-top: 1.5rem; width: 100%; padding: 0.75rem; background: #2563eb; color: #fff; border: 0; border-radius: 6px; }
table { width: 100%; border-collapse: collapse; }
td, th { padding: 0.4rem; text-align: left; }
.bar { height: 0.9rem; border-radius: 3px; }
footer { background: #f9fafb; text-align: center; padding: 2rem; color: #4b5563; }
"##;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        encode_text(title),
        STYLE,
        body
    )
}

/// GET /
pub fn landing_page() -> String {
    let mut body = String::new();

    body.push_str(
        r##"<section class="hero">
<h1>Know Your True Business Performance</h1>
<p>Stop guessing. See exactly how your contracting business stacks up against industry leaders.</p>
<a href="#assessment" style="color:#fff">Get Your Free Analysis</a>
<div class="features">
<div class="feature"><h3>Identify Profit Leaks</h3><p>See where you're leaving money on the table compared to industry benchmarks.</p></div>
<div class="feature"><h3>Optimize Marketing</h3><p>Find out if your lead costs and conversion rates match top performers.</p></div>
<div class="feature"><h3>Scale Confidently</h3><p>Get recommendations on hiring, pricing, and growth strategy.</p></div>
</div>
</section>
"##,
    );

    body.push_str(&format!(
        "<section class=\"container\" id=\"assessment\">\n<h2>Get Your Free Performance Analysis</h2>\n\
         <form method=\"get\" action=\"{}\">\n",
        REPORT_PATH
    ));

    body.push_str("<label for=\"businessType\">Business Type</label>\n");
    body.push_str("<select id=\"businessType\" name=\"businessType\" required>\n");
    body.push_str("<option value=\"\">Select your trade</option>\n");
    for kind in BusinessType::ALL {
        body.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            kind.as_param(),
            encode_text(kind.label())
        ));
    }
    body.push_str("</select>\n");

    for field in &FORM_FIELDS {
        let bounds = if field.percent { " min=\"0\" max=\"100\"" } else { " min=\"0\"" };
        body.push_str(&format!(
            "<label for=\"{key}\">{label}</label>\n\
             <input type=\"number\" step=\"any\" id=\"{key}\" name=\"{key}\" placeholder=\"{placeholder}\"{bounds} required>\n",
            key = field.key,
            label = encode_text(field.label),
            placeholder = encode_double_quoted_attribute(field.placeholder),
            bounds = bounds,
        ));
    }

    body.push_str("<button type=\"submit\">Generate My Performance Report</button>\n</form>\n</section>\n");
    body.push_str("<footer><p>&copy; 2025 Business Benchmark AI. All rights reserved.</p></footer>\n");

    page("Contractor Benchmark", &body)
}

fn slice_rows(out: &mut String, slices: &[ChartSlice]) {
    out.push_str("<table>\n");
    for (i, slice) in slices.iter().enumerate() {
        let width = slice.value.clamp(0.0, 100.0);
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td style=\"width:60%\"><div class=\"bar\" style=\"width:{}%;background:{}\"></div></td></tr>\n",
            encode_text(slice.label),
            percent(slice.value),
            number(width),
            PALETTE[i % PALETTE.len()],
        ));
    }
    out.push_str("</table>\n");
}

fn comparison_rows(out: &mut String, comparisons: &[Comparison]) {
    out.push_str("<table>\n<tr><th>Metric</th><th>You</th><th>Benchmark</th><th></th></tr>\n");
    for c in comparisons {
        let scale = c.yours.max(c.benchmark);
        let share = |value: f64| {
            if scale > 0.0 {
                (value.max(0.0) / scale * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            }
        };
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td style=\"width:40%\">\
             <div class=\"bar\" style=\"width:{}%;background:{}\"></div>\
             <div class=\"bar\" style=\"width:{}%;background:{}\"></div></td></tr>\n",
            encode_text(c.label),
            number(c.yours),
            number(c.benchmark),
            number(share(c.yours)),
            PALETTE[0],
            number(share(c.benchmark)),
            PALETTE[1],
        ));
    }
    out.push_str("</table>\n");
}

/// GET /report
pub fn report_page(report: &Report, benchmarks: &Benchmarks) -> String {
    let input = &report.input;
    let derived = &report.derived;
    let mut body = String::new();

    // no trade selected leaves the subtitle blank
    let trade = match input.business_type {
        BusinessType::Unspecified => String::new(),
        kind => kind.label().to_lowercase(),
    };

    body.push_str("<div class=\"container\">\n<a href=\"/\">&larr; Back to Assessment</a>\n");
    body.push_str(&format!(
        "<h1>Your Business Performance Report</h1>\n\
         <p>Comprehensive analysis of your {} contracting business</p>\n",
        encode_text(&trade)
    ));

    body.push_str(&format!(
        "<div class=\"card\"><h2>Company Overview</h2>\n<table><tr>\
         <td><strong>Business Type</strong><br>{}</td>\
         <td><strong>Employees</strong><br>{}</td>\
         <td><strong>Annual Revenue</strong><br>{}</td></tr></table></div>\n",
        encode_text(input.business_type.label()),
        number(input.employees),
        dollars(input.revenue),
    ));

    body.push_str("<div class=\"card\"><h2>Cost Breakdown</h2>\n");
    slice_rows(&mut body, &derived.cost_breakdown);
    body.push_str("</div>\n");

    body.push_str("<div class=\"card\"><h2>Lead Conversion Rate</h2>\n");
    slice_rows(&mut body, &derived.conversion_split);
    body.push_str("</div>\n");

    body.push_str("<div class=\"card\"><h2>Performance vs. Industry Benchmarks</h2>\n");
    comparison_rows(&mut body, &derived.comparisons);
    if report.variant == ReportVariant::Summary {
        let href = format!("{}?{}&variant=full", REPORT_PATH, codec::encode(input));
        body.push_str(&format!(
            "<p><a href=\"{}\">Compare every metric</a></p>\n",
            encode_double_quoted_attribute(&href),
        ));
    }
    body.push_str("</div>\n");

    body.push_str("<div class=\"card\"><h2>Key Insights</h2>\n");
    if derived.advisories.is_empty() {
        body.push_str(&format!(
            "<p>You meet or beat the industry benchmarks for profit margin ({}), conversion rate ({}) and lead cost ({}).</p>\n",
            percent(benchmarks.financial.profit_margin),
            percent(benchmarks.sales_marketing.conversion_rate),
            encode_text(&dollars(benchmarks.sales_marketing.lead_cost)),
        ));
    } else {
        body.push_str("<ul>\n");
        for advisory in &derived.advisories {
            body.push_str(&format!("<li>{}</li>\n", encode_text(advisory.message())));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</div>\n</div>\n");

    page("Your Business Performance Report", &body)
}
