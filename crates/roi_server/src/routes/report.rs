//! Report generation endpoint
//!
//! Captures a lead's email and returns a static HTML summary of previously
//! computed results. Nothing is recomputed or stored.

use axum::{response::Html, routing::post, Json, Router};
use roi_core::{Metric, ScenarioResult};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;

/// Body of `POST /report/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    /// Lead email; required and non-blank
    #[serde(default)]
    pub email: Option<String>,
    /// Results as returned by `/simulate`; missing fields render as zero
    #[serde(default)]
    pub results: ScenarioResult,
}

/// Build the report routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/report/generate", post(generate_handler))
}

/// POST /report/generate - Render the HTML report for a captured lead
async fn generate_handler(Json(request): Json<ReportRequest>) -> Result<Html<String>, ApiError> {
    let email = match request.email {
        Some(email) if !email.trim().is_empty() => email,
        _ => return Err(ApiError::Validation("Email is required".to_string())),
    };

    tracing::info!(email = %email, "lead captured");

    Ok(Html(render_report(&email, &request.results)))
}

/// Render the report page
pub fn render_report(email: &str, results: &ScenarioResult) -> String {
    let payback = match results.payback_months {
        Metric::Finite(months) => format!("{:.2} months", months),
        Metric::Unbounded => "Never".to_string(),
    };
    let roi = match results.roi_percentage {
        Metric::Finite(pct) => format!("{:.2}%", pct),
        Metric::Unbounded => "N/A".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>ROI Report</title></head>
<body style="font-family: sans-serif;">
<h1>Invoice Automation ROI Report</h1>
<h2>Projected Savings</h2>
<p><strong>Monthly Savings:</strong> {monthly}</p>
<p><strong>Payback Period:</strong> {payback}</p>
<p><strong>Total Net Savings:</strong> {net}</p>
<p><strong>ROI Percentage:</strong> {roi}</p>
<hr>
<p><em>Report generated for: {email}</em></p>
</body>
</html>
"#,
        monthly = format_currency(results.monthly_savings),
        payback = payback,
        net = format_currency(results.net_savings),
        roi = roi,
        email = escape_html(email),
    )
}

/// Dollar amount to cents, sign ahead of the symbol: `-$33.00`.
fn format_currency(amount: f64) -> String {
    let digits = format!("{:.2}", amount.abs());
    if amount < 0.0 && digits != "0.00" {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
