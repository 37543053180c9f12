//! Table definition for persisted scenarios.
//!
//! Unbounded payback/ROI values are stored as `NULL`. Rows written by older
//! deployments may hold `Inf` in those columns; both decode as unbounded.
//! Non-numeric values in any numeric column read back as `NULL`.

/// Creates the scenarios table if it does not exist.
pub const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS scenarios (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        scenario_name TEXT NOT NULL,
        monthly_invoice_volume REAL,
        num_ap_staff REAL,
        avg_hours_per_invoice REAL,
        hourly_wage REAL,
        error_rate_manual REAL,
        error_cost REAL,
        time_horizon_months INTEGER,
        one_time_implementation_cost REAL,
        monthly_savings REAL,
        payback_months REAL,
        cumulative_savings REAL,
        net_savings REAL,
        roi_percentage REAL
    )
";

pub(crate) const LIST: &str =
    "SELECT id, scenario_name FROM scenarios ORDER BY scenario_name, id";

/// Fetches one row.
///
/// Older deployments bound raw request values, so a numeric column may hold
/// text (a blank legacy field) and the INTEGER horizon may hold a REAL. Such
/// values are cast to the declared type, or read as `NULL` when not numeric.
pub(crate) const GET: &str = "
    SELECT id, scenario_name,
           CASE WHEN typeof(monthly_invoice_volume) IN ('integer', 'real') THEN CAST(monthly_invoice_volume AS REAL) END AS monthly_invoice_volume,
           CASE WHEN typeof(num_ap_staff) IN ('integer', 'real') THEN CAST(num_ap_staff AS REAL) END AS num_ap_staff,
           CASE WHEN typeof(avg_hours_per_invoice) IN ('integer', 'real') THEN CAST(avg_hours_per_invoice AS REAL) END AS avg_hours_per_invoice,
           CASE WHEN typeof(hourly_wage) IN ('integer', 'real') THEN CAST(hourly_wage AS REAL) END AS hourly_wage,
           CASE WHEN typeof(error_rate_manual) IN ('integer', 'real') THEN CAST(error_rate_manual AS REAL) END AS error_rate_manual,
           CASE WHEN typeof(error_cost) IN ('integer', 'real') THEN CAST(error_cost AS REAL) END AS error_cost,
           CASE WHEN typeof(time_horizon_months) IN ('integer', 'real') THEN CAST(time_horizon_months AS INTEGER) END AS time_horizon_months,
           CASE WHEN typeof(one_time_implementation_cost) IN ('integer', 'real') THEN CAST(one_time_implementation_cost AS REAL) END AS one_time_implementation_cost,
           CASE WHEN typeof(monthly_savings) IN ('integer', 'real') THEN CAST(monthly_savings AS REAL) END AS monthly_savings,
           CASE WHEN typeof(payback_months) IN ('integer', 'real') THEN CAST(payback_months AS REAL) END AS payback_months,
           CASE WHEN typeof(cumulative_savings) IN ('integer', 'real') THEN CAST(cumulative_savings AS REAL) END AS cumulative_savings,
           CASE WHEN typeof(net_savings) IN ('integer', 'real') THEN CAST(net_savings AS REAL) END AS net_savings,
           CASE WHEN typeof(roi_percentage) IN ('integer', 'real') THEN CAST(roi_percentage AS REAL) END AS roi_percentage
    FROM scenarios WHERE id = ?1
";

pub(crate) const INSERT: &str = "
    INSERT INTO scenarios (
        scenario_name, monthly_invoice_volume, num_ap_staff, avg_hours_per_invoice,
        hourly_wage, error_rate_manual, error_cost, time_horizon_months,
        one_time_implementation_cost, monthly_savings, payback_months,
        cumulative_savings, net_savings, roi_percentage
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
";

pub(crate) const DELETE: &str = "DELETE FROM scenarios WHERE id = ?1";

pub(crate) const PING: &str = "SELECT 1";

pub(crate) const COLUMN_NAMES: &str = "SELECT name FROM pragma_table_info('scenarios')";

/// Result columns absent from tables created by older deployments.
pub(crate) const LATE_RESULT_COLUMNS: [&str; 2] = ["cumulative_savings", "net_savings"];

/// Derives the late result columns from the snapshotted monthly savings.
pub(crate) const BACKFILL_LATE_RESULTS: &str = "
    UPDATE scenarios
    SET cumulative_savings = monthly_savings * time_horizon_months,
        net_savings = monthly_savings * time_horizon_months - one_time_implementation_cost
    WHERE cumulative_savings IS NULL
";
