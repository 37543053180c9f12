//! ScenarioStore: list/get/insert/delete over the scenarios table.

use std::path::{Path, PathBuf};
use std::time::Duration;

use roi_core::types::DEFAULT_HORIZON_MONTHS;
use roi_core::{Metric, NewScenario, Scenario, ScenarioInput, ScenarioResult, ScenarioSummary};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqliteSynchronous};
use sqlx::{Connection, FromRow};

use crate::error::{StoreError, StoreResult};
use crate::schema;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the scenario database file.
///
/// Holds connection options only; each operation opens and closes its own
/// connection. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl ScenarioStore {
    /// Creates a handle for the database at `path` without touching it.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        Self { path, options }
    }

    /// Creates a handle and makes sure the table exists.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let store = Self::new(path);
        store.init().await?;
        Ok(store)
    }

    /// Database file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the table if absent and adds result columns missing from
    /// tables written by older deployments.
    pub async fn init(&self) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        sqlx::query(schema::CREATE_TABLE).execute(&mut conn).await?;
        add_late_result_columns(&mut conn).await?;
        conn.close().await?;

        tracing::info!(path = %self.path.display(), "scenario store ready");
        Ok(())
    }

    /// Lists scenario ids and names, ordered by name.
    pub async fn list(&self) -> StoreResult<Vec<ScenarioSummary>> {
        let mut conn = self.connect().await?;
        let rows: Vec<(i64, String)> = sqlx::query_as(schema::LIST).fetch_all(&mut conn).await?;
        conn.close().await?;

        Ok(rows
            .into_iter()
            .map(|(id, scenario_name)| ScenarioSummary { id, scenario_name })
            .collect())
    }

    /// Fetches one scenario.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row has this id.
    pub async fn get(&self, id: i64) -> StoreResult<Scenario> {
        let mut conn = self.connect().await?;
        let row: Option<ScenarioRow> = sqlx::query_as(schema::GET)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;

        row.map(Scenario::from).ok_or(StoreError::NotFound(id))
    }

    /// Inserts a priced scenario and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` without writing anything if the name
    /// is empty or blank.
    pub async fn insert(&self, scenario: &NewScenario) -> StoreResult<i64> {
        if scenario.scenario_name.trim().is_empty() {
            return Err(StoreError::Validation(
                "scenario_name is required".to_string(),
            ));
        }

        let input = &scenario.input;
        let result = &scenario.result;

        let mut conn = self.connect().await?;
        let done = sqlx::query(schema::INSERT)
            .bind(scenario.scenario_name.as_str())
            .bind(input.monthly_invoice_volume)
            .bind(input.num_ap_staff)
            .bind(input.avg_hours_per_invoice)
            .bind(input.hourly_wage)
            .bind(input.error_rate_manual)
            .bind(input.error_cost)
            .bind(input.time_horizon_months)
            .bind(input.one_time_implementation_cost)
            .bind(result.monthly_savings)
            .bind(result.payback_months.value())
            .bind(result.cumulative_savings)
            .bind(result.net_savings)
            .bind(result.roi_percentage.value())
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        let id = done.last_insert_rowid();
        tracing::debug!(scenario_id = id, name = %scenario.scenario_name, "scenario inserted");
        Ok(id)
    }

    /// Deletes a scenario. Deleting an unknown id succeeds.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let done = sqlx::query(schema::DELETE).bind(id).execute(&mut conn).await?;
        conn.close().await?;

        tracing::debug!(scenario_id = id, rows = done.rows_affected(), "scenario deleted");
        Ok(())
    }

    /// Checks that the database can be opened and queried.
    pub async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        sqlx::query(schema::PING).execute(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }

    async fn connect(&self) -> StoreResult<SqliteConnection> {
        Ok(SqliteConnection::connect_with(&self.options).await?)
    }
}

async fn add_late_result_columns(conn: &mut SqliteConnection) -> StoreResult<()> {
    let existing: Vec<String> = sqlx::query_scalar(schema::COLUMN_NAMES)
        .fetch_all(&mut *conn)
        .await?;

    let mut added = false;
    for column in schema::LATE_RESULT_COLUMNS {
        if existing.iter().any(|c| c == column) {
            continue;
        }
        tracing::info!(column, "adding result column to scenarios table");
        let sql = format!("ALTER TABLE scenarios ADD COLUMN {} REAL", column);
        sqlx::query(&sql).execute(&mut *conn).await?;
        added = true;
    }

    if added {
        let done = sqlx::query(schema::BACKFILL_LATE_RESULTS)
            .execute(&mut *conn)
            .await?;
        tracing::info!(rows = done.rows_affected(), "backfilled result columns");
    }
    Ok(())
}

#[derive(Debug, FromRow)]
struct ScenarioRow {
    id: i64,
    scenario_name: String,
    monthly_invoice_volume: Option<f64>,
    num_ap_staff: Option<f64>,
    avg_hours_per_invoice: Option<f64>,
    hourly_wage: Option<f64>,
    error_rate_manual: Option<f64>,
    error_cost: Option<f64>,
    time_horizon_months: Option<i64>,
    one_time_implementation_cost: Option<f64>,
    monthly_savings: Option<f64>,
    payback_months: Option<f64>,
    cumulative_savings: Option<f64>,
    net_savings: Option<f64>,
    roi_percentage: Option<f64>,
}

impl From<ScenarioRow> for Scenario {
    fn from(row: ScenarioRow) -> Self {
        Scenario {
            id: row.id,
            scenario_name: row.scenario_name,
            input: ScenarioInput {
                monthly_invoice_volume: row.monthly_invoice_volume.unwrap_or_default(),
                hourly_wage: row.hourly_wage.unwrap_or_default(),
                error_rate_manual: row.error_rate_manual.unwrap_or_default(),
                error_cost: row.error_cost.unwrap_or_default(),
                time_horizon_months: row.time_horizon_months.unwrap_or(DEFAULT_HORIZON_MONTHS),
                one_time_implementation_cost: row.one_time_implementation_cost.unwrap_or_default(),
                num_ap_staff: row.num_ap_staff,
                avg_hours_per_invoice: row.avg_hours_per_invoice,
            },
            result: ScenarioResult {
                monthly_savings: row.monthly_savings.unwrap_or_default(),
                payback_months: Metric::from_stored(row.payback_months),
                cumulative_savings: row.cumulative_savings.unwrap_or_default(),
                net_savings: row.net_savings.unwrap_or_default(),
                roi_percentage: Metric::from_stored(row.roi_percentage),
            },
        }
    }
}
