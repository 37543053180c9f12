//! # roi_store: Scenario Persistence
//!
//! A single SQLite table of named scenarios with list/get/insert/delete.
//!
//! Every operation opens its own connection, runs one statement and closes
//! the connection before returning. An early return drops the connection,
//! which releases it. Concurrent callers are serialised by SQLite's own
//! locking; the store adds a busy timeout so writers wait rather than fail.
//!
//! ## Example
//!
//! ```no_run
//! # async fn demo() -> roi_store::StoreResult<()> {
//! use roi_core::{Calculator, NewScenario, ScenarioInput};
//! use roi_store::ScenarioStore;
//!
//! let store = ScenarioStore::open("scenarios.db").await?;
//! let scenario = NewScenario::priced("Baseline", ScenarioInput::default(), &Calculator::default());
//! let id = store.insert(&scenario).await?;
//! let saved = store.get(id).await?;
//! assert_eq!(saved.scenario_name, "Baseline");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod schema;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::ScenarioStore;
