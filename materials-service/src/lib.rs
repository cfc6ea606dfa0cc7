//! Materials Project summary search: one outbound call per query, no retries,
//! no caching, records reduced to a fixed field set.

pub mod client;
pub mod config;
pub mod errors;
pub mod query;

pub use client::{MaterialRecord, MaterialsProjectClient};
pub use config::MaterialsConfig;
pub use errors::{MaterialsConfigError, MaterialsError, MaterialsResult};
pub use query::{DEFAULT_LIMIT, MAX_LIMIT, SUMMARY_FIELDS, SearchCriterion, SummarySearch};
