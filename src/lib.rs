pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::ProfileConfig;
pub use crate::core::{engine::BucketEngine, resolver::resolve, runner::RunSummary};
pub use utils::error::{BucketError, Result};
