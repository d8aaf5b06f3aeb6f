#[cfg(feature = "cli")]
pub mod cli;
pub mod profile_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use profile_config::ProfileConfig;
