use crate::core::runner::DEFAULT_BASE_NAME;
use crate::core::{DayRange, FileKind, Mode, Month, Selection, TimeOfDay};
use crate::utils::error::{BucketError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved bucket run, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub selection: SelectionConfig,
    pub storage: Option<StorageConfig>,
    pub logging: Option<LoggingConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub months: Vec<Month>,
    pub days: Vec<DayRange>,
    #[serde(default)]
    pub times: Vec<TimeOfDay>,
    pub mode: Mode,
    pub kinds: Vec<FileKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub root: Option<String>,
    pub base_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where to write the run summary as JSON.
    pub summary_path: Option<String>,
}

impl ProfileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| BucketError::ConfigError {
                message: format!("cannot read profile {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BucketError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BucketError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn root(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|s| s.root.as_deref())
            .unwrap_or(".")
    }

    pub fn base_name(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|s| s.base_name.as_deref())
            .unwrap_or(DEFAULT_BASE_NAME)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn summary_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.summary_path.as_deref())
    }

    pub fn to_selection(&self) -> Result<Selection> {
        self.validate()?;
        let selection = &self.selection;
        Selection::from_parallel(
            &selection.months,
            &selection.days,
            selection.times.clone(),
            &selection.kinds,
            selection.mode,
        )
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        let selection = &self.selection;
        validation::validate_non_empty_list("selection.months", &selection.months)?;
        validation::validate_same_length(
            "selection.months",
            &selection.months,
            "selection.days",
            &selection.days,
        )?;
        validation::validate_non_empty_list("selection.kinds", &selection.kinds)?;
        validation::validate_path("storage.root", self.root())?;
        validation::validate_base_name("storage.base_name", self.base_name())?;
        if let Some(path) = self.summary_path() {
            validation::validate_path("output.summary_path", path)?;
        }
        Ok(())
    }
}
