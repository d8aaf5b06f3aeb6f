use crate::core::runner::DEFAULT_BASE_NAME;
use crate::core::{DayRange, FileKind, Mode, Month, Selection, TimeOfDay};
use crate::utils::error::{BucketError, Result};
use crate::utils::validation::{self, Validate};
use clap::{ArgGroup, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "calendar-buckets")]
#[command(
    about = "Creates and reads files with example data in sub-folders following a /month/weekday/time/ hierarchy"
)]
#[command(group(ArgGroup::new("operation").required(true).args(["read", "write"])))]
pub struct CliConfig {
    /// Months for which files should be accessed
    #[arg(short, long, num_args = 1.., required = true, value_name = "MONTH")]
    pub months: Vec<Month>,

    /// Weekday ranges `start-end`, one for each month
    #[arg(short, long, num_args = 1.., required = true, value_name = "DAYS_RANGE")]
    pub days: Vec<DayRange>,

    /// Times of day (am/pm), one for each month-day combination (`am` if not specified)
    #[arg(short, long, num_args = 0.., value_name = "TIME")]
    pub time: Vec<TimeOfDay>,

    /// Read the files and sum `Czas` over model A records
    #[arg(short, long)]
    pub read: bool,

    /// Write a freshly generated record into every selected file
    #[arg(short, long)]
    pub write: bool,

    #[arg(short, long)]
    pub csv: bool,

    #[arg(short, long)]
    pub json: bool,

    /// Directory that holds the month folders
    #[arg(long, default_value = ".")]
    pub root: String,

    /// File name shared by every file kind, without extension
    #[arg(long, default_value = DEFAULT_BASE_NAME)]
    pub base_name: String,

    /// Print the files the selection resolves to without touching them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn mode(&self) -> Result<Mode> {
        match (self.read, self.write) {
            (true, false) => Ok(Mode::Read),
            (false, true) => Ok(Mode::Write),
            _ => Err(BucketError::ValidationError {
                message: "exactly one of --read or --write must be given".to_string(),
            }),
        }
    }

    pub fn kinds(&self) -> Vec<FileKind> {
        let mut kinds = Vec::new();
        if self.csv {
            kinds.push(FileKind::Csv);
        }
        if self.json {
            kinds.push(FileKind::Json);
        }
        kinds
    }

    pub fn to_selection(&self) -> Result<Selection> {
        self.validate()?;
        Selection::from_parallel(
            &self.months,
            &self.days,
            self.time.clone(),
            &self.kinds(),
            self.mode()?,
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.mode()?;
        if self.kinds().is_empty() {
            return Err(BucketError::ValidationError {
                message: "no file type specified, add -c or -j".to_string(),
            });
        }
        validation::validate_non_empty_list("months", &self.months)?;
        validation::validate_same_length("months", &self.months, "day ranges", &self.days)?;
        validation::validate_path("root", &self.root)?;
        validation::validate_base_name("base_name", &self.base_name)?;
        Ok(())
    }
}
