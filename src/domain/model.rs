use crate::utils::error::{BucketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }
}

impl FromStr for Month {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self> {
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| BucketError::InvalidToken {
                kind: "month",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekdays in canonical Mon..Sun order; `index()` is the position in `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }
}

impl FromStr for Weekday {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| BucketError::InvalidToken {
                kind: "weekday",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Am,
    Pm,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Am => "am",
            TimeOfDay::Pm => "pm",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "am" => Ok(TimeOfDay::Am),
            "pm" => Ok(TimeOfDay::Pm),
            _ => Err(BucketError::InvalidToken {
                kind: "time of day",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive span of weekdays, `start` never later than `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayRange {
    start: Weekday,
    end: Weekday,
}

impl DayRange {
    pub fn new(start: Weekday, end: Weekday) -> Result<Self> {
        if start.index() > end.index() {
            return Err(BucketError::InvalidDayRange {
                value: format!("{}-{}", start, end),
                reason: format!("{} comes after {} in Mon..Sun order", start, end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: Weekday) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn days(&self) -> &'static [Weekday] {
        &Weekday::ALL[self.start.index()..=self.end.index()]
    }
}

impl FromStr for DayRange {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| BucketError::InvalidDayRange {
            value: s.to_string(),
            reason,
        };

        match s.split_once('-') {
            None => s
                .parse::<Weekday>()
                .map(DayRange::single)
                .map_err(|e| invalid(e.to_string())),
            Some((start, end)) => {
                let start = start.parse::<Weekday>().map_err(|e| invalid(e.to_string()))?;
                let end = end.parse::<Weekday>().map_err(|e| invalid(e.to_string()))?;
                DayRange::new(start, end).map_err(|_| {
                    invalid(format!("{} comes after {} in Mon..Sun order", start, end))
                })
            }
        }
    }
}

impl TryFrom<String> for DayRange {
    type Error = BucketError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DayRange> for String {
    fn from(range: DayRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bucket {
    pub month: Month,
    pub weekday: Weekday,
    pub time: TimeOfDay,
}

impl Bucket {
    pub fn new(month: Month, weekday: Weekday, time: TimeOfDay) -> Self {
        Self {
            month,
            weekday,
            time,
        }
    }

    /// Relative directory `month/weekday/time`.
    pub fn dir(&self) -> PathBuf {
        [self.month.as_str(), self.weekday.as_str(), self.time.as_str()]
            .iter()
            .collect()
    }

    pub fn file_path(&self, kind: FileKind, base_name: &str) -> PathBuf {
        self.dir().join(kind.file_name(base_name))
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.weekday, self.time)
    }
}

pub type BucketSequence = Vec<Bucket>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    A,
    B,
    C,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::A, Model::B, Model::C];
}

pub const FIELD_MAX: u16 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Model")]
    pub model: Model,
    #[serde(rename = "Wynik")]
    pub score: u16,
    #[serde(rename = "Czas")]
    pub time: u16,
}

impl Record {
    /// Contribution of this record to the read aggregate.
    pub fn contribution(&self) -> u64 {
        match self.model {
            Model::A => u64::from(self.time),
            Model::B | Model::C => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Csv,
    Json,
}

impl FileKind {
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Csv => "csv",
            FileKind::Json => "json",
        }
    }

    pub fn file_name(&self, base_name: &str) -> String {
        format!("{}.{}", base_name, self.extension())
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Read,
    Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDays {
    pub month: Month,
    pub days: DayRange,
}

/// A validated request: month/range pairs, time assignments, file kinds and mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub entries: Vec<MonthDays>,
    pub times: Vec<TimeOfDay>,
    pub kinds: Vec<FileKind>,
    pub mode: Mode,
}

impl Selection {
    /// Pairs `months[i]` with `ranges[i]`. Kinds are de-duplicated keeping request order.
    pub fn from_parallel(
        months: &[Month],
        ranges: &[DayRange],
        times: Vec<TimeOfDay>,
        kinds: &[FileKind],
        mode: Mode,
    ) -> Result<Self> {
        if months.len() != ranges.len() {
            return Err(BucketError::ValidationError {
                message: format!(
                    "the number of day ranges ({}) doesn't match the number of months ({})",
                    ranges.len(),
                    months.len()
                ),
            });
        }

        let mut unique_kinds = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !unique_kinds.contains(kind) {
                unique_kinds.push(*kind);
            }
        }
        if unique_kinds.is_empty() {
            return Err(BucketError::ValidationError {
                message: "no file kind selected".to_string(),
            });
        }

        let entries = months
            .iter()
            .zip(ranges)
            .map(|(&month, &days)| MonthDays { month, days })
            .collect();

        Ok(Self {
            entries,
            times,
            kinds: unique_kinds,
            mode,
        })
    }
}
