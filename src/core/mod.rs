pub mod codec;
pub mod engine;
pub mod generator;
pub mod resolver;
pub mod runner;

pub use crate::domain::model::{
    Bucket, BucketSequence, DayRange, FileKind, Mode, Model, Month, MonthDays, Record,
    Selection, TimeOfDay, Weekday,
};
pub use crate::domain::ports::{RecordCodec, Storage};
pub use crate::utils::error::{BucketError, Result};
