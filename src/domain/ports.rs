use crate::domain::model::Record;
use crate::utils::error::Result;
use std::path::Path;

/// Byte-level access to bucket files, paths relative to the storage root.
pub trait Storage {
    /// Returns `Ok(None)` when nothing exists at `path`.
    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Creates missing parent directories, then replaces any existing content.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait RecordCodec: Send + Sync {
    fn extension(&self) -> &'static str;
    fn encode(&self, record: &Record) -> Result<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> Result<Record>;
}
