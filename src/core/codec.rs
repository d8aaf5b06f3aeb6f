use crate::core::{FileKind, Record, RecordCodec};
use crate::domain::model::FIELD_MAX;
use crate::utils::error::{BucketError, Result};

/// Semicolon separated, header row plus one data row, CRLF terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvCodec;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl FileKind {
    pub fn codec(&self) -> &'static dyn RecordCodec {
        match self {
            FileKind::Csv => &CsvCodec,
            FileKind::Json => &JsonCodec,
        }
    }
}

impl RecordCodec for CsvCodec {
    fn extension(&self) -> &'static str {
        FileKind::Csv.extension()
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());
        writer.serialize(record)?;
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(bytes);

        let record: Record = match reader.deserialize::<Record>().next() {
            Some(row) => row?,
            None => {
                return Err(BucketError::ValidationError {
                    message: "CSV file has no data row".to_string(),
                })
            }
        };
        check_bounds(record)
    }
}

impl RecordCodec for JsonCodec {
    fn extension(&self) -> &'static str {
        FileKind::Json.extension()
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(record)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record> {
        let record: Record = serde_json::from_slice(bytes)?;
        check_bounds(record)
    }
}

fn check_bounds(record: Record) -> Result<Record> {
    for (field, value) in [("Wynik", record.score), ("Czas", record.time)] {
        if value > FIELD_MAX {
            return Err(BucketError::ValidationError {
                message: format!("{} = {} is outside 0..={}", field, value, FIELD_MAX),
            });
        }
    }
    Ok(record)
}
