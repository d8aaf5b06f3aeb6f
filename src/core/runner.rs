use crate::core::generator;
use crate::core::{Bucket, BucketError, FileKind, Mode, Model, Record, Result, Storage};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::path::Path;

pub const DEFAULT_BASE_NAME: &str = "Dane";

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub mode: Mode,
    pub buckets: usize,
    pub files_written: usize,
    pub files_read: usize,
    pub files_missing: usize,
    pub matching_records: usize,
    /// Sum of `Czas` over model A records; always 0 in write mode.
    pub aggregate: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    fn start(mode: Mode, buckets: usize) -> Self {
        let now = Utc::now();
        Self {
            mode,
            buckets,
            files_written: 0,
            files_read: 0,
            files_missing: 0,
            matching_records: 0,
            aggregate: 0,
            started_at: now,
            finished_at: now,
        }
    }
}

pub struct BucketRunner<S: Storage, R: Rng> {
    storage: S,
    rng: R,
    base_name: String,
}

impl<S: Storage, R: Rng> BucketRunner<S, R> {
    pub fn new(storage: S, rng: R) -> Self {
        Self {
            storage,
            rng,
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Visits every bucket, then every kind, in order. The first storage or codec
    /// failure ends the run; files handled before it stay as they are.
    pub fn run(&mut self, buckets: &[Bucket], kinds: &[FileKind], mode: Mode) -> Result<RunSummary> {
        let mut summary = RunSummary::start(mode, buckets.len());

        for bucket in buckets {
            for &kind in kinds {
                let path = bucket.file_path(kind, &self.base_name);
                match mode {
                    Mode::Write => {
                        self.write_record(&path, kind)?;
                        summary.files_written += 1;
                    }
                    Mode::Read => match self.read_record(&path, kind)? {
                        Some(record) => {
                            summary.files_read += 1;
                            if record.model == Model::A {
                                summary.matching_records += 1;
                            }
                            summary.aggregate += record.contribution();
                        }
                        None => {
                            tracing::debug!("No {} file in {}, counting 0", kind, bucket);
                            summary.files_missing += 1;
                        }
                    },
                }
            }
        }

        summary.finished_at = Utc::now();
        Ok(summary)
    }

    fn write_record(&mut self, path: &Path, kind: FileKind) -> Result<()> {
        let record = generator::generate(&mut self.rng);
        let bytes = kind.codec().encode(&record)?;
        self.storage.write_file(path, &bytes)?;
        tracing::debug!("Wrote {:?} to {}", record, path.display());
        Ok(())
    }

    fn read_record(&self, path: &Path, kind: FileKind) -> Result<Option<Record>> {
        let Some(bytes) = self.storage.read_file(path)? else {
            return Ok(None);
        };

        let record = kind
            .codec()
            .decode(&bytes)
            .map_err(|e| BucketError::CorruptRecord {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        tracing::debug!("Read {:?} from {}", record, path.display());
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Month, TimeOfDay, Weekday};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
        fail_writes: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self::default()
        }

        fn put(&self, path: PathBuf, data: &[u8]) {
            self.files.lock().unwrap().insert(path, data.to_vec());
        }

        fn get_file(&self, path: &Path) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }

        fn len(&self) -> usize {
            self.files.lock().unwrap().len()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>> {
            Ok(self.get_file(path))
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            if self.fail_writes {
                return Err(BucketError::StorageError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.put(path.to_path_buf(), data);
            Ok(())
        }
    }

    fn runner(storage: MockStorage) -> BucketRunner<MockStorage, StdRng> {
        BucketRunner::new(storage, StdRng::seed_from_u64(1))
    }

    fn buckets() -> Vec<Bucket> {
        vec![
            Bucket::new(Month::Jan, Weekday::Mon, TimeOfDay::Am),
            Bucket::new(Month::Jan, Weekday::Tue, TimeOfDay::Pm),
            Bucket::new(Month::Feb, Weekday::Sun, TimeOfDay::Am),
        ]
    }

    fn store(storage: &MockStorage, bucket: &Bucket, kind: FileKind, record: Record) {
        let bytes = kind.codec().encode(&record).unwrap();
        storage.put(bucket.file_path(kind, DEFAULT_BASE_NAME), &bytes);
    }

    #[test]
    fn test_write_creates_one_file_per_bucket_and_kind() {
        let storage = MockStorage::new();
        let mut runner = runner(storage.clone());

        let summary = runner
            .run(&buckets(), &[FileKind::Csv, FileKind::Json], Mode::Write)
            .unwrap();

        assert_eq!(summary.files_written, 6);
        assert_eq!(summary.aggregate, 0);
        assert_eq!(storage.len(), 6);

        let path = PathBuf::from("feb").join("sun").join("am").join("Dane.json");
        let record = FileKind::Json
            .codec()
            .decode(&storage.get_file(&path).unwrap())
            .unwrap();
        assert!(record.score <= 1000 && record.time <= 1000);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let storage = MockStorage::new();
        let bucket = buckets()[0];
        store(
            &storage,
            &bucket,
            FileKind::Csv,
            Record {
                model: Model::A,
                score: 1,
                time: 1,
            },
        );
        let before = storage.get_file(&bucket.file_path(FileKind::Csv, DEFAULT_BASE_NAME));

        let mut runner = BucketRunner::new(storage.clone(), StdRng::seed_from_u64(99));
        runner.run(&[bucket], &[FileKind::Csv], Mode::Write).unwrap();

        let after = storage.get_file(&bucket.file_path(FileKind::Csv, DEFAULT_BASE_NAME));
        assert_eq!(storage.len(), 1);
        assert_ne!(before, after);
    }

    #[test]
    fn test_read_missing_contributes_zero() {
        let storage = MockStorage::new();
        let mut runner = runner(storage.clone());

        let summary = runner.run(&buckets(), &[FileKind::Csv], Mode::Read).unwrap();

        assert_eq!(summary.aggregate, 0);
        assert_eq!(summary.files_missing, 3);
        assert_eq!(summary.files_read, 0);
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn test_read_sums_time_of_model_a_only() {
        let storage = MockStorage::new();
        let buckets = buckets();
        store(&storage, &buckets[0], FileKind::Csv, Record { model: Model::A, score: 900, time: 120 });
        store(&storage, &buckets[0], FileKind::Json, Record { model: Model::A, score: 0, time: 30 });
        store(&storage, &buckets[1], FileKind::Csv, Record { model: Model::B, score: 5, time: 999 });
        store(&storage, &buckets[2], FileKind::Json, Record { model: Model::C, score: 5, time: 777 });

        let mut runner = runner(storage);
        let summary = runner
            .run(&buckets, &[FileKind::Csv, FileKind::Json], Mode::Read)
            .unwrap();

        assert_eq!(summary.aggregate, 150);
        assert_eq!(summary.files_read, 4);
        assert_eq!(summary.files_missing, 2);
        assert_eq!(summary.matching_records, 2);
    }

    #[test]
    fn test_model_a_with_zero_time_still_matches() {
        let storage = MockStorage::new();
        let bucket = buckets()[0];
        store(&storage, &bucket, FileKind::Json, Record { model: Model::A, score: 3, time: 0 });

        let summary = runner(storage).run(&[bucket], &[FileKind::Json], Mode::Read).unwrap();
        assert_eq!(summary.aggregate, 0);
        assert_eq!(summary.matching_records, 1);
    }

    #[test]
    fn test_only_requested_kinds_are_read() {
        let storage = MockStorage::new();
        let bucket = buckets()[0];
        store(&storage, &bucket, FileKind::Json, Record { model: Model::A, score: 3, time: 500 });

        let summary = runner(storage).run(&[bucket], &[FileKind::Csv], Mode::Read).unwrap();
        assert_eq!(summary.aggregate, 0);
        assert_eq!(summary.files_missing, 1);
    }

    #[test]
    fn test_corrupt_file_aborts_read() {
        let storage = MockStorage::new();
        let buckets = buckets();
        store(&storage, &buckets[0], FileKind::Csv, Record { model: Model::A, score: 1, time: 10 });
        storage.put(buckets[1].file_path(FileKind::Csv, DEFAULT_BASE_NAME), b"garbage");

        let err = runner(storage)
            .run(&buckets, &[FileKind::Csv], Mode::Read)
            .unwrap_err();

        match err {
            BucketError::CorruptRecord { path, .. } => {
                assert_eq!(path, buckets[1].file_path(FileKind::Csv, DEFAULT_BASE_NAME));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_storage_failure_aborts_write() {
        let storage = MockStorage {
            fail_writes: true,
            ..MockStorage::default()
        };

        let result = runner(storage.clone()).run(&buckets(), &[FileKind::Json], Mode::Write);
        assert!(matches!(result, Err(BucketError::StorageError { .. })));
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn test_custom_base_name() {
        let storage = MockStorage::new();
        let mut runner = runner(storage.clone()).with_base_name("Data");
        runner.run(&buckets()[..1], &[FileKind::Csv], Mode::Write).unwrap();

        let path = PathBuf::from("jan").join("mon").join("am").join("Data.csv");
        assert!(storage.get_file(&path).is_some());
    }
}
