use crate::core::resolver::resolve;
use crate::core::runner::{BucketRunner, RunSummary};
use crate::core::{BucketSequence, Mode, Result, Selection, Storage};
use rand::Rng;
use std::path::PathBuf;

pub struct BucketEngine<S: Storage, R: Rng> {
    runner: BucketRunner<S, R>,
}

impl<S: Storage, R: Rng> BucketEngine<S, R> {
    pub fn new(storage: S, rng: R) -> Self {
        Self {
            runner: BucketRunner::new(storage, rng),
        }
    }

    pub fn with_base_name(self, base_name: impl Into<String>) -> Self {
        Self {
            runner: self.runner.with_base_name(base_name),
        }
    }

    pub fn plan(&self, selection: &Selection) -> BucketSequence {
        resolve(selection)
    }

    /// Relative paths of every file the selection touches, in visiting order.
    pub fn planned_files(&self, selection: &Selection) -> Vec<PathBuf> {
        self.plan(selection)
            .iter()
            .flat_map(|bucket| {
                selection
                    .kinds
                    .iter()
                    .map(move |&kind| bucket.file_path(kind, self.runner.base_name()))
            })
            .collect()
    }

    pub fn execute(&mut self, selection: &Selection) -> Result<RunSummary> {
        let buckets = self.plan(selection);
        tracing::info!(
            "Resolved {} buckets from {} month entries, kinds: {:?}, mode: {:?}",
            buckets.len(),
            selection.entries.len(),
            selection.kinds,
            selection.mode
        );

        let summary = self.runner.run(&buckets, &selection.kinds, selection.mode)?;

        match summary.mode {
            Mode::Write => tracing::info!("✅ Wrote {} files", summary.files_written),
            Mode::Read => tracing::info!(
                "✅ Read {} files ({} missing), {} model A records, total time {}",
                summary.files_read,
                summary.files_missing,
                summary.matching_records,
                summary.aggregate
            ),
        }
        tracing::debug!(
            "Run took {} ms",
            (summary.finished_at - summary.started_at).num_milliseconds()
        );

        Ok(summary)
    }
}
