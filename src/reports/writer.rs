//! Persists a run's artifacts under a timestamped directory.

use crate::facts::{RepoSpec, RepositoryData};
use camino::Utf8PathBuf;
use std::fs;

/// Log target for the output writer
const LOG_TARGET: &str = "output";

/// Layout of the per-run directory name.
const RUN_DIR_FORMAT: &str = "%Y%m%d_%H%M%S";

/// What [`OutputWriter::save`] managed to write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Where the files went.
    pub directory: Utf8PathBuf,

    /// Files written successfully.
    pub written: Vec<Utf8PathBuf>,

    /// Non-fatal failures.
    pub warnings: Vec<String>,
}

impl SaveOutcome {
    fn warn(&mut self, warning: String) {
        log::warn!(target: LOG_TARGET, "{warning}");
        self.warnings.push(warning);
    }

    fn write(&mut self, path: Utf8PathBuf, contents: &[u8]) {
        match fs::write(&path, contents) {
            Ok(()) => {
                log::info!(target: LOG_TARGET, "Saved '{path}'");
                self.written.push(path);
            }
            Err(e) => self.warn(format!("could not write '{path}': {e}")),
        }
    }
}

/// Writes the JSON record and the text report of a run.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    base_dir: Utf8PathBuf,
}

impl OutputWriter {
    #[must_use]
    pub fn new(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Saves `<owner>_<repo>_data.json` and `<owner>_<repo>_report.txt`.
    ///
    /// The files go into a subdirectory named after the run's start time; when that directory
    /// cannot be created they go into the base directory instead. Nothing here is fatal: every
    /// failure is logged and listed in the returned outcome.
    pub fn save(&self, data: &RepositoryData, report: &str, spec: &RepoSpec) -> SaveOutcome {
        let mut outcome = SaveOutcome {
            directory: self.run_directory(data),
            ..SaveOutcome::default()
        };

        if let Err(e) = fs::create_dir_all(&outcome.directory) {
            let failed = core::mem::replace(&mut outcome.directory, self.base_dir.clone());
            outcome.warn(format!("could not create '{failed}', using '{}' instead: {e}", self.base_dir));
            if let Err(e) = fs::create_dir_all(&self.base_dir) {
                outcome.warn(format!("could not create '{}': {e}", self.base_dir));
            }
        }

        let stem = spec.file_stem();

        match serde_json::to_vec_pretty(data) {
            Ok(json) => outcome.write(outcome.directory.join(format!("{stem}_data.json")), &json),
            Err(e) => outcome.warn(format!("could not serialize repository data: {e}")),
        }

        outcome.write(outcome.directory.join(format!("{stem}_report.txt")), report.as_bytes());

        outcome
    }

    fn run_directory(&self, data: &RepositoryData) -> Utf8PathBuf {
        let stamp = data.extraction_meta.extracted_at.format(RUN_DIR_FORMAT);
        self.base_dir.join(stamp.to_string())
    }
}
