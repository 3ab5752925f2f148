//! File-backed scenario source
//!
//! Reads a scenario JSON document from disk, or from standard input when the
//! path is `-`.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BalancerError, BalancerResult};
use crate::scenario::Scenario;
use crate::traits::ScenarioSource;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Scenario source reading a JSON file
pub struct FileScenarioSource {
    path: PathBuf,
}

impl FileScenarioSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source reading standard input
    pub fn stdin() -> Self {
        Self::new(STDIN_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn reads_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }

    fn read_contents(&self) -> BalancerResult<String> {
        let read_error = |source| BalancerError::ScenarioRead {
            path: self.path.clone(),
            source,
        };

        if self.reads_stdin() {
            let mut contents = String::new();
            std::io::stdin()
                .read_to_string(&mut contents)
                .map_err(read_error)?;
            Ok(contents)
        } else {
            std::fs::read_to_string(&self.path).map_err(read_error)
        }
    }
}

impl ScenarioSource for FileScenarioSource {
    fn describe(&self) -> String {
        if self.reads_stdin() {
            "standard input".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    fn load(&self) -> BalancerResult<Scenario> {
        let contents = self.read_contents()?;
        debug!(bytes = contents.len(), source = %self.describe(), "Scenario read");
        Scenario::from_json_str(&contents)
    }
}
