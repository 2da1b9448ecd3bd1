//! File-backed corpus: JSON Lines or a single JSON array

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{CorpusError, CorpusSource, Result};
use crate::types::LifeSituation;

/// Corpus stored on disk.
///
/// Files whose first non-whitespace byte is `[` are parsed as one JSON array
/// (any error fails the load). Everything else is read as JSON Lines: blank
/// lines are skipped and malformed lines are logged and skipped.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_array(content: &str) -> Result<Vec<LifeSituation>> {
        serde_json::from_str(content).map_err(|source| CorpusError::Parse { line: 1, source })
    }

    fn parse_lines(content: &str) -> Vec<LifeSituation> {
        let mut situations = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<LifeSituation>(line) {
                Ok(situation) => situations.push(situation),
                Err(e) => warn!(line = idx + 1, error = %e, "Skipping malformed corpus line"),
            }
        }

        situations
    }
}

impl CorpusSource for FileCorpus {
    fn load(&self) -> Result<Vec<LifeSituation>> {
        if !self.path.exists() {
            return Err(CorpusError::NotFound(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)?;
        let situations = if content.trim_start().starts_with('[') {
            Self::parse_array(&content)?
        } else {
            Self::parse_lines(&content)
        };

        let situations = super::sanitize(situations);
        if situations.is_empty() {
            return Err(CorpusError::Empty);
        }

        debug!(count = situations.len(), path = %self.path.display(), "Parsed corpus file");
        Ok(situations)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
