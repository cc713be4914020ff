/*!
 * Depth-first directory scanning
 */

use std::cell::RefCell;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::detect::probe_text;
use crate::error::{ProjDumpError, Result};
use crate::rules::InclusionRules;
use crate::types::{Candidate, FileDecision, ScanEntry};

/// Scanner statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerStatistics {
    /// Directories pruned by a token or hidden marker
    pub dirs_pruned: usize,
    /// Files matching no include rule
    pub files_not_listed: usize,
    /// Listed files rejected by extension
    pub files_excluded_extension: usize,
    /// Listed files that failed the decode probe
    pub files_binary: usize,
}

/// Scanner for the project tree
pub struct Scanner {
    /// Inclusion rules for this run
    rules: InclusionRules,
    /// Progress bar
    progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: RefCell<ScannerStatistics>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(rules: InclusionRules, progress: Arc<ProgressBar>) -> Self {
        Self {
            rules,
            progress,
            statistics: RefCell::new(ScannerStatistics::default()),
        }
    }

    /// Create a scanner with rules built from a configuration
    pub fn from_config(config: &Config, progress: Arc<ProgressBar>) -> Result<Self> {
        Ok(Self::new(InclusionRules::from_config(config)?, progress))
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScannerStatistics {
        self.statistics.borrow().clone()
    }

    /// Walk the root depth-first, yielding every file that should be serialized
    ///
    /// Errors below the root are logged and skipped; only a failure to read the
    /// root itself is yielded as an error.
    pub fn scan(&self) -> impl Iterator<Item = Result<ScanEntry>> + '_ {
        WalkDir::new(self.rules.root())
            .into_iter()
            .filter_entry(|entry| self.should_descend(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    if is_file_like(&entry) {
                        self.process_file(entry.path()).map(Ok)
                    } else {
                        None
                    }
                }
                Err(err) if err.depth() == 0 => Some(Err(ProjDumpError::Io(err.into()))),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
    }

    /// Whether the walk enters this entry (always true for non-directories)
    fn should_descend(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let name = entry.file_name().to_string_lossy();
        if self.rules.prunes_dir(&name) {
            tracing::debug!(dir = %entry.path().display(), "pruned");
            self.statistics.borrow_mut().dirs_pruned += 1;
            return false;
        }

        true
    }

    /// Classify and probe a single file
    fn process_file(&self, path: &Path) -> Option<ScanEntry> {
        match self.rules.classify_file(path) {
            FileDecision::Include => {}
            FileDecision::NotListed => {
                self.statistics.borrow_mut().files_not_listed += 1;
                return None;
            }
            FileDecision::ExcludedExtension => {
                tracing::debug!(file = %path.display(), "excluded extension");
                self.statistics.borrow_mut().files_excluded_extension += 1;
                return None;
            }
            FileDecision::OutputFile => {
                tracing::debug!(file = %path.display(), "skipping output document");
                return None;
            }
        }

        let rel_path = self.rules.relative_path(path);
        self.progress.inc(1);
        self.progress
            .set_message(format!("Current file: {}", rel_path.display()));

        match probe_text(path) {
            Ok(true) => Some(ScanEntry::Text(Candidate {
                abs_path: path.to_path_buf(),
                rel_path,
            })),
            Ok(false) => {
                tracing::debug!(file = %path.display(), "binary content");
                self.statistics.borrow_mut().files_binary += 1;
                None
            }
            Err(error) => Some(ScanEntry::Unreadable {
                abs_path: path.to_path_buf(),
                error,
            }),
        }
    }
}

/// Regular files, plus symlinks that resolve to regular files
fn is_file_like(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
