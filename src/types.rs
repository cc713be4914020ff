/*!
 * Core types and data structures for projdump
 */

use std::io;
use std::path::PathBuf;

/// A resolved entry of the include rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeRule {
    /// Exact file path; only this file is eligible
    File(PathBuf),
    /// Directory root; every descendant is eligible
    Directory(PathBuf),
}

/// Outcome of classifying a single file path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDecision {
    /// Matches an include rule and passes the extension check
    Include,
    /// Matches no include rule
    NotListed,
    /// Matches an include rule but ends in an excluded extension
    ExcludedExtension,
    /// The file is the output document itself
    OutputFile,
}

/// A file that passed inclusion and the decode probe
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Absolute path on disk
    pub abs_path: PathBuf,
    /// Path relative to the root, host separators
    pub rel_path: PathBuf,
}

/// An item produced by the scanner
#[derive(Debug)]
pub enum ScanEntry {
    /// A text file ready to be serialized
    Text(Candidate),
    /// A listed file whose decode probe could not even read it
    Unreadable {
        /// Absolute path on disk
        abs_path: PathBuf,
        /// The underlying I/O failure
        error: io::Error,
    },
}
