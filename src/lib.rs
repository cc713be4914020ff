/*!
 * projdump - Snapshot an allow-listed project tree into one XML document
 *
 * Walks a root directory depth-first, keeps the files named by a fixed set of
 * include rules, drops binaries, and writes every surviving text file into a
 * single `<project>` document with its content in CDATA.
 */

pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{ProjDumpError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use rules::InclusionRules;
pub use scanner::{Scanner, ScannerStatistics};
pub use types::{Candidate, FileDecision, IncludeRule, ScanEntry};
pub use writer::{WriteSummary, XmlWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
