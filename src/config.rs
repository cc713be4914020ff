/*!
 * Configuration handling for projdump
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;
use serde::Deserialize;

use crate::error::{ProjDumpError, Result};
use crate::utils::{
    default_output_path, DEFAULT_EXCLUDED_EXTENSIONS, DEFAULT_EXCLUDE_TOKENS, DEFAULT_INCLUDE,
    GENERATED_OUTPUT_TOKEN,
};
use crate::{bail, ensure};

/// Command-line arguments for projdump
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "projdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Snapshot an allow-listed project tree into a single XML document",
    long_about = "Walks the current directory, keeps the client and server source trees plus a few config files, and writes every text file into one XML document with its content in a CDATA section."
)]
pub struct Args {
    /// Root directory to snapshot (defaults to the current directory)
    #[clap(long)]
    pub root: Option<String>,

    /// Output XML file (defaults to a per-user data location)
    #[clap(long)]
    pub output: Option<String>,

    /// JSON configuration file (camelCase keys, e.g. "includePaths")
    #[clap(long)]
    pub config: Option<String>,

    /// Prune directories whose name contains "generated"
    #[clap(long)]
    pub exclude_generated: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Traversal origin
    pub root_path: PathBuf,

    /// Destination of the XML document
    pub output_path: PathBuf,

    /// Exact files and directory roots eligible for output, relative to the root
    pub include_paths: Vec<PathBuf>,

    /// Directory-name substrings that prune a subtree
    pub exclude_tokens: Vec<String>,

    /// File-name suffixes that are never serialized
    pub excluded_extensions: Vec<String>,

    /// Whether directories named like generated output are kept
    pub include_generated_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            output_path: default_output_path(),
            include_paths: DEFAULT_INCLUDE.iter().map(PathBuf::from).collect(),
            exclude_tokens: DEFAULT_EXCLUDE_TOKENS.iter().map(|t| t.to_string()).collect(),
            excluded_extensions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            include_generated_output: true,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// Values from `--config` are applied first; explicit flags win over them.
    pub fn from_args(args: Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_json_file(Path::new(path))?,
            None => Self::default(),
        };

        if let Some(root) = args.root {
            config.root_path = PathBuf::from(root);
        }
        if let Some(output) = args.output {
            config.output_path = PathBuf::from(output);
        }
        if args.exclude_generated {
            config.include_generated_output = false;
        }

        Ok(config)
    }

    /// Load configuration from a JSON document
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!(PathNotFound, "Config file not found: {}", path.display());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Exclude tokens actually used for pruning
    pub fn effective_exclude_tokens(&self) -> Vec<String> {
        let mut tokens = self.exclude_tokens.clone();
        if !self.include_generated_output {
            tokens.push(GENERATED_OUTPUT_TOKEN.to_string());
        }
        tokens
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.root_path.is_dir() {
            return Err(ProjDumpError::PathNotFound(format!(
                "Root directory not found: {}",
                self.root_path.display()
            )));
        }

        if let Some(parent) = self.output_path.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                PathNotFound,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            !self.include_paths.is_empty(),
            Config,
            "includePaths must name at least one file or directory"
        );
        ensure!(
            self.exclude_tokens.iter().all(|t| !t.is_empty()),
            Config,
            "excludeTokens must not contain an empty token"
        );
        ensure!(
            self.excluded_extensions.iter().all(|e| !e.is_empty()),
            Config,
            "excludedExtensions must not contain an empty suffix"
        );
        ensure!(
            !(self.include_generated_output
                && self.exclude_tokens.iter().any(|t| t == GENERATED_OUTPUT_TOKEN)),
            Config,
            "excludeTokens lists \"{}\" while includeGeneratedOutput is true",
            GENERATED_OUTPUT_TOKEN
        );

        Ok(())
    }
}
