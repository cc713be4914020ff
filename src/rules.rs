/*!
 * Inclusion rules: which directories are descended and which files are kept
 */

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::types::{FileDecision, IncludeRule};
use crate::utils::resolve_against;

/// Immutable rule set built once per run
#[derive(Debug, Clone)]
pub struct InclusionRules {
    root: PathBuf,
    includes: Vec<IncludeRule>,
    exclude_tokens: Vec<String>,
    excluded_extensions: Vec<String>,
    output_path: PathBuf,
}

impl InclusionRules {
    /// Build rules from a validated configuration
    ///
    /// The root is canonicalized and each include path is classified as a file
    /// or directory rule here, so later classification touches no filesystem.
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = fs::canonicalize(&config.root_path)?;
        let cwd = std::env::current_dir()?;

        let includes = config
            .include_paths
            .iter()
            .map(|p| {
                let abs = resolve_against(&root, p);
                if abs.is_dir() {
                    IncludeRule::Directory(abs)
                } else {
                    if !abs.exists() {
                        tracing::debug!(path = %abs.display(), "include path does not exist");
                    }
                    IncludeRule::File(abs)
                }
            })
            .collect();

        let output_abs = resolve_against(&cwd, &config.output_path);
        let output_path = canonical_output_path(&output_abs).unwrap_or(output_abs);

        Ok(Self::new(
            root,
            includes,
            config.effective_exclude_tokens(),
            config.excluded_extensions.clone(),
            output_path,
        ))
    }

    /// Assemble rules from already-resolved parts
    pub fn new(
        root: PathBuf,
        includes: Vec<IncludeRule>,
        exclude_tokens: Vec<String>,
        excluded_extensions: Vec<String>,
        output_path: PathBuf,
    ) -> Self {
        Self {
            root,
            includes,
            exclude_tokens,
            excluded_extensions,
            output_path,
        }
    }

    /// Canonical traversal root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a directory with this name is pruned with all its descendants
    pub fn prunes_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.exclude_tokens.iter().any(|t| name.contains(t.as_str()))
    }

    /// Whether a file name ends in an excluded suffix
    pub fn has_excluded_extension(&self, name: &str) -> bool {
        self.excluded_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
    }

    /// Whether an absolute path matches an include rule
    pub fn is_listed(&self, path: &Path) -> bool {
        self.includes.iter().any(|rule| match rule {
            IncludeRule::File(file) => path == file,
            // Component-wise: `client/srcOLD` is not under `client/src`.
            IncludeRule::Directory(dir) => path != dir && path.starts_with(dir),
        })
    }

    /// Classify a file reached by the walk
    pub fn classify_file(&self, path: &Path) -> FileDecision {
        if path == self.output_path {
            return FileDecision::OutputFile;
        }
        if !self.is_listed(path) {
            return FileDecision::NotListed;
        }

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();
        if self.has_excluded_extension(&name) {
            return FileDecision::ExcludedExtension;
        }

        FileDecision::Include
    }

    /// Path relative to the root, keeping host separators
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Canonicalize the output's parent; the output file itself may not exist yet
fn canonical_output_path(path: &Path) -> Option<PathBuf> {
    let parent = path.parent()?;
    let name = path.file_name()?;
    fs::canonicalize(parent).ok().map(|p| p.join(name))
}
