/*!
 * Utility functions and default rule sets for projdump
 */

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

/// Directory-name token for generated bindings, governed by `include_generated_output`
pub const GENERATED_OUTPUT_TOKEN: &str = "generated";

/// File name of the default output document
pub const DEFAULT_OUTPUT_NAME: &str = "project_code.xml";

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Join a possibly-relative path onto `base`, leaving absolute paths untouched
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Default output location inside the user's local data directory
pub fn default_output_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("projdump")
        .join(DEFAULT_OUTPUT_NAME)
}

/// Paths eligible for the snapshot, relative to the root
pub static DEFAULT_INCLUDE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Source trees
        "client/src",
        "server/src",
        // Client config
        "client/package.json",
        "client/tsconfig.json",
        "client/vite.config.ts",
        // Server config
        "server/Cargo.toml",
        "spacetime.toml",
    ]
});

/// Directory-name substrings that prune a subtree
pub static DEFAULT_EXCLUDE_TOKENS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Dependencies
        "node_modules",
        // Build output
        "target",
        "dist",
        "build",
        // Version control
        ".git",
        // Editors & tools
        ".vscode",
        ".gemini",
        // Backups
        "backup",
    ]
});

/// Binary, media and lockfile suffixes that are never serialized
pub static DEFAULT_EXCLUDED_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Images
        ".png", ".jpg", ".jpeg", ".gif", ".ico", ".webp",
        // Audio & video
        ".mp4", ".mp3", ".wav", ".ogg",
        // 3D assets
        ".glb", ".gltf", ".fbx",
        // Raw binaries
        ".bin",
        // Lockfiles
        ".lock",
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(12), "12 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_resolve_against() {
        let base = Path::new("/project");
        assert_eq!(
            resolve_against(base, Path::new("client/src")),
            PathBuf::from("/project/client/src")
        );
        assert_eq!(
            resolve_against(base, Path::new("/elsewhere/file.xml")),
            PathBuf::from("/elsewhere/file.xml")
        );
    }

    #[test]
    fn test_defaults_leave_generated_to_the_flag() {
        assert!(!DEFAULT_EXCLUDE_TOKENS.contains(&GENERATED_OUTPUT_TOKEN));
        assert!(DEFAULT_EXCLUDED_EXTENSIONS.iter().all(|e| e.starts_with('.')));
    }

    #[test]
    fn test_default_output_path_name() {
        assert!(default_output_path().ends_with(DEFAULT_OUTPUT_NAME));
    }
}
