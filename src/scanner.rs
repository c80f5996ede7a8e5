use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions the frontend scanner considers source files.
const FRONTEND_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Dependency cache directory excluded from the frontend scan at any depth.
const DEPENDENCY_DIR: &str = "node_modules";

/// Lists the backend route files directly inside a directory (no recursion).
///
/// Only files with a `.js` extension are kept. The result is sorted by file
/// name, so route extraction visits files in a stable order.
///
/// # Errors
///
/// Returns an error if the directory cannot be read. Callers must treat this
/// as "extraction failed", never as "zero routes exist".
pub fn list_route_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read routes directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("js") {
                    files.push(path);
                }
            }
            Err(e) => {
                warn!("Failed to access entry in {}: {}", dir.display(), e);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Recursive scanner for the frontend source tree.
///
/// Collects every file whose extension is on the allow-list (`js`, `jsx`,
/// `ts`, `tsx`), skipping hidden directories (name starting with `.`) and
/// `node_modules` at any depth. Inaccessible entries are recorded as warnings
/// and skipped; scanning continues best-effort.
pub struct SourceScanner {
    root_path: PathBuf,
}

/// Result of a frontend tree scan.
pub struct ScanResult {
    /// Paths of all discovered source files.
    pub source_files: Vec<PathBuf>,
    /// Warning messages for entries that could not be accessed.
    pub warnings: Vec<String>,
}

impl SourceScanner {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the tree and collects all frontend source files.
    ///
    /// # Errors
    ///
    /// Returns an error if the root itself is not a readable directory; that
    /// failure is fatal for the frontend stage.
    pub fn scan(&self) -> Result<ScanResult> {
        if !self.root_path.is_dir() {
            anyhow::bail!(
                "Frontend source root is not a readable directory: {}",
                self.root_path.display()
            );
        }

        let mut source_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the root directory itself
                if e.path() == self.root_path {
                    return true;
                }

                // Only directories are pruned here; dot-files such as
                // .eslintrc.js are still regular scan candidates.
                let file_name = e.file_name().to_string_lossy();
                let is_hidden_dir = e.file_type().is_dir() && file_name.starts_with('.');
                let is_dependency_dir = e.file_type().is_dir() && file_name == DEPENDENCY_DIR;

                !is_hidden_dir && !is_dependency_dir
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    let has_source_ext = path
                        .extension()
                        .and_then(|s| s.to_str())
                        .map(|ext| FRONTEND_EXTENSIONS.contains(&ext))
                        .unwrap_or(false);

                    if path.is_file() && has_source_ext {
                        source_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        source_files.sort();
        Ok(ScanResult {
            source_files,
            warnings,
        })
    }
}
