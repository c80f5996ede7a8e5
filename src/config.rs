//! Audit configuration.
//!
//! Every value that used to be a compiled-in global (directories, output file
//! names, the API prefix, the local development origin) lives here and is
//! passed explicitly into each stage. Tests build their own `AuditConfig`
//! against temporary directories, so runs never collide on the filesystem.

use std::path::{Path, PathBuf};

/// Default backend routes directory, relative to the working directory.
pub const DEFAULT_BACKEND_DIR: &str = "backend/routes";
/// Default frontend source root, relative to the working directory.
pub const DEFAULT_FRONTEND_DIR: &str = "frontend/src";
/// API path prefix every backend route is mounted under.
pub const API_BASE: &str = "/api/v1";
/// Origin used to absolutize root-relative frontend URLs.
pub const DEV_ORIGIN: &str = "http://localhost:5000";

/// Snapshot artifact written by the backend extractor.
pub const BACKEND_SNAPSHOT: &str = "backend-routes.json";
/// Snapshot artifact written by the frontend extractor.
pub const FRONTEND_SNAPSHOT: &str = "frontend-routes.json";
/// Markdown report written by the reporter.
pub const REPORT_FILE: &str = "routes-report.md";

/// Explicit configuration for one audit run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Directory holding the backend route files (scanned non-recursively).
    pub backend_dir: PathBuf,
    /// Root of the frontend source tree (scanned recursively).
    pub frontend_dir: PathBuf,
    /// Directory the three artifacts are written into.
    pub output_dir: PathBuf,
    /// API path prefix prepended to backend route paths.
    pub api_base: String,
    /// Origin prepended to root-relative frontend URLs.
    pub dev_origin: String,
}

impl AuditConfig {
    pub fn new(backend_dir: PathBuf, frontend_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            backend_dir,
            frontend_dir,
            output_dir,
            api_base: API_BASE.to_string(),
            dev_origin: DEV_ORIGIN.to_string(),
        }
    }

    pub fn backend_snapshot_path(&self) -> PathBuf {
        self.output_dir.join(BACKEND_SNAPSHOT)
    }

    pub fn frontend_snapshot_path(&self) -> PathBuf {
        self.output_dir.join(FRONTEND_SNAPSHOT)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE)
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::new(
            Path::new(DEFAULT_BACKEND_DIR).to_path_buf(),
            Path::new(DEFAULT_FRONTEND_DIR).to_path_buf(),
            PathBuf::from("."),
        )
    }
}
