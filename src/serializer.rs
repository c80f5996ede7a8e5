//! JSON snapshot serialization.
//!
//! Defines the two snapshot artifacts the extractors persist between stages
//! (`backend-routes.json` and `frontend-routes.json`) and the helpers that
//! serialize and write them. Field names are camelCase on the wire, matching
//! the artifacts consumed by downstream tooling.

use crate::extractor::{BackendRoute, FrontendRoute};
use anyhow::{Context, Result};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Snapshot of one backend extraction run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendSnapshot {
    pub total_routes: usize,
    pub api_version: String,
    pub base_url: String,
    pub routes: Vec<BackendRoute>,
    /// ISO-8601 generation time.
    pub timestamp: String,
}

impl BackendSnapshot {
    pub fn new(routes: &[BackendRoute], base_url: &str) -> Self {
        Self {
            total_routes: routes.len(),
            api_version: "v1".to_string(),
            base_url: base_url.to_string(),
            routes: routes.to_vec(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Snapshot of one frontend extraction run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendSnapshot {
    pub total_routes: usize,
    pub total_files: usize,
    pub routes: Vec<FrontendRoute>,
    /// ISO-8601 generation time.
    pub timestamp: String,
}

impl FrontendSnapshot {
    pub fn new(routes: &[FrontendRoute], total_files: usize) -> Self {
        Self {
            total_routes: routes.len(),
            total_files,
            routes: routes.to_vec(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Serializes a snapshot to pretty-printed JSON.
pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    debug!("Serializing snapshot to JSON");
    serde_json::to_string_pretty(value).context("Failed to serialize snapshot to JSON")
}

/// Writes string content to a file.
///
/// Creates parent directories if needed; overwrites an existing file
/// unconditionally. Concurrent runs against the same output directory are not
/// supported and may race on the artifact files.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{DetectionKind, HttpMethod};
    use tempfile::TempDir;

    #[test]
    fn test_backend_snapshot_json_keys() {
        let routes = vec![BackendRoute::new(
            HttpMethod::Get,
            "/anime",
            "/api/v1/anime",
            "anime.js",
        )];
        let snapshot = BackendSnapshot::new(&routes, "/api/v1");
        let json = serialize_json(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totalRoutes"], 1);
        assert_eq!(value["apiVersion"], "v1");
        assert_eq!(value["baseUrl"], "/api/v1");
        assert_eq!(value["routes"][0]["fullPath"], "/api/v1/anime");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_frontend_snapshot_json_keys() {
        let routes = vec![FrontendRoute::new(
            HttpMethod::Get,
            "http://localhost:5000/api/v1/anime",
            DetectionKind::Fetch,
            "src/app.js",
            7,
        )];
        let snapshot = FrontendSnapshot::new(&routes, 12);
        let json = serialize_json(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totalRoutes"], 1);
        assert_eq!(value["totalFiles"], 12);
        assert_eq!(value["routes"][0]["type"], "fetch");
        assert_eq!(value["routes"][0]["line"], 7);
    }

    #[test]
    fn test_serialize_json_is_pretty_printed() {
        let snapshot = BackendSnapshot::new(&[], "/api/v1");
        let json = serialize_json(&snapshot).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("  "));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let routes = vec![BackendRoute::new(
            HttpMethod::Post,
            "/users",
            "/api/v1/users",
            "users.js",
        )];
        let snapshot = BackendSnapshot::new(&routes, "/api/v1");
        let json = serialize_json(&snapshot).unwrap();

        let deserialized: BackendSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.total_routes, 1);
        assert_eq!(deserialized.routes, routes);
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("backend-routes.json");

        write_to_file("{}", &file_path).unwrap();

        assert!(file_path.exists());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}");
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("reports").join("nested").join("out.json");

        write_to_file("{}", &file_path).unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.json");

        write_to_file("first", &file_path).unwrap();
        write_to_file("second", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "second");
    }
}
