//! Backend route extraction.
//!
//! Scans the files directly inside the backend routes directory (no recursion)
//! for Express-style registrations of the form `router.<verb>('<path>', ...)`
//! and turns each match into a [`BackendRoute`]. A heuristic text scan, not a
//! parser: registrations split across lines in unusual ways may be missed.

use crate::config::AuditConfig;
use crate::extractor::{BackendRoute, HttpMethod};
use crate::scanner::list_route_files;
use crate::serializer::{self, BackendSnapshot};
use anyhow::Result;
use log::{debug, info, warn};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::sync::LazyLock;

/// Path of the synthetic documentation endpoint. Served outside the API base,
/// so its `full_path` equals its `path` verbatim.
pub const DOC_ROUTE_PATH: &str = "/api-docs";

/// File the documentation endpoint is attributed to.
const DOC_ROUTE_FILE: &str = "swagger.js";

// Matches `router.<verb>('<literal>'` with any of the three JS quote styles.
static ROUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\brouter\.(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#).unwrap()
});

/// Extracts all declared backend routes from the configured routes directory.
///
/// Each registration match yields one [`BackendRoute`] with the method
/// upper-cased and `full_path` prefixed with the API base. Duplicates across
/// files are preserved. After scanning, exactly one synthetic route for the
/// documentation endpoint is appended, and the full list is sorted by
/// `(method, path)` ascending.
///
/// # Errors
///
/// Returns an error if the routes directory cannot be read. A file that
/// cannot be read is skipped with a warning.
pub fn extract_backend_routes(config: &AuditConfig) -> Result<Vec<BackendRoute>> {
    let files = list_route_files(&config.backend_dir)?;
    debug!("Scanning {} backend route files", files.len());

    let mut routes = Vec::new();
    for path in &files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping unreadable route file {}: {}", path.display(), e);
                continue;
            }
        };
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        for cap in ROUTE_RE.captures_iter(&text) {
            let (Some(verb), Some(literal)) = (cap.get(1), cap.get(2)) else {
                continue;
            };
            let Some(method) = HttpMethod::from_verb(verb.as_str()) else {
                continue;
            };
            let route_path = literal.as_str();
            let full_path = format!("{}{}", config.api_base, route_path);
            routes.push(BackendRoute::new(method, route_path, &full_path, &file_name));
        }
    }

    routes.push(BackendRoute::new(
        HttpMethod::Get,
        DOC_ROUTE_PATH,
        DOC_ROUTE_PATH,
        DOC_ROUTE_FILE,
    ));

    routes.sort_by(|a, b| {
        a.method
            .as_str()
            .cmp(b.method.as_str())
            .then_with(|| a.path.cmp(&b.path))
    });

    Ok(routes)
}

/// Runs the full backend stage: extract, persist the JSON snapshot, print the
/// per-method summary.
pub fn run(config: &AuditConfig) -> Result<Vec<BackendRoute>> {
    info!("Extracting backend routes from {}", config.backend_dir.display());
    let routes = extract_backend_routes(config)?;
    info!("Extracted {} backend routes", routes.len());

    let snapshot = BackendSnapshot::new(&routes, &config.api_base);
    let content = serializer::serialize_json(&snapshot)?;
    serializer::write_to_file(&content, &config.backend_snapshot_path())?;

    print_summary(&routes);
    Ok(routes)
}

/// Prints per-method route counts to stdout.
fn print_summary(routes: &[BackendRoute]) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for route in routes {
        *counts.entry(route.method.as_str()).or_insert(0) += 1;
    }

    println!("Backend routes: {}", routes.len());
    for (method, count) in &counts {
        println!("  {}: {}", method, count);
    }
}
