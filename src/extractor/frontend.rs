//! Frontend API reference extraction.
//!
//! Recursively scans the frontend source tree and applies five independent
//! detection patterns to every file's text. The catch-all literal pattern is
//! intentionally noisy (it matches any string containing `/api/`): the policy
//! is low precision, keep everything, and let the reconciler's normalization
//! filter the noise.

use crate::config::AuditConfig;
use crate::extractor::{DetectionKind, FrontendRoute, HttpMethod};
use crate::scanner::SourceScanner;
use crate::serializer::{self, FrontendSnapshot};
use anyhow::Result;
use log::{debug, info, warn};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// Detection patterns, compiled once. Applied to each file in this order:
// fetch, axios, api_service, href, env. The order matters for deduplication:
// when one literal is matched by several patterns, the first-encountered
// detection kind is the one that survives.

static FETCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bfetch\s*\(\s*['"`]([^'"`]+)['"`]"#).unwrap()
});

static AXIOS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\baxios\.(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#).unwrap()
});

static API_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"`]([^'"`]*/api/[^'"`]*)['"`]"#).unwrap()
});

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href\s*=\s*["']([^"']*/api/[^"']*)["']"#).unwrap()
});

static ENV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(REACT_APP_API_URL|VITE_API_URL|NEXT_PUBLIC_API_URL)\b").unwrap()
});

/// Extracts all frontend API references under the configured source root.
///
/// Returns the deduplicated route list (first occurrence wins, exact
/// `method-url` key) sorted by `(method, url)` ascending, together with the
/// number of files scanned.
///
/// # Errors
///
/// Returns an error if the source root is not a readable directory. An
/// unreadable file inside the tree is logged and skipped; partial results from
/// the remaining files are still returned.
pub fn extract_frontend_routes(config: &AuditConfig) -> Result<(Vec<FrontendRoute>, usize)> {
    let scanner = SourceScanner::new(config.frontend_dir.clone());
    let scan_result = scanner.scan()?;
    debug!("Scanning {} frontend source files", scan_result.source_files.len());

    let mut all_routes = Vec::new();
    let mut scanned_files = 0usize;

    for path in &scan_result.source_files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping unreadable source file {}: {}", path.display(), e);
                continue;
            }
        };
        scanned_files += 1;

        let file_name = relative_name(path, &config.frontend_dir);
        all_routes.extend(scan_file_text(&text, &file_name, &config.dev_origin));
    }

    let mut seen = HashSet::new();
    let mut routes: Vec<FrontendRoute> = all_routes
        .into_iter()
        .filter(|route| seen.insert(route.dedup_key()))
        .collect();

    routes.sort_by(|a, b| {
        a.method
            .as_str()
            .cmp(b.method.as_str())
            .then_with(|| a.url.cmp(&b.url))
    });

    Ok((routes, scanned_files))
}

/// Runs the full frontend stage: extract, persist the JSON snapshot, print
/// the method and detection-kind summaries.
pub fn run(config: &AuditConfig) -> Result<Vec<FrontendRoute>> {
    info!("Extracting frontend API references from {}", config.frontend_dir.display());
    let (routes, total_files) = extract_frontend_routes(config)?;
    info!("Found {} unique frontend references in {} files", routes.len(), total_files);

    let snapshot = FrontendSnapshot::new(&routes, total_files);
    let content = serializer::serialize_json(&snapshot)?;
    serializer::write_to_file(&content, &config.frontend_snapshot_path())?;

    print_summary(&routes);
    Ok(routes)
}

/// Applies all five detection patterns to one file's text.
fn scan_file_text(text: &str, file: &str, dev_origin: &str) -> Vec<FrontendRoute> {
    let mut found = Vec::new();

    for cap in FETCH_RE.captures_iter(text) {
        if let (Some(m), Some(url)) = (cap.get(0), cap.get(1)) {
            found.push(FrontendRoute::new(
                HttpMethod::Get,
                &absolutize(url.as_str(), dev_origin),
                DetectionKind::Fetch,
                file,
                line_at(text, m.start()),
            ));
        }
    }

    for cap in AXIOS_RE.captures_iter(text) {
        let (Some(m), Some(verb), Some(url)) = (cap.get(0), cap.get(1), cap.get(2)) else {
            continue;
        };
        let Some(method) = HttpMethod::from_verb(verb.as_str()) else {
            continue;
        };
        found.push(FrontendRoute::new(
            method,
            &absolutize(url.as_str(), dev_origin),
            DetectionKind::Axios,
            file,
            line_at(text, m.start()),
        ));
    }

    for cap in API_LITERAL_RE.captures_iter(text) {
        if let (Some(m), Some(url)) = (cap.get(0), cap.get(1)) {
            found.push(FrontendRoute::new(
                HttpMethod::Get,
                &absolutize(url.as_str(), dev_origin),
                DetectionKind::ApiService,
                file,
                line_at(text, m.start()),
            ));
        }
    }

    for cap in HREF_RE.captures_iter(text) {
        if let (Some(m), Some(url)) = (cap.get(0), cap.get(1)) {
            found.push(FrontendRoute::new(
                HttpMethod::Get,
                &absolutize(url.as_str(), dev_origin),
                DetectionKind::Href,
                file,
                line_at(text, m.start()),
            ));
        }
    }

    for m in ENV_RE.find_iter(text) {
        // Raw variable name, not a URL; kept as-is for visibility
        found.push(FrontendRoute::new(
            HttpMethod::Get,
            m.as_str(),
            DetectionKind::Env,
            file,
            line_at(text, m.start()),
        ));
    }

    found
}

/// 1-based line number of a byte offset within the file text.
fn line_at(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

/// Rewrites root-relative URLs to an absolute form against the local
/// development origin. Absolute URLs (scheme or protocol-relative prefix) and
/// non-rooted strings pass through unchanged; the latter are malformed by
/// contract and left for the reconciler to surface.
fn absolutize(url: &str, dev_origin: &str) -> String {
    if url.is_empty() || url.contains("://") || url.starts_with("//") {
        return url.to_string();
    }
    if url.starts_with('/') {
        format!("{}{}", dev_origin, url)
    } else {
        url.to_string()
    }
}

fn relative_name(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

/// Prints per-method and per-detection-kind counts to stdout.
fn print_summary(routes: &[FrontendRoute]) {
    let mut by_method: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for route in routes {
        *by_method.entry(route.method.as_str()).or_insert(0) += 1;
        *by_kind.entry(route.kind.as_str()).or_insert(0) += 1;
    }

    println!("Frontend references: {}", routes.len());
    println!("By method:");
    for (method, count) in &by_method {
        println!("  {}: {}", method, count);
    }
    println!("By detection kind:");
    for (kind, count) in &by_kind {
        println!("  {}: {}", kind, count);
    }
}
