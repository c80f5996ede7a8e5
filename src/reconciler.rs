//! Route reconciliation.
//!
//! Consumes the two extracted route lists and classifies every frontend
//! reference into one of {matched, missing-in-backend, method-mismatch,
//! duplicate}, then computes the backend routes the frontend never references.
//! Pure in-memory computation; the reporter does all rendering.

use crate::extractor::{BackendRoute, FrontendRoute, HttpMethod};
use crate::normalize::normalize_url;
use log::debug;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A frontend reference that could not be matched cleanly against the backend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteIssue {
    pub method: HttpMethod,
    pub url: String,
    pub file: String,
    pub line: usize,
    pub reason: String,
}

/// A frontend reference whose URL exists in the backend under different
/// methods only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodMismatch {
    pub method: HttpMethod,
    pub url: String,
    pub file: String,
    pub line: usize,
    /// Methods the backend declares for this URL.
    pub available_methods: Vec<HttpMethod>,
}

/// A backend route no frontend reference maps to (dead/unused endpoint).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedRoute {
    pub method: HttpMethod,
    pub full_path: String,
    pub file: String,
}

/// Bucket sizes plus the two input totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub backend_total: usize,
    pub frontend_total: usize,
    pub missing_in_backend: usize,
    pub missing_in_frontend: usize,
    pub method_mismatches: usize,
    pub duplicates: usize,
}

/// The complete classification of one audit run. Built once by [`reconcile`],
/// consumed once by the reporter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub missing_in_backend: Vec<RouteIssue>,
    pub method_mismatches: Vec<MethodMismatch>,
    pub duplicates: Vec<RouteIssue>,
    pub missing_in_frontend: Vec<UnusedRoute>,
    pub summary: Summary,
}

/// Comparison key: `METHOD:normalized-url`.
fn index_key(method: HttpMethod, url: &str) -> String {
    format!("{}:{}", method, normalize_url(url))
}

/// Reconciles the two route lists into an [`AnalysisResult`].
///
/// Backend routes are indexed by `method:normalized(full_path)`; on key
/// collision the later route wins (last-write-wins, not an error). Frontend
/// routes are classified in list order, with duplicate `(method, url)` keys
/// diverted into the `duplicates` bucket before any matching takes place.
///
/// Backend usage is derived in an independent second pass that includes
/// would-be duplicates: a redundant frontend call still expresses real usage
/// intent, so a backend route referenced only by a duplicate is not reported
/// as unused.
pub fn reconcile(backend: &[BackendRoute], frontend: &[FrontendRoute]) -> AnalysisResult {
    debug!(
        "Reconciling {} backend routes against {} frontend references",
        backend.len(),
        frontend.len()
    );

    // Index backend routes; also group declared methods per normalized URL
    // for the method-mismatch check.
    let mut index: HashMap<String, &BackendRoute> = HashMap::new();
    let mut methods_by_url: HashMap<String, Vec<HttpMethod>> = HashMap::new();
    for route in backend {
        let normalized = normalize_url(&route.full_path);
        index.insert(format!("{}:{}", route.method, normalized), route);
        let methods = methods_by_url.entry(normalized).or_default();
        if !methods.contains(&route.method) {
            methods.push(route.method);
        }
    }

    let mut missing_in_backend = Vec::new();
    let mut method_mismatches = Vec::new();
    let mut duplicates = Vec::new();

    let mut seen: HashSet<String> = HashSet::new();
    for route in frontend {
        let key = index_key(route.method, &route.url);

        if !seen.insert(key.clone()) {
            duplicates.push(RouteIssue {
                method: route.method,
                url: route.url.clone(),
                file: route.file.clone(),
                line: route.line,
                reason: "duplicate call within the frontend".to_string(),
            });
            continue;
        }

        if index.contains_key(&key) {
            continue; // matched, nothing to report
        }

        let normalized = normalize_url(&route.url);
        if let Some(available) = methods_by_url.get(&normalized) {
            let mut available_methods = available.clone();
            available_methods.sort_by_key(|m| m.as_str());
            method_mismatches.push(MethodMismatch {
                method: route.method,
                url: route.url.clone(),
                file: route.file.clone(),
                line: route.line,
                available_methods,
            });
        } else {
            missing_in_backend.push(RouteIssue {
                method: route.method,
                url: route.url.clone(),
                file: route.file.clone(),
                line: route.line,
                reason: "no backend route matches this URL".to_string(),
            });
        }
    }

    // Independent usage pass: every frontend key counts, duplicates included.
    let used_keys: HashSet<String> = frontend
        .iter()
        .map(|route| index_key(route.method, &route.url))
        .collect();

    let missing_in_frontend: Vec<UnusedRoute> = backend
        .iter()
        .filter(|route| !used_keys.contains(&index_key(route.method, &route.full_path)))
        .map(|route| UnusedRoute {
            method: route.method,
            full_path: route.full_path.clone(),
            file: route.file.clone(),
        })
        .collect();

    let summary = Summary {
        backend_total: backend.len(),
        frontend_total: frontend.len(),
        missing_in_backend: missing_in_backend.len(),
        missing_in_frontend: missing_in_frontend.len(),
        method_mismatches: method_mismatches.len(),
        duplicates: duplicates.len(),
    };

    AnalysisResult {
        missing_in_backend,
        method_mismatches,
        duplicates,
        missing_in_frontend,
        summary,
    }
}
