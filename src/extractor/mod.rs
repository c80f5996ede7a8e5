//! Route extraction module and the shared route data model.
//!
//! Two extractors produce the inputs of the reconciliation stage:
//!
//! - [`backend::extract_backend_routes`] scans the backend's route files for
//!   `router.<verb>(...)` registrations.
//! - [`frontend::extract_frontend_routes`] scans the frontend source tree for
//!   API call sites (fetch/axios calls, API-path literals, hyperlinks and
//!   environment-variable references).
//!
//! Both are best-effort regex scanners over raw file text, not parsers. The
//! types in this module define the common vocabulary: [`HttpMethod`],
//! [`BackendRoute`], [`FrontendRoute`] and [`DetectionKind`].

pub mod backend;
pub mod frontend;

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods recognized by both extractors.
///
/// Serialized as the uppercase method name, matching the JSON snapshot
/// artifacts consumed by downstream tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// The uppercase wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Parses a lowercase verb as it appears in a registration or client call
    /// (`get`, `post`, `put`, `delete`, `patch`).
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The regex pattern category that produced a frontend route observation.
///
/// Serialized in snake_case under the JSON key `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    /// A `fetch('...')` call with a literal first argument.
    Fetch,
    /// An `axios.<verb>('...')` call with a literal first argument.
    Axios,
    /// Any string literal containing `/api/` (broad catch-all).
    ApiService,
    /// A hyperlink attribute whose literal value contains `/api/`.
    Href,
    /// A reference to a known API-base environment variable.
    Env,
}

impl DetectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionKind::Fetch => "fetch",
            DetectionKind::Axios => "axios",
            DetectionKind::ApiService => "api_service",
            DetectionKind::Href => "href",
            DetectionKind::Env => "env",
        }
    }
}

impl fmt::Display for DetectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One route registration declared by the backend.
///
/// `full_path` is `path` prefixed with the API base (`/api/v1`), except for the
/// synthetic documentation entry whose `full_path` equals `path` verbatim.
/// Duplicates across files are preserved as-is at this stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRoute {
    pub method: HttpMethod,
    pub path: String,
    pub full_path: String,
    pub file: String,
}

impl BackendRoute {
    pub fn new(method: HttpMethod, path: &str, full_path: &str, file: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            full_path: full_path.to_string(),
            file: file.to_string(),
        }
    }
}

/// One API reference observed in the frontend source tree.
///
/// `line` is 1-based. For `env` detections `url` is the raw matched text, not a
/// URL; the reconciler treats such entries as unreliable noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendRoute {
    pub method: HttpMethod,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: DetectionKind,
    pub file: String,
    pub line: usize,
}

impl FrontendRoute {
    pub fn new(method: HttpMethod, url: &str, kind: DetectionKind, file: &str, line: usize) -> Self {
        Self {
            method,
            url: url.to_string(),
            kind,
            file: file.to_string(),
            line,
        }
    }

    /// De-duplication key: exact `method-url` string, computed before any URL
    /// normalization. First occurrence wins.
    pub fn dedup_key(&self) -> String {
        format!("{}-{}", self.method, self.url)
    }
}
