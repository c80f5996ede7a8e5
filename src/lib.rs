//! Route Audit - Consistency checking between backend routes and frontend API calls.
//!
//! This library implements a three-stage, one-shot analysis pipeline for web
//! applications whose backend declares Express-style routes and whose frontend
//! calls them via fetch/axios. It extracts both sides by regex scanning,
//! reconciles them after URL normalization, and renders a Markdown report of
//! every inconsistency.
//!
//! # Architecture
//!
//! The pipeline stages run strictly in sequence:
//!
//! 1. [`scanner`] - Enumerates source files (flat backend listing, recursive
//!    frontend walk).
//! 2. [`extractor::backend`] - Extracts declared server endpoints from
//!    `router.<verb>(...)` registrations.
//! 3. [`extractor::frontend`] - Extracts client-side API references via five
//!    detection patterns, with file/line provenance.
//! 4. [`reconciler`] - Normalizes URLs, indexes the backend routes, and
//!    classifies every frontend reference.
//! 5. [`report`] - Renders the Markdown report and condensed console summary.
//! 6. [`serializer`] - Persists the JSON snapshot artifacts.
//!
//! # Example Usage
//!
//! ```no_run
//! use route_audit::config::AuditConfig;
//! use route_audit::extractor::{backend, frontend};
//! use route_audit::reconciler::reconcile;
//! use route_audit::report;
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = AuditConfig::new(
//!     PathBuf::from("backend/routes"),
//!     PathBuf::from("frontend/src"),
//!     PathBuf::from("."),
//! );
//!
//! let backend_routes = backend::run(&config)?;
//! let frontend_routes = frontend::run(&config)?;
//! let result = reconcile(&backend_routes, &frontend_routes);
//! let markdown = report::write_report(&result, &config.report_path())?;
//! println!("{}", markdown);
//! # Ok(())
//! # }
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides the complete
//! CLI application.

pub mod cli;
pub mod config;
pub mod scanner;
pub mod extractor;
pub mod normalize;
pub mod reconciler;
pub mod report;
pub mod serializer;
