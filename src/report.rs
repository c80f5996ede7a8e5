//! Markdown report rendering.
//!
//! Pure formatting over an [`AnalysisResult`]: no classification logic lives
//! here. The document structure is fixed (summary, four problem sections,
//! recommendations, generation timestamp) and renders cleanly when any bucket
//! is empty.

use crate::reconciler::AnalysisResult;
use crate::serializer::write_to_file;
use anyhow::Result;
use chrono::Utc;
use log::info;
use std::fmt::Write as _;
use std::path::Path;

/// Renders the fixed-structure Markdown report.
pub fn render_markdown(result: &AnalysisResult) -> String {
    let mut doc = String::new();

    doc.push_str("# Routes Consistency Report\n\n");

    doc.push_str("## Summary\n\n");
    doc.push_str("| Metric | Count |\n");
    doc.push_str("| --- | --- |\n");
    let s = &result.summary;
    let _ = writeln!(doc, "| Backend routes | {} |", s.backend_total);
    let _ = writeln!(doc, "| Frontend references | {} |", s.frontend_total);
    let _ = writeln!(doc, "| Missing in backend | {} |", s.missing_in_backend);
    let _ = writeln!(doc, "| Method mismatches | {} |", s.method_mismatches);
    let _ = writeln!(doc, "| Duplicate frontend calls | {} |", s.duplicates);
    let _ = writeln!(doc, "| Unused backend routes | {} |", s.missing_in_frontend);
    doc.push('\n');

    doc.push_str("## 1. Frontend routes missing in backend\n\n");
    if result.missing_in_backend.is_empty() {
        doc.push_str("None found.\n\n");
    } else {
        for issue in &result.missing_in_backend {
            let _ = writeln!(
                doc,
                "- `{} {}` ({}:{}): {}",
                issue.method, issue.url, issue.file, issue.line, issue.reason
            );
        }
        doc.push('\n');
    }

    doc.push_str("## 2. Method mismatches\n\n");
    if result.method_mismatches.is_empty() {
        doc.push_str("None found.\n\n");
    } else {
        for mismatch in &result.method_mismatches {
            let available: Vec<&str> = mismatch
                .available_methods
                .iter()
                .map(|m| m.as_str())
                .collect();
            let _ = writeln!(
                doc,
                "- `{} {}` ({}:{}): backend declares {}",
                mismatch.method,
                mismatch.url,
                mismatch.file,
                mismatch.line,
                available.join(", ")
            );
        }
        doc.push('\n');
    }

    doc.push_str("## 3. Duplicate frontend calls\n\n");
    if result.duplicates.is_empty() {
        doc.push_str("None found.\n\n");
    } else {
        for issue in &result.duplicates {
            let _ = writeln!(
                doc,
                "- `{} {}` ({}:{}): {}",
                issue.method, issue.url, issue.file, issue.line, issue.reason
            );
        }
        doc.push('\n');
    }

    doc.push_str("## 4. Backend routes unused by the frontend\n\n");
    if result.missing_in_frontend.is_empty() {
        doc.push_str("None found.\n\n");
    } else {
        for route in &result.missing_in_frontend {
            let _ = writeln!(
                doc,
                "- `{} {}` ({}): not referenced by any frontend call",
                route.method, route.full_path, route.file
            );
        }
        doc.push('\n');
    }

    doc.push_str("## Recommendations\n\n");
    doc.push_str("- Add backend routes for every frontend call listed in section 1, or remove the dead calls.\n");
    doc.push_str("- Align HTTP methods for the mismatches in section 2; the frontend may be using the wrong verb.\n");
    doc.push_str("- Consolidate duplicate frontend calls (section 3) into a shared API service module.\n");
    doc.push_str("- Review unused backend routes (section 4): delete dead endpoints or wire them up in the UI.\n");
    doc.push('\n');

    doc.push_str("---\n");
    let _ = writeln!(doc, "Generated: {}", Utc::now().to_rfc3339());

    doc
}

/// Renders the report, writes it to `path`, prints the condensed console
/// summary, and returns the Markdown text.
pub fn write_report(result: &AnalysisResult, path: &Path) -> Result<String> {
    let markdown = render_markdown(result);
    write_to_file(&markdown, path)?;
    info!("Report written to {}", path.display());

    print_summary(result);
    Ok(markdown)
}

/// Condensed console summary of the audit outcome.
fn print_summary(result: &AnalysisResult) {
    let s = &result.summary;
    println!("Route audit summary:");
    println!(
        "  {} backend routes, {} frontend references",
        s.backend_total, s.frontend_total
    );
    println!("  missing in backend:  {}", s.missing_in_backend);
    println!("  method mismatches:   {}", s.method_mismatches);
    println!("  duplicate calls:     {}", s.duplicates);
    println!("  unused backend:      {}", s.missing_in_frontend);

    let issues =
        s.missing_in_backend + s.method_mismatches + s.duplicates + s.missing_in_frontend;
    if issues == 0 {
        println!("  no inconsistencies found");
    } else {
        println!("  {} total inconsistencies", issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{BackendRoute, DetectionKind, FrontendRoute, HttpMethod};
    use crate::reconciler::reconcile;
    use tempfile::TempDir;

    #[test]
    fn test_empty_result_renders_well_formed_document() {
        let result = reconcile(&[], &[]);
        let markdown = render_markdown(&result);

        assert!(markdown.starts_with("# Routes Consistency Report"));
        assert!(markdown.contains("## Summary"));
        assert!(markdown.contains("## 1. Frontend routes missing in backend"));
        assert!(markdown.contains("## 2. Method mismatches"));
        assert!(markdown.contains("## 3. Duplicate frontend calls"));
        assert!(markdown.contains("## 4. Backend routes unused by the frontend"));
        assert!(markdown.contains("## Recommendations"));
        assert!(markdown.contains("Generated: "));
        assert_eq!(markdown.matches("None found.").count(), 4);
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let result = reconcile(&[], &[]);
        let markdown = render_markdown(&result);

        let positions: Vec<usize> = [
            "## Summary",
            "## 1.",
            "## 2.",
            "## 3.",
            "## 4.",
            "## Recommendations",
        ]
        .iter()
        .map(|section| markdown.find(section).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_issues_render_with_provenance() {
        let backend = vec![
            BackendRoute::new(HttpMethod::Get, "/anime", "/api/v1/anime", "anime.js"),
            BackendRoute::new(HttpMethod::Post, "/anime", "/api/v1/anime", "anime.js"),
        ];
        let frontend = vec![
            FrontendRoute::new(
                HttpMethod::Put,
                "http://localhost:5000/api/v1/anime",
                DetectionKind::Axios,
                "src/services/anime.js",
                17,
            ),
            FrontendRoute::new(
                HttpMethod::Get,
                "http://localhost:5000/api/v1/manga",
                DetectionKind::Fetch,
                "src/App.jsx",
                5,
            ),
        ];

        let result = reconcile(&backend, &frontend);
        let markdown = render_markdown(&result);

        assert!(markdown.contains("`PUT http://localhost:5000/api/v1/anime` (src/services/anime.js:17)"));
        assert!(markdown.contains("backend declares GET, POST"));
        assert!(markdown.contains("`GET http://localhost:5000/api/v1/manga` (src/App.jsx:5)"));
        assert!(markdown.contains("no backend route matches this URL"));
    }

    #[test]
    fn test_write_report_persists_and_returns_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("routes-report.md");

        let result = reconcile(&[], &[]);
        let markdown = write_report(&result, &path).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, markdown);
    }
}
