//! Command-line interface for the `vetrina` binary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::content::SourceDocument;
use crate::routes::front::render_path;
use crate::schema::{SchemaCatalog, Severity, ValidationIssue};
use crate::state::AppState;

/// Vetrina site server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Print every schema as JSON.
    Schema,
    /// Print the rendered HTML of a page.
    Render {
        /// Page slug; the home page when omitted.
        slug: Option<String>,
    },
    /// Validate every snapshot document against its schema.
    Validate,
}

impl Cli {
    /// The requested command, defaulting to `serve`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

/// `vetrina schema`
pub fn print_schema(state: &AppState) -> Result<()> {
    let json = serde_json::to_string_pretty(state.schemas().as_ref())
        .context("failed to serialize schemas")?;
    println!("{json}");
    Ok(())
}

/// `vetrina render [slug]`
pub async fn print_page(state: &AppState, slug: Option<&str>) -> Result<()> {
    let path = slug.unwrap_or("/");
    let Some(page) = render_path(state, path)
        .await
        .map_err(|e| anyhow::anyhow!("failed to render {path}: {e}"))?
    else {
        bail!("no document found for {path}");
    };
    println!("{}", page.html);
    Ok(())
}

/// `vetrina validate`
pub async fn validate_snapshot(state: &AppState) -> Result<()> {
    let documents = state
        .source()
        .documents()
        .await
        .context("failed to load content snapshot")?;
    info!(documents = documents.len(), "validating content snapshot");

    let rows = validate_documents(state.schemas(), &documents);
    print!("{}", format_report(&rows));

    let errors = rows
        .iter()
        .filter(|r| r.issue.severity == Severity::Error)
        .count();
    if errors > 0 {
        bail!("{errors} validation error(s) in {} document(s)", documents.len());
    }
    Ok(())
}

/// One line of the validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub origin: String,
    pub issue: ValidationIssue,
}

/// Validate documents; a document without a known `_type` is an error.
pub fn validate_documents(catalog: &SchemaCatalog, documents: &[SourceDocument]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for doc in documents {
        let issues = catalog.validate_document(&doc.value).unwrap_or_else(|| {
            vec![ValidationIssue {
                path: "_type".to_string(),
                severity: Severity::Error,
                message: match doc.doc_type() {
                    Some(t) => format!("Unknown document type \"{t}\""),
                    None => "Missing document type".to_string(),
                },
            }]
        });
        rows.extend(issues.into_iter().map(|issue| ReportRow {
            origin: doc.origin.clone(),
            issue,
        }));
    }
    rows
}

/// Render rows as an aligned text table.
pub fn format_report(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return "No issues found.\n".to_string();
    }

    let origin_width = rows
        .iter()
        .map(|r| r.origin.len())
        .chain(std::iter::once("DOCUMENT".len()))
        .max()
        .unwrap_or_default();
    let path_width = rows
        .iter()
        .map(|r| r.issue.path.len())
        .chain(std::iter::once("FIELD".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{:<origin_width$}  {:<path_width$}  {:<8}  MESSAGE\n",
        "DOCUMENT", "FIELD", "SEVERITY"
    );
    for row in rows {
        let severity = match row.issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        out.push_str(&format!(
            "{:<origin_width$}  {:<path_width$}  {severity:<8}  {}\n",
            row.origin, row.issue.path, row.issue.message
        ));
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::content::BlockRegistry;
    use serde_json::json;

    fn catalog() -> SchemaCatalog {
        SchemaCatalog::new(&BlockRegistry::standard().unwrap())
    }

    fn doc(origin: &str, value: serde_json::Value) -> SourceDocument {
        SourceDocument {
            origin: origin.to_string(),
            value,
        }
    }

    #[test]
    fn command_defaults_to_serve() {
        let cli = Cli::parse_from(["vetrina"]);
        assert_eq!(cli.command(), Command::Serve);

        let cli = Cli::parse_from(["vetrina", "render", "about"]);
        assert_eq!(
            cli.command(),
            Command::Render {
                slug: Some("about".to_string())
            }
        );
    }

    #[test]
    fn unknown_type_is_reported() {
        let rows = validate_documents(
            &catalog(),
            &[doc("pages/x.json", json!({ "_type": "mystery" }))],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].issue.severity, Severity::Error);
        assert!(rows[0].issue.message.contains("mystery"));
    }

    #[test]
    fn page_without_title_fails() {
        let rows = validate_documents(
            &catalog(),
            &[doc(
                "pages/about.json",
                json!({ "_type": "page", "slug": { "current": "/about" } }),
            )],
        );
        assert!(
            rows.iter()
                .any(|r| r.issue.path == "title" && r.issue.severity == Severity::Error)
        );
    }

    #[test]
    fn report_formatting() {
        assert_eq!(format_report(&[]), "No issues found.\n");

        let report = format_report(&[ReportRow {
            origin: "home.json".to_string(),
            issue: ValidationIssue {
                path: "seoDescription".to_string(),
                severity: Severity::Warning,
                message: "Too short".to_string(),
            },
        }]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("DOCUMENT"));
        assert!(lines[1].contains("warning"));
        assert!(lines[1].ends_with("Too short"));
    }
}
