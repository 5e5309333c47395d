//! Diagnostic model: severities, locations, and the append-only sink.

use std::fmt;
use std::path::PathBuf;

use crate::catalog::{self, CodeSpec};

/// The severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// An informative finding; never affects the verdict.
    Info,
    /// A problem worth fixing that does not fail the pack on its own.
    Warn,
    /// A problem that must be fixed; any error fails the pack.
    Error,
}

impl Severity {
    pub fn keyword(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A position inside a file; line and column are each optional because
/// parsers report them with varying precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl Location {
    pub fn line(line: usize) -> Self {
        Self {
            line: Some(line),
            column: None,
        }
    }

    pub fn line_column(line: usize, column: usize) -> Self {
        Self {
            line: Some(line),
            column: Some(column),
        }
    }
}

/// One validation finding. Immutable once created.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity the catalog binds to the code.
    pub severity: Severity,
    /// Per-call override; kept by the model, unused by shipped checks.
    pub severity_override: Option<Severity>,
    /// Stable catalog code, e.g. `RP2005`.
    pub code: &'static str,
    /// Rendered message.
    pub message: String,
    /// Pack-relative file the finding is about, when file-specific.
    pub file: Option<PathBuf>,
    pub location: Option<Location>,
}

impl Diagnostic {
    /// The override when set, the catalog severity otherwise.
    pub fn effective_severity(&self) -> Severity {
        self.severity_override.unwrap_or(self.severity)
    }
}

/// Ordered, append-only collection of diagnostics for one validation run.
///
/// The `emit*` family is the only producer: every diagnostic goes through
/// a catalog entry, so an emitted code always exists in the catalog.
/// Nothing is ever deduplicated or removed.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    entries: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic that is not tied to a particular file.
    pub fn emit(&mut self, spec: &'static CodeSpec, args: &[&dyn fmt::Display]) {
        self.push(spec, None, None, None, args);
    }

    /// Emit a diagnostic about `file`, optionally at a location in it.
    pub fn emit_at(
        &mut self,
        spec: &'static CodeSpec,
        file: impl Into<PathBuf>,
        location: Option<Location>,
        args: &[&dyn fmt::Display],
    ) {
        self.push(spec, None, Some(file.into()), location, args);
    }

    /// Emit with a per-call severity override.
    ///
    /// Reserved by the diagnostic model; no shipped check overrides the
    /// catalog severity today.
    pub fn emit_overriding(
        &mut self,
        spec: &'static CodeSpec,
        severity: Severity,
        file: Option<PathBuf>,
        location: Option<Location>,
        args: &[&dyn fmt::Display],
    ) {
        self.push(spec, Some(severity), file, location, args);
    }

    fn push(
        &mut self,
        spec: &'static CodeSpec,
        severity_override: Option<Severity>,
        file: Option<PathBuf>,
        location: Option<Location>,
        args: &[&dyn fmt::Display],
    ) {
        self.entries.push(Diagnostic {
            severity: spec.severity,
            severity_override,
            code: spec.code,
            message: catalog::render(spec.template, args),
            file,
            location,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics whose effective severity is `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.effective_severity() == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.effective_severity() == Severity::Error)
    }
}
