//! Resource pack state: root path, parsed manifest, diagnostic sink, and
//! the pack-resolution contract.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Parsed `pack.json` metadata. Every field is independently optional:
/// a field that is missing or mistyped stays `None` (and was already
/// reported), it is never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackManifest {
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub version_major: Option<i64>,
    pub version_minor: Option<i64>,
}

impl PackManifest {
    /// All four manifest fields parsed correctly (both version halves).
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.author.is_some()
            && self.description.is_some()
            && self.version_major.is_some()
            && self.version_minor.is_some()
    }
}

/// One resource pack under validation: the resolved root directory, the
/// manifest once parsed, and the diagnostic sink for this run.
#[derive(Debug)]
pub struct ResourcePack {
    root: PathBuf,
    manifest: Option<PackManifest>,
    sink: DiagnosticSink,
}

impl ResourcePack {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest: None,
            sink: DiagnosticSink::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> Option<&PackManifest> {
        self.manifest.as_ref()
    }

    /// Attach the parsed manifest. Called at most once per run, by the
    /// manifest check.
    pub(crate) fn set_manifest(&mut self, manifest: PackManifest) {
        debug_assert!(self.manifest.is_none(), "manifest set twice");
        self.manifest = Some(manifest);
    }

    pub fn sink(&self) -> &DiagnosticSink {
        &self.sink
    }

    pub(crate) fn sink_mut(&mut self) -> &mut DiagnosticSink {
        &mut self.sink
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.sink.entries()
    }

    /// Verdict: the run passed iff no diagnostic is error-effective.
    pub fn passed(&self) -> bool {
        !self.sink.has_errors()
    }

    /// Display name for reports: the manifest name when one parsed.
    pub fn display_name(&self) -> &str {
        self.manifest
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .unwrap_or("<unknown>")
    }
}

/// Where a pack argument points. Parsing is total: every string is either
/// a Steam Workshop identifier (all digits) or a directory path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackSource {
    Directory(PathBuf),
    Workshop(u64),
}

/// Failure to turn a [`PackSource`] into a local pack directory.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error(
        "resolving Steam Workshop pack {id} is not supported; pass the pack directory instead"
    )]
    WorkshopUnsupported { id: u64 },
}

impl PackSource {
    pub fn parse(arg: &str) -> Self {
        match arg.parse::<u64>() {
            Ok(id) if arg.chars().all(|c| c.is_ascii_digit()) => PackSource::Workshop(id),
            _ => PackSource::Directory(PathBuf::from(arg)),
        }
    }

    /// Resolve to a local directory. Whether the directory actually
    /// exists is the manifest check's concern, so this stays total for
    /// local paths; Workshop sources are an explicit unsupported outcome.
    pub fn resolve(self) -> Result<PathBuf, ResolveError> {
        match self {
            PackSource::Directory(path) => Ok(path),
            PackSource::Workshop(id) => Err(ResolveError::WorkshopUnsupported { id }),
        }
    }
}
