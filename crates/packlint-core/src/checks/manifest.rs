//! Manifest check: locates and schema-validates `pack.json`.

use std::fs;
use std::io;

use packlint_data::ContentDump;
use serde_json::Value;

use crate::catalog;
use crate::diagnostics::{DiagnosticSink, Location};
use crate::pack::{PackManifest, ResourcePack};
use crate::parsers;
use crate::{checks::PackCheck, MANIFEST_FILE};

pub struct ManifestCheck;

impl PackCheck for ManifestCheck {
    fn run(&self, pack: &mut ResourcePack, _data: &ContentDump) {
        validate(pack);
    }
}

fn validate(pack: &mut ResourcePack) {
    let root = pack.root().to_path_buf();

    if !root.exists() {
        pack.sink_mut()
            .emit(&catalog::PACK_DIR_MISSING, &[&root.display()]);
        return;
    }
    if !root.is_dir() {
        pack.sink_mut()
            .emit(&catalog::PACK_NOT_A_DIRECTORY, &[&root.display()]);
        return;
    }

    let manifest_path = root.join(MANIFEST_FILE);
    let text = match fs::read_to_string(&manifest_path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            pack.sink_mut()
                .emit(&catalog::MANIFEST_MISSING, &[&manifest_path.display()]);
            return;
        }
        Err(_) => {
            pack.sink_mut()
                .emit(&catalog::MANIFEST_UNREADABLE, &[&manifest_path.display()]);
            return;
        }
    };

    // JSON validity gates every field-level check.
    let document = match parsers::parse_lenient_json(&text) {
        Ok(document) => document,
        Err(err) => {
            pack.sink_mut().emit_at(
                &catalog::MANIFEST_MALFORMED_JSON,
                MANIFEST_FILE,
                Some(Location::line_column(err.line(), err.column())),
                &[&err],
            );
            return;
        }
    };

    let mut manifest = PackManifest::default();
    let sink = pack.sink_mut();

    manifest.name = string_field(&document, "Name", sink);
    manifest.author = string_field(&document, "Author", sink);
    manifest.description = string_field(&document, "Description", sink);

    match document.get("Version") {
        None => invalid(sink, "missing required field 'Version'"),
        Some(version) if !version.is_object() => {
            invalid(sink, "field 'Version' must be an object");
        }
        Some(version) => {
            manifest.version_major = version_field(version, "major", sink);
            manifest.version_minor = version_field(version, "minor", sink);
        }
    }

    if let (Some(name), Some(author), Some(description), Some(major), Some(minor)) = (
        manifest.name.as_ref(),
        manifest.author.as_ref(),
        manifest.description.as_ref(),
        manifest.version_major,
        manifest.version_minor,
    ) {
        pack.sink_mut().emit(
            &catalog::MANIFEST_PARSED,
            &[name, author, description, &major, &minor],
        );
    }

    pack.set_manifest(manifest);
}

fn string_field(document: &Value, field: &str, sink: &mut DiagnosticSink) -> Option<String> {
    match document.get(field) {
        None => {
            invalid(sink, &format!("missing required field '{field}'"));
            None
        }
        Some(value) => match value.as_str() {
            Some(text) => Some(text.to_string()),
            None => {
                invalid(sink, &format!("field '{field}' must be a string"));
                None
            }
        },
    }
}

fn version_field(version: &Value, field: &str, sink: &mut DiagnosticSink) -> Option<i64> {
    match version.get(field) {
        None => {
            invalid(sink, &format!("Version is missing required field '{field}'"));
            None
        }
        Some(value) => match value.as_i64() {
            Some(number) => Some(number),
            None => {
                invalid(sink, &format!("field 'Version.{field}' must be an integer"));
                None
            }
        },
    }
}

fn invalid(sink: &mut DiagnosticSink, detail: &str) {
    sink.emit_at(&catalog::MANIFEST_INVALID, MANIFEST_FILE, None, &[&detail]);
}
