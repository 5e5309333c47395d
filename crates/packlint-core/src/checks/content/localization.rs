//! Localization sub-check: language-coded `.json`/`.csv` files whose
//! flattened keys must all exist in the game's localization tables.

use std::fs;
use std::path::Path;

use packlint_data::ContentDump;

use crate::catalog;
use crate::diagnostics::Location;
use crate::pack::ResourcePack;
use crate::parsers;

pub(crate) const CATEGORY: &str = "Localization";

/// Language-region codes the game ships localization for.
const LANGUAGE_CODES: &[&str] = &[
    "en-US", "de-DE", "it-IT", "fr-FR", "es-ES", "ru-RU", "zh-Hans", "pt-BR", "pl-PL",
];

const ALLOWED_EXTENSIONS: &[&str] = &["json", "csv"];

pub(super) fn validate(pack: &mut ResourcePack, data: &ContentDump, localization_dir: &Path) {
    for file in super::walk_files(localization_dir) {
        check_file(pack, data, &file);
    }
}

fn check_file(pack: &mut ResourcePack, data: &ContentDump, file: &Path) {
    let relative = super::pack_relative(pack.root(), file);

    let name = file
        .file_name()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or_default();
    if !LANGUAGE_CODES.iter().any(|code| name.starts_with(code)) {
        pack.sink_mut().emit_at(
            &catalog::LOCALIZATION_BAD_LANGUAGE_CODE,
            relative.clone(),
            None,
            &[&LANGUAGE_CODES.join(", ")],
        );
    }

    match super::extension_lowercase(file).as_deref() {
        Some("json") => check_json(pack, data, file),
        Some("csv") => check_csv(pack, data, file),
        _ => {
            pack.sink_mut().emit_at(
                &catalog::LOCALIZATION_BAD_EXTENSION,
                relative,
                None,
                &[&super::allowed_list(ALLOWED_EXTENSIONS)],
            );
        }
    }
}

fn check_json(pack: &mut ResourcePack, data: &ContentDump, file: &Path) {
    let relative = super::pack_relative(pack.root(), file);

    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(err) => {
            pack.sink_mut().emit_at(
                &catalog::LOCALIZATION_MALFORMED_JSON,
                relative,
                None,
                &[&err],
            );
            return;
        }
    };

    let document = match parsers::parse_localization_map(&text) {
        Ok(document) => document,
        Err(err) => {
            pack.sink_mut().emit_at(
                &catalog::LOCALIZATION_MALFORMED_JSON,
                relative,
                Some(Location::line_column(err.line(), err.column())),
                &[&err],
            );
            return;
        }
    };

    for (category, entries) in &document {
        for entry in entries.keys() {
            let key = format!("{category}.{entry}");
            if !data.is_localization_key(&key) {
                pack.sink_mut().emit_at(
                    &catalog::LOCALIZATION_UNKNOWN_KEY,
                    relative.clone(),
                    None,
                    &[&key],
                );
            }
        }
    }
}

fn check_csv(pack: &mut ResourcePack, data: &ContentDump, file: &Path) {
    let relative = super::pack_relative(pack.root(), file);

    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(err) => {
            pack.sink_mut().emit_at(
                &catalog::LOCALIZATION_MALFORMED_CSV,
                relative,
                None,
                &[&err],
            );
            return;
        }
    };

    // Record 1 is the header; the reader skips it.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                pack.sink_mut().emit_at(
                    &catalog::LOCALIZATION_MALFORMED_CSV,
                    relative.clone(),
                    None,
                    &[&err],
                );
                continue;
            }
        };

        let line = record.position().map(|position| position.line() as usize);
        if record.len() < 2 {
            let detail = match line {
                Some(line) => format!("line {line} has fewer than 2 comma-separated fields"),
                None => "record has fewer than 2 comma-separated fields".to_string(),
            };
            pack.sink_mut().emit_at(
                &catalog::LOCALIZATION_MALFORMED_CSV,
                relative.clone(),
                line.map(Location::line),
                &[&detail],
            );
            continue;
        }

        if let Some(key) = record.get(0) {
            if !data.is_localization_key(key) {
                pack.sink_mut().emit_at(
                    &catalog::LOCALIZATION_UNKNOWN_KEY,
                    relative.clone(),
                    line.map(Location::line),
                    &[&key],
                );
            }
        }
    }
}
