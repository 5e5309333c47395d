//! Content subtree check: orchestrates the per-category sub-checks.
//!
//! `Content/` itself is required; the four category directories under it
//! are optional, and each sub-check runs independently of the others.

pub mod images;
pub mod localization;
pub mod music;
pub mod sounds;

use std::path::{Path, PathBuf};

use packlint_data::ContentDump;
use walkdir::WalkDir;

use crate::catalog;
use crate::pack::ResourcePack;
use crate::{checks::PackCheck, CONTENT_DIR};

pub struct ContentCheck;

impl PackCheck for ContentCheck {
    fn run(&self, pack: &mut ResourcePack, data: &ContentDump) {
        let content_dir = pack.root().join(CONTENT_DIR);
        if !content_dir.is_dir() {
            pack.sink_mut()
                .emit(&catalog::CONTENT_DIR_MISSING, &[&content_dir.display()]);
            return;
        }

        if let Some(dir) = category_dir(pack, &content_dir, images::CATEGORY) {
            images::validate(pack, data, &content_dir, &dir);
        }
        if let Some(dir) = category_dir(pack, &content_dir, localization::CATEGORY) {
            localization::validate(pack, data, &dir);
        }
        if let Some(dir) = category_dir(pack, &content_dir, music::CATEGORY) {
            music::validate(pack, data, &dir);
        }
        if let Some(dir) = category_dir(pack, &content_dir, sounds::CATEGORY) {
            sounds::validate(pack, data, &content_dir, &dir);
        }
    }
}

/// Report a category directory's presence; a missing category only
/// downgrades that category, it never blocks the others.
fn category_dir(pack: &mut ResourcePack, content_dir: &Path, category: &str) -> Option<PathBuf> {
    let dir = content_dir.join(category);
    if dir.is_dir() {
        pack.sink_mut()
            .emit(&catalog::CONTENT_CATEGORY_FOUND, &[&category, &dir.display()]);
        Some(dir)
    } else {
        pack.sink_mut().emit(
            &catalog::CONTENT_CATEGORY_MISSING,
            &[&category, &dir.display()],
        );
        None
    }
}

/// All files under `dir`, recursively, in deterministic name order.
/// Unreadable entries are skipped; the walk itself is best-effort.
pub(crate) fn walk_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Reference-data identifier for a content file: path relative to
/// `Content/`, final extension stripped, separators normalized to `/`.
pub(crate) fn content_identifier(content_dir: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(content_dir).unwrap_or(file);
    relative
        .with_extension("")
        .to_string_lossy()
        .replace('\\', "/")
}

/// Pack-root-relative path for diagnostic file fields.
pub(crate) fn pack_relative(root: &Path, file: &Path) -> PathBuf {
    file.strip_prefix(root).unwrap_or(file).to_path_buf()
}

/// Render an allowed-extension set for messages: `.ogg, .wav, .mp3`.
pub(crate) fn allowed_list(extensions: &[&str]) -> String {
    extensions
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lowercased final extension, when the file has one.
pub(crate) fn extension_lowercase(file: &Path) -> Option<String> {
    file.extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase)
}
