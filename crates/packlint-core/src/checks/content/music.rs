//! Music sub-check: files directly inside `Content/Music`, named
//! `Music_<N>` for a track id the game actually has.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use packlint_data::ContentDump;
use regex::Regex;

use crate::catalog;
use crate::pack::ResourcePack;

pub(crate) const CATEGORY: &str = "Music";

const ALLOWED_EXTENSIONS: &[&str] = &["ogg", "wav", "mp3"];

/// Track ids start at 1; 0 is the game's silence slot.
const MIN_MUSIC_ID: u32 = 1;

static MUSIC_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Music_([0-9]+)$").expect("invalid music name regex"));

pub(super) fn validate(pack: &mut ResourcePack, data: &ContentDump, music_dir: &Path) {
    // Intentionally non-recursive; the game only scans the top level.
    for file in list_files(music_dir) {
        check_file(pack, data, &file);
    }
}

fn check_file(pack: &mut ResourcePack, data: &ContentDump, file: &Path) {
    let relative = super::pack_relative(pack.root(), file);

    let stem = file
        .file_stem()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or_default();
    if !name_is_valid(stem, data.max_music_id()) {
        pack.sink_mut().emit_at(
            &catalog::MUSIC_BAD_NAME,
            relative.clone(),
            None,
            &[&MIN_MUSIC_ID, &data.max_music_id()],
        );
    }

    // Independent of the name check; one file can accumulate both.
    match super::extension_lowercase(file) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            pack.sink_mut().emit_at(
                &catalog::MUSIC_BAD_EXTENSION,
                relative,
                None,
                &[&super::allowed_list(ALLOWED_EXTENSIONS)],
            );
        }
    }
}

fn name_is_valid(stem: &str, max_music_id: u32) -> bool {
    MUSIC_NAME
        .captures(stem)
        .and_then(|captures| captures[1].parse::<u32>().ok())
        .is_some_and(|id| (MIN_MUSIC_ID..max_music_id).contains(&id))
}

fn list_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::content::testsupport;

    fn run(root: &Path) -> ResourcePack {
        let dir = root.join("Content/Music");
        let mut pack = ResourcePack::new(root);
        // testsupport dump has max_music_id = 10
        validate(&mut pack, &testsupport::dump(), &dir);
        pack
    }

    fn setup() -> (tempfile::TempDir, PathBuf) {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("Content/Music");
        fs::create_dir_all(&dir).unwrap();
        (temp, dir)
    }

    #[test]
    fn track_zero_is_below_the_minimum() {
        let (temp, dir) = setup();
        fs::write(dir.join("Music_0.ogg"), b"").unwrap();

        let pack = run(temp.path());
        let codes: Vec<_> = pack.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["RP3001"]);
        assert!(pack.diagnostics()[0].message.contains("greater than or equal to 1"));
        assert!(pack.diagnostics()[0].message.contains("less than 10"));
    }

    #[test]
    fn track_at_the_exclusive_bound_is_out_of_range() {
        let (temp, dir) = setup();
        fs::write(dir.join("Music_10.ogg"), b"").unwrap();

        let pack = run(temp.path());
        let codes: Vec<_> = pack.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["RP3001"]);
    }

    #[test]
    fn valid_track_with_wrong_extension_fails_only_the_extension_check() {
        let (temp, dir) = setup();
        fs::write(dir.join("Music_5.mp4"), b"").unwrap();

        let pack = run(temp.path());
        let codes: Vec<_> = pack.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["RP3002"]);
        assert!(pack.diagnostics()[0].message.contains(".ogg, .wav, .mp3"));
    }

    #[test]
    fn mp3_is_an_allowed_extension() {
        let (temp, dir) = setup();
        fs::write(dir.join("Music_5.mp3"), b"").unwrap();

        let pack = run(temp.path());
        assert!(pack.diagnostics().is_empty());
    }

    #[test]
    fn bad_prefix_and_bad_extension_accumulate_on_one_file() {
        let (temp, dir) = setup();
        fs::write(dir.join("Track_5.flac"), b"").unwrap();

        let pack = run(temp.path());
        let codes: Vec<_> = pack.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["RP3001", "RP3002"]);
    }

    #[test]
    fn unparsable_index_collapses_to_the_name_code() {
        let (temp, dir) = setup();
        fs::write(dir.join("Music_99999999999999999999.ogg"), b"").unwrap();

        let pack = run(temp.path());
        let codes: Vec<_> = pack.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["RP3001"]);
    }

    #[test]
    fn nested_files_are_not_scanned() {
        let (temp, dir) = setup();
        fs::create_dir_all(dir.join("extra")).unwrap();
        fs::write(dir.join("extra/NotMusic.txt"), b"").unwrap();

        let pack = run(temp.path());
        assert!(pack.diagnostics().is_empty());
    }
}
