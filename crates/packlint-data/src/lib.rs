//! Reference content data for packlint.
//!
//! This crate ships the ground-truth dataset that resource-pack checks
//! match against: the set of valid localization keys, the per-path image
//! dimension table, the exclusive upper bound on music track ids, and the
//! set of valid sound identifiers.
//!
//! The dataset is produced offline by an extraction tool that reads the
//! base game's packaged resource tables; this crate only consumes the
//! resulting `content_dump.json` artifact. The default artifact for the
//! current game build is embedded in the crate, and [`ContentDump::from_path`]
//! loads a replacement artifact for newer builds.
//!
//! A loaded [`ContentDump`] is immutable and `Send + Sync`; construct it
//! once at startup and share it by reference across validation runs.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Artifact embedded at build time, matching the game build this release
/// of packlint targets.
const EMBEDDED_DUMP: &str = include_str!("../data/content_dump.json");

pub type DataResult<T> = Result<T, DataError>;

/// Errors loading a content dump artifact.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read content dump: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content dump is not a valid artifact: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Width and height of a reference image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Dimensions {
    #[serde(rename = "Width")]
    pub width: u32,
    #[serde(rename = "Height")]
    pub height: u32,
}

/// Ground-truth content dataset extracted from the base game.
///
/// Field names in the artifact are fixed by the extraction tool
/// (PascalCase). Arrays deserialize straight into sets so membership
/// checks are O(1).
#[derive(Debug, Clone, Deserialize)]
pub struct ContentDump {
    #[serde(rename = "LocalizationKeys")]
    localization_keys: HashSet<String>,

    #[serde(rename = "ImageDimensions")]
    image_dimensions: HashMap<String, Dimensions>,

    #[serde(rename = "MaxMusicId")]
    max_music_id: u32,

    #[serde(rename = "Sounds")]
    sounds: HashSet<String>,
}

impl ContentDump {
    /// Parse the artifact embedded in this crate.
    ///
    /// Panics if the embedded artifact is malformed; that is a packaging
    /// defect, not a runtime condition.
    pub fn embedded() -> Self {
        serde_json::from_str(EMBEDDED_DUMP).expect("embedded content dump is a valid artifact")
    }

    /// Load an artifact from an external file, for game builds newer than
    /// the embedded dataset.
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| DataError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_str(&text)
    }

    /// Parse an artifact from its JSON text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> DataResult<Self> {
        serde_json::from_str(text).map_err(DataError::Parse)
    }

    /// Build a dataset directly from its four tables. Intended for tests
    /// and embedders that obtain reference data some other way.
    pub fn new(
        localization_keys: impl IntoIterator<Item = String>,
        image_dimensions: HashMap<String, Dimensions>,
        max_music_id: u32,
        sounds: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            localization_keys: localization_keys.into_iter().collect(),
            image_dimensions,
            max_music_id,
            sounds: sounds.into_iter().collect(),
        }
    }

    /// Whether `key` (flattened `Category.Name` form) is a localization
    /// key the game knows.
    pub fn is_localization_key(&self, key: &str) -> bool {
        self.localization_keys.contains(key)
    }

    /// Reference dimensions for an image identifier, if the identifier is
    /// known. Identifiers are `Content`-relative, extension-stripped,
    /// slash-normalized paths such as `Images/NPC_1`.
    pub fn image_dimensions(&self, identifier: &str) -> Option<Dimensions> {
        self.image_dimensions.get(identifier).copied()
    }

    /// Find an image identifier that matches `identifier` ignoring ASCII
    /// case, returning the canonical casing.
    pub fn image_identifier_ignore_case(&self, identifier: &str) -> Option<&str> {
        self.image_dimensions
            .keys()
            .find(|known| known.eq_ignore_ascii_case(identifier))
            .map(String::as_str)
    }

    /// Exclusive upper bound on valid music track ids; valid tracks are
    /// `Music_N` with `1 <= N < max_music_id()`.
    pub fn max_music_id(&self) -> u32 {
        self.max_music_id
    }

    /// Whether `identifier` (`Content`-relative, extension-stripped,
    /// slash-normalized, e.g. `Sounds/Dig_0`) is a sound the game knows.
    pub fn is_sound(&self, identifier: &str) -> bool {
        self.sounds.contains(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_artifact_parses() {
        let dump = ContentDump::embedded();
        assert!(dump.max_music_id() > 1);
        assert!(dump.is_sound("Sounds/Dig_0"));
        assert!(dump.is_sound("Sounds/Custom/dd2_betsy_death_2"));
        assert!(!dump.is_sound("Sounds/Dig_99"));
        assert!(dump.is_localization_key("UI.Cursor"));
        assert!(dump.image_dimensions("Images/NPC_1").is_some());
    }

    #[test]
    fn from_str_rejects_malformed_artifacts() {
        assert!(matches!(
            ContentDump::from_str("{\"LocalizationKeys\": 3}"),
            Err(DataError::Parse(_))
        ));
        assert!(ContentDump::from_str("not json").is_err());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = ContentDump::from_path(Path::new("/nonexistent/dump.json")).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn case_insensitive_image_lookup_returns_canonical_casing() {
        let dump = ContentDump::embedded();
        assert_eq!(
            dump.image_identifier_ignore_case("images/npc_1"),
            Some("Images/NPC_1")
        );
        assert_eq!(dump.image_identifier_ignore_case("Images/Nope"), None);
    }

    #[test]
    fn hand_built_dataset_lookups() {
        let mut dims = HashMap::new();
        dims.insert(
            "Images/Logo".to_string(),
            Dimensions {
                width: 474,
                height: 114,
            },
        );
        let dump = ContentDump::new(
            ["UI.Cursor".to_string()],
            dims,
            10,
            ["Sounds/Dig_0".to_string()],
        );

        assert!(dump.is_localization_key("UI.Cursor"));
        assert!(!dump.is_localization_key("UI.Back"));
        assert_eq!(dump.max_music_id(), 10);
        assert_eq!(
            dump.image_dimensions("Images/Logo"),
            Some(Dimensions {
                width: 474,
                height: 114
            })
        );
    }
}
