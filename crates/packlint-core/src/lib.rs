//! # packlint-core
//!
//! Core validation engine for Terraria resource packs.
//!
//! Validates:
//! - `pack.json` manifest schema
//! - `icon.png` decodability
//! - the `Content/` subtree (Images, Localization, Music, Sounds) against
//!   the reference dataset extracted from the base game
//!
//! Every finding is a [`Diagnostic`] appended to the pack's sink; the
//! pipeline keeps going after local failures so one run reports as much
//! as it can. The pack fails iff at least one error-severity diagnostic
//! was emitted.

pub mod catalog;
pub mod checks;
pub mod diagnostics;
pub mod pack;
pub mod parsers;

use std::path::PathBuf;

pub use diagnostics::{Diagnostic, DiagnosticSink, Location, Severity};
pub use pack::{PackManifest, PackSource, ResolveError, ResourcePack};
pub use packlint_data::{ContentDump, DataError, Dimensions};

use checks::{content::ContentCheck, icon::IconCheck, manifest::ManifestCheck, PackCheck};

/// Manifest file name, sibling to the pack's content.
pub const MANIFEST_FILE: &str = "pack.json";
/// Icon file name under the pack root.
pub const ICON_FILE: &str = "icon.png";
/// Required content subtree under the pack root.
pub const CONTENT_DIR: &str = "Content";

/// Run the full pipeline over one pack: manifest, then icon, then
/// content, in that order. Stages are independent; an internal failure in
/// one stage never prevents the later stages from running.
pub fn validate_pack(pack: &mut ResourcePack, data: &ContentDump) {
    let stages: [&dyn PackCheck; 3] = [&ManifestCheck, &IconCheck, &ContentCheck];
    for stage in stages {
        stage.run(pack, data);
    }
}

/// Validate the pack rooted at `root` and return it with its diagnostics.
pub fn validate_path(root: impl Into<PathBuf>, data: &ContentDump) -> ResourcePack {
    let mut pack = ResourcePack::new(root);
    validate_pack(&mut pack, data);
    pack
}
