//! Sounds sub-check: recursive, identifier membership first, then the
//! container extension.

use std::path::Path;

use packlint_data::ContentDump;

use crate::catalog;
use crate::pack::ResourcePack;

pub(crate) const CATEGORY: &str = "Sounds";

const ALLOWED_EXTENSIONS: &[&str] = &["xnb"];

pub(super) fn validate(
    pack: &mut ResourcePack,
    data: &ContentDump,
    content_dir: &Path,
    sounds_dir: &Path,
) {
    for file in super::walk_files(sounds_dir) {
        let relative = super::pack_relative(pack.root(), &file);
        let identifier = super::content_identifier(content_dir, &file);

        if !data.is_sound(&identifier) {
            // Extension is meaningless for a sound the game will never
            // look up, so the extension check is skipped.
            pack.sink_mut()
                .emit_at(&catalog::SOUND_UNRECOGNIZED, relative, None, &[]);
            continue;
        }

        match super::extension_lowercase(&file) {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                pack.sink_mut().emit_at(
                    &catalog::SOUND_BAD_EXTENSION,
                    relative,
                    None,
                    &[&super::allowed_list(ALLOWED_EXTENSIONS)],
                );
            }
        }
    }
}
