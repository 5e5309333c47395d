//! Images sub-check: every file must be a known image at the reference
//! dimensions, because the game draws override textures at the original
//! sprite sizes.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use packlint_data::{ContentDump, Dimensions};

use crate::catalog;
use crate::pack::ResourcePack;

pub(crate) const CATEGORY: &str = "Images";

const ALLOWED_EXTENSIONS: &[&str] = &["png"];

pub(super) fn validate(
    pack: &mut ResourcePack,
    data: &ContentDump,
    content_dir: &Path,
    images_dir: &Path,
) {
    for file in super::walk_files(images_dir) {
        check_file(pack, data, content_dir, &file);
    }
}

fn check_file(pack: &mut ResourcePack, data: &ContentDump, content_dir: &Path, file: &Path) {
    let relative = super::pack_relative(pack.root(), file);
    let identifier = super::content_identifier(content_dir, file);

    let expected = match data.image_dimensions(&identifier) {
        Some(dimensions) => dimensions,
        None => match data.image_identifier_ignore_case(&identifier) {
            Some(canonical) => {
                let Some(dimensions) = data.image_dimensions(canonical) else {
                    return;
                };
                pack.sink_mut()
                    .emit_at(&catalog::IMAGE_WRONG_CASING, relative.clone(), None, &[]);
                dimensions
            }
            None => {
                pack.sink_mut()
                    .emit_at(&catalog::IMAGE_UNRECOGNIZED, relative, None, &[]);
                return;
            }
        },
    };

    match super::extension_lowercase(file) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            pack.sink_mut().emit_at(
                &catalog::IMAGE_BAD_EXTENSION,
                relative,
                None,
                &[&super::allowed_list(ALLOWED_EXTENSIONS)],
            );
            return;
        }
    }

    let Some(actual) = decode_dimensions(file) else {
        pack.sink_mut()
            .emit_at(&catalog::IMAGE_UNPARSABLE, relative, None, &[]);
        return;
    };

    if actual != expected {
        pack.sink_mut().emit_at(
            &catalog::IMAGE_WRONG_DIMENSIONS,
            relative,
            None,
            &[
                &expected.width,
                &expected.height,
                &actual.width,
                &actual.height,
            ],
        );
    }
}

/// Width and height from the PNG header; decoding the pixel data is not
/// needed to compare dimensions.
fn decode_dimensions(file: &Path) -> Option<Dimensions> {
    let bytes = fs::read(file).ok()?;
    let reader = png::Decoder::new(Cursor::new(bytes)).read_info().ok()?;
    let info = reader.info();
    Some(Dimensions {
        width: info.width,
        height: info.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::content::testsupport;
    use crate::diagnostics::Severity;
    use std::fs::File;
    use std::io::BufWriter;

    fn write_png(path: &Path, width: u32, height: u32) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&vec![0u8; (width * height * 4) as usize])
            .unwrap();
    }

    fn run(root: &Path) -> ResourcePack {
        let content_dir = root.join("Content");
        let images_dir = content_dir.join("Images");
        let mut pack = ResourcePack::new(root);
        validate(&mut pack, &testsupport::dump(), &content_dir, &images_dir);
        pack
    }

    fn setup() -> (tempfile::TempDir, std::path::PathBuf) {
        let temp = tempfile::TempDir::new().unwrap();
        let images = temp.path().join("Content/Images");
        fs::create_dir_all(&images).unwrap();
        (temp, images)
    }

    #[test]
    fn unknown_identifier_is_unrecognized_and_skips_later_checks() {
        let (temp, images) = setup();
        fs::write(images.join("Totally_Custom.png"), b"ignored").unwrap();

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics().len(), 1);
        assert_eq!(pack.diagnostics()[0].code, "RP1001");
    }

    #[test]
    fn casing_mismatch_is_a_warning_and_checks_continue() {
        let (temp, images) = setup();
        write_png(&images.join("npc_1.png"), 40, 56);

        let pack = run(temp.path());
        let codes: Vec<_> = pack.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["RP1005"]);
        assert_eq!(pack.diagnostics()[0].severity, Severity::Warn);
        assert!(pack.passed());
    }

    #[test]
    fn wrong_extension_skips_the_decode() {
        let (temp, images) = setup();
        fs::write(images.join("NPC_1.jpg"), b"ignored").unwrap();

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics().len(), 1);
        let diag = &pack.diagnostics()[0];
        assert_eq!(diag.code, "RP1002");
        assert!(diag.message.contains(".png"));
    }

    #[test]
    fn undecodable_png_is_unparsable() {
        let (temp, images) = setup();
        fs::write(images.join("NPC_1.png"), b"not a png at all").unwrap();

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics().len(), 1);
        assert_eq!(pack.diagnostics()[0].code, "RP1003");
    }

    #[test]
    fn dimension_mismatch_cites_expected_and_actual() {
        let (temp, images) = setup();
        write_png(&images.join("NPC_1.png"), 32, 32);

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics().len(), 1);
        let diag = &pack.diagnostics()[0];
        assert_eq!(diag.code, "RP1004");
        assert!(diag.message.contains("(40x56)"));
        assert!(diag.message.contains("(32x32)"));
    }

    #[test]
    fn matching_image_in_a_subdirectory_passes() {
        let (temp, images) = setup();
        fs::create_dir_all(images.join("UI")).unwrap();
        write_png(&images.join("UI/ButtonPlay.png"), 100, 102);

        let pack = run(temp.path());
        assert!(pack.diagnostics().is_empty());
    }
}
