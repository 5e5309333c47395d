//! Icon check: `icon.png` must decode as an actual PNG.
//!
//! The signature sniff matters because decoders will happily accept some
//! foreign containers; a JPEG renamed to `icon.png` has to fail here, not
//! in the game.

use std::fs;
use std::io::{self, Cursor};

use packlint_data::ContentDump;

use crate::catalog;
use crate::pack::ResourcePack;
use crate::{checks::PackCheck, ICON_FILE};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub struct IconCheck;

impl PackCheck for IconCheck {
    fn run(&self, pack: &mut ResourcePack, _data: &ContentDump) {
        validate(pack);
    }
}

fn validate(pack: &mut ResourcePack) {
    let icon_path = pack.root().join(ICON_FILE);

    let bytes = match fs::read(&icon_path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            pack.sink_mut()
                .emit(&catalog::ICON_MISSING, &[&icon_path.display()]);
            return;
        }
        Err(_) => {
            pack.sink_mut()
                .emit(&catalog::ICON_UNREADABLE, &[&icon_path.display()]);
            return;
        }
    };

    if bytes.len() < PNG_SIGNATURE.len() || bytes[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        pack.sink_mut().emit_at(
            &catalog::ICON_INVALID,
            ICON_FILE,
            None,
            &[&icon_path.display()],
        );
        return;
    }

    match png::Decoder::new(Cursor::new(bytes)).read_info() {
        Ok(_) => pack.sink_mut().emit_at(
            &catalog::ICON_VALID,
            ICON_FILE,
            None,
            &[&icon_path.display()],
        ),
        Err(_) => pack.sink_mut().emit_at(
            &catalog::ICON_INVALID,
            ICON_FILE,
            None,
            &[&icon_path.display()],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::Path;

    fn run(root: &Path) -> ResourcePack {
        let mut pack = ResourcePack::new(root);
        validate(&mut pack);
        pack
    }

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

    #[test]
    fn missing_icon_is_only_a_warning() {
        let temp = tempfile::TempDir::new().unwrap();

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics().len(), 1);
        let diag = &pack.diagnostics()[0];
        assert_eq!(diag.code, "RP0010");
        assert_eq!(diag.severity, Severity::Warn);
        assert!(pack.passed());
    }

    #[test]
    fn garbage_content_is_not_a_valid_png() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::write(temp.path().join("icon.png"), b"definitely not an image").unwrap();

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics()[0].code, "RP0011");
        assert!(!pack.passed());
    }

    #[test]
    fn foreign_container_is_rejected_by_the_signature_sniff() {
        let temp = tempfile::TempDir::new().unwrap();
        // JPEG SOI/APP0 marker, not a PNG signature
        fs::write(
            temp.path().join("icon.png"),
            [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'],
        )
        .unwrap();

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics()[0].code, "RP0011");
    }

    #[test]
    fn truncated_png_header_is_invalid() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::write(temp.path().join("icon.png"), PNG_SIGNATURE).unwrap();

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics()[0].code, "RP0011");
    }

    #[test]
    fn valid_png_is_acknowledged() {
        let temp = tempfile::TempDir::new().unwrap();
        write_png(&temp.path().join("icon.png"), 30, 30);

        let pack = run(temp.path());
        assert_eq!(pack.diagnostics().len(), 1);
        let diag = &pack.diagnostics()[0];
        assert_eq!(diag.code, "RP0012");
        assert_eq!(diag.severity, Severity::Info);
        assert!(pack.passed());
    }
}
