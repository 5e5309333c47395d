//! Fixed registry of diagnostic codes.
//!
//! Each code binds a stable identifier to a severity and a positional
//! `{0}`-style message template. Codes are numbered in blocks: 0000
//! general (pack structure, manifest, icon), 1000 images, 2000
//! localization, 3000 music, 4000 sounds.

use std::fmt;

use crate::diagnostics::Severity;

/// One catalog entry. Templates use positional placeholders; the argument
/// count at each call site matches the template by construction.
#[derive(Debug)]
pub struct CodeSpec {
    pub code: &'static str,
    pub severity: Severity,
    pub template: &'static str,
}

// 0000 - General diagnostics

pub static PACK_DIR_MISSING: CodeSpec = CodeSpec {
    code: "RP0001",
    severity: Severity::Error,
    template: "Resource pack directory '{0}' does not exist",
};

pub static PACK_NOT_A_DIRECTORY: CodeSpec = CodeSpec {
    code: "RP0002",
    severity: Severity::Error,
    template: "Resource pack path '{0}' is not a directory",
};

pub static MANIFEST_MISSING: CodeSpec = CodeSpec {
    code: "RP0003",
    severity: Severity::Error,
    template: "Resource pack manifest '{0}' does not exist",
};

pub static MANIFEST_UNREADABLE: CodeSpec = CodeSpec {
    code: "RP0004",
    severity: Severity::Error,
    template: "Cannot access pack manifest '{0}'",
};

pub static MANIFEST_MALFORMED_JSON: CodeSpec = CodeSpec {
    code: "RP0005",
    severity: Severity::Error,
    template: "Pack manifest is a malformed JSON document: {0}",
};

pub static MANIFEST_INVALID: CodeSpec = CodeSpec {
    code: "RP0006",
    severity: Severity::Error,
    template: "Invalid pack manifest: {0}",
};

pub static CONTENT_DIR_MISSING: CodeSpec = CodeSpec {
    code: "RP0007",
    severity: Severity::Error,
    template: "Resource pack does not have Content folder '{0}'",
};

pub static MANIFEST_PARSED: CodeSpec = CodeSpec {
    code: "RP0008",
    severity: Severity::Info,
    template: "Parsed resource pack metadata; name: '{0}', author: '{1}', description: '{2}', version: {3}.{4}",
};

pub static CONTENT_CATEGORY_FOUND: CodeSpec = CodeSpec {
    code: "RP0009",
    severity: Severity::Info,
    template: "{0} directory found: '{1}'",
};

pub static ICON_MISSING: CodeSpec = CodeSpec {
    code: "RP0010",
    severity: Severity::Warn,
    template: "Icon '{0}' not found",
};

pub static ICON_INVALID: CodeSpec = CodeSpec {
    code: "RP0011",
    severity: Severity::Error,
    template: "Icon '{0}' is not a valid PNG file",
};

pub static ICON_VALID: CodeSpec = CodeSpec {
    code: "RP0012",
    severity: Severity::Info,
    template: "Icon '{0}' is a valid PNG file",
};

pub static ICON_UNREADABLE: CodeSpec = CodeSpec {
    code: "RP0013",
    severity: Severity::Error,
    template: "Cannot access icon '{0}'",
};

pub static CONTENT_CATEGORY_MISSING: CodeSpec = CodeSpec {
    code: "RP0014",
    severity: Severity::Warn,
    template: "{0} directory not found: '{1}'",
};

// 1000 - Images diagnostics

pub static IMAGE_UNRECOGNIZED: CodeSpec = CodeSpec {
    code: "RP1001",
    severity: Severity::Error,
    template: "Unrecognized image file",
};

pub static IMAGE_BAD_EXTENSION: CodeSpec = CodeSpec {
    code: "RP1002",
    severity: Severity::Error,
    template: "Image file has an invalid extension; allowed extensions: {0}",
};

pub static IMAGE_UNPARSABLE: CodeSpec = CodeSpec {
    code: "RP1003",
    severity: Severity::Error,
    template: "The image was unable to be parsed",
};

pub static IMAGE_WRONG_DIMENSIONS: CodeSpec = CodeSpec {
    code: "RP1004",
    severity: Severity::Error,
    template: "Image dimensions do not match; expected: ({0}x{1}), got: ({2}x{3})",
};

pub static IMAGE_WRONG_CASING: CodeSpec = CodeSpec {
    code: "RP1005",
    severity: Severity::Warn,
    template: "Recognized image file, but incorrect casing",
};

// 2000 - Localization diagnostics

pub static LOCALIZATION_BAD_LANGUAGE_CODE: CodeSpec = CodeSpec {
    code: "RP2001",
    severity: Severity::Error,
    template: "Localization file begins with invalid language code or does not begin with a language code; must begin with one of the following: {0}",
};

pub static LOCALIZATION_BAD_EXTENSION: CodeSpec = CodeSpec {
    code: "RP2002",
    severity: Severity::Error,
    template: "Localization file has an invalid extension; allowed extensions: {0}",
};

pub static LOCALIZATION_MALFORMED_JSON: CodeSpec = CodeSpec {
    code: "RP2003",
    severity: Severity::Error,
    template: "Localization file has malformed JSON content: {0}",
};

pub static LOCALIZATION_MALFORMED_CSV: CodeSpec = CodeSpec {
    code: "RP2004",
    severity: Severity::Error,
    template: "Localization file has malformed CSV content: {0}",
};

pub static LOCALIZATION_UNKNOWN_KEY: CodeSpec = CodeSpec {
    code: "RP2005",
    severity: Severity::Error,
    template: "Localization file has an invalid key: {0}",
};

// 3000 - Music diagnostics

pub static MUSIC_BAD_NAME: CodeSpec = CodeSpec {
    code: "RP3001",
    severity: Severity::Error,
    template: "Music file has an invalid name; must be Music_X where X is a number greater than or equal to {0} and less than {1}",
};

pub static MUSIC_BAD_EXTENSION: CodeSpec = CodeSpec {
    code: "RP3002",
    severity: Severity::Error,
    template: "Music file has an invalid extension; allowed extensions: {0}",
};

// 4000 - Sounds diagnostics

pub static SOUND_UNRECOGNIZED: CodeSpec = CodeSpec {
    code: "RP4001",
    severity: Severity::Error,
    template: "Unrecognized sound file",
};

pub static SOUND_BAD_EXTENSION: CodeSpec = CodeSpec {
    code: "RP4002",
    severity: Severity::Error,
    template: "Sound file has an invalid extension; allowed extensions: {0}",
};

/// Every code in the catalog, in report order. Used by the `codes`
/// listing and the uniqueness invariant.
pub static CATALOG: &[&CodeSpec] = &[
    &PACK_DIR_MISSING,
    &PACK_NOT_A_DIRECTORY,
    &MANIFEST_MISSING,
    &MANIFEST_UNREADABLE,
    &MANIFEST_MALFORMED_JSON,
    &MANIFEST_INVALID,
    &CONTENT_DIR_MISSING,
    &MANIFEST_PARSED,
    &CONTENT_CATEGORY_FOUND,
    &ICON_MISSING,
    &ICON_INVALID,
    &ICON_VALID,
    &ICON_UNREADABLE,
    &CONTENT_CATEGORY_MISSING,
    &IMAGE_UNRECOGNIZED,
    &IMAGE_BAD_EXTENSION,
    &IMAGE_UNPARSABLE,
    &IMAGE_WRONG_DIMENSIONS,
    &IMAGE_WRONG_CASING,
    &LOCALIZATION_BAD_LANGUAGE_CODE,
    &LOCALIZATION_BAD_EXTENSION,
    &LOCALIZATION_MALFORMED_JSON,
    &LOCALIZATION_MALFORMED_CSV,
    &LOCALIZATION_UNKNOWN_KEY,
    &MUSIC_BAD_NAME,
    &MUSIC_BAD_EXTENSION,
    &SOUND_UNRECOGNIZED,
    &SOUND_BAD_EXTENSION,
];

/// Resolve a template's positional placeholders. A placeholder with no
/// matching argument renders unreplaced rather than panicking.
pub(crate) fn render(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut message = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{index}}}"), &arg.to_string());
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let mut seen = HashSet::new();
        for spec in CATALOG {
            assert!(seen.insert(spec.code), "duplicate code {}", spec.code);
        }
    }

    #[test]
    fn codes_are_well_formed() {
        for spec in CATALOG {
            assert!(spec.code.starts_with("RP"), "bad prefix in {}", spec.code);
            assert_eq!(spec.code.len(), 6, "bad length in {}", spec.code);
            assert!(spec.code[2..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn render_substitutes_positionally() {
        assert_eq!(
            render("expected: ({0}x{1}), got: ({2}x{3})", &[&40, &56, &32, &32]),
            "expected: (40x56), got: (32x32)"
        );
    }

    #[test]
    fn render_leaves_unmatched_placeholders() {
        assert_eq!(render("a {0} b {1}", &[&"x"]), "a x b {1}");
    }
}
