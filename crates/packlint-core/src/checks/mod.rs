//! Validation checks, one module per pipeline stage.

pub mod content;
pub mod icon;
pub mod manifest;

use packlint_data::ContentDump;

use crate::pack::ResourcePack;

/// One pipeline stage. Stages are independent: a stage converts every
/// expected fault into diagnostics and never prevents later stages from
/// running.
pub trait PackCheck {
    fn run(&self, pack: &mut ResourcePack, data: &ContentDump);
}
