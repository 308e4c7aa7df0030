//! Reading tags out of audio files.
//!
//! The record builder never touches files itself: it consumes a
//! [`TagSnapshot`] produced by a [`TagReader`]. [`LoftyReader`] is the
//! production reader; tests substitute in-memory ones.

mod lofty_reader;
mod snapshot;

use std::path::Path;

use crate::error::ReadError;

pub use lofty_reader::LoftyReader;
pub use snapshot::*;

pub trait TagReader {
    /// Open `path` and collect its tags and audio properties.
    fn read(&self, path: &Path) -> Result<TagSnapshot, ReadError>;
}
