//! Finding audio files under library roots.

mod scan;

pub use scan::*;
