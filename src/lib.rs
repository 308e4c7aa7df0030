//! Normalized metadata extraction for audio files.
//!
//! [`Extractor`] reads files through a [`source::TagReader`] and turns each
//! into a fixed-shape [`Track`]: aliased tag keys are folded into one field,
//! loosely formatted numbers are parsed from their leading digits, and absent
//! values get deterministic defaults.

pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod library;
pub mod normalize;
pub mod output;
pub mod source;
pub mod track;

pub use batch::{BatchOutcome, Extractor, Skipped, TrackBatch, get_track, get_tracks};
pub use error::{ReadError, TrackError};
pub use normalize::UNTAGGED;
pub use track::Track;
