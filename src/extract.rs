//! Record builder: turns one [`TagSnapshot`] into a canonical [`Track`].
//!
//! Every field is staged in locals that own their storage; the `Track` is
//! only assembled once all of them exist. An allocation failure part way
//! through drops whatever was staged and reports the error.

mod fields;

use std::collections::TryReserveError;

use tracing::debug;

use crate::normalize::{copy_text, is_blank_or_untagged, leading_number, text_or_untagged};
use crate::source::{BasicTags, TagSnapshot};
use crate::track::Track;

pub use fields::{MatchedFields, TargetField};

static NO_TAGS: BasicTags = BasicTags {
    artist: String::new(),
    album: String::new(),
    genre: String::new(),
    title: String::new(),
    comment: String::new(),
    year: None,
    track: None,
};

/// Optional post-processing borrowed from players that never show an empty
/// album artist or grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fallbacks {
    /// Use the artist when the album artist is empty or untagged.
    pub album_artist: bool,
    /// Use the title when the grouping is empty or untagged.
    pub grouping: bool,
}

impl Fallbacks {
    pub fn is_noop(self) -> bool {
        !self.album_artist && !self.grouping
    }
}

struct ExtendedFields {
    composer: String,
    album_artist: String,
    grouping: String,
    disc: u32,
}

impl ExtendedFields {
    fn scan<'a, I>(entries: I) -> Result<Self, TryReserveError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut fields = Self {
            composer: text_or_untagged("")?,
            album_artist: String::new(),
            grouping: String::new(),
            disc: 0,
        };
        let mut matched = MatchedFields::default();

        for (key, value) in entries {
            if matched.is_complete() {
                break;
            }
            let Some(field) = TargetField::from_key(key) else {
                continue;
            };
            // First match per field wins.
            if !matched.insert(field) {
                continue;
            }
            match field {
                TargetField::Composer => fields.composer = text_or_untagged(value)?,
                TargetField::AlbumArtist => fields.album_artist = copy_text(value)?,
                TargetField::Grouping => fields.grouping = copy_text(value)?,
                TargetField::Disc => fields.disc = leading_number(value),
            }
        }

        Ok(fields)
    }
}

/// Build the track for `filename` from what the reader collected.
pub fn build(filename: &str, snapshot: &TagSnapshot) -> Result<Track, TryReserveError> {
    let filename = copy_text(filename)?;

    let basic = snapshot.basic.as_ref().unwrap_or(&NO_TAGS);
    let artist = text_or_untagged(&basic.artist)?;
    let album = text_or_untagged(&basic.album)?;
    let genre = text_or_untagged(&basic.genre)?;
    let title = text_or_untagged(&basic.title)?;
    let comment = text_or_untagged(&basic.comment)?;

    let extended = ExtendedFields::scan(
        snapshot
            .extended
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    )?;

    let properties = snapshot.properties.unwrap_or_default();

    let track = Track {
        filename,
        artist,
        album,
        genre,
        title,
        comment,
        composer: extended.composer,
        album_artist: extended.album_artist,
        grouping: extended.grouping,
        year: basic.year.unwrap_or(0),
        track: basic.track.unwrap_or(0),
        disc: extended.disc,
        bitrate: properties.bitrate,
        length_ms: properties.length_ms,
    };
    debug!(filename = %track.filename, "built track");
    Ok(track)
}

/// Replace a blank album artist or grouping according to `fallbacks`.
///
/// Consumes the record and returns a new one. On error the record is dropped.
pub fn apply_fallbacks(track: Track, fallbacks: Fallbacks) -> Result<Track, TryReserveError> {
    let album_artist = if fallbacks.album_artist && is_blank_or_untagged(&track.album_artist) {
        Some(copy_text(&track.artist)?)
    } else {
        None
    };
    let grouping = if fallbacks.grouping && is_blank_or_untagged(&track.grouping) {
        Some(copy_text(&track.title)?)
    } else {
        None
    };

    Ok(Track {
        album_artist: album_artist.unwrap_or(track.album_artist),
        grouping: grouping.unwrap_or(track.grouping),
        ..track
    })
}
