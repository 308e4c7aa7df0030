use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::properties::FileProperties;
use lofty::tag::{ItemKey, Tag};
use tracing::trace;

use crate::error::ReadError;
use crate::normalize::leading_number;

use super::{AudioProperties, BasicTags, TagReader, TagSnapshot};

/// [`TagReader`] backed by the `lofty` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyReader;

impl LoftyReader {
    pub fn new() -> Self {
        Self
    }
}

impl TagReader for LoftyReader {
    fn read(&self, path: &Path) -> Result<TagSnapshot, ReadError> {
        let tagged = lofty::read_from_path(path).map_err(|source| ReadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let tag = tagged.primary_tag().or_else(|| tagged.first_tag());
        trace!(path = %path.display(), tagged = tag.is_some(), "read tags");

        Ok(TagSnapshot {
            basic: tag.map(basic_tags),
            extended: tag.map(extended_tags).unwrap_or_default(),
            properties: Some(audio_properties(tagged.properties())),
        })
    }
}

fn text(tag: &Tag, key: &ItemKey) -> String {
    tag.get_string(key).unwrap_or_default().to_string()
}

fn basic_tags(tag: &Tag) -> BasicTags {
    BasicTags {
        artist: text(tag, &ItemKey::TrackArtist),
        album: text(tag, &ItemKey::AlbumTitle),
        genre: text(tag, &ItemKey::Genre),
        title: text(tag, &ItemKey::TrackTitle),
        comment: text(tag, &ItemKey::Comment),
        year: tag
            .get_string(&ItemKey::Year)
            .or_else(|| tag.get_string(&ItemKey::RecordingDate))
            .map(leading_number),
        track: tag.get_string(&ItemKey::TrackNumber).map(leading_number),
    }
}

/// Canonical uppercase name for well-known keys, native spelling otherwise.
fn native_key(key: &ItemKey) -> Option<&str> {
    let name = match key {
        ItemKey::Unknown(k) => return Some(k.as_str()),
        ItemKey::Composer => "COMPOSER",
        ItemKey::AlbumArtist => "ALBUMARTIST",
        ItemKey::ContentGroup => "GROUPING",
        ItemKey::AppleId3v2ContentGroup => "ITUNES GROUPING",
        ItemKey::DiscNumber => "DISCNUMBER",
        ItemKey::DiscTotal => "DISCTOTAL",
        ItemKey::TrackArtist => "ARTIST",
        ItemKey::AlbumTitle => "ALBUM",
        ItemKey::TrackTitle => "TITLE",
        ItemKey::Genre => "GENRE",
        ItemKey::Comment => "COMMENT",
        ItemKey::TrackNumber => "TRACKNUMBER",
        ItemKey::TrackTotal => "TRACKTOTAL",
        ItemKey::Year => "YEAR",
        ItemKey::RecordingDate => "DATE",
        _ => return None,
    };
    Some(name)
}

fn extended_tags(tag: &Tag) -> Vec<(String, String)> {
    tag.items()
        .filter_map(|item| {
            let key = native_key(item.key())?;
            let value = item.value().text()?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

fn audio_properties(props: &FileProperties) -> AudioProperties {
    AudioProperties {
        bitrate: props
            .audio_bitrate()
            .or_else(|| props.overall_bitrate())
            .unwrap_or(0),
        length_ms: u32::try_from(props.duration().as_millis()).unwrap_or(u32::MAX),
    }
}
