//! Rendering tracks for the command line tool.

use serde::Serialize;

use crate::config::{OutputFormat, OutputSettings, TrackField};
use crate::track::Track;

#[derive(Serialize)]
struct Document<'a> {
    track: &'a [Track],
}

/// Render `tracks` as `[[track]]` tables.
pub fn to_toml(tracks: &[Track]) -> Result<String, toml::ser::Error> {
    if tracks.is_empty() {
        return Ok(String::new());
    }
    toml::to_string(&Document { track: tracks })
}

fn field_text(track: &Track, field: TrackField) -> String {
    match field {
        TrackField::Filename => track.filename().to_string(),
        TrackField::Artist => track.artist().to_string(),
        TrackField::Album => track.album().to_string(),
        TrackField::Genre => track.genre().to_string(),
        TrackField::Title => track.title().to_string(),
        TrackField::Comment => track.comment().to_string(),
        TrackField::Composer => track.composer().to_string(),
        TrackField::AlbumArtist => track.album_artist().to_string(),
        TrackField::Grouping => track.grouping().to_string(),
        TrackField::Year => track.year().to_string(),
        TrackField::Track => track.track().to_string(),
        TrackField::Disc => track.disc().to_string(),
        TrackField::Bitrate => track.bitrate().to_string(),
        TrackField::Length => track.length_ms().to_string(),
    }
}

/// Build a single line for a track from `fields`, joined by `sep`.
///
/// Empty fields are left out so a missing album artist does not leave a
/// dangling separator.
pub fn line_from_fields(track: &Track, fields: &[TrackField], sep: &str) -> String {
    fields
        .iter()
        .map(|&f| field_text(track, f))
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn render(tracks: &[Track], settings: &OutputSettings) -> Result<String, toml::ser::Error> {
    match settings.format {
        OutputFormat::Toml => to_toml(tracks),
        OutputFormat::Line => Ok(tracks
            .iter()
            .map(|t| line_from_fields(t, &settings.line_fields, &settings.line_separator) + "\n")
            .collect()),
    }
}
