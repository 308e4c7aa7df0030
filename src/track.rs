use serde::Serialize;

/// Canonical metadata for one audio file.
///
/// Only [`crate::extract`] creates tracks; every text field is owned by the
/// record and never empty-by-accident: primary fields fall back to
/// [`crate::normalize::UNTAGGED`], album artist and grouping to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub(crate) filename: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) genre: String,
    pub(crate) title: String,
    pub(crate) comment: String,
    pub(crate) composer: String,
    pub(crate) album_artist: String,
    pub(crate) grouping: String,
    pub(crate) year: u32,
    pub(crate) track: u32,
    pub(crate) disc: u32,
    /// Kilobits per second.
    pub(crate) bitrate: u32,
    pub(crate) length_ms: u32,
}

impl Track {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn album_artist(&self) -> &str {
        &self.album_artist
    }

    pub fn grouping(&self) -> &str {
        &self.grouping
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn track(&self) -> u32 {
        self.track
    }

    pub fn disc(&self) -> u32 {
        self.disc
    }

    pub fn bitrate(&self) -> u32 {
        self.bitrate
    }

    pub fn length_ms(&self) -> u32 {
        self.length_ms
    }
}
