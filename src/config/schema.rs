use serde::Deserialize;

use crate::extract::Fallbacks;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/trackmeta/config.toml` or `~/.config/trackmeta/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKMETA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub extract: ExtractSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "m4a".into(), "flac".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Replace an empty or untagged album artist with the artist.
    pub album_artist_fallback: bool,
    /// Replace an empty or untagged grouping with the title.
    pub grouping_fallback: bool,
    /// Number of files read per batch.
    pub batch_size: usize,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            album_artist_fallback: false,
            grouping_fallback: false,
            batch_size: 10_000,
        }
    }
}

impl ExtractSettings {
    pub fn fallbacks(&self) -> Fallbacks {
        Fallbacks {
            album_artist: self.album_artist_fallback,
            grouping: self.grouping_fallback,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One `[[track]]` table per record.
    Toml,
    /// One line per record built from `line_fields`.
    #[serde(alias = "text", alias = "plain")]
    Line,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Filename,
    Artist,
    Album,
    Genre,
    Title,
    Comment,
    Composer,
    #[serde(alias = "album_artist", alias = "albumartist")]
    AlbumArtist,
    Grouping,
    Year,
    Track,
    Disc,
    Bitrate,
    #[serde(alias = "length_ms", alias = "duration")]
    Length,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,

    /// Which track fields make up a line, and in what order.
    ///
    /// Example: ["artist", "title", "album"]
    pub line_fields: Vec<TrackField>,

    /// Separator used to join `line_fields`.
    pub line_separator: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Toml,
            line_fields: vec![TrackField::Artist, TrackField::Title, TrackField::Filename],
            line_separator: " - ".to_string(),
        }
    }
}
