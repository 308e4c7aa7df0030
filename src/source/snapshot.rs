/// Values exposed by the basic tag accessor of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicTags {
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub title: String,
    pub comment: String,
    pub year: Option<u32>,
    pub track: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioProperties {
    /// Kilobits per second.
    pub bitrate: u32,
    pub length_ms: u32,
}

/// Everything a reader learned about one opened file.
///
/// `extended` keeps the reader's native iteration order. Keys are matched
/// case-insensitively downstream, so readers pass them through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSnapshot {
    pub basic: Option<BasicTags>,
    pub extended: Vec<(String, String)>,
    pub properties: Option<AudioProperties>,
}

impl TagSnapshot {
    pub fn with_basic(mut self, basic: BasicTags) -> Self {
        self.basic = Some(basic);
        self
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extended.push((key.into(), value.into()));
        self
    }

    pub fn with_properties(mut self, properties: AudioProperties) -> Self {
        self.properties = Some(properties);
        self
    }
}
