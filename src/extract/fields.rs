/// Track fields that are resolved from the generic tag map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    Composer,
    AlbumArtist,
    Grouping,
    Disc,
}

impl TargetField {
    pub const ALL: [TargetField; 4] = [
        TargetField::Composer,
        TargetField::AlbumArtist,
        TargetField::Grouping,
        TargetField::Disc,
    ];

    /// Key spellings that feed this field, compared case-insensitively.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            TargetField::Composer => &["COMPOSER"],
            TargetField::AlbumArtist => &["ALBUMARTIST", "ALBUM ARTIST", "BAND", "ENSEMBLE"],
            TargetField::Grouping => &["GROUPING", "ITUNES GROUPING"],
            TargetField::Disc => &["DISCNUMBER", "DISC NUMBER"],
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| {
            field
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(key))
        })
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of fields already taken from the tag map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchedFields(u8);

impl MatchedFields {
    /// Mark `field` as matched. Returns false if it already was.
    pub fn insert(&mut self, field: TargetField) -> bool {
        let fresh = !self.contains(field);
        self.0 |= field.bit();
        fresh
    }

    pub fn contains(self, field: TargetField) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn is_complete(self) -> bool {
        TargetField::ALL.into_iter().all(|field| self.contains(field))
    }
}
