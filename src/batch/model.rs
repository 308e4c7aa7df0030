use std::collections::TryReserveError;

use crate::error::TrackError;
use crate::track::Track;

/// A file that produced no record, and why.
#[derive(Debug)]
pub struct Skipped {
    /// Position in the input list.
    pub index: usize,
    pub filename: String,
    pub error: TrackError,
}

#[derive(Debug, Default)]
pub enum BatchOutcome {
    /// Every input was either built or skipped.
    #[default]
    Complete,
    /// A fatal error at `index`; later inputs were not processed.
    Halted { index: usize, error: TrackError },
    /// The cancel flag was seen before processing `index`.
    Cancelled { index: usize },
}

/// Tracks built from a list of files, in input order.
#[derive(Debug, Default)]
pub struct TrackBatch {
    pub(crate) tracks: Vec<Track>,
    pub(crate) skipped: Vec<Skipped>,
    pub(crate) outcome: BatchOutcome,
}

impl TrackBatch {
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut tracks = Vec::new();
        tracks.try_reserve_exact(capacity)?;
        Ok(Self {
            tracks,
            ..Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }

    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    pub fn outcome(&self) -> &BatchOutcome {
        &self.outcome
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Complete)
    }
}

impl IntoIterator for TrackBatch {
    type Item = Track;
    type IntoIter = std::vec::IntoIter<Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TrackBatch {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
