//! Batch extraction over an ordered list of files.
//!
//! Unreadable files are skipped and recorded; an allocation failure stops the
//! batch but keeps every record built before it.

mod model;

use std::collections::TryReserveError;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, warn};

use crate::error::TrackError;
use crate::extract::{self, Fallbacks};
use crate::normalize::copy_text;
use crate::source::{LoftyReader, TagReader};
use crate::track::Track;

pub use model::*;

/// Reads files through a [`TagReader`] and normalizes them into tracks.
#[derive(Debug, Clone, Default)]
pub struct Extractor<R = LoftyReader> {
    reader: R,
    fallbacks: Fallbacks,
    cancel: Option<Arc<AtomicBool>>,
}

impl Extractor<LoftyReader> {
    pub fn new() -> Self {
        Self::with_reader(LoftyReader::new())
    }
}

impl<R: TagReader> Extractor<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            fallbacks: Fallbacks::default(),
            cancel: None,
        }
    }

    pub fn fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Stop batches before the next file once `flag` is set.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Read and normalize a single file.
    pub fn track(&self, filename: &str) -> Result<Track, TrackError> {
        let snapshot = self.reader.read(Path::new(filename))?;
        let track = extract::build(filename, &snapshot)?;
        if self.fallbacks.is_noop() {
            Ok(track)
        } else {
            Ok(extract::apply_fallbacks(track, self.fallbacks)?)
        }
    }

    /// Read and normalize `filenames` in order.
    ///
    /// Fails only when the batch container itself cannot be allocated.
    pub fn tracks<S: AsRef<str>>(&self, filenames: &[S]) -> Result<TrackBatch, TryReserveError> {
        collect(filenames, self.cancel.as_deref(), |filename| {
            self.track(filename)
        })
    }
}

pub(crate) fn collect<S, F>(
    filenames: &[S],
    cancel: Option<&AtomicBool>,
    mut each: F,
) -> Result<TrackBatch, TryReserveError>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Result<Track, TrackError>,
{
    let mut batch = TrackBatch::with_capacity(filenames.len())?;

    for (index, filename) in filenames.iter().enumerate() {
        let filename = filename.as_ref();

        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            warn!(index, remaining = filenames.len() - index, "batch cancelled");
            batch.outcome = BatchOutcome::Cancelled { index };
            break;
        }

        match each(filename) {
            Ok(track) => batch.tracks.push(track),
            Err(err) if err.is_fatal() => {
                error!(index, filename, %err, "stopping batch");
                batch.outcome = BatchOutcome::Halted { index, error: err };
                break;
            }
            Err(err) => {
                warn!(index, filename, %err, "skipping file");
                if let Err(oom) = record_skip(&mut batch.skipped, index, filename, err) {
                    error!(index, filename, %oom, "stopping batch");
                    batch.outcome = BatchOutcome::Halted {
                        index,
                        error: TrackError::ResourceExhausted(oom),
                    };
                    break;
                }
            }
        }
    }

    Ok(batch)
}

fn record_skip(
    skipped: &mut Vec<Skipped>,
    index: usize,
    filename: &str,
    error: TrackError,
) -> Result<(), TryReserveError> {
    skipped.try_reserve(1)?;
    skipped.push(Skipped {
        index,
        filename: copy_text(filename)?,
        error,
    });
    Ok(())
}

/// Single-file entry point: the track, or `None` if it could not be built.
pub fn get_track(filename: &str) -> Option<Track> {
    Extractor::new().track(filename).ok()
}

/// Batch entry point with the default reader and no fallbacks.
pub fn get_tracks<S: AsRef<str>>(filenames: &[S]) -> Option<TrackBatch> {
    Extractor::new().tracks(filenames).ok()
}

#[cfg(test)]
mod tests;
