use std::collections::TryReserveError;
use std::path::PathBuf;

use lofty::error::LoftyError;
use thiserror::Error;

/// The tag reader could not turn a path into a tag snapshot.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read tags from {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: LoftyError,
    },
}

#[derive(Debug, Error)]
pub enum TrackError {
    /// Missing, unopenable or unrecognized file. Batches skip these.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Storage for a field could not be reserved. Batches stop on these.
    #[error("out of memory while building track: {0}")]
    ResourceExhausted(#[from] TryReserveError),
}

impl TrackError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, TrackError::ResourceExhausted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_resource_exhaustion_is_fatal() {
        let oom = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        assert!(TrackError::from(oom).is_fatal());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mp3");
        let source = lofty::read_from_path(&missing).err().unwrap();
        let err = TrackError::from(ReadError::Unreadable {
            path: missing,
            source,
        });
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("missing.mp3"));
    }
}
