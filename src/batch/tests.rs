use super::*;
use crate::error::ReadError;
use crate::normalize::UNTAGGED;
use crate::source::tests::pcm_wav;
use crate::source::{BasicTags, TagSnapshot};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Serves canned snapshots; anything else goes to the real reader.
#[derive(Default)]
struct CannedReader {
    known: HashMap<PathBuf, TagSnapshot>,
}

impl CannedReader {
    fn with(mut self, path: &str, title: &str) -> Self {
        let snapshot = TagSnapshot::default()
            .with_basic(BasicTags {
                title: title.to_string(),
                ..BasicTags::default()
            })
            .with_entry("DISCNUMBER", "1/2");
        self.known.insert(PathBuf::from(path), snapshot);
        self
    }
}

impl TagReader for CannedReader {
    fn read(&self, path: &Path) -> Result<TagSnapshot, ReadError> {
        match self.known.get(path) {
            Some(snapshot) => Ok(snapshot.clone()),
            None => LoftyReader::new().read(path),
        }
    }
}

fn exhausted() -> TrackError {
    let err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
    TrackError::ResourceExhausted(err)
}

fn titles(batch: &TrackBatch) -> Vec<&str> {
    batch.iter().map(Track::title).collect()
}

#[test]
fn unreadable_files_are_skipped_and_order_is_kept() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("b.mp3");
    let missing = missing.to_str().unwrap();

    let reader = CannedReader::default().with("a.mp3", "A").with("c.mp3", "C");
    let batch = Extractor::with_reader(reader)
        .tracks(&["a.mp3", missing, "c.mp3"])
        .unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(titles(&batch), vec!["A", "C"]);
    assert_eq!(batch.tracks()[1].filename(), "c.mp3");
    assert!(batch.is_complete());

    assert_eq!(batch.skipped().len(), 1);
    assert_eq!(batch.skipped()[0].index, 1);
    assert_eq!(batch.skipped()[0].filename, missing);
    assert!(!batch.skipped()[0].error.is_fatal());
}

#[test]
fn non_audio_files_are_skipped() {
    let dir = tempdir().unwrap();
    let fake = dir.path().join("fake.flac");
    fs::write(&fake, b"not a real flac").unwrap();

    let batch = Extractor::new().tracks(&[fake.to_str().unwrap()]).unwrap();
    assert!(batch.is_empty());
    assert_eq!(batch.skipped().len(), 1);
    assert!(batch.is_complete());
}

#[test]
fn resource_exhaustion_halts_and_keeps_earlier_records() {
    let batch = collect(&["a", "b", "c"], None, |filename| {
        if filename == "b" {
            return Err(exhausted());
        }
        Ok(extract::build(filename, &TagSnapshot::default()).unwrap())
    })
    .unwrap();

    assert_eq!(batch.len(), 1);
    assert_eq!(batch.tracks()[0].filename(), "a");
    assert!(batch.skipped().is_empty());
    assert!(matches!(
        batch.outcome(),
        BatchOutcome::Halted { index: 1, error } if error.is_fatal()
    ));
}

#[test]
fn cancel_flag_stops_before_the_next_file() {
    let flag = AtomicBool::new(false);
    let mut seen = Vec::new();

    let batch = collect(&["a", "b", "c"], Some(&flag), |filename| {
        seen.push(filename.to_string());
        flag.store(true, Ordering::Relaxed);
        Ok(extract::build(filename, &TagSnapshot::default()).unwrap())
    })
    .unwrap();

    assert_eq!(seen, vec!["a".to_string()]);
    assert_eq!(batch.len(), 1);
    assert!(matches!(batch.outcome(), BatchOutcome::Cancelled { index: 1 }));
}

#[test]
fn extractor_honours_a_preset_cancel_flag() {
    let flag = Arc::new(AtomicBool::new(true));
    let reader = CannedReader::default().with("a.mp3", "A");
    let batch = Extractor::with_reader(reader)
        .cancel_flag(flag)
        .tracks(&["a.mp3"])
        .unwrap();

    assert!(batch.is_empty());
    assert!(!batch.is_complete());
}

#[test]
fn extractor_applies_fallbacks() {
    let reader = CannedReader::default().with("a.mp3", "Song");
    let track = Extractor::with_reader(reader)
        .fallbacks(Fallbacks {
            album_artist: true,
            grouping: true,
        })
        .track("a.mp3")
        .unwrap();

    assert_eq!(track.album_artist(), UNTAGGED);
    assert_eq!(track.grouping(), "Song");
    assert_eq!(track.disc(), 1);
}

#[test]
fn empty_input_gives_empty_complete_batch() {
    let batch = Extractor::new().tracks::<&str>(&[]).unwrap();
    assert!(batch.is_empty());
    assert!(batch.is_complete());
}

#[test]
fn get_track_returns_none_for_unreadable_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.mp3");
    assert!(get_track(path.to_str().unwrap()).is_none());
}

#[test]
fn get_tracks_reads_real_wav_files() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.wav");
    let b = dir.path().join("b.wav");
    fs::write(&a, pcm_wav(1_600)).unwrap();
    fs::write(&b, pcm_wav(3_200)).unwrap();
    let names = [a.to_str().unwrap(), b.to_str().unwrap()];

    let batch = get_tracks(&names).unwrap();
    assert_eq!(batch.len(), 2);

    let tracks: Vec<Track> = batch.into_iter().collect();
    assert_eq!(tracks[0].filename(), names[0]);
    assert_eq!(tracks[0].artist(), UNTAGGED);
    assert_eq!(tracks[0].album_artist(), "");
    assert!(tracks[1].length_ms() > tracks[0].length_ms());
}

#[test]
fn same_file_builds_identical_tracks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.wav");
    fs::write(&path, pcm_wav(800)).unwrap();
    let name = path.to_str().unwrap();

    assert_eq!(get_track(name).unwrap(), get_track(name).unwrap());
}

#[test]
fn record_skip_keeps_an_owned_copy_of_the_filename() {
    let mut skipped = Vec::new();
    let name = String::from("gone.mp3");
    let err = exhausted();

    record_skip(&mut skipped, 4, &name, err).unwrap();
    drop(name);

    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].index, 4);
    assert_eq!(skipped[0].filename, "gone.mp3");
}
