use alloc::vec::Vec;

use crate::chunk::{Chunk, TrackChunk, TrackEvent};

/// Merges every track chunk in `chunks` into exactly one, chronologically.
///
/// Events are ordered by absolute position. Two events at the same
/// position keep the order of their originating tracks in the input, and
/// events from the same track keep their in-track order. Each output
/// event's delta-time is recomputed against the event before it on the
/// merged timeline.
///
/// Unknown chunks are appended after the merged track chunk, in their
/// original relative order. If the input holds no track chunks at all,
/// the collection is returned unchanged, unknown chunks in place.
pub fn to_single_track<'a>(chunks: &[Chunk<'a>]) -> Vec<Chunk<'a>> {
    let tracks: Vec<&TrackChunk<'a>> = chunks.iter().filter_map(Chunk::as_track).collect();
    if tracks.is_empty() {
        return chunks.to_vec();
    }

    let total_events = tracks.iter().map(|track| track.len()).sum();
    let mut timeline: Vec<(u64, TrackEvent<'a>)> = Vec::with_capacity(total_events);
    for track in &tracks {
        for (position, event) in track.events_with_position() {
            timeline.push((position, event.clone()));
        }
    }
    // stable sort: positional ties keep (input track, in-track) push order
    timeline.sort_by_key(|(position, _)| *position);

    let mut events = Vec::with_capacity(timeline.len());
    let mut previous = 0;
    for (position, event) in timeline {
        events.push(event.with_delta_ticks((position - previous) as u32));
        previous = position;
    }

    let mut converted = Vec::with_capacity(chunks.len() + 1 - tracks.len());
    converted.push(Chunk::Track(TrackChunk::new(events)));
    converted.extend(chunks.iter().filter(|chunk| !chunk.is_track()).cloned());
    converted
}

#[cfg(test)]
use crate::chunk::{TrackMessage, UnknownChunk};

#[cfg(test)]
fn raw_event(delta_ticks: u32, payload: &'static [u8]) -> TrackEvent<'static> {
    TrackEvent::new(delta_ticks, TrackMessage::Raw(payload.into()))
}

#[cfg(test)]
fn positions(track: &TrackChunk) -> Vec<u64> {
    track
        .events_with_position()
        .map(|(position, _)| position)
        .collect()
}

#[test]
fn merge_preserves_absolute_positions() {
    let chunks = [
        Chunk::Track(TrackChunk::new(alloc::vec![
            raw_event(0, b"a"),
            raw_event(480, b"b"),
        ])),
        Chunk::Track(TrackChunk::new(alloc::vec![
            raw_event(240, b"c"),
            raw_event(480, b"d"),
        ])),
    ];

    let converted = to_single_track(&chunks);
    assert_eq!(converted.len(), 1);

    let merged = converted[0].as_track().unwrap();
    assert_eq!(positions(merged), alloc::vec![0, 240, 480, 720]);
    assert_eq!(merged.events()[0], raw_event(0, b"a"));
    assert_eq!(merged.events()[1], raw_event(240, b"c"));
    assert_eq!(merged.events()[2], raw_event(240, b"b"));
    assert_eq!(merged.events()[3], raw_event(240, b"d"));
}

#[test]
fn merge_conserves_event_count() {
    let chunks = [
        Chunk::Track(TrackChunk::new(alloc::vec![
            raw_event(0, b"a"),
            raw_event(1, b"b"),
            raw_event(2, b"c"),
        ])),
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(5, b"d")])),
        Chunk::Track(TrackChunk::new(alloc::vec![
            raw_event(3, b"e"),
            raw_event(0, b"f"),
        ])),
    ];

    let converted = to_single_track(&chunks);
    assert_eq!(converted.len(), 1);
    assert_eq!(converted[0].as_track().unwrap().len(), 6);
}

#[test]
fn positional_ties_keep_input_track_order() {
    let chunks = [
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(480, b"first")])),
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(480, b"second")])),
    ];

    let converted = to_single_track(&chunks);
    let merged = converted[0].as_track().unwrap();

    assert_eq!(merged.events()[0], raw_event(480, b"first"));
    assert_eq!(merged.events()[1], raw_event(0, b"second"));
}

#[test]
fn unknown_chunks_trail_the_merged_track() {
    let unknown = UnknownChunk::new(*b"XFhd", b"payload".as_slice());
    let chunks = [
        Chunk::Unknown(unknown.clone()),
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(0, b"a")])),
    ];

    let converted = to_single_track(&chunks);
    assert_eq!(converted.len(), 2);
    assert!(converted[0].is_track());
    assert_eq!(converted[1], Chunk::Unknown(unknown));
}

#[test]
fn no_track_chunks_is_identity() {
    let chunks = [
        Chunk::Unknown(UnknownChunk::new(*b"XFhd", b"one".as_slice())),
        Chunk::Unknown(UnknownChunk::new(*b"XFtd", b"two".as_slice())),
    ];

    assert_eq!(to_single_track(&chunks), chunks.to_vec());
}

#[test]
fn empty_input_is_identity() {
    assert_eq!(to_single_track(&[]), alloc::vec![]);
}
