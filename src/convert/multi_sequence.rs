use alloc::vec::Vec;

use crate::{
    chunk::{Chunk, TrackChunk},
    convert::to_single_track,
};

/// Regroups `chunks` so that each logical sequence owns exactly one track
/// chunk.
///
/// Track chunks are keyed by their declared sequence number
/// ([`TrackChunk::sequence_number`]); a track that declares none is keyed
/// by its position among the track chunks, which leaves it in a group of
/// its own. Tracks sharing a key form one sequence and are merged into
/// one track chunk via [`to_single_track`]. Groups appear in the order
/// their keys first occur, and unknown chunks are appended last in their
/// original relative order.
///
/// An explicit sequence number that happens to equal another track's
/// fallback position merges the two. That is inherent to defaulting
/// omitted numbers to file positions, and is kept for compatibility with
/// files that rely on it.
pub fn to_multi_sequence<'a>(chunks: &[Chunk<'a>]) -> Vec<Chunk<'a>> {
    let tracks: Vec<&TrackChunk<'a>> = chunks.iter().filter_map(Chunk::as_track).collect();
    if tracks.is_empty() {
        return chunks.to_vec();
    }

    // index-based grouping, first occurrence of a key fixes its group's place
    let mut groups: Vec<(u32, Vec<usize>)> = Vec::new();
    for (index, track) in tracks.iter().enumerate() {
        let key = track.sequence_number().map_or(index as u32, u32::from);
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(index),
            None => groups.push((key, alloc::vec![index])),
        }
    }

    let mut converted = Vec::with_capacity(chunks.len());
    for (_, members) in groups {
        let group: Vec<Chunk<'a>> = members
            .into_iter()
            .map(|index| Chunk::Track(tracks[index].clone()))
            .collect();
        converted.extend(to_single_track(&group));
    }
    converted.extend(chunks.iter().filter(|chunk| !chunk.is_track()).cloned());
    converted
}

#[cfg(test)]
use crate::chunk::{TrackEvent, TrackMessage, UnknownChunk};

#[cfg(test)]
fn raw_event(delta_ticks: u32, payload: &'static [u8]) -> TrackEvent<'static> {
    TrackEvent::new(delta_ticks, TrackMessage::Raw(payload.into()))
}

#[cfg(test)]
fn numbered_track(number: u16, events: Vec<TrackEvent<'static>>) -> Chunk<'static> {
    let mut all = alloc::vec![TrackEvent::new(0, TrackMessage::SequenceNumber(number))];
    all.extend(events);
    Chunk::Track(TrackChunk::new(all))
}

#[test]
fn same_sequence_number_merges_into_one_track() {
    let chunks = [
        numbered_track(5, alloc::vec![raw_event(480, b"a")]),
        numbered_track(5, alloc::vec![raw_event(240, b"b")]),
    ];

    let converted = to_multi_sequence(&chunks);
    assert_eq!(converted.len(), 1);

    let merged = converted[0].as_track().unwrap();
    // two number events at tick 0, then b at 240, then a at 480
    assert_eq!(merged.len(), 4);
    assert_eq!(merged.events()[2], raw_event(240, b"b"));
    assert_eq!(merged.events()[3], raw_event(240, b"a"));
}

#[test]
fn sequence_number_zero_is_explicit() {
    let chunks = [
        numbered_track(0, alloc::vec![raw_event(480, b"a")]),
        numbered_track(0, alloc::vec![raw_event(240, b"b")]),
    ];

    let converted = to_multi_sequence(&chunks);
    assert_eq!(converted.len(), 1);
}

#[test]
fn unnumbered_tracks_stay_separate() {
    let chunks = [
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(0, b"a")])),
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(0, b"b")])),
    ];

    let converted = to_multi_sequence(&chunks);
    assert_eq!(converted.len(), 2);
    assert_eq!(converted[0].as_track().unwrap().events()[0], raw_event(0, b"a"));
    assert_eq!(converted[1].as_track().unwrap().events()[0], raw_event(0, b"b"));
}

#[test]
fn groups_keep_first_occurrence_order() {
    let chunks = [
        numbered_track(9, alloc::vec![raw_event(1, b"a")]),
        numbered_track(4, alloc::vec![raw_event(1, b"b")]),
        numbered_track(9, alloc::vec![raw_event(1, b"c")]),
    ];

    let converted = to_multi_sequence(&chunks);
    assert_eq!(converted.len(), 2);

    // group 9 first (tracks a and c merged), then group 4
    assert_eq!(converted[0].as_track().unwrap().len(), 4);
    assert_eq!(converted[1].as_track().unwrap().len(), 2);
    assert_eq!(converted[1].as_track().unwrap().events()[1], raw_event(1, b"b"));
}

#[test]
fn explicit_number_collides_with_fallback_position() {
    // the second track declares no number and falls back to position 1,
    // which the first track declares explicitly
    let chunks = [
        numbered_track(1, alloc::vec![raw_event(480, b"a")]),
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(240, b"b")])),
    ];

    let converted = to_multi_sequence(&chunks);
    assert_eq!(converted.len(), 1);

    let merged = converted[0].as_track().unwrap();
    assert_eq!(merged.len(), 3);
    assert_eq!(merged.events()[1], raw_event(240, b"b"));
}

#[test]
fn fallback_position_counts_track_chunks_only() {
    // an unknown chunk between the tracks must not shift the second
    // track's fallback position to 2
    let chunks = [
        numbered_track(1, alloc::vec![raw_event(480, b"a")]),
        Chunk::Unknown(UnknownChunk::new(*b"XFhd", b"between".as_slice())),
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(240, b"b")])),
    ];

    let converted = to_multi_sequence(&chunks);
    assert_eq!(converted.len(), 2);
    assert!(converted[0].is_track());
    assert_eq!(converted[0].as_track().unwrap().len(), 3);
    assert!(!converted[1].is_track());
}

#[test]
fn unknown_chunks_trail_in_order() {
    let first = UnknownChunk::new(*b"XFhd", b"one".as_slice());
    let second = UnknownChunk::new(*b"XFtd", b"two".as_slice());
    let chunks = [
        Chunk::Unknown(first.clone()),
        Chunk::Track(TrackChunk::new(alloc::vec![raw_event(0, b"a")])),
        Chunk::Unknown(second.clone()),
    ];

    let converted = to_multi_sequence(&chunks);
    assert_eq!(converted.len(), 3);
    assert!(converted[0].is_track());
    assert_eq!(converted[1], Chunk::Unknown(first));
    assert_eq!(converted[2], Chunk::Unknown(second));
}

#[test]
fn no_track_chunks_is_identity() {
    let chunks = [Chunk::Unknown(UnknownChunk::new(
        *b"XFhd",
        b"payload".as_slice(),
    ))];

    assert_eq!(to_multi_sequence(&chunks), chunks.to_vec());
}
