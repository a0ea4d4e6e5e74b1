use alloc::vec::Vec;

use crate::chunk::Chunk;

/// Returns `chunks` structurally unchanged.
///
/// A multi-track (format 1) layout places each part in its own track
/// chunk, which is exactly the partition any chunk collection already
/// has: whatever tracks exist remain valid parallel tracks, and unknown
/// chunks keep their positions. Splitting an already-merged track back
/// into parts would need semantics (per channel? per sequence number?)
/// that no layout defines, so no re-split is attempted.
pub fn to_multi_track<'a>(chunks: &[Chunk<'a>]) -> Vec<Chunk<'a>> {
    chunks.to_vec()
}

#[cfg(test)]
use crate::chunk::{TrackChunk, TrackEvent, TrackMessage, UnknownChunk};

#[test]
fn passthrough_keeps_every_chunk_in_place() {
    let chunks = [
        Chunk::Unknown(UnknownChunk::new(*b"XFhd", b"leading".as_slice())),
        Chunk::Track(TrackChunk::new(alloc::vec![TrackEvent::new(
            480,
            TrackMessage::Raw(b"a".as_slice().into()),
        )])),
        Chunk::Track(TrackChunk::new(alloc::vec![TrackEvent::new(
            240,
            TrackMessage::Raw(b"b".as_slice().into()),
        )])),
        Chunk::Unknown(UnknownChunk::new(*b"XFtd", b"trailing".as_slice())),
    ];

    assert_eq!(to_multi_track(&chunks), chunks.to_vec());
}

#[test]
fn empty_input_is_identity() {
    assert_eq!(to_multi_track(&[]), alloc::vec![]);
}
