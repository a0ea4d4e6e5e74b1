#![doc = r#"
Contains types for MIDI file chunks

# Overview

MIDI files are organized into chunks. The Standard MIDI File specification
defines the header chunk ("MThd") and the track chunk ("MTrk"), though files
may contain additional proprietary chunks.

This crate works on the chunk collection that sits *between* a reader and a
writer: the track chunks plus anything else the file carried. The header
chunk is not represented here; it belongs to the reader/writer, which derives
a new one (format word and track count) from the converted collection.

## Track Chunks

A [`TrackChunk`] owns an ordered sequence of [`TrackEvent`]s, each carrying a
delta-time in ticks and a message. Conversion only ever inspects two things
about an event: its delta-ticks, and whether it is a sequence number message
(see [`TrackMessage::SequenceNumber`]). Everything else rides along untouched.

## [`UnknownChunk`]

Any chunk other than a track chunk is carried as an [`UnknownChunk`]: a
4-character name plus an uninspected payload. Conversion never alters these;
they are preserved so that reading and rewriting a file keeps proprietary
data intact.
"#]

mod event;
pub use event::*;

mod track;
pub use track::*;

mod unknown;
pub use unknown::*;

#[doc = r#"
A top-level section of a MIDI file.

Chunk collections are ordered; conversion preserves first-seen order
everywhere it is not explicitly reordered by merge semantics.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Chunk<'a> {
    /// An "MTrk" chunk: ordered event data.
    Track(TrackChunk<'a>),
    /// Any other chunk, carried through unmodified.
    Unknown(UnknownChunk<'a>),
}

impl<'a> Chunk<'a> {
    /// True if this is a track chunk.
    pub const fn is_track(&self) -> bool {
        matches!(self, Self::Track(_))
    }

    /// Returns the track chunk, if this is one.
    pub const fn as_track(&self) -> Option<&TrackChunk<'a>> {
        match self {
            Self::Track(track) => Some(track),
            Self::Unknown(_) => None,
        }
    }
}

impl<'a> From<TrackChunk<'a>> for Chunk<'a> {
    fn from(track: TrackChunk<'a>) -> Self {
        Self::Track(track)
    }
}

impl<'a> From<UnknownChunk<'a>> for Chunk<'a> {
    fn from(unknown: UnknownChunk<'a>) -> Self {
        Self::Unknown(unknown)
    }
}
