#![doc = r#"
Rewrites a chunk collection from one track layout into another.

# Overview

Each of the three [`FormatType`]s has a converter that takes an ordered
chunk collection and produces a new one obeying that layout:

- [`to_single_track`] merges every track chunk into one, chronologically.
- [`to_multi_track`] passes the collection through structurally unchanged.
- [`to_multi_sequence`] groups track chunks by sequence and merges each
  group into one track chunk.

[`convert`] selects and runs the right converter for a target format.
Conversions never invent, drop or reorder events beyond what the merge
semantics require, and never touch unknown chunks beyond moving them.

# Example

```rust
use midiform::prelude::*;

let pattern = |number: u16| {
    Chunk::Track(TrackChunk::new(vec![
        TrackEvent::new(0, TrackMessage::SequenceNumber(number)),
        TrackEvent::new(96, TrackMessage::Raw(b"\x90\x3c\x64".as_slice().into())),
    ]))
};

// two tracks of pattern 5, one track of pattern 6
let chunks = [pattern(5), pattern(5), pattern(6)];

let sequences = convert(&chunks, FormatType::MultiSequence);
assert_eq!(sequences.len(), 2);
```
"#]

mod single_track;
pub use single_track::*;

mod multi_track;
pub use multi_track::*;

mod multi_sequence;
pub use multi_sequence::*;

use alloc::vec::Vec;

use crate::{FormatType, chunk::Chunk};

#[doc = r#"
The conversion strategy for one of the three track layouts.

The set of layouts is closed, so the strategies are a closed enum rather
than a trait object; dispatch is an exhaustive match and every layout is
guaranteed a converter at compile time.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunksConverter {
    /// Produces a format 0 layout. See [`to_single_track`].
    SingleTrack,
    /// Produces a format 1 layout. See [`to_multi_track`].
    MultiTrack,
    /// Produces a format 2 layout. See [`to_multi_sequence`].
    MultiSequence,
}

impl ChunksConverter {
    /// Returns the converter that produces `format`'s layout.
    pub const fn for_format(format: FormatType) -> Self {
        match format {
            FormatType::SingleTrack => Self::SingleTrack,
            FormatType::MultiTrack => Self::MultiTrack,
            FormatType::MultiSequence => Self::MultiSequence,
        }
    }

    /// Runs this converter over `chunks`, producing a new collection.
    pub fn convert<'a>(&self, chunks: &[Chunk<'a>]) -> Vec<Chunk<'a>> {
        match self {
            Self::SingleTrack => to_single_track(chunks),
            Self::MultiTrack => to_multi_track(chunks),
            Self::MultiSequence => to_multi_sequence(chunks),
        }
    }
}

/// Rewrites `chunks` into an equivalent collection obeying `format`'s
/// track layout.
///
/// The input is left untouched; the returned collection is new. Unknown
/// chunks are always preserved unmodified.
pub fn convert<'a>(chunks: &[Chunk<'a>], format: FormatType) -> Vec<Chunk<'a>> {
    ChunksConverter::for_format(format).convert(chunks)
}

#[test]
fn every_format_has_a_converter() {
    assert_eq!(
        ChunksConverter::for_format(FormatType::SingleTrack),
        ChunksConverter::SingleTrack
    );
    assert_eq!(
        ChunksConverter::for_format(FormatType::MultiTrack),
        ChunksConverter::MultiTrack
    );
    assert_eq!(
        ChunksConverter::for_format(FormatType::MultiSequence),
        ChunksConverter::MultiSequence
    );
}
