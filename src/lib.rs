#![doc = r#"
Conversion between the three track layouts of a Standard MIDI File.

# Overview

A Standard MIDI File distributes its musical content across *chunks* in one
of three conventions, named by the format word of the header chunk:

- **Format 0** ([`FormatType::SingleTrack`]): one track chunk carrying every
  event, all channels merged.
- **Format 1** ([`FormatType::MultiTrack`]): several track chunks played
  simultaneously against a shared timeline.
- **Format 2** ([`FormatType::MultiSequence`]): several independent
  sequences, one track chunk per sequence.

`midiform` rewrites a chunk collection that obeys one convention into an
equivalent collection obeying another, preserving every event's absolute
timing and every non-track chunk byte-for-byte. It does not read or write
file bytes; readers and writers hand it [`Chunk`] collections and receive
new ones.

```rust
use midiform::prelude::*;

let chunks = [
    Chunk::Track(TrackChunk::new(vec![TrackEvent::new(
        480,
        TrackMessage::Raw(b"\x90\x3c\x64".as_slice().into()),
    )])),
    Chunk::Track(TrackChunk::new(vec![TrackEvent::new(
        240,
        TrackMessage::Raw(b"\x90\x40\x64".as_slice().into()),
    )])),
];

let merged = convert(&chunks, FormatType::SingleTrack);
assert_eq!(merged.len(), 1);
```
"#]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod chunk;
pub mod convert;

mod error;
pub use error::*;

mod format;
pub use format::*;

pub mod prelude;
