#![doc = r#"
Re-exports the crate's public surface.

```rust
use midiform::prelude::*;
```
"#]

pub use crate::{
    ConvertError, FormatType,
    chunk::{Chunk, TrackChunk, TrackEvent, TrackMessage, UnknownChunk},
    convert::{ChunksConverter, convert, to_multi_sequence, to_multi_track, to_single_track},
};
