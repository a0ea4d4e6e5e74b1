use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::ConvertError;

#[doc = r#"
The track layout named by the format word of a header chunk.

The format word tells a reader how the file's track chunks relate to one
another:

- `SingleTrack` (format 0): one track chunk holds every event.
- `MultiTrack` (format 1): each track chunk is one part of a single song;
  all tracks share a timeline and play simultaneously.
- `MultiSequence` (format 2): each track chunk is a complete, independent
  sequence (a "pattern"), identified by an optional sequence number event
  at its start.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleTrack = 0,
    /// Format 1
    MultiTrack = 1,
    /// Format 2
    MultiSequence = 2,
}

impl FormatType {
    /// Interpret the raw format word of a header chunk.
    ///
    /// # Errors
    /// [`ConvertError::UnsupportedFormat`] for any word other than 0, 1 or 2.
    pub fn from_raw(raw: u16) -> Result<Self, ConvertError> {
        Self::try_from(raw).map_err(|e| ConvertError::UnsupportedFormat(e.number))
    }

    /// Interpret the two big-endian format bytes of a header chunk.
    pub fn from_bytes(bytes: [u8; 2]) -> Result<Self, ConvertError> {
        Self::from_raw(u16::from_be_bytes(bytes))
    }

    /// Returns the raw format word for this layout.
    pub const fn as_raw(&self) -> u16 {
        *self as u16
    }
}

#[test]
fn format_from_raw_word() {
    assert_eq!(FormatType::from_raw(0), Ok(FormatType::SingleTrack));
    assert_eq!(FormatType::from_raw(1), Ok(FormatType::MultiTrack));
    assert_eq!(FormatType::from_raw(2), Ok(FormatType::MultiSequence));
    assert_eq!(
        FormatType::from_raw(3),
        Err(ConvertError::UnsupportedFormat(3))
    );
}

#[test]
fn format_from_header_bytes() {
    assert_eq!(FormatType::from_bytes([0, 1]), Ok(FormatType::MultiTrack));
    assert_eq!(
        FormatType::from_bytes([1, 0]),
        Err(ConvertError::UnsupportedFormat(256))
    );
}

#[test]
fn format_round_trips_through_raw_word() {
    for format in [
        FormatType::SingleTrack,
        FormatType::MultiTrack,
        FormatType::MultiSequence,
    ] {
        assert_eq!(FormatType::from_raw(format.as_raw()), Ok(format));
    }
}
