use alloc::borrow::Cow;

#[doc = r#"
A timestamped unit of data within a track chunk.

Every event carries a delta-time: the number of ticks elapsed since the
previous event in the same track, or since the start of the track for the
first event. The running sum of delta-times gives an event's absolute
position, the shared time coordinate used when tracks are merged.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent<'a> {
    delta_ticks: u32,
    message: TrackMessage<'a>,
}

impl<'a> TrackEvent<'a> {
    /// Create a new event from a delta-time and a message.
    pub const fn new(delta_ticks: u32, message: TrackMessage<'a>) -> Self {
        Self {
            delta_ticks,
            message,
        }
    }

    /// Ticks since the previous event in the same track.
    pub const fn delta_ticks(&self) -> u32 {
        self.delta_ticks
    }

    /// The event's message.
    pub const fn message(&self) -> &TrackMessage<'a> {
        &self.message
    }

    /// This event's message with a different delta-time.
    ///
    /// Merging tracks re-times every event against the merged timeline;
    /// the message itself is never altered.
    pub fn with_delta_ticks(self, delta_ticks: u32) -> Self {
        Self {
            delta_ticks,
            message: self.message,
        }
    }

    /// Some if this is a sequence number message.
    pub const fn sequence_number(&self) -> Option<u16> {
        match self.message {
            TrackMessage::SequenceNumber(number) => Some(number),
            _ => None,
        }
    }
}

#[doc = r#"
The payload of a [`TrackEvent`].

Conversion recognizes only the messages it needs and carries the rest as
raw bytes:

- [`TrackMessage::SequenceNumber`] is the `FF 00 02` meta event. It is
  optional, and must occur at the beginning of a track, before any nonzero
  delta-times. In a format 2 file it identifies which sequence a track
  belongs to; tracks whose numbers are omitted default to their locations
  in order in the file.
- [`TrackMessage::TrackName`] is the `FF 03` meta event naming a sequence
  or track. Recognized so callers can label sequences; it plays no part in
  grouping.
- [`TrackMessage::Raw`] is anything else, byte-for-byte.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackMessage<'a> {
    /// The number of the sequence this track belongs to.
    ///
    /// Zero is a valid sequence number, distinct from an omitted one.
    SequenceNumber(u16),
    /// The name of the sequence or track.
    TrackName(Cow<'a, [u8]>),
    /// Any other event payload, untouched by conversion.
    Raw(Cow<'a, [u8]>),
}
