use alloc::vec::Vec;

use crate::chunk::TrackEvent;

#[doc = r#"
An "MTrk" chunk: an ordered sequence of [`TrackEvent`]s.

Event order is meaningful. Delta-times are relative to the preceding event
in the same track, so absolute positions are non-decreasing along the
track.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackChunk<'a> {
    events: Vec<TrackEvent<'a>>,
}

impl<'a> TrackChunk<'a> {
    /// Create a new track chunk from an ordered event sequence.
    pub const fn new(events: Vec<TrackEvent<'a>>) -> Self {
        Self { events }
    }

    /// The track's events, in original order.
    pub fn events(&self) -> &[TrackEvent<'a>] {
        &self.events
    }

    /// Consumes the chunk, returning its events.
    pub fn into_events(self) -> Vec<TrackEvent<'a>> {
        self.events
    }

    /// The number of events in the track.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the track holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate events paired with their absolute position in ticks.
    ///
    /// The position of an event is the sum of its own delta-time and the
    /// delta-times of every event before it in this track.
    pub fn events_with_position(&self) -> impl Iterator<Item = (u64, &TrackEvent<'a>)> {
        self.events.iter().scan(0u64, |position, event| {
            *position += u64::from(event.delta_ticks());
            Some((*position, event))
        })
    }

    /// The track's sequence number, if it declares one.
    ///
    /// Only the run of events at absolute tick 0 is searched: a sequence
    /// number message is required to occur before any nonzero delta-time,
    /// so one appearing later does not identify the track.
    pub fn sequence_number(&self) -> Option<u16> {
        self.events
            .iter()
            .take_while(|event| event.delta_ticks() == 0)
            .find_map(TrackEvent::sequence_number)
    }
}

#[cfg(test)]
use crate::chunk::TrackMessage;

#[cfg(test)]
fn raw_event(delta_ticks: u32, payload: &'static [u8]) -> TrackEvent<'static> {
    TrackEvent::new(delta_ticks, TrackMessage::Raw(payload.into()))
}

#[test]
fn positions_accumulate_delta_ticks() {
    let track = TrackChunk::new(alloc::vec![
        raw_event(0, b"a"),
        raw_event(480, b"b"),
        raw_event(240, b"c"),
    ]);

    let positions: Vec<u64> = track
        .events_with_position()
        .map(|(position, _)| position)
        .collect();
    assert_eq!(positions, alloc::vec![0, 480, 720]);
}

#[test]
fn sequence_number_found_in_leading_run() {
    let track = TrackChunk::new(alloc::vec![
        raw_event(0, b"a"),
        TrackEvent::new(0, TrackMessage::SequenceNumber(7)),
        raw_event(480, b"b"),
    ]);

    assert_eq!(track.sequence_number(), Some(7));
}

#[test]
fn sequence_number_after_nonzero_delta_is_ignored() {
    let track = TrackChunk::new(alloc::vec![
        raw_event(480, b"a"),
        TrackEvent::new(0, TrackMessage::SequenceNumber(7)),
    ]);

    assert_eq!(track.sequence_number(), None);
}

#[test]
fn first_sequence_number_wins() {
    let track = TrackChunk::new(alloc::vec![
        TrackEvent::new(0, TrackMessage::SequenceNumber(3)),
        TrackEvent::new(0, TrackMessage::SequenceNumber(4)),
    ]);

    assert_eq!(track.sequence_number(), Some(3));
}
