use midiform::prelude::*;
use pretty_assertions::assert_eq;

fn raw_event(delta_ticks: u32, payload: &'static [u8]) -> TrackEvent<'static> {
    TrackEvent::new(delta_ticks, TrackMessage::Raw(payload.into()))
}

fn track(events: Vec<TrackEvent<'static>>) -> Chunk<'static> {
    Chunk::Track(TrackChunk::new(events))
}

fn unknown(name: &[u8; 4], payload: &'static [u8]) -> Chunk<'static> {
    Chunk::Unknown(UnknownChunk::new(*name, payload))
}

fn absolute_positions(chunk: &Chunk) -> Vec<u64> {
    chunk
        .as_track()
        .unwrap()
        .events_with_position()
        .map(|(position, _)| position)
        .collect()
}

const ALL_FORMATS: [FormatType; 3] = [
    FormatType::SingleTrack,
    FormatType::MultiTrack,
    FormatType::MultiSequence,
];

#[test]
fn empty_input_converts_to_empty_output() {
    for format in ALL_FORMATS {
        assert_eq!(convert(&[], format), vec![]);
    }
}

#[test]
fn opaque_only_input_is_unchanged_for_every_format() {
    let chunks = [unknown(b"XFhd", b"payload")];

    for format in ALL_FORMATS {
        assert_eq!(convert(&chunks, format), chunks.to_vec());
    }
}

#[test]
fn convert_never_mutates_its_input() {
    let chunks = [
        track(vec![raw_event(480, b"a")]),
        track(vec![raw_event(240, b"b")]),
    ];
    let before = chunks.to_vec();

    for format in ALL_FORMATS {
        let _ = convert(&chunks, format);
    }
    assert_eq!(chunks.to_vec(), before);
}

#[test]
fn single_track_merge_keeps_absolute_timing() {
    let chunks = [
        track(vec![raw_event(0, b"a"), raw_event(960, b"b")]),
        track(vec![raw_event(480, b"c"), raw_event(480, b"d")]),
        unknown(b"XFhd", b"aux"),
    ];

    let converted = convert(&chunks, FormatType::SingleTrack);
    assert_eq!(converted.len(), 2);
    assert_eq!(absolute_positions(&converted[0]), vec![0, 480, 960, 960]);

    // positional tie at 960: track 1's event before track 2's
    let merged = converted[0].as_track().unwrap();
    assert_eq!(merged.events()[2].message(), raw_event(0, b"b").message());
    assert_eq!(merged.events()[3].message(), raw_event(0, b"d").message());
    assert_eq!(converted[1], unknown(b"XFhd", b"aux"));
}

#[test]
fn multi_sequence_without_numbers_is_a_no_op_grouping() {
    let chunks = [
        track(vec![raw_event(0, b"e1")]),
        track(vec![raw_event(0, b"e2")]),
    ];

    let converted = convert(&chunks, FormatType::MultiSequence);
    assert_eq!(converted.len(), 2);
    assert_eq!(
        converted[0].as_track().unwrap().events(),
        &[raw_event(0, b"e1")]
    );
    assert_eq!(
        converted[1].as_track().unwrap().events(),
        &[raw_event(0, b"e2")]
    );
}

#[test]
fn multi_sequence_merges_tracks_sharing_a_number() {
    let sequence_start = |number| TrackEvent::new(0, TrackMessage::SequenceNumber(number));
    let chunks = [
        track(vec![sequence_start(0), raw_event(480, b"e1")]),
        track(vec![sequence_start(0), raw_event(240, b"e2")]),
    ];

    let converted = convert(&chunks, FormatType::MultiSequence);
    assert_eq!(converted.len(), 1);
    assert_eq!(absolute_positions(&converted[0]), vec![0, 0, 240, 480]);

    let merged = converted[0].as_track().unwrap();
    assert_eq!(merged.events()[2].message(), raw_event(0, b"e2").message());
    assert_eq!(merged.events()[3].message(), raw_event(0, b"e1").message());
}

#[test]
fn named_sequences_keep_their_names_through_a_merge() {
    let chunks = [
        track(vec![
            TrackEvent::new(0, TrackMessage::SequenceNumber(3)),
            TrackEvent::new(0, TrackMessage::TrackName(b"Melody".as_slice().into())),
            raw_event(96, b"e1"),
        ]),
        track(vec![
            TrackEvent::new(0, TrackMessage::SequenceNumber(3)),
            raw_event(48, b"e2"),
        ]),
    ];

    let converted = convert(&chunks, FormatType::MultiSequence);
    assert_eq!(converted.len(), 1);

    let merged = converted[0].as_track().unwrap();
    assert!(merged.events().iter().any(|event| matches!(
        event.message(),
        TrackMessage::TrackName(name) if name.as_ref() == b"Melody"
    )));
}

#[test]
fn multi_track_round_trip_is_stable() {
    let chunks = [
        track(vec![raw_event(0, b"a"), raw_event(480, b"b")]),
        track(vec![raw_event(240, b"c")]),
        unknown(b"XFtd", b"aux"),
    ];

    let once = convert(&chunks, FormatType::MultiTrack);
    assert_eq!(once, chunks.to_vec());
    assert_eq!(convert(&once, FormatType::MultiTrack), once);
}

#[test]
fn merging_twice_equals_merging_once() {
    let chunks = [
        track(vec![raw_event(120, b"a")]),
        track(vec![raw_event(60, b"b"), raw_event(120, b"c")]),
    ];

    let once = convert(&chunks, FormatType::SingleTrack);
    let twice = convert(&once, FormatType::SingleTrack);
    assert_eq!(once, twice);
}

#[test]
fn event_count_is_conserved_across_formats() {
    let sequence_start = |number| TrackEvent::new(0, TrackMessage::SequenceNumber(number));
    let chunks = [
        track(vec![sequence_start(1), raw_event(10, b"a"), raw_event(5, b"b")]),
        track(vec![raw_event(7, b"c")]),
        track(vec![sequence_start(1), raw_event(3, b"d")]),
    ];
    let total = |chunks: &[Chunk]| -> usize {
        chunks
            .iter()
            .filter_map(Chunk::as_track)
            .map(TrackChunk::len)
            .sum()
    };

    for format in ALL_FORMATS {
        assert_eq!(total(&convert(&chunks, format)), total(&chunks));
    }
}
