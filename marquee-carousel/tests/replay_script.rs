use marquee_carousel::{
    Breakpoint, CarouselSession, HostEvent, PageDirection, ResizeSample, Settings, Snapshot,
    VisibleRange,
};
use marquee_model::{MediaKind, PosterSource, decode_items};

const DEMOS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos");

fn demo_session() -> CarouselSession {
    let raw = std::fs::read_to_string(format!("{DEMOS}/trending.json")).unwrap();
    let items = decode_items(&raw, MediaKind::Movie).unwrap();
    CarouselSession::new(
        items,
        ResizeSample {
            viewport_width: 1000.0,
            container_width: 1000.0,
        },
        Settings::default(),
    )
    .unwrap()
}

fn replay(session: &mut CarouselSession, events: &[HostEvent]) -> Vec<Snapshot> {
    events
        .iter()
        .filter_map(|event| session.handle(*event).snapshot)
        .collect()
}

#[test]
fn event_script_parses() {
    let raw = std::fs::read_to_string(format!("{DEMOS}/events.json")).unwrap();
    let events: Vec<HostEvent> = serde_json::from_str(&raw).unwrap();
    assert_eq!(events[0], HostEvent::Frame { at_ms: 0 });
    assert!(events.contains(&HostEvent::Page {
        direction: PageDirection::Forward,
        at_ms: 48
    }));
    assert!(events.contains(&HostEvent::Resize {
        viewport_width: 375.0,
        container_width: None
    }));
}

#[test]
fn demo_script_walks_through_the_carousel() {
    let raw = std::fs::read_to_string(format!("{DEMOS}/events.json")).unwrap();
    let events: Vec<HostEvent> = serde_json::from_str(&raw).unwrap();
    let mut session = demo_session();
    assert_eq!(session.items().len(), 12);

    let frames = replay(&mut session, &events);
    assert_eq!(frames.len(), 7);

    // mount
    assert_eq!(frames[0].window, VisibleRange { start: 0, end: 5 });
    assert_eq!(frames[0].page_dots, vec![true, true, false]);
    assert!(!frames[0].can_page_back);

    // scroll burst coalesced to its last offset
    assert_eq!(frames[1].scroll_offset, 640.0);
    assert_eq!(frames[1].window, VisibleRange { start: 2, end: 7 });

    // drag 160px left at 2x
    assert_eq!(frames[2].scroll_offset, 960.0);
    assert!(frames[2].dragging);

    // page forward settles 800px further on
    assert!(frames[3].animating);
    assert_eq!(frames[4].scroll_offset, 1760.0);
    assert!(!frames[4].animating);

    // resize to a phone
    assert_eq!(frames[5].breakpoint, Breakpoint::Mobile);
    assert_eq!(frames[5].page_dots.len(), 6);
    assert_eq!(frames[5].container_width, 375.0);

    // page back on mobile: 80% of 375
    let last = frames.last().unwrap();
    assert_eq!(last.scroll_offset, frames[5].scroll_offset - 300.0);
    assert!(!last.animating);
}

#[test]
fn snapshots_carry_degraded_faces() {
    let mut session = demo_session();
    let snapshot = session.on_frame(0);

    // window 0..=5 plus one buffered card
    assert_eq!(snapshot.cards.len(), 7);
    assert_eq!(snapshot.placeholders, 5);

    let no_poster = &snapshot.cards[4];
    assert_eq!(
        no_poster.face.poster,
        PosterSource::Fallback("assets/poster-placeholder.svg".into())
    );
    let with_poster = &snapshot.cards[0];
    match &with_poster.face.poster {
        PosterSource::Remote(url) => {
            assert_eq!(url.as_str(), "https://image.tmdb.org/t/p/w342/poster0.jpg")
        }
        other => panic!("expected remote poster, got {other:?}"),
    }
    assert_eq!(with_poster.face.rating_label.as_deref(), Some("6.5"));
    assert_eq!(with_poster.face.year, Some(2023));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["breakpoint"], "desktop");
    assert_eq!(json["cards"][4]["poster"]["kind"], "fallback");
}
