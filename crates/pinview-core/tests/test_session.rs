mod common;

use pinview_core::session::{SessionEvent, SessionState, ViewerSession};
use pinview_core::viewport::ZoomPanViewport;

use common::square_viewport;

#[test]
fn test_lifecycle_events_in_order() {
    let mut session: ViewerSession<ZoomPanViewport> = ViewerSession::new();
    assert_eq!(session.state(), SessionState::Closed);
    assert!(!session.is_ready());

    let generation = session.open();
    assert_eq!(session.state(), SessionState::Opening);
    assert!(!session.is_ready());
    assert!(session.viewport().is_none());

    assert!(session.attach(generation, square_viewport()));
    assert!(session.is_ready());
    assert!(session.viewport().is_some());

    session.close();
    assert!(!session.is_ready());
    assert!(session.viewport().is_none());

    assert_eq!(
        session.drain_events(),
        vec![
            SessionEvent::Opened { generation },
            SessionEvent::Closed { generation },
        ]
    );
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_reopen_closes_previous_and_bumps_generation() {
    let mut session: ViewerSession<ZoomPanViewport> = ViewerSession::new();
    let first = session.open();
    session.attach(first, square_viewport());
    session.drain_events();

    let second = session.open();

    assert!(second > first);
    assert_eq!(session.state(), SessionState::Opening);
    assert_eq!(
        session.drain_events(),
        vec![SessionEvent::Closed { generation: first }]
    );
}

#[test]
fn test_stale_attach_ignored() {
    let mut session: ViewerSession<ZoomPanViewport> = ViewerSession::new();
    let first = session.open();
    let second = session.open();

    assert!(!session.attach(first, square_viewport()));
    assert!(!session.is_ready());

    assert!(session.attach(second, square_viewport()));
    assert!(session.is_ready());
}

#[test]
fn test_attach_after_close_ignored() {
    let mut session: ViewerSession<ZoomPanViewport> = ViewerSession::new();
    let generation = session.open();
    session.close();

    assert!(!session.attach(generation, square_viewport()));
    assert_eq!(session.state(), SessionState::Closed);
}

#[test]
fn test_double_attach_ignored() {
    let mut session: ViewerSession<ZoomPanViewport> = ViewerSession::new();
    let generation = session.open();
    assert!(session.attach(generation, square_viewport()));
    assert!(!session.attach(generation, square_viewport()));
    assert_eq!(session.drain_events().len(), 1);
}

#[test]
fn test_close_when_closed_emits_nothing() {
    let mut session: ViewerSession<ZoomPanViewport> = ViewerSession::new();
    session.close();
    assert!(session.drain_events().is_empty());
}
