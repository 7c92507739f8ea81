mod common;

use approx::assert_abs_diff_eq;

use pinview_core::geometry::{NormalizedPoint, PixelPoint, PixelRect};
use pinview_core::markers::MarkerBoard;
use pinview_core::session::ViewerSession;
use pinview_core::translate::{hit_test, to_normalized, to_pixel};
use pinview_core::viewport::ZoomPanViewport;

use common::{open_session, square_viewport};

#[test]
fn test_to_normalized_identity_layout() {
    let session = open_session(square_viewport());
    let p = to_normalized(PixelPoint::new(250.0, 750.0), &session).unwrap();
    assert_abs_diff_eq!(p.x, 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(p.y, 0.75, epsilon = 1e-12);
}

#[test]
fn test_y_is_relative_to_width() {
    // 2000x1000 image shown at half size in a 1000x500 canvas
    let mut viewport = ZoomPanViewport::new(
        PixelRect::from_min_size(PixelPoint::new(0.0, 0.0), 1000.0, 500.0),
        (2000.0, 1000.0),
    );
    viewport.zoom = 0.5;
    let session = open_session(viewport);

    let bottom_right = to_normalized(PixelPoint::new(1000.0, 500.0), &session).unwrap();
    assert_abs_diff_eq!(bottom_right.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bottom_right.y, 0.5, epsilon = 1e-12);
}

#[test]
fn test_round_trip_at_various_zoom_and_pan() {
    let cases = [(1.0, (0.0, 0.0)), (2.5, (120.0, -40.0)), (0.3, (-300.0, 75.5))];
    let pixels = [
        PixelPoint::new(0.0, 0.0),
        PixelPoint::new(512.3, 87.1),
        PixelPoint::new(999.0, 640.0),
    ];
    for (zoom, pan) in cases {
        let mut viewport = square_viewport();
        viewport.zoom = zoom;
        viewport.pan = pan;
        let session = open_session(viewport);
        for p in pixels {
            let n = to_normalized(p, &session).unwrap();
            let back = to_pixel(n, &session).unwrap();
            assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_tracks_live_zoom_without_snapshot() {
    let mut session = open_session(square_viewport());
    let anchor = NormalizedPoint::new(0.5, 0.5);
    let before = to_pixel(anchor, &session).unwrap();

    session.viewport_mut().unwrap().pan_by(100.0, 0.0);
    let after = to_pixel(anchor, &session).unwrap();

    assert_abs_diff_eq!(after.x - before.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-9);
}

#[test]
fn test_not_ready_session_yields_none() {
    let mut session: ViewerSession<ZoomPanViewport> = ViewerSession::new();
    assert!(to_normalized(PixelPoint::new(1.0, 1.0), &session).is_none());

    session.open();
    assert!(to_normalized(PixelPoint::new(1.0, 1.0), &session).is_none());
    assert!(to_pixel(NormalizedPoint::new(0.1, 0.1), &session).is_none());
}

#[test]
fn test_closed_session_yields_none() {
    let mut session = open_session(square_viewport());
    session.close();
    assert!(to_normalized(PixelPoint::new(10.0, 10.0), &session).is_none());
}

#[test]
fn test_hit_test_picks_nearest_within_radius() {
    let session = open_session(square_viewport());
    let mut board = MarkerBoard::default();
    let a = board.place(NormalizedPoint::new(0.100, 0.100), None);
    let b = board.place(NormalizedPoint::new(0.106, 0.100), None);

    let hit = hit_test(PixelPoint::new(105.0, 100.0), board.markers(), 8.0, &session);
    assert_eq!(hit, Some(b.id));

    let hit = hit_test(PixelPoint::new(99.0, 101.0), board.markers(), 8.0, &session);
    assert_eq!(hit, Some(a.id));

    let miss = hit_test(PixelPoint::new(300.0, 300.0), board.markers(), 8.0, &session);
    assert_eq!(miss, None);
}
