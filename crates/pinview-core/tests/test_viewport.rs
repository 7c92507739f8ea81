use approx::assert_abs_diff_eq;

use pinview_core::geometry::{PixelPoint, PixelRect};
use pinview_core::viewport::{ViewTransform, ZoomPanViewport};

fn canvas() -> PixelRect {
    PixelRect::from_min_size(PixelPoint::new(0.0, 0.0), 800.0, 600.0)
}

#[test]
fn test_image_rect_centered() {
    let v = ZoomPanViewport::new(canvas(), (400.0, 200.0));
    let r = v.image_rect();
    assert_abs_diff_eq!(r.min.x, 200.0);
    assert_abs_diff_eq!(r.min.y, 200.0);
    assert_abs_diff_eq!(r.width(), 400.0);
    assert_abs_diff_eq!(r.height(), 200.0);
    assert_abs_diff_eq!(v.aspect(), 0.5);
}

#[test]
fn test_zoom_at_keeps_cursor_point_fixed() {
    let mut v = ZoomPanViewport::new(canvas(), (400.0, 200.0));
    let cursor = PixelPoint::new(250.0, 260.0);
    let before = v.pixel_to_image(cursor);

    v.zoom_at(cursor, 3.0, 0.1, 20.0);

    assert_abs_diff_eq!(v.zoom, 3.0);
    let after = v.pixel_to_image(cursor);
    assert_abs_diff_eq!(after.x, before.x, epsilon = 1e-9);
    assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-9);
}

#[test]
fn test_zoom_is_clamped() {
    let mut v = ZoomPanViewport::new(canvas(), (400.0, 200.0));
    v.zoom_at(PixelPoint::new(400.0, 300.0), 1000.0, 0.1, 20.0);
    assert_abs_diff_eq!(v.zoom, 20.0);
    v.zoom_at(PixelPoint::new(400.0, 300.0), 1e-6, 0.1, 20.0);
    assert_abs_diff_eq!(v.zoom, 0.1);
}

#[test]
fn test_fit_scales_to_limiting_axis() {
    let mut v = ZoomPanViewport::new(canvas(), (1600.0, 400.0));
    v.pan = (50.0, -20.0);
    v.fit(0.1, 20.0);
    assert_abs_diff_eq!(v.zoom, 0.5);
    assert_eq!(v.pan, (0.0, 0.0));
}

#[test]
fn test_pan_moves_image_rect() {
    let mut v = ZoomPanViewport::new(canvas(), (400.0, 200.0));
    v.pan_by(10.0, -5.0);
    let r = v.image_rect();
    assert_abs_diff_eq!(r.min.x, 210.0);
    assert_abs_diff_eq!(r.min.y, 195.0);
}
