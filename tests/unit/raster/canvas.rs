use super::*;

const RED: Rgba8 = Rgba8::rgb(255, 0, 0);

#[test]
fn new_canvas_is_fully_transparent() {
    let img = LayerCanvas::new(Canvas::new(8, 4)).unwrap().finish().unwrap();
    assert_eq!(img.dimensions(), (8, 4));
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn zero_sized_canvas_is_rejected() {
    assert!(LayerCanvas::new(Canvas::new(0, 10)).is_err());
    assert!(LayerCanvas::new(Canvas::new(70_000, 1)).is_err());
}

#[test]
fn fill_rect_covers_interior_pixels() {
    let mut c = LayerCanvas::new(Canvas::square(16)).unwrap();
    c.fill_rect(Rect::new(4.0, 4.0, 12.0, 12.0), RED);
    let img = c.finish().unwrap();
    assert_eq!(img.get_pixel(8, 8).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(4, 4).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 1).0[3], 0);
    assert_eq!(img.get_pixel(12, 12).0[3], 0);
}

#[test]
fn circle_leaves_corners_clear() {
    let mut c = LayerCanvas::new(Canvas::square(20)).unwrap();
    c.fill_circle(Point::new(10.0, 10.0), 8.0, RED);
    let img = c.finish().unwrap();
    assert_eq!(img.get_pixel(10, 10).0[3], 255);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(19, 19).0[3], 0);
}

#[test]
fn degenerate_polygons_draw_nothing() {
    let mut c = LayerCanvas::new(Canvas::square(8)).unwrap();
    c.fill_polygon(&[], RED);
    c.fill_polygon(&[Point::new(1.0, 1.0), Point::new(6.0, 6.0)], RED);
    c.fill_polygon(&[Point::new(3.0, 3.0); 4], RED);
    c.stroke_line(Point::new(2.0, 2.0), Point::new(2.0, 2.0), 3.0, RED);
    let img = c.finish().unwrap();
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn stroke_line_has_requested_width() {
    let mut c = LayerCanvas::new(Canvas::square(20)).unwrap();
    c.stroke_line(Point::new(2.0, 10.0), Point::new(18.0, 10.0), 4.0, RED);
    let img = c.finish().unwrap();
    assert_eq!(img.get_pixel(10, 8).0[3], 255);
    assert_eq!(img.get_pixel(10, 11).0[3], 255);
    assert_eq!(img.get_pixel(10, 5).0[3], 0);
    assert_eq!(img.get_pixel(10, 14).0[3], 0);
    // Butt caps stop at the endpoints.
    assert_eq!(img.get_pixel(0, 10).0[3], 0);
}

#[test]
fn draw_image_respects_origin() {
    let src = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 255, 255]));
    let mut c = LayerCanvas::new(Canvas::square(12)).unwrap();
    c.draw_image(&src, Point::new(6.0, 2.0)).unwrap();
    let img = c.finish().unwrap();
    assert_eq!(img.get_pixel(7, 3).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(2, 3).0[3], 0);
    assert_eq!(img.get_pixel(7, 8).0[3], 0);
}

#[test]
fn translucent_fill_keeps_straight_color() {
    let mut c = LayerCanvas::new(Canvas::square(8)).unwrap();
    c.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Rgba8::new(200, 100, 50, 128));
    let px = c.finish().unwrap().get_pixel(4, 4).0;
    assert!((i32::from(px[3]) - 128).abs() <= 1);
    assert!((i32::from(px[0]) - 200).abs() <= 2);
    assert!((i32::from(px[1]) - 100).abs() <= 2);
}
