use super::*;

#[test]
fn rectangle_draws_fill_and_outline() {
    let blue = Rgba::opaque(0, 0, 255);
    let white = Rgba::WHITE;
    let mut actor = Rectangle::new("frame", Rect::new(1, 1, 4, 4), Some(blue), Some(white), 1);

    let mut canvas = Canvas::new(Size::new(6, 6));
    actor.render(&mut canvas);
    assert_eq!(canvas.pixel(1, 1), Some(white));
    assert_eq!(canvas.pixel(4, 4), Some(white));
    assert_eq!(canvas.pixel(2, 2), Some(blue));
    assert_eq!(canvas.pixel(0, 0), Some(Rgba::BLACK));
    assert!(!actor.is_dirty());
}

#[test]
fn rectangle_setters_mark_dirty_only_on_change() {
    let blue = Rgba::opaque(0, 0, 255);
    let mut actor = Rectangle::new("box", Rect::new(0, 0, 2, 2), Some(blue), None, 0);
    let mut canvas = Canvas::new(Size::new(4, 4));
    actor.render(&mut canvas);

    actor.set_fill(Some(blue));
    assert!(!actor.is_dirty());
    actor.set_outline(None, 0);
    assert!(!actor.is_dirty());
    actor.set_fill(Some(Rgba::WHITE));
    assert!(actor.is_dirty());
}

#[test]
fn gradient_hits_both_endpoint_colors_exactly() {
    let top = Rgba::new(255, 0, 0, 255);
    let bottom = Rgba::new(0, 0, 0, 0);
    let mut actor = GradientRectangle::new("fade", Rect::new(0, 0, 10, 10), top, bottom);

    let mut canvas = Canvas::transparent(Size::new(10, 10));
    actor.render(&mut canvas);
    assert_eq!(canvas.pixel(0, 0), Some(top));
    assert_eq!(canvas.pixel(9, 0), Some(top));
    assert_eq!(canvas.pixel(0, 9), Some(bottom));

    // Interior rows interpolate monotonically.
    let mid = canvas.pixel(0, 5).unwrap();
    assert!(mid.r < 255 && mid.a < 255);
    assert!(mid.r > 0 && mid.a > 0);
}

#[test]
fn single_row_gradient_is_the_top_color() {
    let top = Rgba::opaque(10, 20, 30);
    let mut actor = GradientRectangle::new(
        "sliver",
        Rect::new(0, 0, 4, 1),
        top,
        Rgba::TRANSPARENT,
    );
    let mut canvas = Canvas::transparent(Size::new(4, 1));
    actor.render(&mut canvas);
    assert_eq!(canvas.pixel(2, 0), Some(top));
}

#[test]
fn line_draws_inclusive_endpoints() {
    let red = Rgba::opaque(255, 0, 0);
    let mut actor = Line::new("edge", Point::new(0, 0), Point::new(3, 3), red);
    assert_eq!(actor.position(), Point::new(0, 0));
    assert_eq!(actor.size(), Size::new(4, 4));

    let mut canvas = Canvas::new(Size::new(4, 4));
    actor.render(&mut canvas);
    assert_eq!(canvas.pixel(0, 0), Some(red));
    assert_eq!(canvas.pixel(3, 3), Some(red));
}

#[test]
fn moving_a_line_translates_both_endpoints() {
    let red = Rgba::opaque(255, 0, 0);
    let mut actor = Line::new("edge", Point::new(0, 0), Point::new(2, 0), red);
    let mut canvas = Canvas::new(Size::new(6, 6));
    actor.render(&mut canvas);
    assert!(!actor.is_dirty());

    actor.set_position(Point::new(1, 2));
    assert!(actor.is_dirty());

    canvas.blank();
    actor.render(&mut canvas);
    assert_eq!(canvas.pixel(0, 0), Some(Rgba::BLACK));
    assert_eq!(canvas.pixel(1, 2), Some(red));
    assert_eq!(canvas.pixel(3, 2), Some(red));
}

#[test]
fn line_position_tracks_the_upper_left_of_its_endpoints() {
    let actor = Line::new(
        "edge",
        Point::new(5, 1),
        Point::new(2, 4),
        Rgba::WHITE,
    );
    assert_eq!(actor.position(), Point::new(2, 1));
    assert_eq!(actor.size(), Size::new(4, 4));
}
