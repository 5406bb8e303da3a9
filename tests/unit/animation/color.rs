use super::*;

use std::cell::RefCell;
use std::rc::Rc;

fn capture() -> (Rc<RefCell<Vec<Rgba>>>, ApplyColor) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, Box::new(move |color| sink.borrow_mut().push(color)))
}

#[test]
fn hue_rotate_returns_to_the_initial_color() {
    let initial = Rgba::new(200, 40, 40, 255);
    let (seen, apply) = capture();
    let mut rotate = HueRotate::new("spin", initial, 2.0, false, apply);

    rotate.start(0.0);
    rotate.update(0.0);
    rotate.update(2.0);

    let seen = seen.borrow();
    assert_eq!(seen[0], initial);
    assert_eq!(seen[1], initial);
}

#[test]
fn hue_rotate_moves_through_other_hues() {
    let (seen, apply) = capture();
    let mut rotate = HueRotate::new("spin", Rgba::opaque(255, 0, 0), 1.0, false, apply);

    rotate.start(0.0);
    rotate.update(1.0 / 3.0);
    // A third of a turn from red is green.
    assert_eq!(seen.borrow()[0], Rgba::opaque(0, 255, 0));
}

#[test]
fn hue_rotate_holds_alpha_fixed() {
    let (seen, apply) = capture();
    let mut rotate = HueRotate::new("spin", Rgba::new(255, 0, 0, 77), 1.0, false, apply);

    rotate.start(0.0);
    rotate.update(0.25);
    rotate.update(0.7);
    assert!(seen.borrow().iter().all(|c| c.a == 77));
}

#[test]
fn hue_fade_hits_both_endpoint_colors() {
    let from = Rgba::new(255, 0, 0, 255);
    let to = Rgba::new(0, 0, 255, 0);
    let (seen, apply) = capture();
    let mut fade = HueFade::new("fade", from, to, 1.0, false, apply);

    fade.start(0.0);
    fade.update(0.0);
    fade.update(1.0);
    fade.update(9.0);

    let seen = seen.borrow();
    assert_eq!(seen[0], from);
    assert_eq!(seen[1], to);
    // Past the duration the fraction stays clamped at the end color.
    assert_eq!(seen[2], to);
}

#[test]
fn hue_fade_interpolates_alpha_linearly() {
    let (seen, apply) = capture();
    let mut fade = HueFade::new(
        "fade",
        Rgba::new(255, 0, 0, 0),
        Rgba::new(255, 0, 0, 200),
        1.0,
        false,
        apply,
    );

    fade.start(0.0);
    fade.update(0.5);
    assert_eq!(seen.borrow()[0].a, 100);
}
