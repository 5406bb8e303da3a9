use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use crate::actor::Actor;
use crate::actor::shape::Rectangle;
use crate::actor::shared;
use crate::foundation::core::{Point, Rect, Rgba};

fn rect_at(x: i32, y: i32) -> Rc<RefCell<Rectangle>> {
    shared(Rectangle::new(
        "box",
        Rect::new(x, y, 4, 4),
        Some(Rgba::WHITE),
        None,
        0,
    ))
}

#[test]
fn still_occupies_time_without_touching_anything() {
    let mut hold = Still::new("hold", 1.0);
    assert_eq!(hold.duration(), 1.0);
    hold.start(0.0);
    hold.update(0.5);
    assert!(!hold.is_finished());
    hold.update(1.5);
    assert!(hold.is_finished());
}

#[test]
fn straight_move_update_is_idempotent() {
    let rect = rect_at(0, 0);
    let mut slide = StraightMove::new("slide", rect.clone(), (10, 0), 1.0, Easing::Linear, false);
    slide.start(0.0);
    slide.update(0.5);
    let after_first = rect.borrow().position();
    slide.update(0.5);
    assert_eq!(rect.borrow().position(), after_first);
}

#[test]
fn straight_move_lands_exactly_regardless_of_sampling() {
    let rect = rect_at(2, 3);
    let mut slide = StraightMove::new("slide", rect.clone(), (7, -3), 1.0, Easing::Back, false);
    slide.start(0.0);
    for t in [0.05, 0.11, 0.13, 0.42, 0.55, 0.81, 0.93, 1.0, 1.2] {
        slide.update(t);
    }
    assert_eq!(rect.borrow().position(), Point::new(9, 0));
    assert_eq!(slide.accumulated(), (7, -3));
}

#[test]
fn straight_move_single_jump_matches_many_samples() {
    let coarse = rect_at(0, 0);
    let mut jump = StraightMove::new("jump", coarse.clone(), (5, 5), 1.0, Easing::Quadratic, false);
    jump.start(0.0);
    jump.update(2.0);
    assert_eq!(coarse.borrow().position(), Point::new(5, 5));
}

#[test]
fn reset_clears_accumulated_displacement() {
    let rect = rect_at(0, 0);
    let mut slide = StraightMove::new("slide", rect.clone(), (4, 0), 1.0, Easing::Linear, true);
    slide.start(0.0);
    slide.update(1.0);
    assert_eq!(slide.accumulated(), (4, 0));
    slide.reset();
    assert!(!slide.is_started());
    assert_eq!(slide.accumulated(), (0, 0));

    // A second run moves the full distance again from the new position.
    slide.start(2.0);
    slide.update(3.0);
    assert_eq!(rect.borrow().position(), Point::new(8, 0));
}

#[test]
fn moving_marks_the_actor_dirty() {
    let rect = rect_at(0, 0);
    {
        let mut canvas = crate::render::canvas::Canvas::new(crate::foundation::core::Size::new(8, 8));
        rect.borrow_mut().render(&mut canvas);
    }
    assert!(!rect.borrow().is_dirty());

    let mut slide = StraightMove::new("slide", rect.clone(), (3, 0), 1.0, Easing::Linear, false);
    slide.start(0.0);
    slide.update(1.0);
    assert!(rect.borrow().is_dirty());
}

#[test]
fn visibility_flips_show_and_hide() {
    let rect = rect_at(0, 0);
    rect.borrow_mut().set_visible(false);

    let mut show = VisibilityFlip::show("show", rect.clone());
    show.start(0.0);
    show.update(0.0);
    assert!(rect.borrow().is_visible());
    assert!(!show.is_finished());
    show.update(0.01);
    assert!(show.is_finished());

    let mut hide = VisibilityFlip::hide("hide", rect.clone());
    hide.start(1.0);
    hide.update(1.0);
    assert!(!rect.borrow().is_visible());
}

#[test]
fn redundant_flip_does_not_dirty_the_actor() {
    let rect = rect_at(0, 0);
    {
        let mut canvas = crate::render::canvas::Canvas::new(crate::foundation::core::Size::new(8, 8));
        rect.borrow_mut().render(&mut canvas);
    }

    let mut show = VisibilityFlip::show("show", rect.clone());
    show.start(0.0);
    show.update(0.0);
    assert!(!rect.borrow().is_dirty());
}
