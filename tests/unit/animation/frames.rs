use super::*;

use crate::assets::raster::Raster;
use crate::foundation::core::{Point, Rgba, Size};

fn capture() -> (Rc<RefCell<Vec<String>>>, ApplyFrame) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, Box::new(move |frame: &str| sink.borrow_mut().push(frame.to_owned())))
}

#[test]
fn duration_is_the_sum_of_frame_durations() {
    let (_, apply) = capture();
    let mut frames = FrameSequence::new("strip", false, apply);
    frames.add_frame("a", 1.0);
    frames.add_frame("b", 2.0);
    frames.add_frame("c", 0.5);
    assert_eq!(frames.len(), 3);
    assert_eq!(frames.duration(), 3.5);
}

#[test]
fn update_picks_the_frame_containing_elapsed_time() {
    let (seen, apply) = capture();
    let mut frames = FrameSequence::new("strip", false, apply);
    frames.add_frame("a", 1.0);
    frames.add_frame("b", 2.0);
    frames.add_frame("c", 1.0);

    frames.start(10.0);
    frames.update(10.5);
    frames.update(11.0);
    frames.update(12.9);
    frames.update(13.2);

    assert_eq!(*seen.borrow(), vec!["a", "b", "b", "c"]);
}

#[test]
fn past_the_last_frame_nothing_is_applied() {
    let (seen, apply) = capture();
    let mut frames = FrameSequence::new("strip", false, apply);
    frames.add_frame("only", 1.0);

    frames.start(0.0);
    frames.update(5.0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn indexed_frames_follow_decoded_delays() {
    let (_, apply) = capture();
    let mut frames = FrameSequence::new("gif", true, apply);
    frames.push_indexed_frames([Duration::from_millis(100), Duration::from_millis(250)]);
    assert_eq!(frames.len(), 2);
    assert!((frames.duration() - 0.35).abs() < 1e-9);
}

#[test]
fn drives_a_multi_frame_image_by_index() {
    let frame_rasters = vec![
        Raster::filled(Size::new(2, 2), Rgba::opaque(255, 0, 0)),
        Raster::filled(Size::new(2, 2), Rgba::opaque(0, 255, 0)),
    ];
    let image = crate::actor::shared(MultiFrameImage::new(
        "blinker",
        Point::new(0, 0),
        frame_rasters,
    ));

    let mut frames = FrameSequence::for_multi_frame("blink", image.clone(), false);
    frames.push_indexed_frames([Duration::from_millis(100), Duration::from_millis(100)]);

    frames.start(0.0);
    frames.update(0.05);
    assert_eq!(image.borrow().current_frame(), 0);
    frames.update(0.15);
    assert_eq!(image.borrow().current_frame(), 1);
}

#[test]
fn drives_a_sprite_image_by_name() {
    let sprite = crate::actor::shared(SpriteImage::new(
        "walker",
        Point::new(0, 0),
        None,
        crate::assets::sprite::SpriteSheetSpec::new(),
    ));

    let mut frames = FrameSequence::for_sprite("walk", sprite.clone(), true);
    frames.add_frame("left", 0.5);
    frames.add_frame("right", 0.5);

    frames.start(0.0);
    frames.update(0.1);
    assert_eq!(sprite.borrow().selected(), Some("left"));
    frames.update(0.7);
    assert_eq!(sprite.borrow().selected(), Some("right"));
}
