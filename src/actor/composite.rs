use tracing::debug;

use crate::actor::{Actor, ActorRef, ActorState};
use crate::animation::Animation;
use crate::animation::ease::Easing;
use crate::animation::motion::{Still, StraightMove};
use crate::animation::sequence::Sequence;
use crate::foundation::core::{Point, Rect, Rgba, Size};
use crate::render::canvas::Canvas;

fn span(len: i32) -> u32 {
    len.max(0) as u32
}

/// Clips one child actor to a sub-rectangle of the mask's bounds.
///
/// The canvas has no clip-region primitive, so the mask renders the child
/// into a transparent scratch canvas, overwrites the four regions around the
/// crop area with fully transparent pixels, and composites the scratch onto
/// the target. The crop area is inclusive of its edge pixels and expressed in
/// the mask's own coordinate space.
pub struct CropMask {
    base: ActorState,
    child: Option<ActorRef>,
    crop: Rect,
}

impl CropMask {
    /// Create a mask over `child`; `size` is the full croppable area and
    /// `crop` the part left visible.
    pub fn new(
        name: impl Into<String>,
        position: Point,
        size: Size,
        crop: Rect,
        child: Option<ActorRef>,
    ) -> Self {
        let mut base = ActorState::new(name, position);
        base.set_size(size);
        Self { base, child, crop }
    }

    /// The visible sub-rectangle.
    pub fn crop_area(&self) -> Rect {
        self.crop
    }

    /// Move the visible sub-rectangle.
    pub fn set_crop_area(&mut self, crop: Rect) {
        if self.crop != crop {
            self.crop = crop;
            self.base.mark_dirty();
        }
    }

    /// Replace the child actor.
    pub fn set_child(&mut self, child: Option<ActorRef>) {
        self.child = child;
        self.base.mark_dirty();
    }
}

impl Actor for CropMask {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        if let Some(child) = &self.child {
            let mut scratch = Canvas::transparent(self.base.size);
            {
                let mut child = child.borrow_mut();
                if child.is_visible() {
                    child.render(&mut scratch);
                } else {
                    child.clear_dirty();
                }
            }

            let Size { w, h } = self.base.size;
            let (x0, y0) = (self.crop.pos.x, self.crop.pos.y);
            let (x1, y1) = (self.crop.right(), self.crop.bottom());

            scratch.fill_rect(Rect::new(0, 0, w, span(y0)), Rgba::TRANSPARENT);
            scratch.fill_rect(
                Rect::new(0, y1 + 1, w, span(h as i32 - (y1 + 1))),
                Rgba::TRANSPARENT,
            );
            scratch.fill_rect(Rect::new(0, y0, span(x0), self.crop.size.h), Rgba::TRANSPARENT);
            scratch.fill_rect(
                Rect::new(x1 + 1, y0, span(w as i32 - (x1 + 1)), self.crop.size.h),
                Rgba::TRANSPARENT,
            );

            canvas.composite_raster(scratch.raster(), self.base.position, None);
        }
        self.base.clear_dirty();
    }

    fn is_dirty(&self) -> bool {
        self.base.dirty
            || self
                .child
                .as_ref()
                .is_some_and(|child| child.borrow().is_dirty())
    }

    fn clear_dirty(&mut self) {
        if let Some(child) = &self.child {
            child.borrow_mut().clear_dirty();
        }
        self.base.clear_dirty();
    }
}

/// Rotates the display of several panel actors through one crop window,
/// dwelling on each panel and sliding between them.
///
/// Construction wraps every panel in its own [`CropMask`] over the shared
/// window and spreads the panels horizontally at a fixed spacing of one pixel
/// more than the window width. [`Carousel::build_animations`] produces the
/// repeating per-panel slide cycles; the caller hands those to the stage.
pub struct Carousel {
    base: ActorState,
    crop: Rect,
    panels: Vec<ActorRef>,
    masks: Vec<CropMask>,
    dwell: f64,
    transition: f64,
    easing: Easing,
}

impl Carousel {
    /// Create a carousel of `panels` visible through the window `crop`.
    ///
    /// `panel_offset` shifts every panel relative to its computed slot, e.g.
    /// to center smaller panels inside the window.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        position: Point,
        crop: Rect,
        panels: Vec<ActorRef>,
        dwell: f64,
        transition: f64,
        easing: Easing,
        panel_offset: (i32, i32),
    ) -> Self {
        let name = name.into();
        let mut base = ActorState::new(name.clone(), position);
        base.set_size(crop.size);

        // The scratch canvases only need to reach the far edge of the window.
        let mask_size = Size::new(span(crop.right() + 1), span(crop.bottom() + 1));
        let spacing = crop.size.w as i32 + 1;

        let mut masks = Vec::with_capacity(panels.len());
        for (index, panel) in panels.iter().enumerate() {
            panel.borrow_mut().set_position(Point::new(
                position.x + index as i32 * spacing + panel_offset.0,
                position.y + panel_offset.1,
            ));
            masks.push(CropMask::new(
                format!("{name}/mask{index}"),
                Point::new(0, 0),
                mask_size,
                crop,
                Some(panel.clone()),
            ));
        }
        debug!(carousel = name.as_str(), panels = masks.len(), spacing, "carousel laid out");

        Self {
            base,
            crop,
            panels,
            masks,
            dwell,
            transition,
            easing,
        }
    }

    /// Horizontal distance between adjacent panel slots.
    pub fn spacing(&self) -> i32 {
        self.crop.size.w as i32 + 1
    }

    /// One repeating animation per panel driving the dwell/slide cycle.
    ///
    /// Each cycle holds for the dwell time, slides one slot left between
    /// panels, and finally slides all the way back to the start, so the total
    /// cycle duration is `panels * (dwell + transition)` and every panel ends
    /// a cycle exactly where it began.
    pub fn build_animations(&self) -> Vec<Box<dyn Animation>> {
        let count = self.panels.len();
        let spacing = self.spacing();
        let reset_distance = spacing * (count as i32 - 1).max(0);

        let mut cycles: Vec<Box<dyn Animation>> = Vec::with_capacity(count);
        for (index, panel) in self.panels.iter().enumerate() {
            let mut steps: Vec<Box<dyn Animation>> = Vec::with_capacity(2 * count);
            for step in 0..count {
                steps.push(Box::new(Still::new(
                    format!("{}/panel{index}/hold{step}", self.base.name),
                    self.dwell,
                )));
                let (label, distance) = if step + 1 < count {
                    ("slide", (-spacing, 0))
                } else {
                    ("return", (reset_distance, 0))
                };
                steps.push(Box::new(StraightMove::new(
                    format!("{}/panel{index}/{label}{step}", self.base.name),
                    panel.clone(),
                    distance,
                    self.transition,
                    self.easing,
                    false,
                )));
            }
            cycles.push(Box::new(Sequence::with_children(
                format!("{}/panel{index}/cycle", self.base.name),
                true,
                steps,
            )));
        }
        cycles
    }
}

impl Actor for Carousel {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        for mask in &mut self.masks {
            mask.render(canvas);
        }
        self.base.clear_dirty();
    }

    fn is_dirty(&self) -> bool {
        self.base.dirty || self.masks.iter().any(CropMask::is_dirty)
    }

    fn clear_dirty(&mut self) {
        for mask in &mut self.masks {
            mask.clear_dirty();
        }
        self.base.clear_dirty();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actor/composite.rs"]
mod tests;
