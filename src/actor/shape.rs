use crate::actor::{Actor, ActorState};
use crate::foundation::core::{Point, Rect, Rgba, Size};
use crate::foundation::math::lerp_rgba;
use crate::render::canvas::Canvas;

/// A filled and/or outlined rectangle.
pub struct Rectangle {
    base: ActorState,
    fill: Option<Rgba>,
    outline: Option<Rgba>,
    outline_width: u32,
}

impl Rectangle {
    /// Create a rectangle covering `rect` on the canvas.
    pub fn new(
        name: impl Into<String>,
        rect: Rect,
        fill: Option<Rgba>,
        outline: Option<Rgba>,
        outline_width: u32,
    ) -> Self {
        let mut base = ActorState::new(name, rect.pos);
        base.set_size(rect.size);
        Self {
            base,
            fill,
            outline,
            outline_width,
        }
    }

    /// Change the fill color; `None` leaves the interior undrawn.
    pub fn set_fill(&mut self, fill: Option<Rgba>) {
        if self.fill != fill {
            self.fill = fill;
            self.base.mark_dirty();
        }
    }

    /// Change the outline color and width; `None` disables the outline.
    pub fn set_outline(&mut self, outline: Option<Rgba>, outline_width: u32) {
        if self.outline != outline || self.outline_width != outline_width {
            self.outline = outline;
            self.outline_width = outline_width;
            self.base.mark_dirty();
        }
    }
}

impl Actor for Rectangle {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        let rect = Rect {
            pos: self.base.position,
            size: self.base.size,
        };
        canvas.draw_rect(rect, self.fill, self.outline, self.outline_width);
        self.base.clear_dirty();
    }
}

/// A rectangle whose fill fades linearly from a top color to a bottom color,
/// one color per scanline. The first row is exactly the top color and the
/// last row exactly the bottom color.
pub struct GradientRectangle {
    base: ActorState,
    top: Rgba,
    bottom: Rgba,
}

impl GradientRectangle {
    /// Create a vertical gradient covering `rect`.
    pub fn new(name: impl Into<String>, rect: Rect, top: Rgba, bottom: Rgba) -> Self {
        let mut base = ActorState::new(name, rect.pos);
        base.set_size(rect.size);
        Self { base, top, bottom }
    }

    /// Change the endpoint colors.
    pub fn set_colors(&mut self, top: Rgba, bottom: Rgba) {
        if self.top != top || self.bottom != bottom {
            self.top = top;
            self.bottom = bottom;
            self.base.mark_dirty();
        }
    }
}

impl Actor for GradientRectangle {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        let Size { w, h } = self.base.size;
        for y in 0..h {
            let t = if h <= 1 {
                0.0
            } else {
                f64::from(y) / f64::from(h - 1)
            };
            let color = lerp_rgba(self.top, self.bottom, t);
            let row = Rect::new(self.base.position.x, self.base.position.y + y as i32, w, 1);
            canvas.fill_rect(row, color);
        }
        self.base.clear_dirty();
    }
}

/// A 1-pixel-wide line segment with inclusive endpoints.
///
/// The actor's position is the top-left of the segment's bounding box, and
/// moving the actor translates both endpoints.
pub struct Line {
    base: ActorState,
    start: Point,
    end: Point,
    color: Rgba,
}

impl Line {
    /// Create a line from `start` to `end`.
    pub fn new(name: impl Into<String>, start: Point, end: Point, color: Rgba) -> Self {
        let mut base = ActorState::new(name, Self::top_left(start, end));
        base.set_size(Self::bounds(start, end));
        Self {
            base,
            start,
            end,
            color,
        }
    }

    /// Replace both endpoints.
    pub fn set_endpoints(&mut self, start: Point, end: Point) {
        if self.start != start || self.end != end {
            self.start = start;
            self.end = end;
            self.base.set_position(Self::top_left(start, end));
            self.base.set_size(Self::bounds(start, end));
            self.base.mark_dirty();
        }
    }

    /// Change the line color.
    pub fn set_color(&mut self, color: Rgba) {
        if self.color != color {
            self.color = color;
            self.base.mark_dirty();
        }
    }

    fn top_left(start: Point, end: Point) -> Point {
        Point::new(start.x.min(end.x), start.y.min(end.y))
    }

    fn bounds(start: Point, end: Point) -> Size {
        Size::new(
            start.x.abs_diff(end.x) + 1,
            start.y.abs_diff(end.y) + 1,
        )
    }
}

impl Actor for Line {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        canvas.draw_line(self.start, self.end, self.color);
        self.base.clear_dirty();
    }

    fn set_position(&mut self, position: Point) {
        let delta = (
            position.x - self.base.position.x,
            position.y - self.base.position.y,
        );
        if delta == (0, 0) {
            return;
        }
        self.start = self.start.offset(delta.0, delta.1);
        self.end = self.end.offset(delta.0, delta.1);
        self.base.set_position(position);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actor/shape.rs"]
mod tests;
