use crate::animation::{Animation, Timing};
use crate::foundation::core::Rgba;
use crate::foundation::math::{hsv_to_rgb, rgb_to_hsv};

/// Callback that writes a computed color back onto an actor.
///
/// Actor kinds expose color differently (one fill color, a gradient pair, a
/// stroke and a fill), so the hue animations never write a field directly;
/// the caller supplies the write.
pub type ApplyColor = Box<dyn FnMut(Rgba)>;

/// Cycles a color around the hue wheel in HSV space.
///
/// Over one duration the hue advances a full turn and lands back on the
/// initial color; saturation, value, and alpha are held fixed.
pub struct HueRotate {
    name: String,
    timing: Timing,
    initial_hsv: (f64, f64, f64),
    alpha: u8,
    apply: ApplyColor,
}

impl HueRotate {
    /// Create a hue rotation starting (and ending) at `initial`.
    pub fn new(
        name: impl Into<String>,
        initial: Rgba,
        duration: f64,
        repeat: bool,
        apply: ApplyColor,
    ) -> Self {
        Self {
            name: name.into(),
            timing: Timing::new(duration, repeat),
            initial_hsv: rgb_to_hsv(initial.r, initial.g, initial.b),
            alpha: initial.a,
            apply,
        }
    }
}

impl Animation for HueRotate {
    fn name(&self) -> &str {
        &self.name
    }

    fn duration(&self) -> f64 {
        self.timing.duration()
    }

    fn repeats(&self) -> bool {
        self.timing.repeats()
    }

    fn is_started(&self) -> bool {
        self.timing.is_started()
    }

    fn start(&mut self, now: f64) {
        self.timing.start(now);
    }

    fn update(&mut self, now: f64) {
        let progress = self.timing.fraction(now);
        let (h0, s, v) = self.initial_hsv;
        let hue = (h0 + progress).rem_euclid(1.0);
        let (r, g, b) = hsv_to_rgb(hue, s, v);
        (self.apply)(Rgba::new(r, g, b, self.alpha));
        self.timing.mark_updated(now);
    }

    fn is_finished(&self) -> bool {
        self.timing.is_finished()
    }

    fn reset(&mut self) {
        self.timing.reset();
    }
}

/// Fades one color into another by interpolating hue, saturation, and value
/// (plus alpha) linearly over the duration.
pub struct HueFade {
    name: String,
    timing: Timing,
    from_hsv: (f64, f64, f64),
    to_hsv: (f64, f64, f64),
    from_alpha: u8,
    to_alpha: u8,
    apply: ApplyColor,
}

impl HueFade {
    /// Create a fade from `from` to `to`.
    pub fn new(
        name: impl Into<String>,
        from: Rgba,
        to: Rgba,
        duration: f64,
        repeat: bool,
        apply: ApplyColor,
    ) -> Self {
        Self {
            name: name.into(),
            timing: Timing::new(duration, repeat),
            from_hsv: rgb_to_hsv(from.r, from.g, from.b),
            to_hsv: rgb_to_hsv(to.r, to.g, to.b),
            from_alpha: from.a,
            to_alpha: to.a,
            apply,
        }
    }
}

impl Animation for HueFade {
    fn name(&self) -> &str {
        &self.name
    }

    fn duration(&self) -> f64 {
        self.timing.duration()
    }

    fn repeats(&self) -> bool {
        self.timing.repeats()
    }

    fn is_started(&self) -> bool {
        self.timing.is_started()
    }

    fn start(&mut self, now: f64) {
        self.timing.start(now);
    }

    fn update(&mut self, now: f64) {
        let t = self.timing.fraction(now);
        let lerp = |a: f64, b: f64| a + (b - a) * t;

        let h = lerp(self.from_hsv.0, self.to_hsv.0);
        let s = lerp(self.from_hsv.1, self.to_hsv.1);
        let v = lerp(self.from_hsv.2, self.to_hsv.2);
        let a = crate::foundation::math::lerp_u8(self.from_alpha, self.to_alpha, t);

        let (r, g, b) = hsv_to_rgb(h, s, v);
        (self.apply)(Rgba::new(r, g, b, a));
        self.timing.mark_updated(now);
    }

    fn is_finished(&self) -> bool {
        self.timing.is_finished()
    }

    fn reset(&mut self) {
        self.timing.reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/color.rs"]
mod tests;
