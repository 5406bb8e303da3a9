/// Easing functions used to shape motion and color interpolation.
///
/// Every variant maps normalized time to normalized progress with exact
/// endpoint anchors: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`. `Back`
/// intentionally overshoots in between but still anchors exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Easing {
    /// Straight-through progress.
    #[default]
    Linear,
    /// Quadratic ease-in/out.
    Quadratic,
    /// Smoothstep cubic.
    Bezier,
    /// Parametric ease-in/out, steeper than quadratic.
    Parametric,
    /// Overshooting ease-in/out.
    Back,
}

// Back-easing overshoot constants.
const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;

impl Easing {
    /// Apply this easing function to normalized time `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Quadratic => {
                if t <= 0.5 {
                    2.0 * t * t
                } else {
                    let t = t - 0.5;
                    2.0 * t * (1.0 - t) + 0.5
                }
            }
            Self::Bezier => t * t * (3.0 - 2.0 * t),
            Self::Parametric => {
                let tt = t * t;
                tt / (2.0 * (tt - t) + 1.0)
            }
            Self::Back => {
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (2.0 * t - 2.0) + BACK_C2)
                        + 2.0)
                        / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
