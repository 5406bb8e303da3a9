use crate::animation::{Animation, Timing};

/// Runs child animations strictly in order.
///
/// At most one child is running at any time; the cursor advances only when
/// the current child reports finished. The sequence duration is the sum of
/// its children's durations and is recomputed whenever children are added.
pub struct Sequence {
    name: String,
    timing: Timing,
    children: Vec<Box<dyn Animation>>,
    cursor: usize,
}

impl Sequence {
    /// Create an empty sequence.
    pub fn new(name: impl Into<String>, repeat: bool) -> Self {
        Self {
            name: name.into(),
            timing: Timing::new(0.0, repeat),
            children: Vec::new(),
            cursor: 0,
        }
    }

    /// Create a sequence from existing children.
    pub fn with_children(
        name: impl Into<String>,
        repeat: bool,
        children: Vec<Box<dyn Animation>>,
    ) -> Self {
        let mut seq = Self::new(name, repeat);
        seq.children = children;
        seq.recompute_duration();
        seq
    }

    /// Append a child animation and recompute the total duration.
    pub fn push(&mut self, child: Box<dyn Animation>) {
        self.children.push(child);
        self.recompute_duration();
    }

    /// Number of child animations.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Return `true` when the sequence has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn recompute_duration(&mut self) {
        let total = self.children.iter().map(|c| c.duration()).sum();
        self.timing.set_duration(total);
    }
}

impl Animation for Sequence {
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
        self.cursor = 0;
    }

    fn update(&mut self, now: f64) {
        // Start and update the current child; when it finishes, advance and
        // start the next child in the same tick so zero-duration steps never
        // stall a frame.
        while let Some(child) = self.children.get_mut(self.cursor) {
            if !child.is_started() {
                child.start(now);
            }
            child.update(now);
            if child.is_finished() {
                self.cursor += 1;
            } else {
                break;
            }
        }
        self.timing.mark_updated(now);
    }

    fn is_finished(&self) -> bool {
        self.cursor >= self.children.len()
    }

    fn reset(&mut self) {
        self.timing.reset();
        for child in &mut self.children {
            child.reset();
        }
        self.cursor = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequence.rs"]
mod tests;
