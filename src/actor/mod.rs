//! Renderable scene entities.
//!
//! Actors are constructed once at scene setup and mutated for the life of the
//! run; content is swapped in place, never the actor identity. Every mutator
//! that could change rendered output raises the actor's dirty flag, and only
//! the actor's own `render` clears it, at the end of the call. No-op writes
//! (setting a value equal to the current one) must leave the flag untouched.

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::core::{Point, Size};
use crate::render::canvas::Canvas;

pub mod composite;
pub mod image;
pub mod shape;
pub mod text;

/// Shared handle to an actor.
///
/// The engine is strictly single-threaded (one tick at a time, per the
/// concurrency model), and the same actor is legitimately reachable from
/// several places at once (a carousel panel is rendered through its crop
/// mask while a sequence animation moves it), so actors live behind
/// `Rc<RefCell<_>>`.
pub type ActorRef = Rc<RefCell<dyn Actor>>;

/// Wrap a concrete actor in a shared handle.
///
/// Keep a clone of the returned `Rc` if you need typed access later;
/// the coercion to [`ActorRef`] erases the concrete type.
pub fn shared<A: Actor + 'static>(actor: A) -> Rc<RefCell<A>> {
    Rc::new(RefCell::new(actor))
}

/// State common to every actor kind.
#[derive(Clone, Debug)]
pub struct ActorState {
    name: String,
    position: Point,
    size: Size,
    visible: bool,
    dirty: bool,
}

impl ActorState {
    /// Create actor state; actors start dirty because they have never been
    /// rendered.
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position,
            size: Size::default(),
            visible: true,
            dirty: true,
        }
    }

    /// Update the position, marking dirty only on an actual change.
    pub fn set_position(&mut self, position: Point) {
        if self.position != position {
            self.position = position;
            self.dirty = true;
        }
    }

    /// Update the content size, marking dirty only on an actual change.
    pub fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.dirty = true;
        }
    }

    /// Update visibility, marking dirty only on an actual change.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty = true;
        }
    }

    /// Raise the dirty flag unconditionally.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Lower the dirty flag; called by `render` implementations when done.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// A renderable entity with position, size, visibility, and a dirty flag.
///
/// Concrete kinds implement `state`/`state_mut`/`render`; everything else has
/// a default implementation over [`ActorState`]. Composite kinds additionally
/// override [`Actor::is_dirty`] to include their children.
pub trait Actor {
    /// Borrow the common state.
    fn state(&self) -> &ActorState;

    /// Mutably borrow the common state.
    fn state_mut(&mut self) -> &mut ActorState;

    /// Draw the current state onto the canvas and clear the dirty flag.
    fn render(&mut self, canvas: &mut Canvas);

    /// Identifier used in log output.
    fn name(&self) -> &str {
        &self.state().name
    }

    /// Current top-left position.
    fn position(&self) -> Point {
        self.state().position
    }

    /// Move the actor; no-op writes do not mark it dirty.
    fn set_position(&mut self, position: Point) {
        self.state_mut().set_position(position);
    }

    /// Content-derived size.
    fn size(&self) -> Size {
        self.state().size
    }

    /// Whether the render pass draws this actor.
    fn is_visible(&self) -> bool {
        self.state().visible
    }

    /// Show or hide the actor; a change marks it dirty so the next frame
    /// draws or erases it.
    fn set_visible(&mut self, visible: bool) {
        self.state_mut().set_visible(visible);
    }

    /// `true` when observable state changed since the last render.
    fn is_dirty(&self) -> bool {
        self.state().dirty
    }

    /// Lower the dirty flag without rendering.
    ///
    /// The stage uses this for invisible actors so a hide still triggers
    /// exactly one erasing frame and then goes quiet.
    fn clear_dirty(&mut self) {
        self.state_mut().clear_dirty();
    }
}
