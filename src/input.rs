//! Pointer tracking over window events.
//!
//! The animator routes raw winit events through [`Input`], which keeps the
//! last-known pointer position. The field never reads events itself; it is
//! fed through its `set_pointer`/`clear_pointer` setters after each event.

use glam::Vec2;
use winit::event::WindowEvent;

/// Last-known pointer state for the animation window.
///
/// The pointer starts unset, is overwritten on every cursor move, and is
/// cleared again when the cursor leaves the window.
#[derive(Debug, Default)]
pub struct Input {
    pointer: Option<Vec2>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer position in window pixels, if the cursor is over the window.
    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer_left();
            }
            _ => {}
        }
    }

    fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    fn pointer_left(&mut self) {
        self.pointer = None;
    }
}
