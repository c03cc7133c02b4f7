//! Event Handlers
//!
//! This module contains handlers for the two input sources:
//! - keyboard: key presses, per active screen
//! - mouse: clicks, presses, and drags against recorded geometry
//!
//! Handlers take &mut App and mutate the model synchronously; the next
//! frame re-derives the view from the result.

pub mod actions;
pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
