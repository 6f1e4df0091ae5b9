//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (audio, scrolling)
//! from component logic to improve reuse and testability.

pub mod draft;
pub mod effects;
pub mod scroll;
pub mod sound;
