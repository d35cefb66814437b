//! Timenotes
//!
//! A keypad-driven editor for numbered, time-stamped notes.

pub mod app;
pub mod input;
pub mod notes;
pub mod ui;
