//! View layer for the top-items browser.
//!
//! [`ViewController`] owns the data flow of a render cycle and stays free of
//! terminal concerns; everything that reaches the screen goes through the
//! [`Render`] trait, implemented for real use by [`TerminalRenderer`].

mod controller;
mod render;

pub use controller::{CycleOutcome, ViewController};
pub use render::{Render, TerminalRenderer};
