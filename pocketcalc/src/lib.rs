//! pocketcalc — a four-function pocket calculator
//!
//! The arithmetic lives in [`engine`]; [`session`] wraps it with a render
//! callback so the egui window and the terminal [`shell`] drive it the
//! same way.

pub mod engine;
pub mod keypad;
pub mod session;
pub mod shell;

pub use engine::{Calculator, Operator};
pub use session::{Renderer, Session};
