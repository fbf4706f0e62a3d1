//! Calculator plus a render callback
//!
//! Front ends never touch the [`Calculator`] directly. They push labels
//! through [`Session::press`] and get the new display text back through
//! their [`Renderer`] after every accepted press.

use crate::engine::Calculator;

/// Receives the display text after each state change.
pub trait Renderer {
    fn render(&mut self, display: &str);
}

impl<F: FnMut(&str)> Renderer for F {
    fn render(&mut self, display: &str) {
        self(display)
    }
}

pub struct Session<R: Renderer> {
    calculator: Calculator,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            calculator: Calculator::new(),
            renderer,
        }
    }

    /// Feed one key label. Unknown labels are dropped without a render.
    pub fn press(&mut self, label: &str) -> bool {
        let handled = self.calculator.handle_input(label);
        if handled {
            self.renderer.render(self.calculator.display());
        }
        handled
    }

    /// Render the current display without changing state.
    pub fn refresh(&mut self) {
        self.renderer.render(self.calculator.display());
    }

    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_after_each_press() {
        let mut frames = Vec::new();
        let mut session = Session::new(|display: &str| frames.push(display.to_string()));
        for label in ["4", "×", "2", "="] {
            session.press(label);
        }
        drop(session);
        assert_eq!(frames, vec!["4", "", "2", "8"]);
    }

    #[test]
    fn test_unknown_label_does_not_render() {
        let mut count = 0;
        let mut session = Session::new(|_: &str| count += 1);
        assert!(!session.press("sqrt"));
        assert!(session.press("1"));
        drop(session);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_refresh_renders_current_display() {
        let mut last = String::new();
        let mut session = Session::new(|display: &str| last = display.to_string());
        session.press("7");
        session.press("Clear");
        session.press("3");
        session.refresh();
        assert_eq!(session.display(), "3");
        drop(session);
        assert_eq!(last, "3");
    }
}
