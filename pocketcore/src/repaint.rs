//! Repaint only when something changed.
//!
//! egui redraws the whole window on every frame it runs. A calculator only
//! changes when a key is pressed, so we let egui sleep until input arrives
//! or the app marks itself dirty.

/// Call [`begin_frame`](Self::begin_frame) at the top of `update()` and
/// [`end_frame`](Self::end_frame) at the bottom.
#[derive(Debug, Default)]
pub struct RepaintController {
    needs_repaint: bool,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for one more frame after this one.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Drop requests left over from the previous frame; this frame is
    /// already painting them.
    pub fn begin_frame(&mut self) {
        self.needs_repaint = false;
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.take_request() {
            ctx.request_repaint();
        }
    }

    fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame_requests_nothing() {
        let mut rc = RepaintController::new();
        rc.begin_frame();
        assert!(!rc.take_request());
    }

    #[test]
    fn test_dirty_during_frame_requests_one_more() {
        let mut rc = RepaintController::new();
        rc.begin_frame();
        rc.mark_needs_repaint();
        assert!(rc.take_request());
        assert!(!rc.take_request());
    }

    #[test]
    fn test_begin_frame_drops_stale_request() {
        let mut rc = RepaintController::new();
        rc.mark_needs_repaint();
        rc.begin_frame();
        assert!(!rc.take_request());
    }
}
