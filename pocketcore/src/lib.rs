//! pocketcore — shared pieces of the pocketcalc window

pub mod dither;
pub mod logging;
pub mod repaint;
pub mod safety;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use storage::Preferences;
pub use theme::PocketTheme;

/// Environment variable holding the instance index for window stacking.
pub const CASCADE_ENV: &str = "POCKETCALC_CASCADE";

/// Window position for the n-th stacked instance, from `POCKETCALC_CASCADE`.
pub fn cascade_position() -> Option<egui::Pos2> {
    std::env::var(CASCADE_ENV).ok().and_then(|s| cascade_offset(&s))
}

fn cascade_offset(value: &str) -> Option<egui::Pos2> {
    value.trim().parse::<u32>().ok().map(|n| {
        let offset = (n as f32) * 30.0;
        egui::Pos2::new(100.0 + offset, 100.0 + offset)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_offset() {
        assert_eq!(cascade_offset("0"), Some(egui::Pos2::new(100.0, 100.0)));
        assert_eq!(cascade_offset(" 2 "), Some(egui::Pos2::new(160.0, 160.0)));
        assert_eq!(cascade_offset("left"), None);
    }
}
