/// Half the side of the glow element, so the glow centres on the pointer.
pub const GLOW_RADIUS: f64 = 128.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Top-left corner of the glow element centred on this position.
    pub fn glow_origin(&self) -> (f64, f64) {
        (self.x - GLOW_RADIUS, self.y - GLOW_RADIUS)
    }
}

/// Last known pointer position.
///
/// Devices without a fine pointer (touch only) leave the tracker inert: moves
/// are ignored and the position stays where it was.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorTracker {
    position: CursorPosition,
    fine_pointer: bool,
}

impl CursorTracker {
    pub fn new(fine_pointer: bool) -> Self {
        Self {
            position: CursorPosition::default(),
            fine_pointer,
        }
    }

    pub fn position(&self) -> CursorPosition {
        self.position
    }

    pub fn set_fine_pointer(&mut self, fine_pointer: bool) {
        self.fine_pointer = fine_pointer;
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.fine_pointer {
            self.position = CursorPosition::new(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echoes_coordinates() {
        let mut tracker = CursorTracker::new(true);
        tracker.pointer_moved(120.0, 340.0);
        assert_eq!(tracker.position(), CursorPosition::new(120.0, 340.0));
        // no clamping
        tracker.pointer_moved(-5.0, 1e6);
        assert_eq!(tracker.position(), CursorPosition::new(-5.0, 1e6));
    }

    #[test]
    fn test_inert_without_fine_pointer() {
        let mut tracker = CursorTracker::new(false);
        tracker.pointer_moved(120.0, 340.0);
        assert_eq!(tracker.position(), CursorPosition::default());

        tracker.set_fine_pointer(true);
        tracker.pointer_moved(1.0, 2.0);
        assert_eq!(tracker.position(), CursorPosition::new(1.0, 2.0));
    }

    #[test]
    fn test_glow_origin() {
        assert_eq!(CursorPosition::new(120.0, 340.0).glow_origin(), (-8.0, 212.0));
        assert_eq!(CursorPosition::default().glow_origin(), (-128.0, -128.0));
    }
}
