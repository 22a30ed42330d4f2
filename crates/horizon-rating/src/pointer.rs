//! Pointer input for the rating widget.
//!
//! Touch and mouse input are both delivered as [`PointerEvent`]s carrying a
//! position local to the widget. Only the X coordinate selects a rating.

use crate::geometry::Point;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The pointer went down (touch start or button press).
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer was released.
    Up,
    /// The platform cancelled the interaction.
    Cancel,
}

impl PointerPhase {
    /// Whether this phase selects a rating. Only down and move do; there is
    /// no separate commit on release.
    pub fn selects_value(self) -> bool {
        matches!(self, Self::Down | Self::Move)
    }
}

/// A pointer event in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Interaction phase.
    pub phase: PointerPhase,
    /// Position relative to the widget's top-left corner.
    pub position: Point,
    accepted: bool,
}

impl PointerEvent {
    /// Create a new, unaccepted pointer event.
    pub fn new(phase: PointerPhase, position: Point) -> Self {
        Self {
            phase,
            position,
            accepted: false,
        }
    }

    /// Pointer-down at `x` on the icon row.
    pub fn down(x: f32) -> Self {
        Self::new(PointerPhase::Down, Point::new(x, 0.0))
    }

    /// Pointer-move to `x` on the icon row.
    pub fn moved(x: f32) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, 0.0))
    }

    /// Pointer-up at `x` on the icon row.
    pub fn up(x: f32) -> Self {
        Self::new(PointerPhase::Up, Point::new(x, 0.0))
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_phases() {
        assert!(PointerPhase::Down.selects_value());
        assert!(PointerPhase::Move.selects_value());
        assert!(!PointerPhase::Up.selects_value());
        assert!(!PointerPhase::Cancel.selects_value());
    }

    #[test]
    fn test_accept_ignore() {
        let mut event = PointerEvent::down(12.0);
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(PointerEvent::moved(4.0).phase, PointerPhase::Move);
        assert_eq!(PointerEvent::up(4.0).position, Point::new(4.0, 0.0));
    }
}
