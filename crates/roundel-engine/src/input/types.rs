use crate::coords::Vec2;

/// Phase of a pointer interaction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerPhase {
    /// Press started (touch down / primary button pressed).
    Down,
    /// Press ended normally.
    Up,
    /// Press aborted by the host (gesture stolen, window lost focus, ...).
    Cancel,
}

/// Pointer event in view-local logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    #[inline]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    #[inline]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    #[inline]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    #[inline]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Cancel, x, y)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Result of feeding a pointer event to the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; the host should stop routing it.
    Consumed,
    /// Event was not claimed; the host may route it elsewhere.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
