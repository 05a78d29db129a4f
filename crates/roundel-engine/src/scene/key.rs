use core::cmp::Ordering;

/// The per-frame passes, in paint order.
///
/// Later passes paint over earlier ones inside the shared boundary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum DrawPass {
    /// Boundary filled with the fitted image.
    Fill,
    /// Boundary outline.
    Stroke,
    /// Boundary filled with the press highlight color.
    Highlight,
}

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `pass`: ascending (fill, stroke, highlight)
/// 2) `order`: ascending (insertion order within a pass)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub pass: DrawPass,
    /// Insertion index, ensuring stable ordering within a pass.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(pass: DrawPass, order: u32) -> Self {
        Self { pass, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.pass.cmp(&other.pass) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
