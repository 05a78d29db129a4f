use super::{DrawCmd, DrawPass, SortKey};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem<'a> {
    pub key: SortKey,
    pub cmd: DrawCmd<'a>,
}

impl DrawItem<'_> {
    #[inline]
    pub fn pass(&self) -> DrawPass {
        self.key.pass
    }
}

/// Recorded draw stream for a frame.
///
/// The lifetime ties image paints to the host's pixel buffer: the buffer stays
/// borrowed exactly as long as the list is alive.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
#[derive(Debug, Default)]
pub struct DrawList<'a> {
    items: Vec<DrawItem<'a>>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl<'a> DrawList<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem<'a>] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command into `pass`.
    #[inline]
    pub fn push(&mut self, pass: DrawPass, cmd: DrawCmd<'a>) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(pass, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem<'a>> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Passes in paint order.
    pub fn passes(&mut self) -> Vec<DrawPass> {
        self.iter_in_paint_order().map(DrawItem::pass).collect()
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geometry::BoundaryPath;
    use crate::paint::{Color, Paint, StrokeStyle};

    fn fill(path: &Arc<BoundaryPath>) -> DrawCmd<'static> {
        DrawCmd::FillPath { path: Arc::clone(path), paint: Paint::solid(Color::black()) }
    }

    #[test]
    fn paint_order_sorts_by_pass_then_insertion() {
        let path = Arc::new(BoundaryPath::empty());
        let mut list = DrawList::new();
        list.push(DrawPass::Highlight, fill(&path));
        list.push(
            DrawPass::Stroke,
            DrawCmd::StrokePath { path: Arc::clone(&path), stroke: StrokeStyle::new(1.0, Color::white()) },
        );
        list.push(DrawPass::Fill, fill(&path));

        assert_eq!(list.passes(), vec![DrawPass::Fill, DrawPass::Stroke, DrawPass::Highlight]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let path = Arc::new(BoundaryPath::empty());
        let mut list = DrawList::new();
        list.push(DrawPass::Fill, fill(&path));
        list.clear();
        assert!(list.is_empty());
        list.push(DrawPass::Fill, fill(&path));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
