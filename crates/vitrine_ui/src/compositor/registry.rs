//! Window registry: owns every live window together with its z-order index.

use std::collections::BTreeMap;

use crate::window::{Drawable, WindowId};

use super::zorder::ZOrderIndex;

/// A registered window and the z-index it was indexed under.
pub(crate) struct Registered {
    pub(crate) z_index: i32,
    pub(crate) drawable: Box<dyn Drawable>,
}

/// Registry and z-order index, mutated only together.
///
/// Every ID in the index has a window entry and vice versa. The ID counter
/// survives [`WindowRegistry::clear`], so IDs are never reissued.
#[derive(Default)]
pub(crate) struct WindowRegistry {
    windows: BTreeMap<WindowId, Registered>,
    z_order: ZOrderIndex,
    next_id: u64,
}

impl WindowRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a window under its declared z-index.
    pub(crate) fn insert(&mut self, drawable: Box<dyn Drawable>) -> (WindowId, i32) {
        let z_index = drawable.z_index();
        let id = WindowId::new(self.next_id);
        self.next_id += 1;

        self.z_order.insert(z_index, id);
        self.windows.insert(id, Registered { z_index, drawable });
        (id, z_index)
    }

    /// Drops every window and bucket. Leaves the ID counter alone.
    pub(crate) fn clear(&mut self) {
        self.windows.clear();
        self.z_order.clear();
    }

    pub(crate) fn get(&self, id: WindowId) -> Option<&Registered> {
        self.windows.get(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.windows.len()
    }

    pub(crate) fn z_order(&self) -> &ZOrderIndex {
        &self.z_order
    }

    /// Windows in registration (ID) order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (WindowId, &Registered)> + '_ {
        self.windows.iter().map(|(id, entry)| (*id, entry))
    }

    /// Windows back-to-front.
    pub(crate) fn paint_order(&self) -> impl Iterator<Item = (WindowId, &Registered)> + '_ {
        self.z_order
            .iter()
            .filter_map(|id| self.windows.get(&id).map(|entry| (id, entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderTarget;

    struct Stub(i32);

    impl Drawable for Stub {
        fn z_index(&self) -> i32 {
            self.0
        }

        fn draw(&self, _target: &mut dyn RenderTarget) {}
    }

    #[test]
    fn test_insert_keeps_index_and_windows_together() {
        let mut registry = WindowRegistry::new();
        let (a, _) = registry.insert(Box::new(Stub(2)));
        let (b, z) = registry.insert(Box::new(Stub(-1)));

        assert_eq!(z, -1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.z_order().len(), 2);
        assert_eq!(registry.get(a).map(|entry| entry.z_index), Some(2));

        let painted: Vec<_> = registry.paint_order().map(|(id, _)| id).collect();
        assert_eq!(painted, vec![b, a]);
    }

    #[test]
    fn test_clear_keeps_counter() {
        let mut registry = WindowRegistry::new();
        let (first, _) = registry.insert(Box::new(Stub(0)));
        registry.clear();

        assert_eq!(registry.len(), 0);
        assert!(registry.z_order().is_empty());

        let (second, _) = registry.insert(Box::new(Stub(0)));
        assert!(second > first);
    }
}
