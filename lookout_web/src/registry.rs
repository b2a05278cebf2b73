// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::RefCell;

/// Stable handle to an interned DOM element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(u32);

/// Interns values that only offer identity comparison, such as DOM elements,
/// behind hashable [`NodeHandle`]s.
///
/// Interning the same value twice yields the same handle. A handle stays
/// valid until its value is released; released slots are reused, so callers
/// must not keep handles to elements they have thrown away.
#[derive(Debug)]
pub(crate) struct Registry<T> {
    slots: RefCell<Vec<Option<T>>>,
}

impl<T: PartialEq + Clone> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn intern(&self, item: T) -> NodeHandle {
        let mut slots = self.slots.borrow_mut();
        let index = if let Some(index) = slots.iter().position(|s| s.as_ref() == Some(&item)) {
            index
        } else if let Some(index) = slots.iter().position(Option::is_none) {
            slots[index] = Some(item);
            index
        } else {
            slots.push(Some(item));
            slots.len() - 1
        };
        NodeHandle(u32::try_from(index).unwrap_or(u32::MAX))
    }

    pub(crate) fn get(&self, handle: NodeHandle) -> Option<T> {
        let index = usize::try_from(handle.0).ok()?;
        self.slots.borrow().get(index).cloned().flatten()
    }

    /// Frees the slot holding `item`, if any.
    pub(crate) fn release(&self, item: &T) {
        let mut slots = self.slots.borrow_mut();
        if let Some(slot) = slots.iter_mut().find(|s| s.as_ref() == Some(item)) {
            *slot = None;
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;

    #[test]
    fn same_value_same_handle() {
        let registry = Registry::new();
        let a = registry.intern("header");
        let b = registry.intern("nav");
        assert_ne!(a, b);
        assert_eq!(registry.intern("header"), a);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(b), Some("nav"));
    }

    #[test]
    fn released_slots_are_reused() {
        let registry = Registry::new();
        let list = registry.intern(String::from("results"));
        // Each render replaces the previous links.
        for render in 0..50 {
            let links: Vec<_> = (0..3).map(|i| format!("link {render}.{i}")).collect();
            for link in &links {
                registry.intern(link.clone());
            }
            for link in &links {
                registry.release(link);
            }
        }
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get(list).as_deref(), Some("results"));

        let old = registry.intern(String::from("gone"));
        registry.release(&String::from("gone"));
        assert_eq!(registry.get(old), None);
    }
}
