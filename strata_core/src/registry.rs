// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered list of registered entries.
//!
//! An [`Entry`] ties a layer to its display name and category. The
//! [`Registry`] keeps entries in registration order — which is *not* display
//! order: overlays display by effective stacking order, and the registry can
//! additionally be re-sorted by a caller-supplied comparator on each
//! registration. Entries are never removed by the core; a layer leaving the
//! host map only clears its membership flag.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::layer::{LayerId, LayerStore};

/// Which stacking group an entry belongs to.
///
/// Fixed at registration; the two groups render as separate list sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Mutually exclusive background layer (radio semantics).
    Base,
    /// Independently toggleable layer supporting reorder (checkbox
    /// semantics).
    Overlay,
}

/// One registered layer with its display metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The layer this entry represents.
    pub layer: LayerId,
    /// Display label.
    pub name: String,
    /// Stacking group; never changes after registration.
    pub category: Category,
}

/// Comparator applied to the registry when sorting is enabled.
///
/// Receives the store so comparators can consult layer state (for example
/// effective orders) in addition to entry metadata.
pub type SortFn = fn(&LayerStore, &Entry, &Entry) -> Ordering;

/// Default comparator: alphabetical by display name.
#[must_use]
pub fn by_name(_store: &LayerStore, a: &Entry, b: &Entry) -> Ordering {
    a.name.cmp(&b.name)
}

/// Ordered collection of registered entries.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all entries in registration (or sorted) order.
    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Looks up the entry for a layer.
    #[must_use]
    pub fn entry(&self, layer: LayerId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.layer == layer)
    }

    /// Returns the category a layer was registered under, if any.
    #[must_use]
    pub fn category_of(&self, layer: LayerId) -> Option<Category> {
        self.entry(layer).map(|e| e.category)
    }

    /// Iterates overlay entries in registration (or sorted) order.
    pub fn overlays(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|e| e.category == Category::Overlay)
    }

    /// Iterates base entries in registration (or sorted) order.
    pub fn bases(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.category == Category::Base)
    }

    /// Stable-sorts the registry with the given comparator.
    pub fn sort(&mut self, store: &LayerStore, sort_fn: SortFn) {
        self.entries.sort_by(|a, b| sort_fn(store, a, b));
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;

    fn entry(layer: LayerId, name: &str, category: Category) -> Entry {
        Entry {
            layer,
            name: name.to_string(),
            category,
        }
    }

    #[test]
    fn registration_order_is_kept() {
        let mut store = LayerStore::new();
        let a = store.create_layer();
        let b = store.create_layer();

        let mut registry = Registry::new();
        registry.add(entry(b, "second", Category::Overlay));
        registry.add(entry(a, "first", Category::Overlay));

        let names: Vec<_> = registry.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["second", "first"]);
    }

    #[test]
    fn category_lookup() {
        let mut store = LayerStore::new();
        let base = store.create_layer();
        let overlay = store.create_layer();
        let unregistered = store.create_layer();

        let mut registry = Registry::new();
        registry.add(entry(base, "osm", Category::Base));
        registry.add(entry(overlay, "roads", Category::Overlay));

        assert_eq!(registry.category_of(base), Some(Category::Base));
        assert_eq!(registry.category_of(overlay), Some(Category::Overlay));
        assert_eq!(registry.category_of(unregistered), None);
    }

    #[test]
    fn sort_by_name_is_stable() {
        let mut store = LayerStore::new();
        let a = store.create_layer();
        let b = store.create_layer();
        let c = store.create_layer();

        let mut registry = Registry::new();
        registry.add(entry(c, "citymap", Category::Overlay));
        registry.add(entry(a, "aerial", Category::Base));
        registry.add(entry(b, "borders", Category::Overlay));

        registry.sort(&store, by_name);

        let names: Vec<_> = registry.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["aerial", "borders", "citymap"]);
    }

    #[test]
    fn partition_iterators() {
        let mut store = LayerStore::new();
        let a = store.create_layer();
        let b = store.create_layer();
        let c = store.create_layer();

        let mut registry = Registry::new();
        registry.add(entry(a, "osm", Category::Base));
        registry.add(entry(b, "roads", Category::Overlay));
        registry.add(entry(c, "labels", Category::Overlay));

        assert_eq!(registry.bases().count(), 1);
        let overlays: Vec<_> = registry.overlays().map(|e| e.name.as_str()).collect();
        assert_eq!(overlays, ["roads", "labels"]);
    }
}
