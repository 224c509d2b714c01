// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking order values and the order resolver.
//!
//! [`StackOrder`] is the totally ordered type that decides where a layer
//! stacks: an explicit integer, or [`Unordered`](StackOrder::Unordered) for
//! layers that expose no order value. `Unordered` sorts after every explicit
//! value, so unordered layers render at the top of the overlay list.
//!
//! The resolver ([`LayerStore::effective_order`]) is a pure read with no
//! caching: a single layer resolves to its explicit slot, a group resolves to
//! the minimum effective order among its sub-layers (ignoring unordered
//! ones), and anything else resolves to `Unordered`. It is re-evaluated on
//! every rebuild because host code may rewrite order values between reads.

use super::id::{INVALID, LayerId};
use super::store::{LayerKind, LayerStore};

/// The effective stacking order of a layer.
///
/// Orders compare by value; [`Unordered`](Self::Unordered) compares greater
/// than every [`Explicit`](Self::Explicit) value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StackOrder {
    /// An explicit order value; higher values stack nearer the top.
    Explicit(i64),
    /// No order value exposed; sorts after all explicit values.
    Unordered,
}

impl StackOrder {
    /// Wraps an optional explicit value.
    #[must_use]
    pub const fn from_value(value: Option<i64>) -> Self {
        match value {
            Some(v) => Self::Explicit(v),
            None => Self::Unordered,
        }
    }

    /// Returns the explicit value, if there is one.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Explicit(v) => Some(v),
            Self::Unordered => None,
        }
    }

    /// Returns whether this is the unordered sentinel.
    #[must_use]
    pub const fn is_unordered(self) -> bool {
        matches!(self, Self::Unordered)
    }
}

impl LayerStore {
    /// Resolves the effective stacking order of a layer.
    ///
    /// Single layers resolve to their explicit order slot. Groups resolve to
    /// the minimum effective order among their sub-layers; a group whose
    /// sub-layers expose no order (or that has none) resolves to
    /// [`StackOrder::Unordered`].
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn effective_order(&self, id: LayerId) -> StackOrder {
        self.validate(id);
        self.effective_order_at(id.idx)
    }

    pub(crate) fn effective_order_at(&self, idx: u32) -> StackOrder {
        match self.kind[idx as usize] {
            LayerKind::Single => StackOrder::from_value(self.order[idx as usize]),
            LayerKind::Group => {
                let mut min = StackOrder::Unordered;
                let mut child = self.first_child[idx as usize];
                while child != INVALID {
                    let eff = self.effective_order_at(child);
                    if eff < min {
                        min = eff;
                    }
                    child = self.next_sibling[child as usize];
                }
                min
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_sorts_after_explicit() {
        assert!(StackOrder::Explicit(i64::MAX) < StackOrder::Unordered);
        assert!(StackOrder::Explicit(1) < StackOrder::Explicit(2));
        assert!(StackOrder::Explicit(-3) < StackOrder::Explicit(0));
    }

    #[test]
    fn value_roundtrip() {
        assert_eq!(StackOrder::from_value(Some(7)).value(), Some(7));
        assert_eq!(StackOrder::from_value(None).value(), None);
        assert!(StackOrder::from_value(None).is_unordered());
    }

    #[test]
    fn single_layer_resolves_explicit_slot() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        assert_eq!(store.effective_order(id), StackOrder::Unordered);

        store.set_order(id, Some(4));
        assert_eq!(store.effective_order(id), StackOrder::Explicit(4));
    }

    #[test]
    fn group_resolves_minimum_member_order() {
        let mut store = LayerStore::new();
        let group = store.create_group();
        let a = store.create_layer();
        let b = store.create_layer();
        let c = store.create_layer();
        store.set_order(a, Some(5));
        store.set_order(b, Some(9));
        store.set_order(c, Some(3));
        store.add_sublayer(group, a);
        store.add_sublayer(group, b);
        store.add_sublayer(group, c);

        assert_eq!(store.effective_order(group), StackOrder::Explicit(3));
    }

    #[test]
    fn group_ignores_unordered_members() {
        let mut store = LayerStore::new();
        let group = store.create_group();
        let a = store.create_layer();
        let b = store.create_layer();
        store.set_order(b, Some(8));
        store.add_sublayer(group, a);
        store.add_sublayer(group, b);

        assert_eq!(store.effective_order(group), StackOrder::Explicit(8));
    }

    #[test]
    fn empty_group_is_unordered() {
        let mut store = LayerStore::new();
        let group = store.create_group();
        assert_eq!(store.effective_order(group), StackOrder::Unordered);
    }

    #[test]
    fn nested_group_contributes_derived_order() {
        let mut store = LayerStore::new();
        let outer = store.create_group();
        let inner = store.create_group();
        let a = store.create_layer();
        let b = store.create_layer();
        store.set_order(a, Some(12));
        store.set_order(b, Some(20));
        store.add_sublayer(inner, a);
        store.add_sublayer(outer, inner);
        store.add_sublayer(outer, b);

        assert_eq!(store.effective_order(outer), StackOrder::Explicit(12));
    }

    #[test]
    fn zero_is_a_real_order_value() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        store.set_order(id, Some(0));
        assert_eq!(store.effective_order(id), StackOrder::Explicit(0));
    }
}
