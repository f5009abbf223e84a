//! Depth-first pre-order traversal.
//!
//! [`PreOrder`] keeps its own work stack instead of recursing, so the depth
//! of the input tree never reaches the call stack. Subtrees deeper than the
//! configured maximum are skipped and counted.
//!
//! # Example
//!
//! ```rust
//! use dslscope_model::{DocumentRoot, PreOrder};
//! use serde_json::json;
//!
//! let value = json!({ "nodes": [
//!     { "id": "a", "children": [{ "id": "a1" }, { "id": "a2" }] },
//!     { "id": "b" }
//! ]});
//! let root = DocumentRoot::normalize(&value);
//!
//! let visits: Vec<_> = PreOrder::new(root.nodes())
//!     .map(|v| (v.node.id(), v.depth, v.parent))
//!     .collect();
//! assert_eq!(
//!     visits,
//!     vec![("a", 0, None), ("a1", 1, Some(0)), ("a2", 1, Some(0)), ("b", 0, None)]
//! );
//! ```

use crate::DesignNode;

/// Default maximum depth visited by [`PreOrder`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A node reached by the traversal.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub node: DesignNode<'a>,
    /// Depth below the top level (top-level nodes are 0).
    pub depth: usize,
    /// Position of this visit in traversal order.
    pub index: usize,
    /// `index` of the parent visit.
    pub parent: Option<usize>,
}

/// Pre-order iterator over one or more top-level nodes.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<(DesignNode<'a>, usize, Option<usize>)>,
    next_index: usize,
    max_depth: usize,
    skipped: usize,
}

impl<'a> PreOrder<'a> {
    /// Creates a traversal with [`DEFAULT_MAX_DEPTH`].
    pub fn new(roots: &[DesignNode<'a>]) -> Self {
        Self::with_max_depth(roots, DEFAULT_MAX_DEPTH)
    }

    /// Creates a traversal that visits nodes up to `max_depth` inclusive.
    pub fn with_max_depth(roots: &[DesignNode<'a>], max_depth: usize) -> Self {
        Self {
            stack: roots.iter().rev().map(|node| (*node, 0, None)).collect(),
            next_index: 0,
            max_depth,
            skipped: 0,
        }
    }

    /// Number of subtrees left out because they start below `max_depth`.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth, parent) = self.stack.pop()?;
        let index = self.next_index;
        self.next_index += 1;

        if depth < self.max_depth {
            self.stack.extend(
                node.children()
                    .rev()
                    .map(|child| (child, depth + 1, Some(index))),
            );
        } else {
            self.skipped += node.children().count();
        }

        Some(Visit {
            node,
            depth,
            index,
            parent,
        })
    }
}

/// Builds a nested tree of `T` from a traversal.
///
/// Each visit is mapped once with `map`, in pre-order, and attached to its
/// parent through `children`. Child order follows input order. The tree is
/// assembled from the flat visit list, without recursion.
pub fn build_tree<'a, T>(
    walk: &mut PreOrder<'a>,
    mut map: impl FnMut(&Visit<'a>) -> T,
    children: impl Fn(&mut T) -> &mut Vec<T>,
) -> Vec<T> {
    let mut slots: Vec<Option<(Option<usize>, T)>> =
        walk.map(|visit| Some((visit.parent, map(&visit)))).collect();

    // Children always come after their parent, so walking backwards sees every
    // child before its parent is moved out of its slot.
    let mut roots = Vec::new();
    for index in (0..slots.len()).rev() {
        let Some((parent, mut item)) = slots[index].take() else {
            continue;
        };
        children(&mut item).reverse();
        match parent.and_then(|p| slots.get_mut(p)).and_then(Option::as_mut) {
            Some((_, parent_item)) => children(parent_item).push(item),
            None => roots.push(item),
        }
    }
    roots.reverse();
    roots
}
