//! Namespaces and the compilation environment.
//!
//! A [`Namespace`] is an independent command tree scoped to one declaring
//! context; the [`Environment`] is the per-compilation state every pass
//! reads and the build/bind passes populate: the namespace table, the
//! element table, and the element → bound-command association consumed by
//! later passes and the downstream generator.

use std::collections::HashMap;

use herald_foundation::{Element, ElementId, OrderedMap};

use crate::tree::{CommandId, CommandTree};

// =============================================================================
// Namespace
// =============================================================================

/// An independent root-level command tree scoped to one declaring context.
#[derive(Clone, Debug)]
pub struct Namespace {
    scope: String,
    tree: CommandTree,
}

impl Namespace {
    /// Creates an empty namespace for a scope.
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            tree: CommandTree::new(),
        }
    }

    /// The declaring scope this namespace belongs to.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The namespace's command tree.
    #[must_use]
    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    /// The namespace's command tree, mutably.
    pub fn tree_mut(&mut self) -> &mut CommandTree {
        &mut self.tree
    }
}

// =============================================================================
// BoundCommand
// =============================================================================

/// One command node an element was bound to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundCommand {
    /// The namespace the node lives in.
    pub scope: String,
    /// The node within that namespace's tree.
    pub node: CommandId,
}

// =============================================================================
// Environment
// =============================================================================

/// Per-compilation state: namespaces, known elements, and the bindings
/// recorded so far.
///
/// Constructed once per run, populated incrementally by the parser and
/// binder passes, read-only during validation, and handed to the
/// downstream generator afterwards.
#[derive(Debug, Default)]
pub struct Environment {
    namespaces: OrderedMap<String, Namespace>,
    elements: HashMap<ElementId, Element>,
    bound: OrderedMap<ElementId, Vec<BoundCommand>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a namespace by scope.
    #[must_use]
    pub fn namespace(&self, scope: &str) -> Option<&Namespace> {
        self.namespaces
            .iter()
            .find(|(k, _)| k.as_str() == scope)
            .map(|(_, ns)| ns)
    }

    /// Returns the namespace for a scope, creating it on first use.
    pub fn namespace_mut(&mut self, scope: &str) -> &mut Namespace {
        self.namespaces
            .get_or_insert_with(scope.to_string(), || Namespace::new(scope))
    }

    /// Iterates namespaces in creation order.
    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.values()
    }

    /// Registers a declaring element so later passes can inspect its shape.
    pub fn register_element(&mut self, element: Element) {
        self.elements.insert(element.id, element);
    }

    /// Looks up a registered element.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Records that an element was bound to a node.
    ///
    /// Recording the same association twice is a no-op; the list stays
    /// deduplicated.
    pub fn record_binding(&mut self, element: ElementId, scope: &str, node: CommandId) {
        let list = self.bound.get_or_insert_with(element, Vec::new);
        let entry = BoundCommand {
            scope: scope.to_string(),
            node,
        };
        if !list.contains(&entry) {
            list.push(entry);
        }
    }

    /// Returns every command node an element was bound to, in bind order.
    ///
    /// Empty if the element was never successfully bound.
    #[must_use]
    pub fn bound_commands(&self, element: ElementId) -> &[BoundCommand] {
        self.bound.get(&element).map_or(&[], Vec::as_slice)
    }
}
