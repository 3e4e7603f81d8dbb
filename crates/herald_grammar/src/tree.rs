//! The command tree.
//!
//! Nodes live in a per-namespace arena and refer to each other by
//! [`CommandId`]; parents own their children map while children hold a
//! plain back-index, so there are no ownership cycles. Children and root
//! maps are insertion-ordered, so traversal, overlap matching, and
//! diagnostic order are all deterministic.

use std::fmt;

use herald_foundation::{ElementId, Identity, OrderedMap, OrderedSet, Site};

use crate::binding::Binding;
use crate::token::Token;

// =============================================================================
// CommandId
// =============================================================================

/// Arena index of a command node, minted only by its [`CommandTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CommandId(u32);

impl CommandId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandId({})", self.0)
    }
}

// =============================================================================
// Command
// =============================================================================

/// One position in the grammar tree.
#[derive(Clone, Debug)]
pub struct Command {
    identity: Identity,
    parent: Option<CommandId>,
    children: OrderedMap<Identity, CommandId>,
    aliases: OrderedSet<String>,
    bindings: OrderedMap<ElementId, Binding>,
    site: Site,
}

impl Command {
    fn new(identity: Identity, parent: Option<CommandId>, site: Site) -> Self {
        Self {
            identity,
            parent,
            children: OrderedMap::new(),
            aliases: OrderedSet::new(),
            bindings: OrderedMap::new(),
            site,
        }
    }

    /// The node's identity.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The owning node, absent for roots.
    #[must_use]
    pub fn parent(&self) -> Option<CommandId> {
        self.parent
    }

    /// The children map, in insertion order.
    #[must_use]
    pub fn children(&self) -> &OrderedMap<Identity, CommandId> {
        &self.children
    }

    /// Alternate names resolving to this node at its tree level.
    #[must_use]
    pub fn aliases(&self) -> &OrderedSet<String> {
        &self.aliases
    }

    /// The bindings attached to this node, at most one per declaring element.
    #[must_use]
    pub fn bindings(&self) -> &OrderedMap<ElementId, Binding> {
        &self.bindings
    }

    /// Provenance of the first declaration that created this node.
    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Attaches a binding, replacing any earlier binding by the same
    /// declaring element.
    pub fn bind(&mut self, binding: Binding) {
        self.bindings.insert(binding.element(), binding);
    }
}

// =============================================================================
// CommandTree
// =============================================================================

/// Arena of command nodes plus the insertion-ordered root map of one
/// namespace.
#[derive(Clone, Debug, Default)]
pub struct CommandTree {
    nodes: Vec<Command>,
    roots: OrderedMap<Identity, CommandId>,
}

impl CommandTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node for an id.
    ///
    /// # Panics
    /// Panics if `id` was not minted by this tree.
    #[must_use]
    pub fn node(&self, id: CommandId) -> &Command {
        &self.nodes[id.0 as usize]
    }

    /// Returns the node for an id, mutably.
    ///
    /// # Panics
    /// Panics if `id` was not minted by this tree.
    pub fn node_mut(&mut self, id: CommandId) -> &mut Command {
        &mut self.nodes[id.0 as usize]
    }

    /// Looks up a root node by identity.
    #[must_use]
    pub fn root(&self, identity: &Identity) -> Option<CommandId> {
        self.roots.get(identity).copied()
    }

    /// Iterates root ids in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = CommandId> + '_ {
        self.roots.values().copied()
    }

    /// Looks up a child of `parent` by identity.
    #[must_use]
    pub fn child(&self, parent: CommandId, identity: &Identity) -> Option<CommandId> {
        self.node(parent).children.get(identity).copied()
    }

    /// Looks up or creates the root node for a token, merging its aliases.
    pub fn intern_root(&mut self, token: &Token, site: &Site) -> CommandId {
        if let Some(id) = self.root(&token.identity) {
            self.merge_aliases(id, token);
            return id;
        }
        let id = self.push_node(token.identity.clone(), None, site.clone());
        self.roots.insert(token.identity.clone(), id);
        self.merge_aliases(id, token);
        id
    }

    /// Looks up or creates a child of `parent` for a token, merging its
    /// aliases.
    ///
    /// # Panics
    /// Panics if `parent` was not minted by this tree.
    pub fn intern_child(&mut self, parent: CommandId, token: &Token, site: &Site) -> CommandId {
        if let Some(id) = self.child(parent, &token.identity) {
            self.merge_aliases(id, token);
            return id;
        }
        let id = self.push_node(token.identity.clone(), Some(parent), site.clone());
        self.node_mut(parent)
            .children
            .insert(token.identity.clone(), id);
        self.merge_aliases(id, token);
        id
    }

    fn push_node(&mut self, identity: Identity, parent: Option<CommandId>, site: Site) -> CommandId {
        let index = u32::try_from(self.nodes.len()).expect("too many command nodes");
        self.nodes.push(Command::new(identity, parent, site));
        CommandId(index)
    }

    fn merge_aliases(&mut self, id: CommandId, token: &Token) {
        for alias in &token.aliases {
            self.node_mut(id).aliases.insert(alias.clone());
        }
    }

    /// Returns every node id in depth-first preorder, roots and children
    /// visited in stored insertion order.
    #[must_use]
    pub fn preorder(&self) -> Vec<CommandId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<CommandId> = self.roots().collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            order.push(id);
            let children: Vec<CommandId> = self.node(id).children.values().copied().collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
        order
    }

    /// Iterates a node and then its ancestors up to the root.
    ///
    /// # Panics
    /// Panics if `id` was not minted by this tree.
    pub fn lineage(&self, id: CommandId) -> impl Iterator<Item = CommandId> + '_ {
        let mut current = Some(id);
        std::iter::from_fn(move || {
            let id = current?;
            current = self.node(id).parent();
            Some(id)
        })
    }

    /// Returns the full textual path of a node, root first, in canonical
    /// pattern form (e.g. `warp <target> now`).
    ///
    /// # Panics
    /// Panics if `id` was not minted by this tree.
    #[must_use]
    pub fn path(&self, id: CommandId) -> String {
        let mut identities: Vec<String> = self
            .lineage(id)
            .map(|n| self.node(n).identity().to_string())
            .collect();
        identities.reverse();
        identities.join(" ")
    }
}
