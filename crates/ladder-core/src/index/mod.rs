//! Prefix-tree dictionary index.
//!
//! Words are stored one character per edge in an arena of nodes. Children and
//! parents are referenced by [`NodeId`] rather than by pointer, so the tree can
//! carry back-references without ownership cycles. The root always lives at
//! [`PrefixIndex::ROOT`].
//!
//! The index only grows: there is no removal, and once built it is shared
//! read-only across search workers.

mod render;

/// Position of a node inside a [`PrefixIndex`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One character position reachable from the root.
#[derive(Debug, Clone)]
pub struct Node {
    character: char,
    /// Kept sorted by character so traversal order is deterministic.
    children: Vec<(char, NodeId)>,
    terminal: bool,
    parent: Option<NodeId>,
}

impl Node {
    fn new(character: char, parent: Option<NodeId>) -> Self {
        Self {
            character,
            children: Vec::new(),
            terminal: false,
            parent,
        }
    }

    /// Edge label leading into this node. The root carries `'\0'`.
    pub fn character(&self) -> char {
        self.character
    }

    /// True when the path from the root to this node spells a whole word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[(char, NodeId)] {
        &self.children
    }

    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children
            .binary_search_by(|(c, _)| c.cmp(&ch))
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

/// Character-keyed dictionary tree.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new('\0', None)],
            words: 0,
        }
    }

    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut index = Self::new();
        index.insert(words);
        index
    }

    /// Insert every non-empty word, creating missing nodes along its path.
    ///
    /// Re-inserting a known word only leaves its final node terminal, and the
    /// empty string is ignored.
    pub fn insert<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in words {
            self.insert_one(word.as_ref());
        }
    }

    fn insert_one(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = Self::ROOT;
        for ch in word.chars() {
            current = match self.nodes[current.0].child(ch) {
                Some(next) => next,
                None => self.push_child(current, ch),
            };
        }

        let last = &mut self.nodes[current.0];
        if !last.terminal {
            last.terminal = true;
            self.words += 1;
        }
    }

    fn push_child(&mut self, parent: NodeId, ch: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(ch, Some(parent)));

        let children = &mut self.nodes[parent.0].children;
        let pos = children
            .binary_search_by(|(c, _)| c.cmp(&ch))
            .unwrap_or_else(|pos| pos);
        children.insert(pos, (ch, id));
        id
    }

    /// Membership test. The empty string is never a member.
    pub fn exists(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.walk(word)
            .is_some_and(|id| self.nodes[id.0].terminal)
    }

    /// Follow `word` from the root, returning the node reached by its last
    /// character if the whole path is present (terminal or not).
    fn walk(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(Self::ROOT, |id, ch| self.nodes[id.0].child(ch))
    }

    /// One node per character position of `word`.
    ///
    /// Returns an empty sequence unless `exists(word)` holds.
    pub fn nodes_along(&self, word: &str) -> Vec<NodeId> {
        if !self.exists(word) {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(word.len());
        let mut current = Self::ROOT;
        for ch in word.chars() {
            let Some(next) = self.nodes[current.0].child(ch) else {
                return Vec::new();
            };
            out.push(next);
            current = next;
        }
        out
    }

    /// Climb parent links from `id` until reaching the node with no parent.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            current = parent;
        }
        current
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}
