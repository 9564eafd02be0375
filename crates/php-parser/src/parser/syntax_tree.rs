use std::fmt;

use crate::lexer::Token;
use crate::parser::arena::NodeArena;
use crate::parser::arena::NodeId;
use crate::parser::NodeKind;

/// The result of a successful parse: the node arena, the complete token
/// stream (trivia and string pieces included), and the root node handle.
///
/// The tree borrows the source text; token and node accessors hand back
/// slices of it. Dropping the tree releases every node at once.
pub struct ParseTree<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    arena: NodeArena,
    root: NodeId,
}

impl<'a> ParseTree<'a> {
    pub(crate) fn new(
        source: &'a str,
        tokens: Vec<Token<'a>>,
        arena: NodeArena,
        root: NodeId,
    ) -> Self {
        Self {
            source,
            tokens,
            arena,
            root,
        }
    }

    /// The root node; its kind is always [`NodeKind::Program`].
    pub fn root(&self) -> NodeRef<'_, 'a> {
        self.node(self.root)
    }

    /// Look up any node by handle.
    pub fn node(&self, id: NodeId) -> NodeRef<'_, 'a> {
        NodeRef { tree: self, id }
    }

    /// Every token of the input, in source order.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// The source text this tree was parsed from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn dump(&self, f: &mut fmt::Formatter<'_>, indent: usize, id: NodeId) -> fmt::Result {
        let node = self.node(id);
        write!(f, "{:indent$}", "", indent = indent)?;
        let name = match node.kind() {
            // Terminal leaves print under their token's name.
            NodeKind::Token => self.tokens[node.first_token().unwrap()].kind().name(),
            kind => kind.name(),
        };
        match node.token_range() {
            Some((first, last)) => write!(f, "- {name}@{first}..{last}")?,
            None => write!(f, "- {name}")?,
        }
        if node.children().next().is_none() && node.token_range().is_some() {
            write!(f, " {:?}", node.text())?;
        }
        writeln!(f)?;
        for child in node.children() {
            self.dump(f, indent + 4, child.id)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ParseTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f, 0, self.root)
    }
}

/// A cheap handle pairing a [`ParseTree`] with one of its nodes.
#[derive(Clone, Copy)]
pub struct NodeRef<'t, 'a> {
    tree: &'t ParseTree<'a>,
    id: NodeId,
}

impl<'t, 'a> NodeRef<'t, 'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.tree.arena.kind(self.id)
    }

    /// Index of the first token this node covers, or `None` for a node
    /// spanning no source (an empty placeholder).
    pub fn first_token(&self) -> Option<usize> {
        self.token_range().map(|(first, _)| first)
    }

    /// Index of the last token this node covers, inclusive.
    pub fn last_token(&self) -> Option<usize> {
        self.token_range().map(|(_, last)| last)
    }

    /// Both ends of the covered token range.
    pub fn token_range(&self) -> Option<(usize, usize)> {
        self.tree
            .arena
            .token_range(self.id)
            .map(|(first, last)| (first as usize, last as usize))
    }

    /// The exact source slice this node spans, delimiters included.
    pub fn text(&self) -> &'a str {
        match self.token_range() {
            None => "",
            Some((first, last)) => {
                let start = self.tree.tokens[first].start_offset();
                let last = &self.tree.tokens[last];
                let end = last.start_offset() + last.data().len();
                &self.tree.source[start..end]
            }
        }
    }

    /// Child nodes in source order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t, 'a>> + 't {
        let tree = self.tree;
        tree.arena
            .children(self.id)
            .iter()
            .map(move |&id| tree.node(id))
    }

    pub fn parent(&self) -> Option<NodeRef<'t, 'a>> {
        self.tree.arena.parent(self.id).map(|id| self.tree.node(id))
    }
}

impl fmt::Debug for NodeRef<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.dump(f, 0, self.id)
    }
}
