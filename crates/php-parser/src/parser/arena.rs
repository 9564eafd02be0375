use crate::parser::NodeKind;

/// Sentinel for a node that spans no tokens yet.
const NO_TOKEN: u32 = u32::MAX;

/// Handle to a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) first_token: u32,
    pub(crate) last_token: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// Owns every node of one parse. Nodes are allocated during reductions and
/// freed wholesale when the arena is dropped; handles stay valid for the
/// arena's whole lifetime and nothing is ever copied or freed individually.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a node with an empty span. The first child appended (or the
    /// first explicit expansion) sets the span.
    pub(crate) fn new_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            first_token: NO_TOKEN,
            last_token: 0,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Allocate a leaf for a shifted terminal covering `first..=last` in the
    /// token stream.
    pub(crate) fn token_node(&mut self, first: u32, last: u32) -> NodeId {
        let id = self.new_node(NodeKind::Token);
        let node = self.node_mut(id);
        node.first_token = first;
        node.last_token = last;
        id
    }

    /// Change a node's kind in place.
    pub(crate) fn retype(&mut self, id: NodeId, kind: NodeKind) -> NodeId {
        self.node_mut(id).kind = kind;
        id
    }

    /// Extend `id`'s span to cover `other`'s span, in both directions.
    pub(crate) fn expand(&mut self, id: NodeId, other: NodeId) -> NodeId {
        let (first, last) = {
            let other = self.node(other);
            (other.first_token, other.last_token)
        };
        if first != NO_TOKEN {
            self.expand_range(id, first, last);
        }
        id
    }

    /// Extend `id`'s span to cover a single token index.
    pub(crate) fn expand_to(&mut self, id: NodeId, token: u32) -> NodeId {
        self.expand_range(id, token, token);
        id
    }

    fn expand_range(&mut self, id: NodeId, first: u32, last: u32) {
        let node = self.node_mut(id);
        if node.first_token == NO_TOKEN {
            node.first_token = first;
            node.last_token = last;
        } else {
            node.first_token = node.first_token.min(first);
            node.last_token = node.last_token.max(last);
        }
    }

    /// Retype `id` and extend its span to cover `to`.
    pub(crate) fn set_span(&mut self, id: NodeId, kind: NodeKind, to: NodeId) -> NodeId {
        self.retype(id, kind);
        self.expand(id, to)
    }

    /// Extend `id`'s span to cover both `left` and `right`, typically the
    /// opening and closing delimiters around it.
    pub(crate) fn enclose(&mut self, left: NodeId, id: NodeId, right: NodeId) -> NodeId {
        self.expand(id, left);
        self.expand(id, right)
    }

    /// Append `child` to `parent`, extending `parent`'s span over it.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        self.expand(parent, child);
        parent
    }

    /// Move all of `other`'s children onto `parent`, in order.
    pub(crate) fn append_children(&mut self, parent: NodeId, other: NodeId) -> NodeId {
        let children = std::mem::take(&mut self.node_mut(other).children);
        for child in children {
            self.append_child(parent, child);
        }
        parent
    }

    pub(crate) fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    pub(crate) fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.first().copied()
    }

    pub(crate) fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The token range covered by `id`, or `None` for an empty node.
    pub(crate) fn token_range(&self, id: NodeId) -> Option<(u32, u32)> {
        let node = self.node(id);
        if node.first_token == NO_TOKEN {
            None
        } else {
            Some((node.first_token, node.last_token))
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appending_children_grows_the_span() {
        let mut arena = NodeArena::new();
        let list = arena.new_node(NodeKind::StatementList);
        assert_eq!(arena.token_range(list), None);

        let a = arena.token_node(1, 1);
        let b = arena.token_node(4, 5);
        arena.append_child(list, a);
        assert_eq!(arena.token_range(list), Some((1, 1)));
        arena.append_child(list, b);
        assert_eq!(arena.token_range(list), Some((1, 5)));
        assert_eq!(arena.parent(a), Some(list));
        assert_eq!(arena.children(list), &[a, b]);
    }

    #[test]
    fn append_children_moves_and_reparents() {
        let mut arena = NodeArena::new();
        let from = arena.new_node(NodeKind::ConditionList);
        let to = arena.new_node(NodeKind::ConditionList);
        let child = arena.token_node(2, 2);
        arena.append_child(from, child);

        arena.append_children(to, from);
        assert!(arena.children(from).is_empty());
        assert_eq!(arena.children(to), &[child]);
        assert_eq!(arena.parent(child), Some(to));
        assert_eq!(arena.token_range(to), Some((2, 2)));
    }

    #[test]
    fn enclose_covers_delimiters() {
        let mut arena = NodeArena::new();
        let open = arena.token_node(0, 0);
        let close = arena.token_node(7, 7);
        let inner = arena.new_node(NodeKind::StatementList);
        let stmt = arena.token_node(3, 3);
        arena.append_child(inner, stmt);

        arena.enclose(open, inner, close);
        assert_eq!(arena.token_range(inner), Some((0, 7)));
    }

    #[test]
    fn expand_is_bidirectional() {
        let mut arena = NodeArena::new();
        let node = arena.new_node(NodeKind::SymbolName);
        arena.expand_to(node, 5);
        arena.expand_to(node, 2);
        arena.expand_to(node, 9);
        assert_eq!(arena.token_range(node), Some((2, 9)));
    }
}
