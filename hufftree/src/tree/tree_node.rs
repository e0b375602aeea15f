/// position of a node in the node arena of the [`Tree`](crate::Tree)
pub type NodeId = usize;

/// An alphabet element with its weight (frequency)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub symbol: char,
    pub weight: u32,
}

impl Symbol {
    pub fn new(symbol: char, weight: u32) -> Self {
        Symbol { symbol, weight }
    }
}

impl From<(char, u32)> for Symbol {
    fn from((symbol, weight): (char, u32)) -> Self {
        Symbol::new(symbol, weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Leaf(char),
    /// internal nodes always have both children
    Internal { left: NodeId, right: NodeId },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    /// leaf: the symbol weight, internal: sum of both children
    pub(crate) weight: u64,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn leaf(symbol: Symbol) -> Self {
        Node {
            weight: symbol.weight as u64,
            kind: NodeKind::Leaf(symbol.symbol),
        }
    }

    pub(crate) fn internal(left: (NodeId, &Node), right: (NodeId, &Node)) -> Self {
        Node {
            weight: left.1.weight + right.1.weight,
            kind: NodeKind::Internal {
                left: left.0,
                right: right.0,
            },
        }
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn symbol(&self) -> Option<char> {
        match self.kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal { left, right } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            NodeKind::Leaf(symbol) => f.write_fmt(format_args!(
                "Node{{ symbol:{:?} weight:{} }}",
                symbol, self.weight
            )),
            NodeKind::Internal { left, right } => f.write_fmt(format_args!(
                "Node{{ weight:{} left:{} right:{} }}",
                self.weight, left, right
            )),
        }
    }
}
