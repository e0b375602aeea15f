use super::tree_node::{NodeId, NodeKind};
use crate::Tree;
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    transition: u8, // 0 or 1
}

/// renders the tree in graphviz dot format
pub fn render_plan_to<W: core::fmt::Write>(
    graph: &Tree,
    output: &mut W,
) -> std::result::Result<(), core::fmt::Error> {
    dot::render(graph, output)
}

impl<'a> dot::Labeller<'a> for Tree {
    type Node = NodeId;
    type Edge = Edge;
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &NodeId) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label<'b>(&'b self, n: &NodeId) -> dot::LabelText<'b> {
        let node = self.get_node(*n);
        let out = match node.kind {
            NodeKind::Leaf(symbol) => format!("Weight:{:?} Symbol:{:?}", node.weight, symbol),
            NodeKind::Internal { .. } => format!("Weight:{:?}", node.weight),
        };
        dot::LabelText::LabelStr(out.into())
    }

    /// Adds attr to `n` that will be used in the rendered output.
    /// Multiple attr can be returned in the String, e.g. `color="red", fontcolor="red"`
    fn node_attr(&'a self, n: &Self::Node) -> Option<String> {
        let out = if self.get_node(*n).is_leaf() {
            "color=dodgerblue4 fontcolor=dodgerblue4 ".to_string()
        } else {
            "color=azure4 fontcolor=azure4 ".to_string()
        };
        Some(out)
    }

    fn edge_label<'b>(&'b self, ed: &Edge) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a> dot::GraphWalk<'a> for Tree {
    type Node = NodeId;
    type Edge = Edge;
    fn nodes(&self) -> dot::Nodes<NodeId> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&self) -> dot::Edges<Edge> {
        let mut edges = vec![];
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some((left, right)) = node.children() {
                edges.push(Edge {
                    from: i,
                    to: left,
                    transition: 0,
                });
                edges.push(Edge {
                    from: i,
                    to: right,
                    transition: 1,
                });
            }
        }
        Cow::Owned(edges)
    }

    fn source(&self, e: &Edge) -> NodeId {
        e.from
    }

    fn target(&self, e: &Edge) -> NodeId {
        e.to
    }
}

#[cfg(test)]
mod tests {
    use crate::{build_tree, Symbol};

    #[test]
    fn renders_dot_graph() {
        let symbols = [Symbol::new('a', 1), Symbol::new('b', 2), Symbol::new('c', 4)];
        let tree = build_tree(&symbols).unwrap();
        let out = tree.to_string();
        assert!(out.starts_with("digraph huffman"));
        assert_eq!(out.matches("Symbol:").count(), 3);
        assert!(out.contains("Weight:7"));
        // two edges per merge
        assert_eq!(out.matches("->").count(), 4);
    }
}
