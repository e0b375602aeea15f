use std::collections::BTreeMap;

use super::tree_node::{Node, NodeId, NodeKind};
use crate::codes::{CodeTable, Codeword};
use crate::tree::render_tree::render_plan_to;

#[derive(Debug, Clone)]
pub struct Tree {
    /// Node arena. The leaves are at the beginning in input order, followed by the
    /// internal nodes in the order they were merged.
    pub(crate) nodes: Vec<Node>,
    /// the root node is the last node in `nodes`. For a single symbol alphabet it is a leaf.
    pub(crate) root_node: NodeId,
    /// symbol to leaf position, filled while the leaves are created
    pub(crate) leaves: BTreeMap<char, NodeId>,
}

impl Tree {
    pub fn get_node(&self, node_pos: NodeId) -> &Node {
        &self.nodes[node_pos]
    }
    pub fn get_root_node(&self) -> &Node {
        &self.nodes[self.root_node]
    }
    pub fn root_node(&self) -> NodeId {
        self.root_node
    }
    /// sum of all symbol weights
    pub fn root_weight(&self) -> u64 {
        self.get_root_node().weight
    }
    pub fn num_symbols(&self) -> usize {
        self.leaves.len()
    }
    pub fn num_merges(&self) -> usize {
        self.nodes.len() - self.num_symbols()
    }
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
    pub fn leaf_of(&self, symbol: char) -> Option<NodeId> {
        self.leaves.get(&symbol).copied()
    }

    /// returns all nodes in the tree containing a symbol, excluding internal nodes
    pub fn get_symbol_nodes(&self) -> &[Node] {
        &self.nodes[..self.num_symbols()]
    }

    /// the (left, right) children of every merge, in merge order
    pub fn merge_order(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes[self.num_symbols()..]
            .iter()
            .filter_map(|node| node.children())
    }

    /// length of the longest codeword
    pub fn get_depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(&mut |_node, path| {
            max_depth = max_depth.max(path.len());
        });
        max_depth
    }

    /// Σ weight × code length over all symbols, the cost a huffman tree minimizes.
    ///
    /// Equals the sum of the weights of all internal nodes.
    pub fn weighted_path_length(&self) -> u64 {
        let mut total = 0;
        self.walk_tree_from_root(&mut |node, path| {
            if node.is_leaf() {
                total += node.weight * path.len() as u64;
            }
        });
        total
    }

    /// average number of bits per symbol occurence, 0.0 if all weights are zero
    pub fn average_code_length(&self) -> f64 {
        let total_weight = self.root_weight();
        if total_weight == 0 {
            return 0.0;
        }
        self.weighted_path_length() as f64 / total_weight as f64
    }

    /// Assigns each symbol the path to its leaf, '0' for left and '1' for right.
    ///
    /// A single symbol tree has no edges, its symbol gets the empty codeword.
    pub fn generate_codes(&self) -> CodeTable {
        // leaves occupy the first positions, so the leaf position indexes this vec directly
        let mut leaf_codes: Vec<Option<Codeword>> = vec![None; self.num_symbols()];
        self.walk_tree_ids(self.root_node, &mut vec![], &mut |node_pos, node, path| {
            if node.is_leaf() {
                leaf_codes[node_pos] = Some(Codeword::from_bits(path));
            }
        });

        let mut table = CodeTable::default();
        for (symbol, leaf_pos) in &self.leaves {
            if let Some(code) = leaf_codes[*leaf_pos].take() {
                table.insert(*symbol, code);
            }
        }
        debug_assert_eq!(table.len(), self.num_symbols());
        table
    }

    /// Calls `fun` for every node below the root with the path leading to it.
    pub fn walk_tree<F>(&self, fun: &mut F)
    where
        F: FnMut(&Node, &[bool]),
    {
        let root = self.root_node;
        self.walk_tree_ids(root, &mut vec![], &mut |node_pos, node, path| {
            if node_pos != root {
                fun(node, path)
            }
        });
    }

    fn walk_tree_from_root<F>(&self, fun: &mut F)
    where
        F: FnMut(&Node, &[bool]),
    {
        self.walk_tree_ids(self.root_node, &mut vec![], &mut |_node_pos, node, path| {
            fun(node, path)
        });
    }

    fn walk_tree_ids<F>(&self, start_node_pos: NodeId, path: &mut Vec<bool>, fun: &mut F)
    where
        F: FnMut(NodeId, &Node, &[bool]),
    {
        let node = &self.nodes[start_node_pos];
        fun(start_node_pos, node, path);
        if let NodeKind::Internal { left, right } = node.kind {
            path.push(false);
            self.walk_tree_ids(left, path, fun);
            path.pop();
            path.push(true);
            self.walk_tree_ids(right, path, fun);
            path.pop();
        }
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(self, f)
    }
}
