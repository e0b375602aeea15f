use std::collections::BTreeMap;

use log::{debug, trace};
use minheap::{HeapError, MinHeap, Weighted};

use crate::error::TreeError;
use crate::tree::tree_node::{Node, NodeId, Symbol};
use crate::tree::Tree;

/// What the heap orders: a position in the node arena plus its weight as key.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    node_pos: NodeId,
    weight: u64,
}

impl Weighted for HeapEntry {
    #[inline]
    fn weight(&self) -> u64 {
        self.weight
    }
}

/// Builds a huffman tree by repeatedly merging the two lightest nodes.
///
/// The first extracted node becomes the left child (bit 0), the second one the right child (bit 1).
/// Nodes of equal weight are merged in the order they entered the heap, leaves in input order and
/// internal nodes after all equally weighted nodes already waiting.
///
/// A single symbol results in a tree consisting of one leaf. An empty or duplicate symbol is
/// rejected as [`TreeError::InvalidInput`].
pub fn build_tree(symbols: &[Symbol]) -> Result<Tree, TreeError> {
    debug!("build tree for {} symbols", symbols.len());
    let mut nodes: Vec<Node> = Vec::with_capacity((2 * symbols.len()).saturating_sub(1));
    let mut leaves = BTreeMap::new();

    // peak occupancy is reached after inserting the leaves, each merge reduces the size by one
    let mut heap = MinHeap::with_capacity(symbols.len());
    for symbol in symbols {
        let node_pos = nodes.len();
        if leaves.insert(symbol.symbol, node_pos).is_some() {
            return Err(TreeError::InvalidInput(format!("duplicate symbol {:?}", symbol.symbol)));
        }
        let node = Node::leaf(*symbol);
        nodes.push(node);
        heap.insert(HeapEntry {
            node_pos,
            weight: node.weight,
        })?;
    }

    while heap.len() > 1 {
        let left = heap.extract_min()?;
        let right = heap.extract_min()?;
        trace!(
            "merge {:?} and {:?}",
            nodes[left.node_pos],
            nodes[right.node_pos]
        );

        let parent = Node::internal(
            (left.node_pos, &nodes[left.node_pos]),
            (right.node_pos, &nodes[right.node_pos]),
        );
        let node_pos = nodes.len();
        nodes.push(parent);
        heap.insert(HeapEntry {
            node_pos,
            weight: parent.weight,
        })?;
    }

    let root = heap.extract_min().map_err(|err| match err {
        HeapError::EmptyQueueAccess => TreeError::InvalidInput("empty symbol list".to_string()),
        other => other.into(),
    })?;
    debug_assert!(heap.is_empty());
    debug_assert_eq!(root.node_pos, nodes.len() - 1);
    debug!(
        "tree built, {} merges, root weight {}",
        nodes.len() - symbols.len(),
        root.weight
    );

    Ok(Tree {
        nodes,
        root_node: root.node_pos,
        leaves,
    })
}
