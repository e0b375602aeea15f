/*!
hufftree builds optimal prefix codes (huffman codes) for a small, fixed alphabet.

The symbols and their weights are loaded into leaves, the leaves go into a min-heap and the two
lightest nodes are merged until a single root is left. Walking from the root to each leaf yields the
codeword of its symbol, `0` for every left turn and `1` for every right turn.

```
use hufftree::{build_tree, Symbol};

let symbols = [Symbol::new('a', 45), Symbol::new('b', 35), Symbol::new('c', 20)];
let tree = build_tree(&symbols).unwrap();
let codes = tree.generate_codes();
assert_eq!(codes.get('a').unwrap().to_string(), "0");
assert_eq!(codes.get('c').unwrap().to_string(), "10");
assert_eq!(codes.get('b').unwrap().to_string(), "11");
```
*/

pub mod codes;
mod error;
pub mod tree;

pub use crate::codes::{CodeTable, Codeword};
pub use crate::error::TreeError;
pub use crate::tree::build_tree;
pub use crate::tree::tree_node::{Node, NodeId, NodeKind, Symbol};
pub use crate::tree::Tree;
