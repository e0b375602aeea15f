/*!
huffcode assigns huffman codes to a ten letter alphabet with percentage frequencies.

The letters and frequencies are collected into an [`Alphabet`], either the default `A`..`J` set or
letters and frequencies entered by the user. The [`hufftree`] crate builds the tree and derives
the codes.

```
use huffcode::{huffman_codes, Alphabet};

let (tree, codes) = huffman_codes(&Alphabet::default()).unwrap();
assert_eq!(tree.root_weight(), 100);
assert_eq!(codes.get('I').unwrap().to_string(), "00");
```
*/

pub mod alphabet;
mod error;

pub use crate::alphabet::{
    parse_frequencies, parse_letters, Alphabet, ALPHABET_SIZE, DEFAULT_FREQUENCIES,
    DEFAULT_LETTERS, FREQUENCY_TOTAL,
};
pub use crate::error::AlphabetError;
pub use hufftree::{build_tree, CodeTable, Codeword, Symbol, Tree, TreeError};

/// Builds the huffman tree for `alphabet` and derives the code of every letter.
pub fn huffman_codes(alphabet: &Alphabet) -> Result<(Tree, CodeTable), AlphabetError> {
    let tree = build_tree(alphabet.symbols())?;
    let codes = tree.generate_codes();
    Ok((tree, codes))
}
