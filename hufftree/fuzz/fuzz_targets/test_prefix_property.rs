#![no_main]

use hufftree::build_tree;
use hufftree::Symbol;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // one symbol per input byte, the byte is its weight
    let symbols: Vec<Symbol> = data
        .iter()
        .take(64)
        .zip('A'..)
        .map(|(weight, symbol)| Symbol::new(symbol, *weight as u32))
        .collect();
    let tree = build_tree(&symbols).unwrap();
    let codes = tree.generate_codes();
    assert_eq!(codes.len(), symbols.len());
    assert!(codes.is_prefix_free());
});
