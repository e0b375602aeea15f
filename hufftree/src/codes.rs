use std::collections::BTreeMap;

/// The path from the root to a leaf, `false` for left (0) and `true` for right (1)
#[derive(Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codeword {
    bits: Vec<bool>,
}

impl Codeword {
    pub fn new() -> Self {
        Codeword::default()
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        Codeword {
            bits: bits.to_vec(),
        }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// only the codeword of a single symbol alphabet is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// true if `self` is a prefix of `other`, an equal codeword counts as prefix
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl core::fmt::Display for Codeword {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Codeword {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "Codeword{{ val:{} number_bits:{} }}",
            self, self.bits.len()
        ))
    }
}

/// Maps each symbol of the alphabet to its codeword
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Codeword>,
}

impl CodeTable {
    pub(crate) fn insert(&mut self, symbol: char, code: Codeword) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: char) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    /// iterates the codes ordered by symbol
    pub fn iter(&self) -> impl Iterator<Item = (char, &Codeword)> {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Codeword::len).max().unwrap_or(0)
    }

    /// Checks that no codeword is a prefix of another one (which also excludes duplicates).
    ///
    /// In lexicographic order a prefix sorts directly before its extensions, so comparing
    /// neighbours is enough.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Codeword> = self.codes.values().collect();
        codes.sort();
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(bits: &str) -> Codeword {
        let bits: Vec<bool> = bits.chars().map(|c| c == '1').collect();
        Codeword::from_bits(&bits)
    }

    #[test]
    fn display_bits() {
        assert_eq!(code("0110").to_string(), "0110");
        assert_eq!(Codeword::new().to_string(), "");
        assert_eq!(code("10").len(), 2);
    }

    #[test]
    fn prefix_of() {
        assert!(code("01").is_prefix_of(&code("011")));
        assert!(code("01").is_prefix_of(&code("01")));
        assert!(!code("011").is_prefix_of(&code("01")));
        assert!(!code("10").is_prefix_of(&code("01")));
        assert!(Codeword::new().is_prefix_of(&code("1")));
    }

    #[test]
    fn prefix_free_table() {
        let mut table = CodeTable::default();
        table.insert('a', code("0"));
        table.insert('b', code("10"));
        table.insert('c', code("11"));
        assert!(table.is_prefix_free());
        assert_eq!(table.max_code_len(), 2);

        table.insert('d', code("110"));
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn duplicate_codes_are_not_prefix_free() {
        let mut table = CodeTable::default();
        table.insert('a', code("01"));
        table.insert('b', code("01"));
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn non_adjacent_prefix() {
        // sorted order is "0", "01", "1": the prefix "0" is found on its direct neighbour "01"
        let mut table = CodeTable::default();
        table.insert('a', code("0"));
        table.insert('b', code("01"));
        table.insert('c', code("1"));
        assert!(!table.is_prefix_free());
    }
}
