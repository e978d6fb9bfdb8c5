//! Exact substring matching with the Boyer-Moore bad character rule.
//!
//! Matching runs over UTF-8 bytes. UTF-8 is self-synchronizing, so a byte
//! match is always a match of whole characters.

/// A compiled search pattern.
///
/// The last-occurrence table is built once in [`BoyerMoore::new`] and reused
/// for every text searched with it.
#[derive(Debug, Clone)]
pub struct BoyerMoore<'p> {
    pattern: &'p [u8],
    /// Rightmost index of each byte value within the pattern.
    last: [Option<usize>; 256],
}

impl<'p> BoyerMoore<'p> {
    pub fn new(pattern: &'p str) -> Self {
        let pattern = pattern.as_bytes();
        let mut last = [None; 256];
        for (k, &byte) in pattern.iter().enumerate() {
            last[byte as usize] = Some(k);
        }
        Self { pattern, last }
    }

    /// Returns the byte offset of the first occurrence of the pattern in
    /// `text`. An empty pattern matches at offset 0.
    pub fn find(&self, text: &str) -> Option<usize> {
        let text = text.as_bytes();
        let (n, m) = (text.len(), self.pattern.len());
        if m == 0 {
            return Some(0);
        }
        if m > n {
            return None;
        }

        // `i` indexes the text, `k` the pattern; both walk right to left.
        let mut i = m - 1;
        let mut k = m - 1;
        while i < n {
            if text[i] == self.pattern[k] {
                if k == 0 {
                    return Some(i);
                }
                i -= 1;
                k -= 1;
            } else {
                i += match self.last[text[i] as usize] {
                    Some(last) => m - k.min(last + 1),
                    None => m,
                };
                k = m - 1;
            }
        }
        None
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}
