//! String Interning Pool
//!
//! Backing storage for everything the DOM copies out of the tokenizer:
//! element names, attribute names and values, and accumulated text content.
//! Repeated strings (tag and attribute names, typically) are stored once.

use std::collections::HashMap;

/// Interned string identifier; 0 is the empty string
pub type StringId = u32;

/// Deduplicating byte-string storage
#[derive(Debug, Default)]
pub struct StringPool {
    /// All strings stored contiguously
    data: Vec<u8>,
    /// Map from content to its id
    index: HashMap<Vec<u8>, StringId>,
    /// Byte range of each entry in `data`
    entries: Vec<(u32, u32)>,
}

impl StringPool {
    pub fn new() -> Self {
        let mut pool = StringPool {
            data: Vec::with_capacity(4096),
            index: HashMap::new(),
            entries: Vec::with_capacity(64),
        };
        // Entry 0 is the empty string
        pool.entries.push((0, 0));
        pool
    }

    /// Store a string, returning its id; repeated content returns the
    /// existing id
    pub fn intern(&mut self, s: &[u8]) -> StringId {
        if s.is_empty() {
            return 0;
        }
        if let Some(&id) = self.index.get(s) {
            return id;
        }

        let start = self.data.len() as u32;
        self.data.extend_from_slice(s);
        let end = self.data.len() as u32;

        let id = self.entries.len() as StringId;
        self.entries.push((start, end));
        self.index.insert(s.to_vec(), id);
        id
    }

    /// Look up an id
    pub fn get(&self, id: StringId) -> &[u8] {
        match self.entries.get(id as usize) {
            Some(&(start, end)) => &self.data[start as usize..end as usize],
            None => b"",
        }
    }

    /// Look up an id as UTF-8, empty when the bytes do not decode
    pub fn get_str(&self, id: StringId) -> &str {
        std::str::from_utf8(self.get(id)).unwrap_or("")
    }

    /// Number of entries, the reserved empty string included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }
}
