//! Element index cache.
//!
//! The index itself is built by an element scanner outside this crate;
//! the handle only owns it and releases it on close.

use bitflags::bitflags;

bitflags! {
    /// Per-element state recorded in the index.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ElementInfoFlags: u8 {
        /// Element is marked deleted
        const DELETED = 0x01;
        /// Element is part of a complex chain/shape/cell
        const COMPLEX = 0x02;
    }
}

/// Summary of one element in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    pub level: u8,
    pub element_type: u8,
    /// Structure kind assigned by the element decoder
    pub stype: u8,
    pub flags: ElementInfoFlags,
    /// Byte offset of the element header from the start of the file
    pub offset: u64,
}

/// Elements in file order; position in the index is the element id.
#[derive(Debug, Clone, Default)]
pub struct ElementIndex {
    entries: Vec<ElementInfo>,
}

impl ElementIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append the next element
    pub fn push(&mut self, info: ElementInfo) {
        self.entries.push(info);
    }

    /// Number of indexed elements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for an element id
    pub fn get(&self, element_id: usize) -> Option<&ElementInfo> {
        self.entries.get(element_id)
    }

    /// Id of the element starting at `offset`
    pub fn find_by_offset(&self, offset: u64) -> Option<usize> {
        self.entries
            .binary_search_by_key(&offset, |info| info.offset)
            .ok()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> std::slice::Iter<'_, ElementInfo> {
        self.entries.iter()
    }
}

impl FromIterator<ElementInfo> for ElementIndex {
    fn from_iter<I: IntoIterator<Item = ElementInfo>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ElementIndex {
    type Item = &'a ElementInfo;
    type IntoIter = std::slice::Iter<'a, ElementInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(offset: u64) -> ElementInfo {
        ElementInfo {
            level: 8,
            element_type: 9,
            stype: 0,
            flags: ElementInfoFlags::empty(),
            offset,
        }
    }

    #[test]
    fn test_lookup_by_offset() {
        let index: ElementIndex = [info(0), info(1536), info(1600)].into_iter().collect();
        assert_eq!(index.len(), 3);
        assert_eq!(index.find_by_offset(1536), Some(1));
        assert_eq!(index.find_by_offset(10), None);
        assert_eq!(index.get(2).map(|i| i.offset), Some(1600));
    }

    #[test]
    fn test_empty_index() {
        let index = ElementIndex::new();
        assert!(index.is_empty());
        assert!(index.get(0).is_none());
    }
}
