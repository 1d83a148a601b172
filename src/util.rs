//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [ValueSet] used for
//! tracking which numbers have been seen in a row, column, or box.

/// A set of cell values in the range `[1, size]` that is implemented as a bit
/// vector. Each value is represented by one bit in a vector of numbers. This
/// generally has better performance than a `HashSet` for the small, dense
/// domains that occur in grid units.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueSet {
    size: usize,
    len: usize,
    content: Vec<u64>
}

const U64_BIT_SIZE: usize = 64;

impl ValueSet {

    /// Creates a new, empty `ValueSet` that can hold the values `1` to
    /// `size` (both inclusive).
    pub fn new(size: usize) -> ValueSet {
        let words = (size + U64_BIT_SIZE - 1) / U64_BIT_SIZE;

        ValueSet {
            size,
            len: 0,
            content: vec![0u64; words.max(1)]
        }
    }

    fn location(&self, value: usize) -> Option<(usize, u64)> {
        if value == 0 || value > self.size {
            return None;
        }

        let bit = value - 1;
        Some((bit / U64_BIT_SIZE, 1u64 << (bit % U64_BIT_SIZE)))
    }

    /// Indicates whether the given value is contained in this set. Values
    /// outside the range `[1, size]` are never contained.
    pub fn contains(&self, value: usize) -> bool {
        match self.location(value) {
            Some((word, mask)) => self.content[word] & mask != 0,
            None => false
        }
    }

    /// Inserts the given value into this set, so [ValueSet::contains] will
    /// return `true` for it afterwards. Returns `true` if the set changed,
    /// that is, the value was not contained before, and `false` otherwise.
    /// Values outside the range `[1, size]` are rejected with `false`.
    pub fn insert(&mut self, value: usize) -> bool {
        match self.location(value) {
            Some((word, mask)) => {
                if self.content[word] & mask == 0 {
                    self.content[word] |= mask;
                    self.len += 1;
                    true
                }
                else {
                    false
                }
            },
            None => false
        }
    }

    /// The number of values contained in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Indicates whether this set is empty, i.e. contains no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indicates whether this set contains every value of its range, i.e.
    /// all of `1` to `size`.
    pub fn is_full(&self) -> bool {
        self.len == self.size
    }

    /// Removes all values from this set, so [ValueSet::is_empty] will return
    /// `true` afterwards.
    pub fn clear(&mut self) {
        for word in self.content.iter_mut() {
            *word = 0;
        }

        self.len = 0;
    }
}
