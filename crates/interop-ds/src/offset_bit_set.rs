//! Dense `i32` set stored as bits above a movable floor.

/// Set of `i32` values at or above [`OffsetBitSet::offset`], one bit per value.
///
/// Values below the offset cannot be stored; [`OffsetBitSet::add`] rejects them.
/// Iteration is always ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetBitSet {
    offset: i32,
    // No trailing zero words, so derived equality compares contents.
    words: Vec<u64>,
}

impl OffsetBitSet {
    /// Creates an empty set with offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set whose smallest storable value is `offset`.
    pub fn with_offset(offset: i32) -> Self {
        Self {
            offset,
            words: Vec::new(),
        }
    }

    /// Smallest storable value.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    fn slot(&self, value: i32) -> Option<(usize, u64)> {
        let index = usize::try_from(i64::from(value) - i64::from(self.offset)).ok()?;
        Some((index / 64, 1u64 << (index % 64)))
    }

    /// Adds `value`; returns whether it was newly added.
    ///
    /// Returns `false` without storing anything when `value` is below the offset.
    pub fn add(&mut self, value: i32) -> bool {
        let Some((word, mask)) = self.slot(value) else {
            return false;
        };
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let absent = self.words[word] & mask == 0;
        self.words[word] |= mask;
        absent
    }

    /// Removes `value`; returns whether it was present.
    pub fn remove(&mut self, value: i32) -> bool {
        if !self.contains(value) {
            return false;
        }
        if let Some((word, mask)) = self.slot(value) {
            self.words[word] &= !mask;
        }
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
        true
    }

    /// Whether `value` is present.
    pub fn contains(&self, value: i32) -> bool {
        self.slot(value)
            .and_then(|(word, mask)| self.words.get(word).map(|bits| bits & mask != 0))
            .unwrap_or(false)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.words.iter().map(|bits| bits.count_ones() as usize).sum()
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let offset = i64::from(self.offset);
        self.words.iter().enumerate().flat_map(move |(word, &bits)| {
            (0..64usize)
                .filter(move |bit| (bits >> bit) & 1 == 1)
                .map(move |bit| (offset + (word * 64 + bit) as i64) as i32)
        })
    }
}

/// Collects with the smallest value as the offset.
impl FromIterator<i32> for OffsetBitSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let values: Vec<i32> = iter.into_iter().collect();
        let mut set = Self::with_offset(values.iter().copied().min().unwrap_or(0));
        for value in values {
            set.add(value);
        }
        set
    }
}
