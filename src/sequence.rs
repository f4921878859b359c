use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::check_element_count;
use crate::error::SortError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Counters {
    pub fn reset(&mut self) {
        *self = Counters::default();
    }
}

/// The values being sorted plus the counters of the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub(crate) elems: Vec<u32>,
    pub(crate) counters: Counters,
}

impl Sequence {
    /// Rejects lengths outside the supported range and repeated values.
    pub fn new(values: Vec<u32>) -> Result<Sequence, SortError> {
        check_element_count(values.len())?;
        let mut seen = values.clone();
        seen.sort_unstable();
        if let Some(w) = seen.windows(2).find(|w| w[0] == w[1]) {
            return Err(SortError::DuplicateValue(w[0]));
        }
        Ok(Sequence {
            elems: values,
            counters: Counters::default(),
        })
    }

    /// `1..=n` in ascending order.
    pub fn ascending(n: usize) -> Result<Sequence, SortError> {
        check_element_count(n)?;
        Ok(Sequence {
            elems: (1..=n as u32).collect(),
            counters: Counters::default(),
        })
    }

    /// `1..=n` shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Sequence, SortError> {
        let mut seq = Self::ascending(n)?;
        seq.elems.shuffle(rng);
        Ok(seq)
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.elems
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn into_values(self) -> Vec<u32> {
        self.elems
    }

    pub fn is_sorted(&self) -> bool {
        is_sorted(&self.elems)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.elems)
    }
}

/// Linear scan, stops at the first pair out of order.
pub fn is_sorted(elems: &[u32]) -> bool {
    let Some(&first) = elems.first() else {
        return true;
    };
    let mut last = first;
    for &elem in &elems[1..] {
        if elem < last {
            return false;
        }
        last = elem;
    }
    true
}
