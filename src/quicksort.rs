use log::debug;

use crate::engine::Engine;
use crate::error::{Cancelled, Step};

impl Engine<'_> {
    /// Sorts the closed range `[start, end]`.
    ///
    /// Left sides are processed before right sides, exactly as the recursive
    /// formulation would, but pending ranges are kept on an explicit stack so
    /// already-sorted input of 65536 elements does not recurse 65536 deep.
    pub fn quicksort(&mut self, start: usize, end: usize) -> Step {
        let mut pending = vec![(start, end)];
        while let Some((start, end)) = pending.pop() {
            if start >= end {
                continue;
            }
            let pivot = self.partition(start, end)?;
            pending.push((pivot + 1, end));
            if pivot > start {
                pending.push((start, pivot - 1));
            }
        }
        Ok(())
    }

    /// Lomuto partition of `[start, end]` around `elems[end]`, after ordering
    /// the first, middle and last element. Returns the pivot's final index.
    pub fn partition(&mut self, start: usize, end: usize) -> Result<usize, Cancelled> {
        assert!(start <= end && end < self.len(), "invalid partition range [{start}, {end}]");

        let mid = (start + end) / 2;
        self.comparison();
        if self.seq.elems[mid] < self.seq.elems[start] {
            self.swap(start, mid);
        }
        self.comparison();
        if self.seq.elems[end] < self.seq.elems[start] {
            self.swap(start, end);
        }
        self.comparison();
        if self.seq.elems[end] < self.seq.elems[mid] {
            self.swap(mid, end);
        }
        let pivot = self.seq.elems[end];

        let mut i = start;
        for j in start..end {
            self.comparison();
            if self.seq.elems[j] < pivot {
                self.mark(&[i]);
                if i != j {
                    self.swap(j, i);
                }
                i += 1;
            }
            self.mark(&[end, j]);
            self.frame()?;
        }
        // moving the pivot into place is not counted as a swap
        if i < end {
            self.seq.elems.swap(i, end);
        }
        self.mark(&[i, end]);
        self.frame()?;

        debug!("Partition [{start}, {end}]: pivot {pivot} at {i}");
        Ok(i)
    }
}
