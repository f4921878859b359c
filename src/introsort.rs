use log::debug;

use crate::engine::Engine;
use crate::error::Step;

/// Recursion budget for `n` elements: `floor(ln n) * 2`.
pub fn introsort_depth(n: usize) -> usize {
    (n as f64).ln().floor() as usize * 2
}

impl Engine<'_> {
    /// Quicksort over the closed range `[start, end]` that hands the range to
    /// heapsort once `max_depth` partitioning levels are used up.
    pub fn introsort(&mut self, max_depth: usize, start: usize, end: usize) -> Step {
        if start > end {
            return Ok(());
        }
        let pivot = self.partition(start, end)?;
        if end - start <= 1 {
            return Ok(());
        }
        if max_depth == 0 {
            debug!("Depth limit reached, heapsort on [{start}, {end}]");
            return self.heapsort(start, end + 1);
        }
        if pivot > start {
            self.introsort(max_depth - 1, start, pivot - 1)?;
        }
        self.introsort(max_depth - 1, pivot + 1, end)
    }
}

#[cfg(test)]
mod tests {
    use crate::cancel::Never;
    use crate::frame::Recorder;
    use crate::sequence::{Counters, Sequence};
    use super::*;

    #[test]
    fn depth_budget() {
        assert_eq!(introsort_depth(2), 0);
        assert_eq!(introsort_depth(3), 2);
        assert_eq!(introsort_depth(50), 6);
        assert_eq!(introsort_depth(65536), 22);
    }

    #[test]
    fn two_elements_at_depth_zero() {
        let mut seq = Sequence::new(vec![2, 1]).unwrap();
        let mut recorder = Recorder::new();
        Engine::new(&mut seq, &mut recorder, &Never).introsort(0, 0, 1).unwrap();
        assert_eq!(seq.values(), &[1, 2]);
        // one scan frame and the closing partition frame, no heapsort swap
        assert_eq!(recorder.frames.len(), 2);
        assert_eq!(seq.counters(), Counters { comparisons: 4, swaps: 1 });
    }

    #[test]
    fn falls_back_to_heapsort() {
        let mut seq = Sequence::new(vec![6, 2, 8, 4, 1, 7, 3, 5]).unwrap();
        let mut recorder = Recorder::new();
        Engine::new(&mut seq, &mut recorder, &Never).introsort(0, 0, 7).unwrap();
        assert!(seq.is_sorted());
    }
}
