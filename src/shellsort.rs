use log::debug;

use crate::config::GAP_GROWTH;
use crate::engine::Engine;
use crate::error::Step;

/// Descending gaps below `n / 2`, grown by `ceil(gap * 2.25 + 1)` from 1.
/// Always ends in 1, so the last pass is a plain insertion sort.
pub fn shell_gaps(n: usize) -> Vec<usize> {
    let mut gaps = vec![1];
    let mut gap = 1usize;
    loop {
        gap = (gap as f64 * GAP_GROWTH + 1.0).ceil() as usize;
        if gap >= n / 2 {
            break;
        }
        gaps.push(gap);
    }
    gaps.reverse();
    gaps
}

impl Engine<'_> {
    pub fn shellsort(&mut self) -> Step {
        let n = self.len();
        for gap in shell_gaps(n) {
            debug!("Shellsort pass, gap {gap}");
            for j in gap..n {
                self.mark(&[j]);
                let held = self.seq.elems[j];
                let mut k = j;
                while k >= gap && self.seq.elems[k - gap] > held {
                    self.comparison();
                    self.mark(&[k, k - gap]);
                    self.seq.elems[k] = self.seq.elems[k - gap];
                    self.write();
                    self.frame()?;
                    k -= gap;
                }
                self.mark(&[k]);
                self.seq.elems[k] = held;
                self.frame()?;
            }
        }
        Ok(())
    }
}
