use log::debug;

use crate::engine::Engine;
use crate::error::Step;

impl Engine<'_> {
    /// Bottom-up mergesort: runs of `width` are merged into `aux`, which
    /// replaces the sequence after every full pass.
    pub fn mergesort(&mut self) -> Step {
        let n = self.len();
        let mut aux = self.seq.elems.clone();
        let mut width = 1;
        while width < n {
            debug!("Merge pass, width {width}");
            let mut left = 0;
            while left < n {
                let right = (left + width).min(n);
                let end = (left + 2 * width).min(n);
                self.merge(left, right, end, &mut aux)?;
                left += 2 * width;
            }
            self.seq.elems.copy_from_slice(&aux);
            width *= 2;
        }
        Ok(())
    }

    /// Merges `[left, right)` and `[right, end)` of the sequence into
    /// `aux[left..end]`. Frames show `aux`.
    fn merge(&mut self, left: usize, right: usize, end: usize, aux: &mut [u32]) -> Step {
        let mut i = left;
        let mut j = right;
        for k in left..end {
            self.mark(&[i]);
            // j runs off the end of the last block
            if j < self.len() {
                self.mark(&[j]);
            }
            self.comparison();
            if i < right && (j >= end || self.seq.elems[i] <= self.seq.elems[j]) {
                aux[k] = self.seq.elems[i];
                i += 1;
            } else {
                aux[k] = self.seq.elems[j];
                j += 1;
            }
            self.write();
            self.mark(&[k]);
            self.frame_of(aux)?;
        }
        Ok(())
    }
}
