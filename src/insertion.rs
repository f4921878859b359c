use crate::engine::Engine;
use crate::error::Step;

impl Engine<'_> {
    /// Shifts each element left by repeated adjacent swaps. Every visit of the
    /// inner loop counts as one comparison and one swap.
    pub fn insertion_sort(&mut self) -> Step {
        for i in 1..self.len() {
            let mut j = i;
            while j > 0 && self.seq.elems[j - 1] > self.seq.elems[j] {
                self.comparison();
                self.swap(j, j - 1);
                self.mark(&[j, j - 1]);
                self.frame()?;
                j -= 1;
            }
        }
        Ok(())
    }
}
