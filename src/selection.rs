use crate::engine::Engine;
use crate::error::Step;

impl Engine<'_> {
    pub fn selection_sort(&mut self) -> Step {
        let n = self.len();
        for i in 0..n - 1 {
            let mut min = i;
            for j in i + 1..n {
                if self.seq.elems[j] < self.seq.elems[min] {
                    min = j;
                }
                self.comparison();
                self.mark(&[min, j]);
                self.frame()?;
            }
            if min != i {
                self.swap(min, i);
                self.mark(&[min, i]);
                self.frame()?;
            }
        }
        Ok(())
    }
}
