use log::debug;
use rand::seq::SliceRandom;

use crate::engine::Engine;
use crate::error::Step;
use crate::sequence::is_sorted;

impl Engine<'_> {
    /// Shuffles until the shuffle happens to come out sorted.
    pub fn bogo_sort(&mut self) -> Step {
        let mut shuffles: u64 = 0;
        while !is_sorted(&self.seq.elems) {
            self.seq.elems.shuffle(&mut self.rng);
            shuffles += 1;
            self.frame()?;
        }
        debug!("Bogo sort finished after {shuffles} shuffles");
        Ok(())
    }
}
