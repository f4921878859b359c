use crate::engine::Engine;
use crate::error::Step;

impl Engine<'_> {
    pub fn bubble_sort(&mut self) -> Step {
        let n = self.len();
        let mut sorted = false;
        let mut i = 0;
        while i < n - 1 && !sorted {
            sorted = true;
            for j in 0..n - i - 1 {
                if self.seq.elems[j] > self.seq.elems[j + 1] {
                    self.swap(j, j + 1);
                    sorted = false;
                }
                self.comparison();
                self.mark(&[j, j + 1]);
                self.frame()?;
            }
            i += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cancel::Never;
    use crate::frame::Recorder;
    use crate::sequence::{Counters, Sequence};
    use super::*;

    #[test]
    fn three_elements() {
        let mut seq = Sequence::new(vec![3, 1, 2]).unwrap();
        let mut recorder = Recorder::new();
        Engine::new(&mut seq, &mut recorder, &Never).bubble_sort().unwrap();
        assert_eq!(seq.values(), &[1, 2, 3]);
        assert_eq!(recorder.accessed(), vec![vec![0, 1], vec![1, 2], vec![0, 1]]);
        assert_eq!(seq.counters(), Counters { comparisons: 3, swaps: 2 });
    }

    #[test]
    fn stops_after_clean_pass() {
        let mut seq = Sequence::ascending(6).unwrap();
        let mut recorder = Recorder::new();
        Engine::new(&mut seq, &mut recorder, &Never).bubble_sort().unwrap();
        assert_eq!(seq.counters(), Counters { comparisons: 5, swaps: 0 });
        assert_eq!(recorder.frames.len(), 5);
    }
}
