use crate::engine::Engine;
use crate::error::Step;

// Implicit max-heap over a subrange anchored at `start`.

pub fn heap_parent(start: usize, i: usize) -> usize {
    debug_assert!(i > start, "the root has no parent");
    start + (i - start - 1) / 2
}

pub fn heap_left_child(start: usize, i: usize) -> usize {
    start + 2 * (i - start) + 1
}

pub fn heap_right_child(start: usize, i: usize) -> usize {
    start + 2 * (i - start) + 2
}

impl Engine<'_> {
    /// Sorts the half-open range `[start, end)`.
    pub fn heapsort(&mut self, start: usize, end: usize) -> Step {
        assert!(start <= end && end <= self.len(), "invalid heap range [{start}, {end})");
        if end - start < 2 {
            return Ok(());
        }
        self.heapify(start, end)?;
        let mut last = end - 1;
        while last > start {
            self.swap(last, start);
            self.mark(&[start, last]);
            self.frame()?;

            last -= 1;
            self.sift_down(start, start, last)?;
        }
        Ok(())
    }

    fn heapify(&mut self, start: usize, end: usize) -> Step {
        let last = end - 1;
        for root in (start..=heap_parent(start, last)).rev() {
            self.sift_down(start, root, last)?;
        }
        Ok(())
    }

    /// Moves `root` down until neither child in `[start, last]` is larger.
    /// One frame per level descended.
    fn sift_down(&mut self, start: usize, root: usize, last: usize) -> Step {
        let mut root = root;
        while heap_left_child(start, root) <= last {
            let child = heap_left_child(start, root);
            let right = heap_right_child(start, root);
            let mut swap = root;
            self.mark(&[root]);

            self.comparison();
            if self.seq.elems[swap] < self.seq.elems[child] {
                swap = child;
            }
            self.comparison();
            if right <= last && self.seq.elems[swap] < self.seq.elems[right] {
                swap = right;
            }
            if swap == root {
                return Ok(());
            }
            self.swap(root, swap);
            root = swap;

            self.mark(&[root, child]);
            if right <= last {
                self.mark(&[right]);
            }
            self.frame()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cancel::Never;
    use crate::frame::Recorder;
    use crate::sequence::Sequence;
    use super::*;

    #[test]
    fn index_math() {
        assert_eq!(heap_left_child(0, 0), 1);
        assert_eq!(heap_right_child(0, 0), 2);
        assert_eq!(heap_parent(0, 1), 0);
        assert_eq!(heap_parent(0, 2), 0);
        assert_eq!(heap_parent(0, 6), 2);
        // anchored at 10
        assert_eq!(heap_left_child(10, 11), 13);
        assert_eq!(heap_right_child(10, 11), 14);
        assert_eq!(heap_parent(10, 13), 11);
        assert_eq!(heap_parent(10, 14), 11);
    }

    #[test]
    fn heapify_builds_max_heap() {
        let mut seq = Sequence::new(vec![1, 2, 3, 4, 5, 6, 7]).unwrap();
        let mut recorder = Recorder::new();
        Engine::new(&mut seq, &mut recorder, &Never).heapify(0, 7).unwrap();
        let v = seq.values();
        assert_eq!(v[0], 7);
        for i in 1..v.len() {
            assert!(v[heap_parent(0, i)] > v[i]);
        }
    }

    #[test]
    fn sorts_subrange() {
        let mut seq = Sequence::new(vec![9, 6, 2, 8, 1, 0]).unwrap();
        let mut recorder = Recorder::new();
        Engine::new(&mut seq, &mut recorder, &Never).heapsort(1, 5).unwrap();
        assert_eq!(seq.values(), &[9, 1, 2, 6, 8, 0]);
    }

    #[test]
    fn frames_stay_in_range() {
        let mut seq = Sequence::new(vec![3, 5, 1, 4, 2]).unwrap();
        let mut recorder = Recorder::new();
        Engine::new(&mut seq, &mut recorder, &Never).heapsort(0, 5).unwrap();
        assert!(seq.is_sorted());
        assert!(recorder.frames.iter().flat_map(|f| f.accessed.iter()).all(|&i| i < 5));
    }
}
