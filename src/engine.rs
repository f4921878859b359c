use log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cancel::StopSignal;
use crate::config::DEFAULT_SEED;
use crate::error::{Cancelled, Step};
use crate::frame::{Frame, FrameSink};
use crate::sequence::{Counters, Sequence};

/// Context every algorithm runs against: the sequence, the indices touched
/// since the last frame, and the injected sink and stop signal.
///
/// The algorithms themselves live in their own modules as further `impl`
/// blocks on this type. Each returns `Err(Cancelled)` from the first frame
/// boundary after a stop was requested.
pub struct Engine<'a> {
    pub(crate) seq: &'a mut Sequence,
    accessed: Vec<usize>,
    sink: &'a mut dyn FrameSink,
    stop: &'a dyn StopSignal,
    pub(crate) rng: StdRng,
    frames: u64,
}

impl<'a> Engine<'a> {
    pub fn new(seq: &'a mut Sequence, sink: &'a mut dyn FrameSink, stop: &'a dyn StopSignal) -> Self {
        Engine {
            seq,
            accessed: Vec::new(),
            sink,
            stop,
            rng: StdRng::seed_from_u64(DEFAULT_SEED),
            frames: 0,
        }
    }

    /// Seeds the generator bogo sort shuffles with.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn len(&self) -> usize {
        self.seq.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.elems.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.seq.elems
    }

    pub fn counters(&self) -> Counters {
        self.seq.counters
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub(crate) fn mark(&mut self, indices: &[usize]) {
        self.accessed.extend_from_slice(indices);
    }

    pub(crate) fn comparison(&mut self) {
        self.seq.counters.comparisons += 1;
    }

    /// A single element write, counted as a swap.
    pub(crate) fn write(&mut self) {
        self.seq.counters.swaps += 1;
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.seq.elems.swap(i, j);
        self.seq.counters.swaps += 1;
    }

    /// Emits the live sequence, then polls the stop signal.
    pub(crate) fn frame(&mut self) -> Step {
        self.sink.emit(Frame {
            values: &self.seq.elems,
            accessed: &self.accessed,
            counters: self.seq.counters,
        });
        self.after_frame()
    }

    /// Emits `values` (an auxiliary buffer) in place of the live sequence.
    pub(crate) fn frame_of(&mut self, values: &[u32]) -> Step {
        self.sink.emit(Frame {
            values,
            accessed: &self.accessed,
            counters: self.seq.counters,
        });
        self.after_frame()
    }

    /// The frame shown once the sort has finished. Not a cancellation point.
    pub(crate) fn final_frame(&mut self) {
        self.accessed.clear();
        self.sink.emit(Frame {
            values: &self.seq.elems,
            accessed: &self.accessed,
            counters: self.seq.counters,
        });
        self.frames += 1;
    }

    fn after_frame(&mut self) -> Step {
        self.accessed.clear();
        self.frames += 1;
        trace!("Frame {}: {:?}", self.frames, self.seq.counters);
        if self.stop.should_stop() {
            return Err(Cancelled);
        }
        Ok(())
    }
}
