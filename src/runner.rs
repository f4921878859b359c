use std::time::Instant;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithm::Algorithm;
use crate::cancel::StopSignal;
use crate::config::{check_element_count, SortConfig};
use crate::engine::Engine;
use crate::error::SortError;
use crate::frame::FrameSink;
use crate::introsort::introsort_depth;
use crate::sequence::{Counters, Sequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    pub algorithm: Algorithm,
    pub sorted: bool,
    pub counters: Counters,
    pub frames: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    Completed(SortReport),
    /// Stopped at a frame boundary. `sorted` reflects the partial state.
    Cancelled(SortReport),
}

impl SortOutcome {
    pub fn report(&self) -> &SortReport {
        match self {
            SortOutcome::Completed(report) | SortOutcome::Cancelled(report) => report,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SortOutcome::Cancelled(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Runner {
    config: SortConfig,
}

impl Runner {
    pub fn new(config: SortConfig) -> Result<Runner, SortError> {
        config.validate()?;
        Ok(Runner { config })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// The configured number of elements, `1..=n` shuffled with the seed.
    pub fn sequence(&self) -> Result<Sequence, SortError> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        Sequence::shuffled(self.config.elements, &mut rng)
    }

    /// Runs the configured algorithm over `seq`, emitting one final frame
    /// once it completes.
    pub fn run(
        &self,
        seq: &mut Sequence,
        sink: &mut dyn FrameSink,
        stop: &dyn StopSignal,
    ) -> Result<SortOutcome, SortError> {
        let algorithm = self.config.algorithm;
        let n = seq.len();
        check_element_count(n)?;

        info!("Sorting {n} elements with {algorithm}");
        seq.counters.reset();
        let start = Instant::now();

        let mut engine = Engine::new(seq, sink, stop).with_seed(engine_seed(self.config.seed));
        let result = match algorithm {
            Algorithm::Bogo => engine.bogo_sort(),
            Algorithm::Bubble => engine.bubble_sort(),
            Algorithm::Selection => engine.selection_sort(),
            Algorithm::Insertion => engine.insertion_sort(),
            Algorithm::Quicksort => engine.quicksort(0, n - 1),
            Algorithm::Mergesort => engine.mergesort(),
            Algorithm::Heapsort => engine.heapsort(0, n),
            Algorithm::Introsort => engine.introsort(introsort_depth(n), 0, n - 1),
            Algorithm::Shellsort => engine.shellsort(),
        };
        if result.is_ok() {
            engine.final_frame();
        }
        let frames = engine.frames();

        let report = SortReport {
            algorithm,
            sorted: seq.is_sorted(),
            counters: seq.counters,
            frames,
        };
        let duration = start.elapsed();

        if result.is_err() {
            info!("Cancelled {algorithm} after {frames} frames ({duration:?})");
            return Ok(SortOutcome::Cancelled(report));
        }
        if report.sorted {
            info!(
                "Sorted {n} elements with {algorithm} in {duration:?}: {} comparisons, {} swaps, {frames} frames",
                report.counters.comparisons, report.counters.swaps
            );
        } else {
            error!("Sorting failure: {algorithm} left the sequence unsorted");
        }
        Ok(SortOutcome::Completed(report))
    }
}

// The engine's generator must not replay the shuffle that built the input.
fn engine_seed(seed: u64) -> u64 {
    seed.wrapping_add(1)
}

/// Shuffles `config.elements` values with the configured seed and sorts them.
pub fn run(
    config: SortConfig,
    sink: &mut dyn FrameSink,
    stop: &dyn StopSignal,
) -> Result<(Sequence, SortOutcome), SortError> {
    let runner = Runner::new(config)?;
    let mut seq = runner.sequence()?;
    let outcome = runner.run(&mut seq, sink, stop)?;
    Ok((seq, outcome))
}
