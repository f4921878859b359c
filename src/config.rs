use crate::algorithm::Algorithm;
use crate::error::SortError;

pub const MIN_ELEMENTS: usize = 2;
pub const MAX_ELEMENTS: usize = 1 << 16;
pub const DEFAULT_ELEMENTS: usize = 50;
pub const DEFAULT_FRAME_DELAY_MS: u64 = 50;
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Quicksort;

// shellsort gap recurrence: gap_{k+1} = ceil(gap_k * GAP_GROWTH + 1)
pub const GAP_GROWTH: f64 = 2.25;

const _: () = {
    assert!(MIN_ELEMENTS >= 2, "a sort needs at least two elements");
    assert!(MIN_ELEMENTS <= DEFAULT_ELEMENTS && DEFAULT_ELEMENTS <= MAX_ELEMENTS);
    assert!(MAX_ELEMENTS <= u32::MAX as usize, "values must fit into u32");
};

/// Plain values a collaborator hands to the engine before a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub elements: usize,
    pub algorithm: Algorithm,
    pub seed: u64,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            elements: DEFAULT_ELEMENTS,
            algorithm: DEFAULT_ALGORITHM,
            seed: DEFAULT_SEED,
        }
    }
}

impl SortConfig {
    pub fn new(elements: usize, algorithm: Algorithm) -> Self {
        SortConfig {
            elements,
            algorithm,
            ..Default::default()
        }
    }

    pub fn elements(mut self, elements: usize) -> Self {
        self.elements = elements;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), SortError> {
        check_element_count(self.elements)
    }
}

pub(crate) fn check_element_count(n: usize) -> Result<(), SortError> {
    if !(MIN_ELEMENTS..=MAX_ELEMENTS).contains(&n) {
        return Err(SortError::InvalidElementCount {
            got: n,
            min: MIN_ELEMENTS,
            max: MAX_ELEMENTS,
        });
    }
    Ok(())
}
