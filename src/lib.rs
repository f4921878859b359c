pub mod algorithm;
pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod runner;
pub mod sequence;
mod bogo;
mod bubble;
mod selection;
mod insertion;
mod quicksort;
mod mergesort;
mod heapsort;
mod introsort;
mod shellsort;

pub use algorithm::Algorithm;
pub use cancel::{Never, StopFlag, StopSignal};
pub use config::{SortConfig, DEFAULT_ELEMENTS, DEFAULT_FRAME_DELAY_MS, DEFAULT_SEED, MAX_ELEMENTS, MIN_ELEMENTS};
pub use engine::Engine;
pub use error::{Cancelled, SortError};
pub use frame::{ChannelSink, Frame, FrameSink, NullSink, OwnedFrame, Paced, Recorder};
pub use heapsort::{heap_left_child, heap_parent, heap_right_child};
pub use introsort::introsort_depth;
pub use runner::{run, Runner, SortOutcome, SortReport};
pub use sequence::{is_sorted, Counters, Sequence};
pub use shellsort::shell_gaps;
