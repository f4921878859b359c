use std::thread;
use std::time::Duration;

use crossbeam_channel::Sender;
use log::{trace, warn};

use crate::sequence::Counters;

/// Point-in-time view handed to a sink. Only valid for the duration of `emit`.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub values: &'a [u32],
    pub accessed: &'a [usize],
    pub counters: Counters,
}

impl Frame<'_> {
    pub fn to_owned_frame(&self) -> OwnedFrame {
        OwnedFrame {
            values: self.values.to_vec(),
            accessed: self.accessed.to_vec(),
            counters: self.counters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedFrame {
    pub values: Vec<u32>,
    pub accessed: Vec<usize>,
    pub counters: Counters,
}

pub trait FrameSink {
    fn emit(&mut self, frame: Frame<'_>);
}

impl<F> FrameSink for F
where
    F: FnMut(Frame<'_>),
{
    fn emit(&mut self, frame: Frame<'_>) {
        self(frame)
    }
}

/// Drops every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn emit(&mut self, _frame: Frame<'_>) {}
}

/// Keeps a copy of every frame, for headless inspection.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub frames: Vec<OwnedFrame>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&OwnedFrame> {
        self.frames.last()
    }

    pub fn accessed(&self) -> Vec<Vec<usize>> {
        self.frames.iter().map(|f| f.accessed.clone()).collect()
    }
}

impl FrameSink for Recorder {
    fn emit(&mut self, frame: Frame<'_>) {
        self.frames.push(frame.to_owned_frame());
    }
}

/// Hands frames to another thread. With a zero-capacity channel the sort
/// blocks until the receiver has taken the frame.
#[derive(Debug)]
pub struct ChannelSink {
    tx: Sender<OwnedFrame>,
    disconnected: bool,
}

impl ChannelSink {
    pub fn new(tx: Sender<OwnedFrame>) -> Self {
        ChannelSink { tx, disconnected: false }
    }
}

impl FrameSink for ChannelSink {
    fn emit(&mut self, frame: Frame<'_>) {
        if self.disconnected {
            return;
        }
        if self.tx.send(frame.to_owned_frame()).is_err() {
            warn!("Frame receiver disconnected, dropping further frames");
            self.disconnected = true;
        }
    }
}

/// Sleeps for `delay` after forwarding each frame.
#[derive(Debug, Clone)]
pub struct Paced<S> {
    inner: S,
    delay: Duration,
}

impl<S: FrameSink> Paced<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Paced { inner, delay }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: FrameSink> FrameSink for Paced<S> {
    fn emit(&mut self, frame: Frame<'_>) {
        self.inner.emit(frame);
        if !self.delay.is_zero() {
            trace!("Frame delay {:?}", self.delay);
            thread::sleep(self.delay);
        }
    }
}
