// Host-side fakes for the audio and visibility seams.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use portfolio_fx::media::{AudioSink, PlayCallback, PlayOutcome, Visibility};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SinkCall {
    Rewind,
    Play,
    Volume(f64),
}

/// Audio sink that answers play requests synchronously from a script of
/// outcomes (default: `Started`).
#[derive(Default)]
pub struct FakeSink {
    volume: Cell<f64>,
    playing: Cell<bool>,
    outcomes: RefCell<VecDeque<PlayOutcome>>,
    calls: RefCell<Vec<SinkCall>>,
}

impl FakeSink {
    pub fn scripted(outcomes: &[PlayOutcome]) -> Self {
        let sink = Self::default();
        sink.volume.set(1.0);
        sink.outcomes.borrow_mut().extend(outcomes.iter().copied());
        sink
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.borrow().clone()
    }

    pub fn play_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| **c == SinkCall::Play).count()
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.set(playing);
    }
}

impl AudioSink for FakeSink {
    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_volume(&self, volume: f64) {
        self.volume.set(volume);
        self.calls.borrow_mut().push(SinkCall::Volume(volume));
    }

    fn is_paused(&self) -> bool {
        !self.playing.get()
    }

    fn rewind(&self) {
        self.calls.borrow_mut().push(SinkCall::Rewind);
    }

    fn request_play(&self, on_done: PlayCallback) {
        self.calls.borrow_mut().push(SinkCall::Play);
        let outcome = self.outcomes.borrow_mut().pop_front().unwrap_or(PlayOutcome::Started);
        if outcome == PlayOutcome::Started {
            self.playing.set(true);
        }
        on_done(outcome);
    }
}

/// Records the last visibility written, `None` if never touched.
#[derive(Clone, Default)]
pub struct FakeButton(pub Rc<Cell<Option<bool>>>);

impl FakeButton {
    pub fn shown(&self) -> Option<bool> {
        self.0.get()
    }
}

impl Visibility for FakeButton {
    fn set_visible(&self, visible: bool) {
        self.0.set(Some(visible));
    }
}
