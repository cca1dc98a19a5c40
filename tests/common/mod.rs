//! Shared test infrastructure for dual-led-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dual_led_sequencer::{DualLed, DutyPair, Sequencer};
use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::{Error, ErrorKind, ErrorType, SetDutyCycle};

// ============================================================================
// Simulated clock
// ============================================================================

/// A duty write observed at a point in simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub at_ms: u64,
    pub pair: DutyPair,
}

/// Simulated clock shared by the mock LED and the mock delay
#[derive(Debug, Default)]
pub struct Timeline {
    now_ns: Cell<u64>,
    writes: RefCell<Vec<Write>>,
}

impl Timeline {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }

    fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get() + ns);
    }

    fn record(&self, pair: DutyPair) {
        self.writes.borrow_mut().push(Write {
            at_ms: self.now_ms(),
            pair,
        });
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.borrow().clone()
    }

    pub fn pairs(&self) -> Vec<DutyPair> {
        self.writes.borrow().iter().map(|w| w.pair).collect()
    }

    /// Every write with the time it stayed on the LED (until the next write or now)
    pub fn holds(&self) -> Vec<(DutyPair, u64)> {
        let writes = self.writes.borrow();
        let now = self.now_ms();
        writes
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let until = writes.get(i + 1).map_or(now, |next| next.at_ms);
                (w.pair, until - w.at_ms)
            })
            .collect()
    }

    pub fn clear_writes(&self) {
        self.writes.borrow_mut().clear();
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// LED that records every duty pair on the shared timeline
pub struct MockLed {
    timeline: Rc<Timeline>,
}

impl MockLed {
    pub fn new(timeline: &Rc<Timeline>) -> Self {
        Self {
            timeline: Rc::clone(timeline),
        }
    }
}

impl DualLed for MockLed {
    fn set_duty(&mut self, pair: DutyPair) {
        self.timeline.record(pair);
    }
}

// ============================================================================
// Mock delay
// ============================================================================

/// Delay that advances the shared timeline instead of sleeping
pub struct MockDelay {
    timeline: Rc<Timeline>,
}

impl MockDelay {
    pub fn new(timeline: &Rc<Timeline>) -> Self {
        Self {
            timeline: Rc::clone(timeline),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.timeline.advance_ns(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.timeline.advance_ns(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timeline.advance_ns(u64::from(ms) * 1_000_000);
    }
}

// ============================================================================
// Mock PWM channel
// ============================================================================

/// Error returned by a rejecting [`MockPwm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPwmError;

impl Error for MockPwmError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// PWM channel that remembers every compare value written
pub struct MockPwm {
    max_duty: u16,
    duties: Vec<u16>,
    rejects: bool,
}

impl MockPwm {
    pub fn new(max_duty: u16) -> Self {
        Self {
            max_duty,
            duties: Vec::new(),
            rejects: false,
        }
    }

    /// Channel whose every write fails without being recorded
    pub fn failing(max_duty: u16) -> Self {
        Self {
            rejects: true,
            ..Self::new(max_duty)
        }
    }

    pub fn duties(&self) -> &[u16] {
        &self.duties
    }

    pub fn last_duty(&self) -> Option<u16> {
        self.duties.last().copied()
    }
}

impl ErrorType for MockPwm {
    type Error = MockPwmError;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.rejects {
            return Err(MockPwmError);
        }
        self.duties.push(duty);
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestSequencer = Sequencer<MockLed, MockDelay, String>;

/// Sequencer on a fresh timeline, with the power-on write cleared
pub fn sequencer() -> (TestSequencer, Rc<Timeline>) {
    let timeline = Timeline::new();
    let sequencer = Sequencer::new(
        MockLed::new(&timeline),
        MockDelay::new(&timeline),
        String::new(),
    );
    timeline.clear_writes();
    (sequencer, timeline)
}

/// Log lines without their terminators
pub fn log_lines(log: &str) -> Vec<&str> {
    log.split("\r\n").collect()
}
