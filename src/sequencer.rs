//! Blocking player for demonstrations.
//!
//! Provides [`Sequencer`], which owns the LED, the delay provider and the
//! progress log sink, and plays [`Demonstration`]s step by step. Each step
//! is a duty write followed by a blocking wait; nothing else runs in between.

use core::fmt::Write;

use crate::colors::Color;
use crate::driver::DualLed;
use crate::sequence::Demonstration;
use crate::types::{Action, AnimationStep, DutyPair};
use embedded_hal::delay::DelayNs;

/// Log sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLog;

impl Write for NoLog {
    fn write_str(&mut self, _s: &str) -> core::fmt::Result {
        Ok(())
    }
}

/// Plays demonstrations on a red/green LED.
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `D` - Blocking delay provider
/// * `W` - Progress log sink (a serial port on the board)
pub struct Sequencer<L: DualLed, D: DelayNs, W: Write> {
    led: L,
    delay: D,
    log: W,
    current: DutyPair,
}

impl<L: DualLed, D: DelayNs> Sequencer<L, D, NoLog> {
    /// Creates a sequencer without a progress log.
    pub fn silent(led: L, delay: D) -> Self {
        Self::new(led, delay, NoLog)
    }
}

impl<L: DualLed, D: DelayNs, W: Write> Sequencer<L, D, W> {
    /// Creates a sequencer and turns the LED off.
    pub fn new(mut led: L, delay: D, log: W) -> Self {
        led.set_duty(DutyPair::OFF);

        Self {
            led,
            delay,
            log,
            current: DutyPair::OFF,
        }
    }

    /// Writes a brightness pair to the LED.
    pub fn set_duty(&mut self, pair: DutyPair) {
        self.led.set_duty(pair);
        self.current = pair;
    }

    /// Writes a named color to the LED.
    pub fn set_color(&mut self, color: Color) {
        self.set_duty(color.duty_pair());
    }

    /// Blocks for `ms` milliseconds without touching the LED.
    pub fn pause(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Writes the step's pair and blocks for its hold time.
    pub fn apply(&mut self, step: AnimationStep) {
        self.set_duty(step.pair);
        self.delay.delay_ms(step.hold_ms);
    }

    /// Writes one line to the progress log.
    ///
    /// Log failures are ignored.
    pub fn log_line(&mut self, line: &str) {
        let _ = write!(self.log, "{}\r\n", line);
    }

    /// Plays a demonstration to completion.
    ///
    /// Logs the title (if any), then every action in order. Returns only
    /// after the last hold has elapsed; an infinite demonstration never
    /// returns.
    pub fn play<const N: usize>(&mut self, demonstration: &Demonstration<N>) {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "playing '{}' ({} segments, {})",
            demonstration.title(),
            demonstration.segment_count(),
            demonstration.loop_count()
        );

        if !demonstration.title().is_empty() {
            self.log_line(demonstration.title());
        }

        for action in demonstration.actions() {
            self.perform(action);
        }
    }

    /// Performs a single action.
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Apply(step) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("duty {} for {} ms", step.pair, step.hold_ms);
                self.apply(step);
            }
            Action::Pause(ms) => self.pause(ms),
            Action::Milestone(text) => self.log_line(text),
        }
    }

    /// Returns the pair most recently written to the LED.
    pub fn current_duty(&self) -> DutyPair {
        self.current
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Returns a reference to the progress log sink.
    pub fn log(&self) -> &W {
        &self.log
    }

    /// Releases the LED, delay provider and log sink.
    pub fn into_parts(self) -> (L, D, W) {
        (self.led, self.delay, self.log)
    }
}
