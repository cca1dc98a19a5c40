//! The module test main loop.
//!
//! [`Showcase`] holds the five prebuilt demonstrations and a [`Sequencer`],
//! and runs them in fixed order with fixed pauses in between.

use core::fmt::Write;

use crate::colors::Color;
use crate::demos::{self, Demo};
use crate::driver::DualLed;
use crate::sequencer::Sequencer;
use crate::types::{LoopCount, SequenceError};
use embedded_hal::delay::DelayNs;

/// Pause after each of the first four demonstrations.
pub const INTER_DEMO_PAUSE_MS: u32 = 500;

/// Pause at the end of a full cycle.
pub const CYCLE_PAUSE_MS: u32 = 2000;

const RULE: &str = "============================================";

/// Runs the five demonstrations forever.
pub struct Showcase<L: DualLed, D: DelayNs, W: Write> {
    sequencer: Sequencer<L, D, W>,
    basic_colors: Demo,
    traffic_light: Demo,
    status_indicator: Demo,
    gradient_sweep: Demo,
    alternating_blink: Demo,
}

impl<L: DualLed, D: DelayNs, W: Write> Showcase<L, D, W> {
    /// Builds all demonstrations up front.
    ///
    /// # Errors
    /// Fails only if a fixed demonstration outgrows [`demos::DEMO_CAPACITY`].
    pub fn new(sequencer: Sequencer<L, D, W>) -> Result<Self, SequenceError> {
        Ok(Self {
            sequencer,
            basic_colors: demos::basic_colors()?,
            traffic_light: demos::traffic_light()?,
            status_indicator: demos::status_indicator()?,
            gradient_sweep: demos::gradient_sweep()?,
            alternating_blink: demos::alternating_blink()?,
        })
    }

    /// Logs the boot banner.
    pub fn banner(&mut self) {
        self.sequencer.log_line("");
        self.sequencer.log_line(RULE);
        self.sequencer.log_line("  Dual Color LED Module Test - NUCLEO-F103RB");
        self.sequencer.log_line(RULE);
        self.sequencer.log_line("");
    }

    /// Plays the basic colors demonstration.
    pub fn basic_colors(&mut self) {
        self.sequencer.play(&self.basic_colors);
    }

    /// Plays the traffic light demonstration.
    pub fn traffic_light(&mut self) {
        self.sequencer.play(&self.traffic_light);
    }

    /// Plays the battery status demonstration.
    pub fn status_indicator(&mut self) {
        self.sequencer.play(&self.status_indicator);
    }

    /// Plays the red/yellow/green gradient demonstration.
    pub fn gradient_sweep(&mut self) {
        self.sequencer.play(&self.gradient_sweep);
    }

    /// Plays the alternating blink demonstration.
    pub fn alternating_blink(&mut self) {
        self.sequencer.play(&self.alternating_blink);
    }

    /// Runs one full cycle of the module test.
    pub fn run_cycle(&mut self) {
        self.basic_colors();
        self.sequencer.set_color(Color::Off);
        self.sequencer.pause(INTER_DEMO_PAUSE_MS);

        self.sequencer.log_line("");
        self.traffic_light();
        self.sequencer.pause(INTER_DEMO_PAUSE_MS);

        self.sequencer.log_line("");
        self.status_indicator();
        self.sequencer.pause(INTER_DEMO_PAUSE_MS);

        self.sequencer.log_line("");
        self.gradient_sweep();
        self.sequencer.pause(INTER_DEMO_PAUSE_MS);

        self.sequencer.log_line("");
        self.alternating_blink();
        self.sequencer.set_color(Color::Off);

        self.sequencer.log_line("");
        self.sequencer.log_line("--- Cycle Complete ---");
        self.sequencer.log_line("");
        self.sequencer.pause(CYCLE_PAUSE_MS);
    }

    /// Runs cycles according to `count`. `Infinite` never returns.
    pub fn run(&mut self, count: LoopCount) {
        match count {
            LoopCount::Finite(cycles) => {
                for _cycle in 0..cycles {
                    #[cfg(feature = "defmt")]
                    defmt::info!("cycle {} of {}", _cycle + 1, cycles);
                    self.run_cycle();
                }
            }
            LoopCount::Infinite => self.run_forever(),
        }
    }

    /// Runs the module test until power is removed.
    pub fn run_forever(&mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }

    /// Returns a reference to the sequencer.
    pub fn sequencer(&self) -> &Sequencer<L, D, W> {
        &self.sequencer
    }

    /// Releases the sequencer.
    pub fn into_sequencer(self) -> Sequencer<L, D, W> {
        self.sequencer
    }
}
