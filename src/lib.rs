#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DutyPair`**: A red/green brightness intent, 0-255 per channel
//! - **`Color`**: The closed set of named colors (off, red, green, yellow, orange)
//! - **`DutyDriver`**: Scales duty pairs to the compare range of two `embedded-hal` PWM channels
//! - **`DualLed`**: Trait to implement for your LED hardware
//! - **`Segment`**: A hold, blink, fade, pause or progress line inside a demonstration
//! - **`Demonstration`**: A titled, looping list of segments built with `DemonstrationBuilder`
//! - **`Sequencer`**: Plays demonstrations with a blocking `DelayNs` and logs progress
//! - **`Showcase`**: Runs the five fixed demonstrations forever
//!
//! Brightness values are 8-bit. The `DutyDriver` maps them linearly onto the
//! PWM period with `compare = value * period / 255`.

pub use palette::Srgb;

pub mod colors;
pub mod demos;
pub mod driver;
pub mod sequence;
pub mod sequencer;
pub mod showcase;
pub mod types;

pub use colors::{Color, resolve};
pub use driver::{DualLed, DutyDriver, PWM_PERIOD, scale};
pub use sequence::{Actions, Demonstration, DemonstrationBuilder};
pub use sequencer::{NoLog, Sequencer};
pub use showcase::Showcase;
pub use types::{Action, AnimationStep, Channel, DutyPair, LoopCount, SequenceError, Segment};
