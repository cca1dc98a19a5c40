//! The five fixed demonstrations of the LED module test.
//!
//! Each constructor returns a freshly built [`Demonstration`]. Every timing
//! and count below is part of the observable behavior of the board; change
//! them and the module test no longer matches its documentation.

use crate::colors::Color;
use crate::sequence::Demonstration;
use crate::types::{DutyPair, LoopCount, SequenceError};

/// Maximum number of segments in any of the fixed demonstrations.
pub const DEMO_CAPACITY: usize = 16;

/// A demonstration sized for the fixed set.
pub type Demo = Demonstration<DEMO_CAPACITY>;

/// How long each basic color is shown.
pub const SWATCH_MS: u32 = 1000;

/// Green phase of the traffic light.
pub const TRAFFIC_GO_MS: u32 = 3000;
/// Yellow phase of the traffic light.
pub const TRAFFIC_CAUTION_MS: u32 = 1000;
/// Red phase of the traffic light.
pub const TRAFFIC_STOP_MS: u32 = 3000;
/// Number of go/caution/stop cycles.
pub const TRAFFIC_CYCLES: u32 = 2;

/// How long each steady battery level is shown.
pub const BATTERY_LEVEL_MS: u32 = 1000;
/// The 75% level is a dimmed green that has no named color.
pub const BATTERY_DIM_GREEN: DutyPair = DutyPair::new(0, 180);
/// Red and off time of each 10% blink.
pub const LOW_BLINK_MS: u32 = 250;
/// Number of 10% blinks.
pub const LOW_BLINK_COUNT: u32 = 6;
/// Red and off time of each 0% blink.
pub const EMPTY_BLINK_MS: u32 = 100;
/// Number of 0% blinks.
pub const EMPTY_BLINK_COUNT: u32 = 12;

/// Red hold before the first ramp.
pub const GRADIENT_START_MS: u32 = 500;
/// Brightness change per gradient write.
pub const GRADIENT_STEP: u8 = 3;
/// Hold of each gradient write.
pub const GRADIENT_STEP_MS: u32 = 10;
/// Pause after each ramp.
pub const GRADIENT_SETTLE_MS: u32 = 300;

/// Red and green time of each slow swap.
pub const SLOW_ALTERNATE_MS: u32 = 500;
/// Number of slow swaps.
pub const SLOW_ALTERNATE_COUNT: u32 = 5;
/// Red and green time of each fast swap.
pub const FAST_ALTERNATE_MS: u32 = 100;
/// Number of fast swaps.
pub const FAST_ALTERNATE_COUNT: u32 = 20;
/// Brightness change per cross-fade write.
pub const CROSS_FADE_STEP: u8 = 5;
/// Hold of each cross-fade write.
pub const CROSS_FADE_STEP_MS: u32 = 8;
/// Number of red to green to red cross-fades.
pub const CROSS_FADE_COUNT: u32 = 3;

/// Off, red, green, yellow and orange, one second each.
pub fn basic_colors() -> Result<Demo, SequenceError> {
    Demo::builder()
        .title("[Test 1] Basic Colors")
        .milestone("  OFF...")?
        .color(Color::Off, SWATCH_MS)?
        .milestone("  RED...")?
        .color(Color::Red, SWATCH_MS)?
        .milestone("  GREEN...")?
        .color(Color::Green, SWATCH_MS)?
        .milestone("  YELLOW (R+G)...")?
        .color(Color::Yellow, SWATCH_MS)?
        .milestone("  ORANGE (R+g)...")?
        .color(Color::Orange, SWATCH_MS)?
        .build()
}

/// Two go/caution/stop cycles.
pub fn traffic_light() -> Result<Demo, SequenceError> {
    Demo::builder()
        .title("[Test 2] Traffic Light Simulation")
        .milestone("  GREEN (Go) - 3 sec")?
        .color(Color::Green, TRAFFIC_GO_MS)?
        .milestone("  YELLOW (Caution) - 1 sec")?
        .color(Color::Yellow, TRAFFIC_CAUTION_MS)?
        .milestone("  RED (Stop) - 3 sec")?
        .color(Color::Red, TRAFFIC_STOP_MS)?
        .loop_count(LoopCount::Finite(TRAFFIC_CYCLES))
        .build()
}

/// A battery draining from full to empty.
pub fn status_indicator() -> Result<Demo, SequenceError> {
    Demo::builder()
        .title("[Test 3] Status Indicator")
        .milestone("  Simulating battery level:")?
        .milestone("    100% - Green")?
        .color(Color::Green, BATTERY_LEVEL_MS)?
        .milestone("    75% - Green (dim)")?
        .hold(BATTERY_DIM_GREEN, BATTERY_LEVEL_MS)?
        .milestone("    50% - Yellow")?
        .color(Color::Yellow, BATTERY_LEVEL_MS)?
        .milestone("    25% - Orange")?
        .color(Color::Orange, BATTERY_LEVEL_MS)?
        .milestone("    10% - Red (blinking)")?
        .alternate(Color::Red, LOW_BLINK_MS, Color::Off, LOW_BLINK_MS, LOW_BLINK_COUNT)?
        .milestone("    0% - Red (fast blink)")?
        .alternate(
            Color::Red,
            EMPTY_BLINK_MS,
            Color::Off,
            EMPTY_BLINK_MS,
            EMPTY_BLINK_COUNT,
        )?
        .build()
}

/// Red to yellow to green and back, one channel at a time.
pub fn gradient_sweep() -> Result<Demo, SequenceError> {
    let red = Color::Red.duty_pair();
    let yellow = Color::Yellow.duty_pair();
    let green = Color::Green.duty_pair();

    Demo::builder()
        .title("[Test 4] Color Gradient (Red -> Yellow -> Green)")
        .color(Color::Red, GRADIENT_START_MS)?
        .milestone("  Red -> Yellow...")?
        .fade(red, yellow, GRADIENT_STEP, GRADIENT_STEP_MS)?
        .pause(GRADIENT_SETTLE_MS)?
        .milestone("  Yellow -> Green...")?
        .fade(yellow, green, GRADIENT_STEP, GRADIENT_STEP_MS)?
        .pause(GRADIENT_SETTLE_MS)?
        .milestone("  Green -> Yellow...")?
        .fade(green, yellow, GRADIENT_STEP, GRADIENT_STEP_MS)?
        .pause(GRADIENT_SETTLE_MS)?
        .milestone("  Yellow -> Red...")?
        .fade(yellow, red, GRADIENT_STEP, GRADIENT_STEP_MS)?
        .pause(GRADIENT_SETTLE_MS)?
        .color(Color::Off, 0)?
        .build()
}

/// Slow and fast red/green swaps, then red/green cross-fades.
pub fn alternating_blink() -> Result<Demo, SequenceError> {
    let red = Color::Red.duty_pair();
    let green = Color::Green.duty_pair();

    let mut builder = Demo::builder()
        .title("[Test 5] Alternating Blink")
        .milestone("  Slow alternating...")?
        .alternate(
            Color::Red,
            SLOW_ALTERNATE_MS,
            Color::Green,
            SLOW_ALTERNATE_MS,
            SLOW_ALTERNATE_COUNT,
        )?
        .milestone("  Fast alternating...")?
        .alternate(
            Color::Red,
            FAST_ALTERNATE_MS,
            Color::Green,
            FAST_ALTERNATE_MS,
            FAST_ALTERNATE_COUNT,
        )?
        .milestone("  Cross-fade...")?;

    for _ in 0..CROSS_FADE_COUNT {
        builder = builder
            .fade(red, green, CROSS_FADE_STEP, CROSS_FADE_STEP_MS)?
            .fade(green, red, CROSS_FADE_STEP, CROSS_FADE_STEP_MS)?;
    }

    builder.build()
}
