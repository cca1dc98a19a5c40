//! Core types for demonstration construction.

/// Brightness intent for both LED channels, 0-255 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyPair {
    /// Red channel brightness.
    pub red: u8,

    /// Green channel brightness.
    pub green: u8,
}

impl DutyPair {
    /// Both channels dark.
    pub const OFF: Self = Self::new(0, 0);

    /// Creates a duty pair.
    #[inline]
    pub const fn new(red: u8, green: u8) -> Self {
        Self { red, green }
    }

    /// Creates a duty pair from wider integers, clamping each to 0-255.
    pub fn saturating(red: i32, green: i32) -> Self {
        Self {
            red: red.clamp(0, u8::MAX as i32) as u8,
            green: green.clamp(0, u8::MAX as i32) as u8,
        }
    }

    /// Returns the brightness of a single channel.
    #[inline]
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
        }
    }
}

/// One of the two PWM outputs of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red LED, timer channel 1 on the board.
    Red,

    /// Green LED, timer channel 2 on the board.
    Green,
}

/// A duty pair held for a fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationStep {
    /// Brightness to apply.
    pub pair: DutyPair,

    /// How long the pair stays on the LED before the next step.
    pub hold_ms: u32,
}

impl AnimationStep {
    /// Creates a new animation step.
    #[inline]
    pub const fn new(pair: DutyPair, hold_ms: u32) -> Self {
        Self { pair, hold_ms }
    }
}

/// How many times a demonstration should repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopCount {
    /// Repeat a specific number of times.
    Finite(u32),

    /// Repeat indefinitely.
    Infinite,
}

impl Default for LoopCount {
    fn default() -> Self {
        LoopCount::Finite(1)
    }
}

/// Building block of a demonstration.
///
/// Segments are stored compactly and expanded into individual
/// [`Action`]s while the demonstration plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    /// Apply a pair and hold it.
    Hold { pair: DutyPair, hold_ms: u32 },

    /// Swap between two pairs `count` times, `first` leading each repetition.
    Alternate {
        first: DutyPair,
        second: DutyPair,
        first_ms: u32,
        second_ms: u32,
        count: u32,
    },

    /// Walk both channels from `from` toward `to` by `step` per iteration.
    ///
    /// A channel that reaches its target stays there. The first step is
    /// `from` itself, so a fade has `max(|Δred|, |Δgreen|) / step + 1` steps.
    Fade {
        from: DutyPair,
        to: DutyPair,
        step: u8,
        hold_ms: u32,
    },

    /// Wait without touching the LED.
    Pause { ms: u32 },

    /// Progress line for the diagnostic log.
    Milestone(&'static str),
}

impl Segment {
    /// Number of actions this segment expands into.
    pub fn len(&self) -> u64 {
        match *self {
            Segment::Hold { .. } | Segment::Pause { .. } | Segment::Milestone(_) => 1,
            Segment::Alternate { count, .. } => u64::from(count) * 2,
            Segment::Fade { from, to, step, .. } => {
                if step == 0 {
                    return 1;
                }
                let span = from.red.abs_diff(to.red).max(from.green.abs_diff(to.green));
                u64::from(span / step) + 1
            }
        }
    }

    /// Returns true if the segment expands into nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the action at `index`, or `None` past the end.
    pub fn action(&self, index: u64) -> Option<Action> {
        if index >= self.len() {
            return None;
        }

        let action = match *self {
            Segment::Hold { pair, hold_ms } => Action::Apply(AnimationStep::new(pair, hold_ms)),
            Segment::Alternate {
                first,
                second,
                first_ms,
                second_ms,
                ..
            } => {
                if index % 2 == 0 {
                    Action::Apply(AnimationStep::new(first, first_ms))
                } else {
                    Action::Apply(AnimationStep::new(second, second_ms))
                }
            }
            Segment::Fade {
                from,
                to,
                step,
                hold_ms,
            } => {
                let travel = index.saturating_mul(u64::from(step));
                let pair = DutyPair::new(
                    approach(from.red, to.red, travel),
                    approach(from.green, to.green, travel),
                );
                Action::Apply(AnimationStep::new(pair, hold_ms))
            }
            Segment::Pause { ms } => Action::Pause(ms),
            Segment::Milestone(text) => Action::Milestone(text),
        };

        Some(action)
    }

    /// Milliseconds this segment keeps the LED busy, saturating at `u64::MAX`.
    pub fn duration_ms(&self) -> u64 {
        match *self {
            Segment::Hold { hold_ms, .. } => u64::from(hold_ms),
            Segment::Alternate {
                first_ms,
                second_ms,
                count,
                ..
            } => u64::from(count).saturating_mul(u64::from(first_ms) + u64::from(second_ms)),
            Segment::Fade { hold_ms, .. } => self.len().saturating_mul(u64::from(hold_ms)),
            Segment::Pause { ms } => u64::from(ms),
            Segment::Milestone(_) => 0,
        }
    }
}

/// Moves `from` toward `to` by at most `travel`.
fn approach(from: u8, to: u8, travel: u64) -> u8 {
    let distance = u64::from(from.abs_diff(to));
    let moved = travel.min(distance) as u8;
    if to >= from { from + moved } else { from - moved }
}

/// A single thing the sequencer does while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Write a pair to the LED, then wait.
    Apply(AnimationStep),

    /// Wait without writing.
    Pause(u32),

    /// Emit a progress line.
    Milestone(&'static str),
}

/// Demonstration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// No segments provided.
    EmptySequence,

    /// Segment capacity exceeded.
    CapacityExceeded,

    /// Fade with a step size of zero would never reach its target.
    ZeroFadeStep,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::EmptySequence => {
                write!(f, "demonstration must have at least one segment")
            }
            SequenceError::CapacityExceeded => {
                write!(f, "demonstration capacity exceeded")
            }
            SequenceError::ZeroFadeStep => {
                write!(f, "fade step size must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}
