use crate::colors::Color;
use crate::types::{Action, DutyPair, LoopCount, SequenceError, Segment};
use heapless::Vec;

/// A named, timed animation for the red/green LED.
///
/// Stores a bounded list of [`Segment`]s that expand into individual duty
/// writes, pauses and progress lines while the demonstration plays. The whole
/// list repeats according to the loop count.
///
/// # Type Parameters
/// * `N` - Maximum number of segments this demonstration can hold
#[derive(Debug, Clone)]
pub struct Demonstration<const N: usize> {
    title: &'static str,
    segments: Vec<Segment, N>,
    loop_count: LoopCount,
}

impl<const N: usize> Demonstration<N> {
    /// Creates a new demonstration builder.
    pub fn builder() -> DemonstrationBuilder<N> {
        DemonstrationBuilder::new()
    }

    /// Returns the title line logged before the demonstration starts.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns a reference to the segment at the given index.
    pub fn get_segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Returns the loop count configuration.
    pub fn loop_count(&self) -> LoopCount {
        self.loop_count
    }

    /// Duration of one pass through all segments, saturating at `u64::MAX`.
    pub fn loop_duration_ms(&self) -> u64 {
        self.segments
            .iter()
            .map(Segment::duration_ms)
            .fold(0, u64::saturating_add)
    }

    /// Duration of the whole demonstration, `None` if it never ends.
    pub fn total_duration_ms(&self) -> Option<u64> {
        match self.loop_count {
            LoopCount::Finite(count) => {
                Some(self.loop_duration_ms().saturating_mul(u64::from(count)))
            }
            LoopCount::Infinite => None,
        }
    }

    /// Iterates over every action of the demonstration, loops included.
    pub fn actions(&self) -> Actions<'_, N> {
        Actions {
            demonstration: self,
            pass: 0,
            segment: 0,
            index: 0,
            emitted: false,
        }
    }
}

/// Iterator over the expanded actions of a [`Demonstration`].
#[derive(Debug, Clone)]
pub struct Actions<'a, const N: usize> {
    demonstration: &'a Demonstration<N>,
    pass: u32,
    segment: usize,
    index: u64,
    emitted: bool,
}

impl<const N: usize> Iterator for Actions<'_, N> {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        loop {
            if let LoopCount::Finite(count) = self.demonstration.loop_count {
                if self.pass >= count {
                    return None;
                }
            }

            let Some(segment) = self.demonstration.segments.get(self.segment) else {
                // A pass with nothing in it would spin forever on Infinite
                if !self.emitted {
                    return None;
                }
                self.pass = self.pass.saturating_add(1);
                self.segment = 0;
                self.index = 0;
                continue;
            };

            if let Some(action) = segment.action(self.index) {
                self.index += 1;
                self.emitted = true;
                return Some(action);
            }

            self.segment += 1;
            self.index = 0;
        }
    }
}

/// Builder for constructing validated demonstrations.
#[derive(Debug)]
pub struct DemonstrationBuilder<const N: usize> {
    title: &'static str,
    segments: Vec<Segment, N>,
    loop_count: LoopCount,
}

impl<const N: usize> DemonstrationBuilder<N> {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self {
            title: "",
            segments: Vec::new(),
            loop_count: LoopCount::default(),
        }
    }

    /// Sets the title line.
    pub fn title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    /// Sets how many times the segment list should repeat.
    ///
    /// Default is `LoopCount::Finite(1)`.
    pub fn loop_count(mut self, count: LoopCount) -> Self {
        self.loop_count = count;
        self
    }

    /// Adds a raw segment.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The builder already holds `N` segments
    /// * `ZeroFadeStep` - A fade segment with step size zero
    pub fn segment(mut self, segment: Segment) -> Result<Self, SequenceError> {
        if let Segment::Fade { step: 0, .. } = segment {
            return Err(SequenceError::ZeroFadeStep);
        }

        self.segments
            .push(segment)
            .map_err(|_| SequenceError::CapacityExceeded)?;
        Ok(self)
    }

    /// Applies a raw pair and holds it.
    pub fn hold(self, pair: DutyPair, hold_ms: u32) -> Result<Self, SequenceError> {
        self.segment(Segment::Hold { pair, hold_ms })
    }

    /// Applies a named color and holds it.
    pub fn color(self, color: Color, hold_ms: u32) -> Result<Self, SequenceError> {
        self.hold(color.duty_pair(), hold_ms)
    }

    /// Swaps between two colors `count` times.
    pub fn alternate(
        self,
        first: Color,
        first_ms: u32,
        second: Color,
        second_ms: u32,
        count: u32,
    ) -> Result<Self, SequenceError> {
        self.segment(Segment::Alternate {
            first: first.duty_pair(),
            second: second.duty_pair(),
            first_ms,
            second_ms,
            count,
        })
    }

    /// Walks from one pair to another by `step` per write.
    pub fn fade(
        self,
        from: DutyPair,
        to: DutyPair,
        step: u8,
        hold_ms: u32,
    ) -> Result<Self, SequenceError> {
        self.segment(Segment::Fade {
            from,
            to,
            step,
            hold_ms,
        })
    }

    /// Waits without writing to the LED.
    pub fn pause(self, ms: u32) -> Result<Self, SequenceError> {
        self.segment(Segment::Pause { ms })
    }

    /// Adds a progress line.
    pub fn milestone(self, text: &'static str) -> Result<Self, SequenceError> {
        self.segment(Segment::Milestone(text))
    }

    /// Builds and validates the demonstration.
    ///
    /// # Errors
    /// * `EmptySequence` - No segments were added
    pub fn build(self) -> Result<Demonstration<N>, SequenceError> {
        if self.segments.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        Ok(Demonstration {
            title: self.title,
            segments: self.segments,
            loop_count: self.loop_count,
        })
    }
}

impl<const N: usize> Default for DemonstrationBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
