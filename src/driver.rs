//! PWM duty driver for the two LED channels.
//!
//! Provides [`DutyDriver`], which scales 0-255 brightness values to the
//! compare range of two `embedded-hal` PWM channels, and the [`DualLed`]
//! trait the sequencer drives.

use crate::colors::Color;
use crate::types::{Channel, DutyPair};
use embedded_hal::pwm::SetDutyCycle;

/// Compare value at full brightness on the evaluation board (TIM3 ARR).
pub const PWM_PERIOD: u16 = 999;

/// Trait for abstracting the red/green LED hardware.
///
/// Implement this for your LED hardware to let the sequencer control it.
pub trait DualLed {
    /// Applies a brightness pair to both channels.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_duty(&mut self, pair: DutyPair);

    /// Applies the pair of a named color.
    fn set_color(&mut self, color: Color) {
        self.set_duty(color.duty_pair());
    }
}

/// Scales a brightness value to a compare value in `0..=period`.
///
/// `compare = value * period / 255`, truncating.
#[inline]
pub const fn scale(value: u8, period: u16) -> u16 {
    ((value as u32 * period as u32) / u8::MAX as u32) as u16
}

/// Drives two PWM channels from brightness pairs.
pub struct DutyDriver<R, G>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
{
    red: R,
    green: G,
    period: u16,
}

impl<R, G> DutyDriver<R, G>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
{
    /// Creates a driver using the smaller of the two channels' maximum duty as period.
    pub fn new(red: R, green: G) -> Self {
        let period = red.max_duty_cycle().min(green.max_duty_cycle());
        Self::with_period(red, green, period)
    }

    /// Creates a driver with an explicit period.
    ///
    /// The period is capped to what both channels accept.
    pub fn with_period(red: R, green: G, period: u16) -> Self {
        let period = period
            .min(red.max_duty_cycle())
            .min(green.max_duty_cycle());

        Self { red, green, period }
    }

    /// Returns the compare value written at full brightness.
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Sets the brightness of one channel.
    pub fn set_channel_duty(&mut self, channel: Channel, value: u8) {
        let compare = scale(value, self.period);
        let result = match channel {
            Channel::Red => self.red.set_duty_cycle(compare).map_err(|_| ()),
            Channel::Green => self.green.set_duty_cycle(compare).map_err(|_| ()),
        };

        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("duty write rejected on {} channel", channel);
        }
    }

    /// Releases the PWM channels.
    pub fn release(self) -> (R, G) {
        (self.red, self.green)
    }
}

impl<R, G> DualLed for DutyDriver<R, G>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
{
    fn set_duty(&mut self, pair: DutyPair) {
        self.set_channel_duty(Channel::Red, pair.red);
        self.set_channel_duty(Channel::Green, pair.green);
    }
}
