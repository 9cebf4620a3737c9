use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{Error, Result};

/// A fixed on/off cadence the user has learned to recognize.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPattern {
    pub times: u8,
    pub interval_ms: u32,
}

/// One blink before the LED is held on: listening for a signal.
pub const LISTENING: BlinkPattern = BlinkPattern {
    times: 1,
    interval_ms: 500,
};

/// Five fast blinks: capture succeeded.
pub const CAPTURED: BlinkPattern = BlinkPattern {
    times: 5,
    interval_ms: 50,
};

/// Three fast blinks: replay transmission starting.
pub const SENDING: BlinkPattern = BlinkPattern {
    times: 3,
    interval_ms: 30,
};

/// Two slow blinks: nothing recorded to replay.
pub const NOTHING_TO_SEND: BlinkPattern = BlinkPattern {
    times: 2,
    interval_ms: 600,
};

/// The single status LED.
///
/// Every pattern blocks until it completes, `times * 2 * interval_ms` in
/// total. No input is sampled during that window; the device is
/// single-threaded and interaction is human-paced.
pub struct StatusLed<P> {
    pin: P,
}

impl<P: OutputPin> StatusLed<P> {
    /// Takes the pin and drives it low, the LED's idle state.
    ///
    /// # Errors
    ///
    /// `Error::PinWrite` if the pin cannot be driven.
    pub fn new(mut pin: P) -> Result<Self> {
        pin.set_low().map_err(|_| Error::PinWrite)?;
        Ok(Self { pin })
    }

    /// Runs a pattern to completion: on then off `times` times, holding
    /// each state for the pattern interval.
    ///
    /// # Errors
    ///
    /// `Error::PinWrite` if the pin cannot be driven.
    pub fn blink(&mut self, pattern: BlinkPattern, delay: &mut impl DelayNs) -> Result<()> {
        for _ in 0..pattern.times {
            self.pin.set_high().map_err(|_| Error::PinWrite)?;
            delay.delay_ms(pattern.interval_ms);
            self.pin.set_low().map_err(|_| Error::PinWrite)?;
            delay.delay_ms(pattern.interval_ms);
        }
        Ok(())
    }

    /// Leaves the LED on until the next pattern or [`Self::off`] call.
    ///
    /// # Errors
    ///
    /// `Error::PinWrite` if the pin cannot be driven.
    pub fn hold_on(&mut self) -> Result<()> {
        self.pin.set_high().map_err(|_| Error::PinWrite)
    }

    /// Turns the LED off.
    ///
    /// # Errors
    ///
    /// `Error::PinWrite` if the pin cannot be driven.
    pub fn off(&mut self) -> Result<()> {
        self.pin.set_low().map_err(|_| Error::PinWrite)
    }
}
