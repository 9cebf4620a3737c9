use embedded_hal::digital::InputPin;

use crate::{Error, Result};

/// Level of a momentary button behind a pull-up: a low sample means the
/// contact is closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    /// Maps an active-low level sample to a button state.
    #[must_use]
    pub fn from_level_low(is_low: bool) -> Self {
        if is_low { Self::Pressed } else { Self::Released }
    }
}

/// True exactly on the release edge: pressed on the previous sample and
/// released on the current one.
#[must_use]
pub fn activated(prev: ButtonState, current: ButtonState) -> bool {
    prev == ButtonState::Pressed && current == ButtonState::Released
}

/// Release-edge detector for one momentary button.
///
/// Keeps the one-sample memory of the previous level and nothing else. No
/// debounce and no minimum hold time: a single electrically noisy
/// transition can fire spuriously. Interaction is human-paced and the
/// cost of a spurious fire is low, so bounce filtering is left out.
pub struct Button<P> {
    pin: P,
    prev: ButtonState,
}

impl<P: InputPin> Button<P> {
    /// Starts the detector in the released state, so a button held down
    /// across startup fires once on its first release.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            prev: ButtonState::Released,
        }
    }

    /// Samples the pin once and reports whether the release edge fired on
    /// this tick. The sample becomes the previous level for the next tick.
    ///
    /// # Errors
    ///
    /// `Error::PinRead` if the pin level cannot be read.
    pub fn poll(&mut self) -> Result<bool> {
        let level_low = self.pin.is_low().map_err(|_| Error::PinRead)?;
        let current = ButtonState::from_level_low(level_low);
        let fired = activated(self.prev, current);
        self.prev = current;
        Ok(fired)
    }
}
