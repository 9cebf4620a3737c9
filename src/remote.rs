use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::{
    Result,
    blink::StatusLed,
    button::Button,
    capture::{CaptureOutcome, capture_session},
    codec::IrCodec,
    constants::LOOP_PACING_MS,
    replay::replay_session,
    signal::StoredSignal,
};

/// The whole remote: two buttons, one status LED, one codec, one remembered
/// signal.
///
/// Owns every piece of mutable state. There are no globals and no
/// concurrency, so the storage slot needs no locking; everything runs on
/// the single thread that calls [`Self::tick`].
pub struct Remote<C, B1, B2, L, D> {
    codec: C,
    record_button: Button<B1>,
    replay_button: Button<B2>,
    led: StatusLed<L>,
    delay: D,
    stored: Option<StoredSignal>,
}

impl<C, B1, B2, L, D> Remote<C, B1, B2, L, D>
where
    C: IrCodec,
    B1: InputPin,
    B2: InputPin,
    L: OutputPin,
    D: DelayNs,
{
    /// Wires the remote together and initializes the transmitter. The LED
    /// starts off, both buttons start released, and nothing is stored.
    ///
    /// # Errors
    ///
    /// `Error::PinWrite` if the status LED cannot be driven low.
    pub fn new(mut codec: C, record_pin: B1, replay_pin: B2, led_pin: L, delay: D) -> Result<Self> {
        codec.begin();
        Ok(Self {
            codec,
            record_button: Button::new(record_pin),
            replay_button: Button::new(replay_pin),
            led: StatusLed::new(led_pin)?,
            delay,
            stored: None,
        })
    }

    /// One control-loop iteration: sample both buttons, then run the
    /// sessions whose release edge fired.
    ///
    /// The triggers are not mutually exclusive. When both fire on the same
    /// tick, recording runs first, so the simultaneous replay sends the
    /// fresh capture. A press that lands while a session blocks is lost;
    /// only a fresh release edge across two samples fires.
    ///
    /// # Errors
    ///
    /// Hardware-seam faults only. A capture timeout, an empty slot, and a
    /// failed transmission are outcomes, not errors.
    pub fn tick(&mut self) -> Result<()> {
        let record = self.record_button.poll()?;
        let replay = self.replay_button.poll()?;

        if record {
            if let CaptureOutcome::SignalFound(signal) =
                capture_session(&mut self.codec, &mut self.led, &mut self.delay)?
            {
                // A successful capture replaces the previous signal whole;
                // a timeout leaves it as it was.
                self.stored = Some(signal);
            }
        }

        if replay {
            replay_session(
                &mut self.codec,
                &mut self.led,
                &mut self.delay,
                self.stored.as_ref(),
            )?;
        }

        Ok(())
    }

    /// Runs the control loop forever. The short pacing sleep at the end of
    /// each iteration keeps platform housekeeping alive during idle spins.
    ///
    /// # Errors
    ///
    /// Returns only if a hardware-seam fault surfaces from [`Self::tick`].
    pub fn run(&mut self) -> Result<Infallible> {
        loop {
            self.tick()?;
            self.delay.delay_ms(LOOP_PACING_MS);
        }
    }

    /// The last captured signal, if any.
    #[must_use]
    pub fn stored_signal(&self) -> Option<&StoredSignal> {
        self.stored.as_ref()
    }
}
