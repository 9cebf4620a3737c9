use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    Result,
    blink::{self, StatusLed},
    codec::IrCodec,
    constants::{CAPTURE_POLL_MS, CAPTURE_POLL_TRIES},
    signal::StoredSignal,
};

/// How a listen window ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureOutcome {
    SignalFound(StoredSignal),
    TimedOut,
}

/// Runs one bounded listen window.
///
/// Enables the receiver, signals "listening" (one blink, then the LED held
/// on), then polls the decoder up to [`CAPTURE_POLL_TRIES`] times with a
/// [`CAPTURE_POLL_MS`] sleep before each poll, exiting the moment a message
/// is available.
///
/// On success the classified signal comes back in the outcome and the LED
/// blinks the capture pattern. On exhaustion the LED is turned off and the
/// caller's previously stored signal stays as it was; a timeout is reported
/// on the LED only and is not an error.
///
/// # Errors
///
/// `Error::PinWrite` if the status LED cannot be driven.
pub fn capture_session<C, P, D>(
    codec: &mut C,
    led: &mut StatusLed<P>,
    delay: &mut D,
) -> Result<CaptureOutcome>
where
    C: IrCodec,
    P: OutputPin,
    D: DelayNs,
{
    codec.enable_receiver();

    info!("recording: listening for an IR signal");
    led.blink(blink::LISTENING, delay)?;
    led.hold_on()?;

    for attempt in 0..CAPTURE_POLL_TRIES {
        debug!("waiting for signal (poll {})", attempt);
        delay.delay_ms(CAPTURE_POLL_MS);

        if let Some(result) = codec.try_decode() {
            let signal = StoredSignal::from_decode(&result);
            info!("got a signal: {:?}", signal);
            led.blink(blink::CAPTURED, delay)?;
            return Ok(CaptureOutcome::SignalFound(signal));
        }
    }

    info!("no signal within the listen window; nothing recorded");
    led.off()?;
    Ok(CaptureOutcome::TimedOut)
}
