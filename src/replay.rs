use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    Result,
    blink::{self, StatusLed},
    codec::IrCodec,
    constants::CARRIER_HZ,
    signal::{SignalPayload, StoredSignal},
};

/// How a replay request ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReplayOutcome {
    /// Nothing has been captured yet.
    NoStoredSignal,
    /// A transmission was attempted. Raw bursts always report success; the
    /// transmitter exposes no failure signal for them.
    Sent { success: bool },
}

/// Replays the stored signal, if any.
///
/// The "sending" blink acknowledges intent and runs before the transmission
/// starts. Dispatch is an exhaustive match on the classification made at
/// capture time. The stored signal is never mutated here, so replay can be
/// repeated indefinitely until the next capture overwrites it. A failed
/// transmission is logged, not retried, and not escalated.
///
/// # Errors
///
/// `Error::PinWrite` if the status LED cannot be driven.
pub fn replay_session<C, P, D>(
    codec: &mut C,
    led: &mut StatusLed<P>,
    delay: &mut D,
    stored: Option<&StoredSignal>,
) -> Result<ReplayOutcome>
where
    C: IrCodec,
    P: OutputPin,
    D: DelayNs,
{
    let Some(signal) = stored else {
        info!("nothing to send; capture something first");
        led.blink(blink::NOTHING_TO_SEND, delay)?;
        return Ok(ReplayOutcome::NoStoredSignal);
    };

    led.blink(blink::SENDING, delay)?;

    let success = match &signal.payload {
        SignalPayload::Raw(timings) => {
            codec.send_raw(timings, CARRIER_HZ);
            true
        }
        SignalPayload::State { bytes, .. } => codec.send_state(signal.protocol, bytes),
        SignalPayload::Value { value, bits } => codec.send_value(signal.protocol, *value, *bits),
    };

    if success {
        info!("resent: {:?}", signal);
    } else {
        warn!("transmit failed: {:?}", signal);
    }

    Ok(ReplayOutcome::Sent { success })
}
