use heapless::Vec;

use crate::constants::{RAW_CAPACITY, STATE_CAPACITY};

/// Protocol classification reported by the decoder.
///
/// The tags mirror what the transceiver library can recognize. `Unknown`
/// means only the raw mark/space timings are usable; the tags for
/// air-conditioner protocols carry a byte buffer ("state") instead of a
/// fixed-width value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    Unknown,
    Nec,
    Samsung,
    Sony,
    Rc5,
    Rc6,
    Jvc,
    Panasonic,
    Daikin,
    Kelvinator,
    MitsubishiAc,
    Gree,
}

impl Protocol {
    /// Whether messages of this protocol exceed a simple fixed-width value
    /// and carry a state buffer instead.
    #[must_use]
    pub fn requires_state(self) -> bool {
        matches!(
            self,
            Self::Daikin | Self::Kelvinator | Self::MitsubishiAc | Self::Gree
        )
    }
}

/// Raw mark/space durations in microseconds, alternating, starting with a
/// mark.
pub type RawBuffer = Vec<u16, RAW_CAPACITY>;

/// State bytes of a protocol that exceeds a fixed-width value.
pub type StateBuffer = Vec<u8, STATE_CAPACITY>;

/// One complete decoded message, as handed over by the codec.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeResult {
    pub protocol: Protocol,
    /// Message length in bits.
    pub bits: u16,
    /// Fixed-width payload, meaningful for value-based protocols.
    pub value: u64,
    /// Extended payload, meaningful for state-based protocols.
    pub state: StateBuffer,
    /// The timing sequence the message was decoded from.
    pub raw: RawBuffer,
}

impl DecodeResult {
    /// The raw sequence with a trailing gap artifact trimmed off.
    ///
    /// A complete message ends on a mark. The capture buffer may carry one
    /// trailing space recorded while the decoder waited for the message to
    /// end; replaying it would stretch the burst, so an even-length
    /// sequence loses its last entry.
    #[must_use]
    pub fn corrected_raw(&self) -> &[u16] {
        if self.raw.len() % 2 == 0 && !self.raw.is_empty() {
            &self.raw[..self.raw.len() - 1]
        } else {
            &self.raw
        }
    }
}

/// Narrow seam to the IR transceiver library.
///
/// Implementations drive the real demodulation and modulation hardware;
/// tests script the results. All calls are synchronous.
pub trait IrCodec {
    /// Initializes the transmitter. Called once when the control loop is
    /// wired up.
    fn begin(&mut self);

    /// Activates the receiver. Idempotent; safe to call when already
    /// enabled.
    fn enable_receiver(&mut self);

    /// Returns a decoded message if one has completed since the last call.
    fn try_decode(&mut self) -> Option<DecodeResult>;

    /// Transmits a raw timing burst at the given carrier frequency. Raw
    /// transmission exposes no failure signal.
    fn send_raw(&mut self, timings: &[u16], carrier_hz: u32);

    /// Transmits a fixed-width message of up to 64 bits; true on success.
    fn send_value(&mut self, protocol: Protocol, value: u64, bits: u16) -> bool;

    /// Transmits a state-based message; true on success.
    fn send_state(&mut self, protocol: Protocol, state: &[u8]) -> bool;
}
