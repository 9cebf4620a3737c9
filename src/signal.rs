use crate::codec::{DecodeResult, Protocol, RawBuffer, StateBuffer};

/// Payload of a stored signal, classified once at capture time so replay
/// becomes an exhaustive match instead of runtime type inspection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalPayload {
    /// Undecoded mark/space burst, replayed verbatim at the fixed carrier.
    Raw(RawBuffer),
    /// Fixed-width message of up to 64 bits.
    Value { value: u64, bits: u16 },
    /// State bytes of a protocol that exceeds a fixed-width value.
    State { bytes: StateBuffer, bits: u16 },
}

/// The single remembered signal.
///
/// Created whole on a successful capture, read-only during replay, and
/// destroyed only by the next capture overwriting it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredSignal {
    pub protocol: Protocol,
    pub payload: SignalPayload,
}

impl StoredSignal {
    /// Classifies a decode result into the payload its replay path needs:
    /// an unknown protocol keeps the corrected raw burst, a state-based
    /// protocol keeps `bits / 8` state bytes, everything else keeps the
    /// fixed-width value.
    #[must_use]
    pub fn from_decode(result: &DecodeResult) -> Self {
        let payload = if result.protocol == Protocol::Unknown {
            let mut raw = result.raw.clone();
            raw.truncate(result.corrected_raw().len());
            SignalPayload::Raw(raw)
        } else if result.protocol.requires_state() {
            let byte_len = usize::from(result.bits / 8).min(result.state.len());
            let mut bytes = result.state.clone();
            bytes.truncate(byte_len);
            SignalPayload::State {
                bytes,
                bits: result.bits,
            }
        } else {
            SignalPayload::Value {
                value: result.value,
                bits: result.bits,
            }
        };

        Self {
            protocol: result.protocol,
            payload,
        }
    }
}
