//! Scripted host walkthrough of the record/replay control loop.
//!
//! No hardware involved: pins, clock, and codec are small fakes, and every
//! status change shows up as a log line. The script presses the replay
//! button before anything is recorded, then records a NEC signal, then
//! replays it twice.
//!
//! ```sh
//! cargo run --bin host-sim --features host
//! ```

use core::convert::Infallible;
use std::collections::VecDeque;

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
};
use ir_repeater::{DecodeResult, IrCodec, Protocol, RawBuffer, Remote, StateBuffer};

/// Input pin replaying a fixed per-tick level script, released once the
/// script runs out.
struct SimPin(VecDeque<bool>);

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.pop_front().unwrap_or(true))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|level| !level)
    }
}

/// LED that logs its transitions instead of lighting up.
struct ConsoleLed {
    lit: bool,
}

impl ErrorType for ConsoleLed {
    type Error = Infallible;
}

impl OutputPin for ConsoleLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        if self.lit {
            log::info!("LED off");
        }
        self.lit = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        if !self.lit {
            log::info!("LED on");
        }
        self.lit = true;
        Ok(())
    }
}

/// A clock that does not tick, so the ten-second listen window passes
/// instantly.
#[derive(Default)]
struct InstantDelay;

impl DelayNs for InstantDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Codec double: one scripted NEC message, transmissions logged.
struct SimCodec {
    pending: VecDeque<DecodeResult>,
}

impl IrCodec for SimCodec {
    fn begin(&mut self) {
        log::info!("transmitter initialized");
    }

    fn enable_receiver(&mut self) {
        log::info!("receiver enabled");
    }

    fn try_decode(&mut self) -> Option<DecodeResult> {
        self.pending.pop_front()
    }

    fn send_raw(&mut self, timings: &[u16], carrier_hz: u32) {
        log::info!("raw burst: {} timings at {} Hz", timings.len(), carrier_hz);
    }

    fn send_value(&mut self, protocol: Protocol, value: u64, bits: u16) -> bool {
        log::info!("sent {protocol:?} value {value:#x} ({bits} bits)");
        true
    }

    fn send_state(&mut self, protocol: Protocol, state: &[u8]) -> bool {
        log::info!("sent {protocol:?} state ({} bytes)", state.len());
        true
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let codec = SimCodec {
        pending: VecDeque::from([DecodeResult {
            protocol: Protocol::Nec,
            bits: 32,
            value: 0x20DF_10EF,
            state: StateBuffer::new(),
            raw: RawBuffer::new(),
        }]),
    };

    // Tick-by-tick level scripts: low is pressed, a low-to-high transition
    // fires. Replay fires on tick 2 (nothing recorded yet), record fires on
    // tick 4, replay fires again on ticks 6 and 8.
    let record = SimPin(VecDeque::from([true, true, false, true]));
    let replay = SimPin(VecDeque::from([false, true, true, true, false, true, false, true]));

    let mut remote = Remote::new(codec, record, replay, ConsoleLed { lit: false }, InstantDelay::default())
        .expect("simulated pins cannot fail");

    for tick in 1..=8 {
        log::debug!("tick {tick}");
        remote.tick().expect("simulated pins cannot fail");
    }

    match remote.stored_signal() {
        Some(signal) => log::info!("still stored at shutdown: {signal:?}"),
        None => log::info!("nothing stored at shutdown"),
    }
}
