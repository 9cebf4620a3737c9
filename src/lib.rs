//! Record-and-replay core of a two-button infrared remote.
//!
//! One button records the next incoming IR signal, the other replays the
//! last recording, and a single LED reports status through blink patterns
//! the user learns to recognize. Hardware is reached only through the
//! `embedded-hal` traits and the [`IrCodec`] seam, so the whole control
//! loop runs under test with fake pins, a fake clock, and a scripted codec.
#![no_std]
#![forbid(unsafe_code)]

// Declared first so the logging macros are visible to the other modules.
#[macro_use]
mod fmt;

mod blink;
mod button;
mod capture;
mod codec;
mod constants;
mod error;
mod remote;
mod replay;
mod signal;

// Re-export commonly used items
pub use blink::{BlinkPattern, CAPTURED, LISTENING, NOTHING_TO_SEND, SENDING, StatusLed};
pub use button::{Button, ButtonState, activated};
pub use capture::{CaptureOutcome, capture_session};
pub use codec::{DecodeResult, IrCodec, Protocol, RawBuffer, StateBuffer};
pub use constants::*;
pub use error::{Error, Result};
pub use remote::Remote;
pub use replay::{ReplayOutcome, replay_session};
pub use signal::{SignalPayload, StoredSignal};
