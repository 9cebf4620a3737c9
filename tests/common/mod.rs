//! Hand-rolled hardware doubles: scripted input pins, a recording LED pin,
//! a clock that only counts, and a scripted codec. Together they let the
//! whole control loop run without hardware or real time elapsing.
#![allow(dead_code)]

use core::convert::Infallible;
use std::{cell::RefCell, rc::Rc};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
};
use ir_repeater::{DecodeResult, IrCodec, Protocol, RawBuffer, StateBuffer};

/// Input pin fed from a per-tick script of levels; once the script runs out
/// it repeats the last level. `true` is electrically high, which is
/// "released" behind a pull-up.
pub struct ScriptPin {
    levels: Vec<bool>,
    index: usize,
}

impl ScriptPin {
    pub fn new(levels: &[bool]) -> Self {
        assert!(!levels.is_empty(), "script needs at least one level");
        Self {
            levels: levels.to_vec(),
            index: 0,
        }
    }

    /// A pin that stays released forever.
    pub fn released() -> Self {
        Self::new(&[true])
    }
}

impl ErrorType for ScriptPin {
    type Error = Infallible;
}

impl InputPin for ScriptPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        let level = self
            .levels
            .get(self.index)
            .or_else(|| self.levels.last())
            .copied()
            .unwrap_or(true);
        self.index += 1;
        Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|level| !level)
    }
}

/// Shared view of every state an LED pin was driven to, in order.
#[derive(Clone, Default)]
pub struct LedTrace(Rc<RefCell<Vec<bool>>>);

impl LedTrace {
    pub fn states(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<bool> {
        self.0.borrow().last().copied()
    }
}

/// Output pin that records every transition into its [`LedTrace`].
pub struct TraceLed {
    trace: LedTrace,
}

impl TraceLed {
    pub fn new() -> (Self, LedTrace) {
        let trace = LedTrace::default();
        (
            Self {
                trace: trace.clone(),
            },
            trace,
        )
    }
}

impl ErrorType for TraceLed {
    type Error = Infallible;
}

impl OutputPin for TraceLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.trace.0.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.trace.0.borrow_mut().push(true);
        Ok(())
    }
}

/// Shared count of fake time slept, in nanoseconds.
#[derive(Clone, Default)]
pub struct SleptTime(Rc<RefCell<u64>>);

impl SleptTime {
    pub fn total_ms(&self) -> u64 {
        *self.0.borrow() / 1_000_000
    }
}

/// Delay that advances the fake clock instead of blocking.
pub struct FakeDelay {
    slept: SleptTime,
}

impl FakeDelay {
    pub fn new() -> (Self, SleptTime) {
        let slept = SleptTime::default();
        (
            Self {
                slept: slept.clone(),
            },
            slept,
        )
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.slept.0.borrow_mut() += u64::from(ns);
    }
}

/// A transmission the scripted codec was asked to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendCall {
    Raw {
        timings: Vec<u16>,
        carrier_hz: u32,
    },
    Value {
        protocol: Protocol,
        value: u64,
        bits: u16,
    },
    State {
        protocol: Protocol,
        bytes: Vec<u8>,
    },
}

#[derive(Default)]
pub struct CodecCalls {
    pub begin: usize,
    pub enable_receiver: usize,
    pub decode_polls: usize,
    pub sends: Vec<SendCall>,
}

/// Shared view of everything the scripted codec was asked to do.
#[derive(Clone, Default)]
pub struct CodecLog(Rc<RefCell<CodecCalls>>);

impl CodecLog {
    pub fn begin_calls(&self) -> usize {
        self.0.borrow().begin
    }

    pub fn enable_calls(&self) -> usize {
        self.0.borrow().enable_receiver
    }

    pub fn decode_polls(&self) -> usize {
        self.0.borrow().decode_polls
    }

    pub fn sends(&self) -> Vec<SendCall> {
        self.0.borrow().sends.clone()
    }
}

/// Codec double: hands out scripted decode results one per poll (`None`
/// entries are misses, running out of script is a miss too) and records
/// every call.
pub struct ScriptCodec {
    log: CodecLog,
    script: Vec<Option<DecodeResult>>,
    next: usize,
    send_result: bool,
}

impl ScriptCodec {
    pub fn new(script: Vec<Option<DecodeResult>>) -> (Self, CodecLog) {
        let log = CodecLog::default();
        (
            Self {
                log: log.clone(),
                script,
                next: 0,
                send_result: true,
            },
            log,
        )
    }

    /// Same, but every value/state transmission reports failure.
    pub fn failing(script: Vec<Option<DecodeResult>>) -> (Self, CodecLog) {
        let (mut codec, log) = Self::new(script);
        codec.send_result = false;
        (codec, log)
    }
}

impl IrCodec for ScriptCodec {
    fn begin(&mut self) {
        self.log.0.borrow_mut().begin += 1;
    }

    fn enable_receiver(&mut self) {
        self.log.0.borrow_mut().enable_receiver += 1;
    }

    fn try_decode(&mut self) -> Option<DecodeResult> {
        self.log.0.borrow_mut().decode_polls += 1;
        let result = self.script.get(self.next).cloned().flatten();
        self.next += 1;
        result
    }

    fn send_raw(&mut self, timings: &[u16], carrier_hz: u32) {
        self.log.0.borrow_mut().sends.push(SendCall::Raw {
            timings: timings.to_vec(),
            carrier_hz,
        });
    }

    fn send_value(&mut self, protocol: Protocol, value: u64, bits: u16) -> bool {
        self.log.0.borrow_mut().sends.push(SendCall::Value {
            protocol,
            value,
            bits,
        });
        self.send_result
    }

    fn send_state(&mut self, protocol: Protocol, state: &[u8]) -> bool {
        self.log.0.borrow_mut().sends.push(SendCall::State {
            protocol,
            bytes: state.to_vec(),
        });
        self.send_result
    }
}

/// A value-based decode result, as a real decoder would report for NEC.
pub fn nec_result(value: u64, bits: u16) -> DecodeResult {
    DecodeResult {
        protocol: Protocol::Nec,
        bits,
        value,
        state: StateBuffer::new(),
        raw: RawBuffer::from_slice(&[9000, 4500, 560, 560, 560, 1690, 560]).expect("fits"),
    }
}

/// An unclassified decode result carrying only raw timings.
pub fn unknown_result(raw: &[u16]) -> DecodeResult {
    DecodeResult {
        protocol: Protocol::Unknown,
        bits: 0,
        value: 0,
        state: StateBuffer::new(),
        raw: RawBuffer::from_slice(raw).expect("fits"),
    }
}

/// A state-based decode result for an air-conditioner protocol.
pub fn state_result(protocol: Protocol, state: &[u8], bits: u16) -> DecodeResult {
    DecodeResult {
        protocol,
        bits,
        value: 0,
        state: StateBuffer::from_slice(state).expect("fits"),
        raw: RawBuffer::new(),
    }
}
