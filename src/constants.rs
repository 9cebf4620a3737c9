//! Build-time configuration. The device has no runtime configuration; pin
//! wiring and every timing below are fixed when the firmware is built.

/// Decoder polls per capture session.
pub const CAPTURE_POLL_TRIES: u32 = 20;

/// Sleep before each decoder poll, in milliseconds. Together with
/// [`CAPTURE_POLL_TRIES`] this gives a listen window of about ten seconds.
pub const CAPTURE_POLL_MS: u32 = 500;

/// Carrier frequency for raw timing replay, in Hz.
pub const CARRIER_HZ: u32 = 38_000;

/// Capacity of a raw mark/space capture, enough for messages up to 512 bits.
pub const RAW_CAPACITY: usize = 1024;

/// Capacity of a protocol state buffer in bytes (512 bits).
pub const STATE_CAPACITY: usize = 64;

/// Pacing sleep at the end of every control-loop iteration. Keeps platform
/// housekeeping (watchdog feeding) alive on boards that need it.
pub const LOOP_PACING_MS: u32 = 1;
