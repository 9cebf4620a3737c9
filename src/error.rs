use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for this crate.
///
/// Only hardware-seam faults are errors. A capture timeout, an empty
/// storage slot, and a failed transmission are ordinary outcomes carried by
/// [`crate::CaptureOutcome`] and [`crate::ReplayOutcome`]; they are logged
/// and signaled on the LED but never escalated, and the control loop never
/// halts for them.
#[derive(Debug, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[display("error reading input pin level")]
    PinRead,

    #[display("error setting output pin state")]
    PinWrite,
}
