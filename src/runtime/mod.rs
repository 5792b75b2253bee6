//! Driving a step-wise interpreter
//!
//! The crate does not execute pseudocode. It defines the protocol an
//! execution engine exposes ([`Interpreter`]), the callbacks of whatever
//! embeds it ([`Host`]) and the loop that connects the two ([`Driver`]):
//!
//! ```text
//! parse → reset → init → load → { drain output → step → (input) }* → done
//! ```

mod driver;
mod errors;
mod host;
mod protocol;

pub use driver::{Driver, DriverConfig, RunOutcome, StopHandle};
pub use errors::DriverError;
pub use host::RecordingHost;
pub use protocol::{Host, Interpreter, StepState};
