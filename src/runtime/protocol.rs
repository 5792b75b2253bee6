//! The step-wise interpreter protocol
//!
//! An [`Interpreter`] executes a loaded program one step at a time and
//! exchanges text with its host through two queues: output it produced and
//! input it is waiting for. A [`Host`] is the other side of that exchange.

use std::time::Duration;

/// Result of a single [`Interpreter::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// More work remains
    Continue,
    /// The program finished
    Done,
    /// The program is blocked on `citeste` until [`Interpreter::push_input`]
    NeedsInput,
    /// Execution failed, see [`Interpreter::error`]
    Error,
}

/// A step-wise pseudocode interpreter
pub trait Interpreter {
    /// Prepare the runtime, returning `false` on failure
    fn init(&mut self) -> bool;

    /// Why the last [`init`](Interpreter::init) failed
    fn init_error(&self) -> Option<String>;

    /// Load program source, returning `false` on failure
    fn load(&mut self, source: &str) -> bool;

    /// The last load or runtime error
    fn error(&self) -> Option<String>;

    /// Execute one step
    fn step(&mut self) -> StepState;

    /// Supply one line of input to a program blocked in [`StepState::NeedsInput`]
    fn push_input(&mut self, line: String);

    fn has_output(&self) -> bool;

    /// Take the oldest pending output chunk. Dropping the returned string
    /// releases it.
    fn pop_output(&mut self) -> Option<String>;

    /// 1-based line of the statement about to run
    fn current_line(&self) -> u32;

    /// Discard the loaded program and all queued text
    fn reset(&mut self);

    /// Ask a running program to stop at its next opportunity
    fn request_stop(&mut self);
}

/// Callbacks a [`Driver`](crate::runtime::Driver) makes while running a program
pub trait Host {
    /// Show a chunk of program output
    fn output(&mut self, text: &str);

    /// Produce one line of input. `None` abandons the run.
    fn input(&mut self) -> Option<String>;

    /// Called after every step in debug mode with the current line
    fn step(&mut self, _line: u32) {}

    /// Called periodically so long runs do not starve the host
    fn yield_now(&mut self) {
        std::thread::yield_now();
    }

    /// Pause between steps in debug mode
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
