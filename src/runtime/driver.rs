//! Run loop over a step-wise [`Interpreter`]

use crate::parser::parse;
use crate::runtime::errors::DriverError;
use crate::runtime::protocol::{Host, Interpreter, StepState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Steps between calls to [`Host::yield_now`]; `0` never yields
    pub yield_every: u64,
    /// Report the current line after every step and pause between steps
    pub debug: bool,
    /// Pause between steps in debug mode
    pub step_delay: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            yield_every: 100,
            debug: false,
            step_delay: Duration::from_millis(100),
        }
    }
}

/// Shared stop flag for a [`Driver`]
///
/// Clones share the flag, so a handle can be moved to another thread and
/// used to stop a run in progress. The request is seen at the next step.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// How a run ended without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program reached its end
    Completed { steps: u64 },
    /// A stop was requested or the host gave no input
    Stopped { steps: u64 },
}

impl RunOutcome {
    pub fn steps(&self) -> u64 {
        match self {
            RunOutcome::Completed { steps } | RunOutcome::Stopped { steps } => *steps,
        }
    }
}

/// Drives an [`Interpreter`] through a whole run, relaying text to a [`Host`]
pub struct Driver<I: Interpreter> {
    interpreter: I,
    config: DriverConfig,
    stop: StopHandle,
}

impl<I: Interpreter> Driver<I> {
    pub fn new(interpreter: I) -> Self {
        Self::with_config(interpreter, DriverConfig::default())
    }

    pub fn with_config(interpreter: I, config: DriverConfig) -> Self {
        Driver {
            interpreter,
            config,
            stop: StopHandle::default(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn interpreter(&self) -> &I {
        &self.interpreter
    }

    pub fn into_inner(self) -> I {
        self.interpreter
    }

    /// Validate, load and run `source` to completion
    ///
    /// The source is parsed first; a syntax error is returned without
    /// touching the interpreter. A stop requested before the run starts is
    /// discarded.
    pub fn run<H: Host>(&mut self, source: &str, host: &mut H) -> Result<RunOutcome, DriverError> {
        self.stop.clear();
        parse(source)?;

        self.interpreter.reset();
        if !self.interpreter.init() {
            let msg = self
                .interpreter
                .init_error()
                .unwrap_or_else(|| "unknown initialization error".to_string());
            return Err(DriverError::Init(msg));
        }

        if !self.interpreter.load(source) {
            let msg = self
                .interpreter
                .error()
                .unwrap_or_else(|| "unknown load error".to_string());
            return Err(DriverError::Load(msg));
        }

        let mut steps: u64 = 0;
        loop {
            if self.stop.is_stopped() {
                return Ok(self.stopped(steps));
            }

            self.drain_output(host);

            let state = self.interpreter.step();
            if self.config.debug {
                host.step(self.interpreter.current_line());
            }

            match state {
                StepState::Continue => {}
                StepState::Done => {
                    self.drain_output(host);
                    return Ok(RunOutcome::Completed { steps: steps + 1 });
                }
                StepState::Error => {
                    self.drain_output(host);
                    let msg = self
                        .interpreter
                        .error()
                        .unwrap_or_else(|| "unknown runtime error".to_string());
                    return Err(DriverError::Runtime(msg));
                }
                StepState::NeedsInput => {
                    self.drain_output(host);
                    let line = match host.input() {
                        Some(line) if !self.stop.is_stopped() => line,
                        _ => return Ok(self.stopped(steps + 1)),
                    };
                    self.interpreter.push_input(line);
                }
            }

            steps += 1;
            if self.config.yield_every > 0 && steps % self.config.yield_every == 0 {
                host.yield_now();
            }
            if self.config.debug {
                host.delay(self.config.step_delay);
            }
        }
    }

    fn stopped(&mut self, steps: u64) -> RunOutcome {
        self.interpreter.request_stop();
        RunOutcome::Stopped { steps }
    }

    fn drain_output<H: Host>(&mut self, host: &mut H) {
        while self.interpreter.has_output() {
            match self.interpreter.pop_output() {
                Some(text) => host.output(&text),
                None => break,
            }
        }
    }
}
