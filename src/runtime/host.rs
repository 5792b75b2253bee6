//! An in-memory [`Host`]

use crate::runtime::protocol::Host;
use std::collections::VecDeque;
use std::time::Duration;

/// Host that records everything the driver sends it and answers input
/// requests from a queue
///
/// Output chunks are kept as received; [`lines`](RecordingHost::lines)
/// joins them and splits on line breaks.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub output: Vec<String>,
    pub inputs: VecDeque<String>,
    /// Lines reported in debug mode, in order
    pub steps: Vec<u32>,
    pub yields: usize,
    /// Delays are recorded, never slept
    pub delays: Vec<Duration>,
    /// Number of input requests made
    pub input_requests: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `inputs` to answer the next input requests in order
    pub fn with_inputs<S: Into<String>>(inputs: impl IntoIterator<Item = S>) -> Self {
        RecordingHost {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// All output as one string
    pub fn text(&self) -> String {
        self.output.concat()
    }

    /// All output split into lines, without a trailing empty line
    pub fn lines(&self) -> Vec<String> {
        let text = self.text();
        let mut lines: Vec<String> = text.split('\n').map(|s| s.to_string()).collect();
        if lines.last().is_some_and(|s| s.is_empty()) {
            lines.pop();
        }
        lines
    }
}

impl Host for RecordingHost {
    fn output(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn input(&mut self) -> Option<String> {
        self.input_requests += 1;
        self.inputs.pop_front()
    }

    fn step(&mut self, line: u32) {
        self.steps.push(line);
    }

    fn yield_now(&mut self) {
        self.yields += 1;
    }

    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}
