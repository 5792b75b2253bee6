// Driver tests against a scripted interpreter

use pseudo::runtime::{
    Driver, DriverConfig, DriverError, Host, Interpreter, RecordingHost, RunOutcome, StepState,
};
use pseudo::SyntaxError;
use std::collections::VecDeque;
use std::time::Duration;

/// One scripted step: the line it runs, what it prints, what it returns
struct Step {
    line: u32,
    output: Option<&'static str>,
    state: StepState,
}

fn step(line: u32, output: Option<&'static str>, state: StepState) -> Step {
    Step {
        line,
        output,
        state,
    }
}

/// Interpreter that replays a fixed list of steps, then reports `Done`.
/// With `endless` set it returns `Continue` forever instead.
#[derive(Default)]
struct ScriptedInterpreter {
    script: VecDeque<Step>,
    endless: bool,
    init_ok: bool,
    init_message: Option<String>,
    load_ok: bool,
    error_message: Option<String>,
    outputs: VecDeque<String>,
    inputs: Vec<String>,
    calls: Vec<&'static str>,
    stop_requests: usize,
    line: u32,
    loaded: Option<String>,
}

impl ScriptedInterpreter {
    fn new(script: Vec<Step>) -> Self {
        ScriptedInterpreter {
            script: script.into(),
            init_ok: true,
            load_ok: true,
            ..Default::default()
        }
    }

    fn endless() -> Self {
        ScriptedInterpreter {
            endless: true,
            ..Self::new(Vec::new())
        }
    }
}

impl Interpreter for ScriptedInterpreter {
    fn init(&mut self) -> bool {
        self.calls.push("init");
        self.init_ok
    }

    fn init_error(&self) -> Option<String> {
        self.init_message.clone()
    }

    fn load(&mut self, source: &str) -> bool {
        self.calls.push("load");
        self.loaded = Some(source.to_string());
        self.load_ok
    }

    fn error(&self) -> Option<String> {
        self.error_message.clone()
    }

    fn step(&mut self) -> StepState {
        self.calls.push("step");
        match self.script.pop_front() {
            Some(next) => {
                self.line = next.line;
                if let Some(text) = next.output {
                    self.outputs.push_back(text.to_string());
                }
                next.state
            }
            None if self.endless => StepState::Continue,
            None => StepState::Done,
        }
    }

    fn push_input(&mut self, line: String) {
        self.calls.push("push_input");
        self.inputs.push(line);
    }

    fn has_output(&self) -> bool {
        !self.outputs.is_empty()
    }

    fn pop_output(&mut self) -> Option<String> {
        self.outputs.pop_front()
    }

    fn current_line(&self) -> u32 {
        self.line
    }

    fn reset(&mut self) {
        self.calls.push("reset");
        self.outputs.clear();
    }

    fn request_stop(&mut self) {
        self.stop_requests += 1;
    }
}

const SOURCE: &str = "citeste n\nscrie n";

#[test]
fn test_run_to_completion() {
    let interpreter = ScriptedInterpreter::new(vec![
        step(1, Some("a"), StepState::Continue),
        step(2, Some("b\n"), StepState::Continue),
    ]);
    let mut driver = Driver::new(interpreter);
    let mut host = RecordingHost::new();

    let outcome = driver.run(SOURCE, &mut host).expect("Run failed");

    assert_eq!(outcome, RunOutcome::Completed { steps: 3 });
    assert_eq!(host.output, vec!["a", "b\n"]);
    assert_eq!(host.lines(), vec!["ab"]);

    let interpreter = driver.into_inner();
    assert_eq!(&interpreter.calls[..3], &["reset", "init", "load"]);
    assert_eq!(interpreter.loaded.as_deref(), Some(SOURCE));
    assert_eq!(interpreter.stop_requests, 0);
}

#[test]
fn test_syntax_error_skips_interpreter() {
    let mut driver = Driver::new(ScriptedInterpreter::new(Vec::new()));
    let mut host = RecordingHost::new();

    let err = driver.run("daca x atunci", &mut host).unwrap_err();

    assert!(matches!(err, DriverError::Syntax(SyntaxError::Parse(_))));
    assert!(driver.interpreter().calls.is_empty());
}

#[test]
fn test_init_failure() {
    let mut interpreter = ScriptedInterpreter::new(Vec::new());
    interpreter.init_ok = false;
    interpreter.init_message = Some("out of memory".to_string());
    let mut driver = Driver::new(interpreter);

    let err = driver.run(SOURCE, &mut RecordingHost::new()).unwrap_err();
    assert_eq!(err, DriverError::Init("out of memory".to_string()));
    assert_eq!(err.to_string(), "Initialization failed: out of memory");
    assert!(!driver.interpreter().calls.contains(&"load"));
}

#[test]
fn test_init_failure_without_message() {
    let mut interpreter = ScriptedInterpreter::new(Vec::new());
    interpreter.init_ok = false;
    let mut driver = Driver::new(interpreter);

    let err = driver.run(SOURCE, &mut RecordingHost::new()).unwrap_err();
    assert_eq!(err, DriverError::Init("unknown initialization error".to_string()));
}

#[test]
fn test_load_failure() {
    let mut interpreter = ScriptedInterpreter::new(Vec::new());
    interpreter.load_ok = false;
    interpreter.error_message = Some("unsupported".to_string());
    let mut driver = Driver::new(interpreter);

    let err = driver.run(SOURCE, &mut RecordingHost::new()).unwrap_err();
    assert_eq!(err, DriverError::Load("unsupported".to_string()));
    assert!(!driver.interpreter().calls.contains(&"step"));
}

#[test]
fn test_runtime_error_drains_output_first() {
    let mut interpreter = ScriptedInterpreter::new(vec![
        step(1, Some("partial"), StepState::Continue),
        step(2, Some("last words"), StepState::Error),
    ]);
    interpreter.error_message = Some("division by zero".to_string());
    let mut driver = Driver::new(interpreter);
    let mut host = RecordingHost::new();

    let err = driver.run(SOURCE, &mut host).unwrap_err();

    assert_eq!(err, DriverError::Runtime("division by zero".to_string()));
    assert_eq!(host.output, vec!["partial", "last words"]);
}

#[test]
fn test_input_is_forwarded() {
    let interpreter = ScriptedInterpreter::new(vec![
        step(1, Some("n = "), StepState::NeedsInput),
        step(1, Some("m = "), StepState::NeedsInput),
        step(2, Some("done"), StepState::Continue),
    ]);
    let mut driver = Driver::new(interpreter);
    let mut host = RecordingHost::with_inputs(["5", "7"]);

    let outcome = driver.run(SOURCE, &mut host).expect("Run failed");

    assert_eq!(outcome, RunOutcome::Completed { steps: 4 });
    assert_eq!(host.input_requests, 2);
    assert_eq!(host.text(), "n = m = done");
    assert_eq!(driver.interpreter().inputs, vec!["5", "7"]);
}

#[test]
fn test_prompt_is_shown_before_input_request() {
    struct PromptCheck {
        seen: String,
        prompt_at_request: Option<String>,
    }

    impl Host for PromptCheck {
        fn output(&mut self, text: &str) {
            self.seen.push_str(text);
        }

        fn input(&mut self) -> Option<String> {
            self.prompt_at_request = Some(self.seen.clone());
            Some("1".to_string())
        }
    }

    let interpreter = ScriptedInterpreter::new(vec![step(1, Some("n = "), StepState::NeedsInput)]);
    let mut driver = Driver::new(interpreter);
    let mut host = PromptCheck {
        seen: String::new(),
        prompt_at_request: None,
    };

    driver.run(SOURCE, &mut host).expect("Run failed");
    assert_eq!(host.prompt_at_request.as_deref(), Some("n = "));
}

#[test]
fn test_missing_input_stops_run() {
    let interpreter = ScriptedInterpreter::new(vec![
        step(1, None, StepState::NeedsInput),
        step(2, Some("unreachable"), StepState::Continue),
    ]);
    let mut driver = Driver::new(interpreter);
    let mut host = RecordingHost::new();

    let outcome = driver.run(SOURCE, &mut host).expect("Run failed");

    assert_eq!(outcome, RunOutcome::Stopped { steps: 1 });
    assert!(host.output.is_empty());
    assert_eq!(driver.interpreter().stop_requests, 1);
    assert!(driver.interpreter().inputs.is_empty());
}

#[test]
fn test_stale_stop_is_discarded() {
    let mut driver = Driver::new(ScriptedInterpreter::new(vec![step(1, None, StepState::Continue)]));
    driver.stop_handle().stop();

    let outcome = driver.run(SOURCE, &mut RecordingHost::new()).expect("Run failed");
    assert_eq!(outcome, RunOutcome::Completed { steps: 2 });
}

#[test]
fn test_stop_takes_effect_at_next_step() {
    struct StopOnOutput {
        handle: pseudo::runtime::StopHandle,
        output: Vec<String>,
    }

    impl Host for StopOnOutput {
        fn output(&mut self, text: &str) {
            self.output.push(text.to_string());
            self.handle.stop();
        }

        fn input(&mut self) -> Option<String> {
            None
        }
    }

    let interpreter = ScriptedInterpreter::new(vec![
        step(1, Some("first"), StepState::Continue),
        step(2, Some("second"), StepState::Continue),
        step(3, Some("third"), StepState::Continue),
    ]);
    let mut driver = Driver::new(interpreter);
    let mut host = StopOnOutput {
        handle: driver.stop_handle(),
        output: Vec::new(),
    };

    let outcome = driver.run(SOURCE, &mut host).expect("Run failed");

    // "first" is drained before step 2, which therefore still runs
    assert_eq!(outcome, RunOutcome::Stopped { steps: 2 });
    assert_eq!(host.output, vec!["first"]);
    assert_eq!(driver.interpreter().stop_requests, 1);
}

#[test]
fn test_stop_from_another_thread() {
    let mut driver = Driver::new(ScriptedInterpreter::endless());
    let handle = driver.stop_handle();

    let stopper = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(20));
        handle.stop();
    });

    let outcome = driver.run(SOURCE, &mut RecordingHost::new()).expect("Run failed");
    stopper.join().expect("stopper panicked");

    assert!(matches!(outcome, RunOutcome::Stopped { .. }));
    assert_eq!(driver.interpreter().stop_requests, 1);
}

#[test]
fn test_yield_cadence() {
    let script = (0..249).map(|i| step(i, None, StepState::Continue)).collect();
    let mut driver = Driver::new(ScriptedInterpreter::new(script));
    let mut host = RecordingHost::new();

    let outcome = driver.run(SOURCE, &mut host).expect("Run failed");

    assert_eq!(outcome.steps(), 250);
    assert_eq!(host.yields, 2);
    assert!(host.steps.is_empty());
    assert!(host.delays.is_empty());
}

#[test]
fn test_debug_mode_reports_lines() {
    let config = DriverConfig {
        debug: true,
        step_delay: Duration::from_millis(5),
        ..DriverConfig::default()
    };
    let interpreter = ScriptedInterpreter::new(vec![
        step(1, None, StepState::Continue),
        step(2, None, StepState::Continue),
        step(4, None, StepState::Done),
    ]);
    let mut driver = Driver::with_config(interpreter, config);
    let mut host = RecordingHost::new();

    let outcome = driver.run(SOURCE, &mut host).expect("Run failed");

    assert_eq!(outcome, RunOutcome::Completed { steps: 3 });
    assert_eq!(host.steps, vec![1, 2, 4]);
    assert_eq!(host.delays, vec![Duration::from_millis(5); 2]);
}

#[test]
fn test_default_config() {
    let config = DriverConfig::default();
    assert_eq!(config.yield_every, 100);
    assert!(!config.debug);
    assert_eq!(config.step_delay, Duration::from_millis(100));
}
