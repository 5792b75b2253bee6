//! Errors raised while driving an interpreter

use crate::parser::SyntaxError;
use std::fmt;

/// Why a [`Driver::run`](crate::runtime::Driver::run) failed
#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    /// The source did not parse; the interpreter was never touched
    Syntax(SyntaxError),

    /// The interpreter failed to initialise
    Init(String),

    /// The interpreter rejected the program
    Load(String),

    /// The program failed while running
    Runtime(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Syntax(err) => write!(f, "{}", err),
            DriverError::Init(msg) => write!(f, "Initialization failed: {}", msg),
            DriverError::Load(msg) => write!(f, "Load failed: {}", msg),
            DriverError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SyntaxError> for DriverError {
    fn from(err: SyntaxError) -> Self {
        DriverError::Syntax(err)
    }
}
