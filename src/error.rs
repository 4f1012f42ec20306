//! Errors raised while running a program

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::token::Op;

/// A fatal condition detected while executing a single line
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum Fault {
    #[error("usage: push integer")]
    PushUsage,
    #[error("{}", underflow_message(.0))]
    Underflow(Op),
    #[error("division by zero")]
    DivisionByZero,
    #[error("can't pchar, value out of range")]
    PcharRange,
    #[error("unknown instruction {0}")]
    UnknownOpcode(String),
}

fn underflow_message(op: &Op) -> String {
    match *op {
        Op::Pint | Op::Pchar => format!("can't {}, stack empty", op),
        Op::Pop => "can't pop an empty stack".to_string(),
        op => format!("can't {}, stack too short", op),
    }
}

/// Everything that ends a run. `Display` renders the exact diagnostic line.
#[derive(Debug, Error)]
pub enum MontyError {
    #[error("Usage: monty file")]
    Usage,
    #[error("Error: Can't open file {}", .0.display())]
    OpenFile(PathBuf),
    #[error("Error: malloc failed")]
    OutOfMemory,
    #[error("Error: {0}")]
    Io(#[from] io::Error),
    #[error("L{line}: {fault}")]
    Line { line: usize, fault: Fault },
}

impl MontyError {
    pub fn at(line: usize, fault: Fault) -> Self {
        MontyError::Line { line, fault }
    }

    /// The line fault, if this error belongs to a source line
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            MontyError::Line { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underflow_messages() {
        assert_eq!(
            Fault::Underflow(Op::Pint).to_string(),
            "can't pint, stack empty"
        );
        assert_eq!(
            Fault::Underflow(Op::Pchar).to_string(),
            "can't pchar, stack empty"
        );
        assert_eq!(
            Fault::Underflow(Op::Pop).to_string(),
            "can't pop an empty stack"
        );
        assert_eq!(
            Fault::Underflow(Op::Mod).to_string(),
            "can't mod, stack too short"
        );
    }

    #[test]
    fn diagnostics() {
        let err = MontyError::at(7, Fault::UnknownOpcode("nop".to_string()));
        assert_eq!(err.to_string(), "L7: unknown instruction nop");
        assert_eq!(
            MontyError::OpenFile(PathBuf::from("missing.m")).to_string(),
            "Error: Can't open file missing.m"
        );
        assert_eq!(MontyError::OutOfMemory.to_string(), "Error: malloc failed");
        assert_eq!(MontyError::Usage.to_string(), "Usage: monty file");
    }
}
