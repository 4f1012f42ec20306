//! Virtual machine that runs the bytecode

use std::io::Write;

use log::{debug, trace};

use crate::{
    bytecode::{Instruction, Parser, Statement},
    error::{Fault, MontyError},
    stack::{Mode, Stack},
    token::Op,
};

/// Virtual machine representation
///
/// Owns the single container of a run together with the insertion mode, and writes
/// everything the program prints to `out`.
pub struct MontyVm<'a, W: Write> {
    parser: Parser<'a>,
    stack: Stack,
    mode: Mode,
    line: usize, // line of the statement being executed
    pub finished: bool,
    out: W,
}

impl<'a, W: Write> MontyVm<'a, W> {
    pub fn load(program: &'a str, out: W) -> Self {
        MontyVm {
            parser: Parser::new(program),
            stack: Stack::new(),
            mode: Mode::default(),
            line: 0,
            finished: false,
            out,
        }
    }

    /// Run every remaining line, stopping at the first fatal error.
    /// Output is flushed on both paths.
    pub fn run(&mut self) -> Result<(), MontyError> {
        let result = loop {
            match self.next_instruction() {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        self.out.flush()?;
        if result.is_ok() {
            debug!("program finished with {} value(s) left", self.stack.len());
        }
        result
    }

    /// Parse and execute the next line. Returns `false` once there is nothing left to run.
    pub fn next_instruction(&mut self) -> Result<bool, MontyError> {
        if self.finished {
            return Ok(false);
        }

        match self.parser.next() {
            Some(statement) => {
                self.execute(statement?)?;
                Ok(true)
            }
            None => {
                self.finished = true;
                Ok(false)
            }
        }
    }

    pub fn execute(&mut self, statement: Statement) -> Result<(), MontyError> {
        self.line = statement.line;
        trace!("L{}: {:?}", statement.line, statement.instruction);

        match statement.instruction {
            Instruction::Push(value) => self.stack.push(self.mode, value)?,
            Instruction::Pall => self.ins_pall()?,
            Instruction::Pint => self.ins_pint()?,
            Instruction::Pop => self.ins_pop()?,
            Instruction::Swap => self.ins_swap()?,
            Instruction::Add => self.ins_arith(Op::Add, i32::wrapping_add)?,
            Instruction::Sub => self.ins_arith(Op::Sub, i32::wrapping_sub)?,
            Instruction::Mul => self.ins_arith(Op::Mul, i32::wrapping_mul)?,
            Instruction::Div => self.ins_divide(Op::Div, i32::wrapping_div)?,
            Instruction::Mod => self.ins_divide(Op::Mod, i32::wrapping_rem)?,
            Instruction::Pchar => self.ins_pchar()?,
            Instruction::Pstr => self.ins_pstr()?,
            Instruction::Rotl => self.stack.rotate_left(),
            Instruction::Rotr => self.stack.rotate_right(),
            Instruction::Stack => self.set_mode(Mode::Stack),
            Instruction::Queue => self.set_mode(Mode::Queue),
        };

        Ok(())
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn fault(&self, fault: Fault) -> MontyError {
        MontyError::at(self.line, fault)
    }

    fn set_mode(&mut self, mode: Mode) {
        trace!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Print every value, front first
    fn ins_pall(&mut self) -> Result<(), MontyError> {
        for value in &self.stack {
            writeln!(self.out, "{}", value)?;
        }
        Ok(())
    }

    /// Print the front value
    fn ins_pint(&mut self) -> Result<(), MontyError> {
        match self.stack.front() {
            Some(value) => Ok(writeln!(self.out, "{}", value)?),
            None => Err(self.fault(Fault::Underflow(Op::Pint))),
        }
    }

    fn ins_pop(&mut self) -> Result<(), MontyError> {
        match self.stack.pop_front() {
            Some(_) => Ok(()),
            None => Err(self.fault(Fault::Underflow(Op::Pop))),
        }
    }

    fn ins_swap(&mut self) -> Result<(), MontyError> {
        if !self.stack.swap_front() {
            return Err(self.fault(Fault::Underflow(Op::Swap)));
        }
        Ok(())
    }

    /// Replace the two front values with `f(second, first)`
    fn ins_arith(&mut self, op: Op, f: fn(i32, i32) -> i32) -> Result<(), MontyError> {
        if !self.stack.fold_front(f) {
            return Err(self.fault(Fault::Underflow(op)));
        }
        Ok(())
    }

    /// Like `ins_arith`, but the front value is a divisor and must not be zero
    fn ins_divide(&mut self, op: Op, f: fn(i32, i32) -> i32) -> Result<(), MontyError> {
        match self.stack.front_pair() {
            None => Err(self.fault(Fault::Underflow(op))),
            Some((0, _)) => Err(self.fault(Fault::DivisionByZero)),
            Some(_) => self.ins_arith(op, f),
        }
    }

    /// Print the front value as an ASCII character
    fn ins_pchar(&mut self) -> Result<(), MontyError> {
        let value = match self.stack.front() {
            Some(value) => value,
            None => return Err(self.fault(Fault::Underflow(Op::Pchar))),
        };

        match ascii(value) {
            Some(ch) => Ok(writeln!(self.out, "{}", ch)?),
            None => Err(self.fault(Fault::PcharRange)),
        }
    }

    /// Print characters from the front until a zero, a non-ASCII value or the end
    fn ins_pstr(&mut self) -> Result<(), MontyError> {
        let text: String = self
            .stack
            .iter()
            .take_while(|&&value| value != 0)
            .map_while(|&value| ascii(value))
            .collect();

        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}

fn ascii(value: i32) -> Option<char> {
    u8::try_from(value)
        .ok()
        .filter(u8::is_ascii)
        .map(char::from)
}
