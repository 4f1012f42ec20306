//! Monty is a line-oriented bytecode interpreter working on a single list of integers
//! that behaves either as a stack or as a queue.
//!
//! # Example
//!
//! ```text
//! # prints 3, 2 and 1
//! push 1
//! push 2
//! push 3
//! pall
//! pop
//! pop
//! pop
//!
//! # prints "Hi"
//! queue
//! push 72
//! push 105
//! pstr
//! ```
//!
//! # Instructions
//!
//! | Instruction | Usage            | Brief   |
//! |-------------|------------------|---------|
//! | Push        | push _integer_   | Insert `integer`. At the front in stack mode, at the back in queue mode. |
//! | Pall        | pall             | Print every value, front first, one per line. |
//! | Pint        | pint             | Print the front value. |
//! | Pop         | pop              | Remove the front value. |
//! | Swap        | swap             | Exchange the two front values. |
//! | Add         | add              | Replace the two front values with `second + first`. |
//! | Sub         | sub              | Replace the two front values with `second - first`. |
//! | Mul         | mul              | Replace the two front values with `second * first`. |
//! | Div         | div              | Replace the two front values with `second / first`. |
//! | Mod         | mod              | Replace the two front values with `second % first`. |
//! | Pchar       | pchar            | Print the front value as an ASCII character. |
//! | Pstr        | pstr             | Print values as characters until a `0`, a non-ASCII value or the end. |
//! | Rotl        | rotl             | The front value moves to the back. |
//! | Rotr        | rotr             | The back value moves to the front. |
//! | Stack       | stack            | Switch to stack (LIFO) mode. This is the default. |
//! | Queue       | queue            | Switch to queue (FIFO) mode. |
//!
//! # Important notes
//!
//! - Each instruction is on its own line. Anything after the argument is ignored.
//! - Blank lines and lines starting with `#` are skipped but still counted.
//! - Arithmetic wraps around on overflow and division truncates toward zero.
//! - Source files are read as UTF-8. Invalid bytes are replaced with `U+FFFD`, so an
//!   unknown instruction made of such bytes is reported with replacement characters.
//! - The first error stops the program. It is reported as `L<line>: <message>`.

pub mod bytecode;
pub mod error;
mod lexer;
pub mod stack;
pub mod token;
pub mod vm;

use std::{fs, io::Write, path::Path};

use log::debug;

pub use error::{Fault, MontyError};
use vm::MontyVm;

/// Run `program`, writing what it prints to `out`.
pub fn run_source<W: Write>(program: &str, out: W) -> Result<(), MontyError> {
    MontyVm::load(program, out).run()
}

/// Read the file at `path` and run it.
pub fn run_file<P: AsRef<Path>, W: Write>(path: P, out: W) -> Result<(), MontyError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| {
        debug!("reading {}: {}", path.display(), err);
        MontyError::OpenFile(path.to_path_buf())
    })?;
    debug!("loaded {} byte(s) from {}", bytes.len(), path.display());

    run_source(&String::from_utf8_lossy(&bytes), out)
}
