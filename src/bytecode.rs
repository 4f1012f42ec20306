//! Bytecode representation

use std::collections::HashMap;

use crate::{
    error::{Fault, MontyError},
    lexer::Lexer,
    token::{Op, Token},
};

/// Supported instructions of the bytecode
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Instruction {
    /// Insert a value according to the current mode
    Push(i32),
    /// Print every value, front first
    Pall,
    /// Print the front value
    Pint,
    /// Remove the front value
    Pop,
    /// Exchange the two front values
    Swap,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// Print the front value as an ASCII character
    Pchar,
    /// Print values as ASCII characters until a zero or a non-ASCII value
    Pstr,
    /// Front value moves to the back
    Rotl,
    /// Back value moves to the front
    Rotr,
    /// Switch to LIFO insertion
    Stack,
    /// Switch to FIFO insertion
    Queue,
}

/// An instruction together with the 1-based line it was read from
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Statement {
    pub line: usize,
    pub instruction: Instruction,
}

macro_rules! impl_parse_fn {
    ($fn_name:ident;$instruction:ident) => {
        fn $fn_name(&mut self) -> ParseRes {
            Ok(Instruction::$instruction)
        }
    };
}

type ParseRes = Result<Instruction, Fault>;
type ParseFn<'a> = fn(&mut Parser<'a>) -> ParseRes;

/// Parser to generate statements from text.
///
/// Statements are produced lazily, one per executable line, so that a bad line is only
/// reported once everything before it has run.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    parse_fns: HashMap<Op, ParseFn<'a>>,
    line: usize,
    line_ended: bool,
}

impl<'a> Parser<'a> {
    /// Initialize the parser and prepare the parser functions
    ///
    /// * `program` program to parse
    pub fn new(program: &'a str) -> Self {
        let mut parse_fns: HashMap<Op, ParseFn> = HashMap::new();
        parse_fns.insert(Op::Push, Self::parse_push);
        parse_fns.insert(Op::Pall, Self::parse_pall);
        parse_fns.insert(Op::Pint, Self::parse_pint);
        parse_fns.insert(Op::Pop, Self::parse_pop);
        parse_fns.insert(Op::Swap, Self::parse_swap);
        parse_fns.insert(Op::Add, Self::parse_add);
        parse_fns.insert(Op::Sub, Self::parse_sub);
        parse_fns.insert(Op::Mul, Self::parse_mul);
        parse_fns.insert(Op::Div, Self::parse_div);
        parse_fns.insert(Op::Mod, Self::parse_mod);
        parse_fns.insert(Op::Pchar, Self::parse_pchar);
        parse_fns.insert(Op::Pstr, Self::parse_pstr);
        parse_fns.insert(Op::Rotl, Self::parse_rotl);
        parse_fns.insert(Op::Rotr, Self::parse_rotr);
        parse_fns.insert(Op::Stack, Self::parse_stack);
        parse_fns.insert(Op::Queue, Self::parse_queue);

        Parser {
            lexer: Lexer::new(program),
            parse_fns,
            line: 1,
            line_ended: false,
        }
    }

    /// Parse the next executable line. Returns `None` once the program is exhausted.
    pub fn next_statement(&mut self) -> Option<Result<Statement, MontyError>> {
        loop {
            let line = self.line;
            let parsed = match self.lexer.next_token()? {
                Token::Newline => {
                    self.line += 1;
                    continue;
                }
                Token::Instruction(op) => {
                    let parse_fn = self.parse_fns[&op];
                    parse_fn(self)
                }
                Token::Name(name) | Token::Argument(name) => {
                    Err(Fault::UnknownOpcode(name.to_string()))
                }
            };

            self.finish_line();

            return Some(
                parsed
                    .map(|instruction| Statement { line, instruction })
                    .map_err(|fault| MontyError::at(line, fault)),
            );
        }
    }

    /// Drop whatever is left on the current line, including its newline
    fn finish_line(&mut self) {
        if self.line_ended {
            self.line_ended = false;
            self.line += 1;
            return;
        }
        while let Some(token) = self.lexer.next_token() {
            if token == Token::Newline {
                self.line += 1;
                break;
            }
        }
    }

    fn parse_push(&mut self) -> ParseRes {
        match self.lexer.next_token() {
            Some(Token::Argument(text)) => parse_integer(text)
                .map(Instruction::Push)
                .ok_or(Fault::PushUsage),
            Some(Token::Newline) => {
                self.line_ended = true;
                Err(Fault::PushUsage)
            }
            _ => Err(Fault::PushUsage),
        }
    }

    // Instructions without an argument map straight to their `Instruction`.
    impl_parse_fn! {parse_pall; Pall}
    impl_parse_fn! {parse_pint; Pint}
    impl_parse_fn! {parse_pop; Pop}
    impl_parse_fn! {parse_swap; Swap}
    impl_parse_fn! {parse_add; Add}
    impl_parse_fn! {parse_sub; Sub}
    impl_parse_fn! {parse_mul; Mul}
    impl_parse_fn! {parse_div; Div}
    impl_parse_fn! {parse_mod; Mod}
    impl_parse_fn! {parse_pchar; Pchar}
    impl_parse_fn! {parse_pstr; Pstr}
    impl_parse_fn! {parse_rotl; Rotl}
    impl_parse_fn! {parse_rotr; Rotr}
    impl_parse_fn! {parse_stack; Stack}
    impl_parse_fn! {parse_queue; Queue}
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement, MontyError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_statement()
    }
}

/// Base-10 integer with an optional sign and nothing around it
fn parse_integer(text: &str) -> Option<i32> {
    text.parse::<i32>().ok()
}
