use std::fmt;

/// Opcodes understood by the interpreter
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Op {
    Push,
    Pall,
    Pint,
    Pop,
    Swap,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pchar,
    Pstr,
    Rotl,
    Rotr,
    Stack,
    Queue,
}

impl Op {
    /// Looks up an opcode by its source name. Names are case sensitive.
    pub fn from_name(name: &str) -> Option<Op> {
        match name {
            "push" => Some(Op::Push),
            "pall" => Some(Op::Pall),
            "pint" => Some(Op::Pint),
            "pop" => Some(Op::Pop),
            "swap" => Some(Op::Swap),
            "add" => Some(Op::Add),
            "sub" => Some(Op::Sub),
            "mul" => Some(Op::Mul),
            "div" => Some(Op::Div),
            "mod" => Some(Op::Mod),
            "pchar" => Some(Op::Pchar),
            "pstr" => Some(Op::Pstr),
            "rotl" => Some(Op::Rotl),
            "rotr" => Some(Op::Rotr),
            "stack" => Some(Op::Stack),
            "queue" => Some(Op::Queue),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Op::Push => "push",
            Op::Pall => "pall",
            Op::Pint => "pint",
            Op::Pop => "pop",
            Op::Swap => "swap",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Mod => "mod",
            Op::Pchar => "pchar",
            Op::Pstr => "pstr",
            Op::Rotl => "rotl",
            Op::Rotr => "rotr",
            Op::Stack => "stack",
            Op::Queue => "queue",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum Token<'a> {
    /// First word of a line naming a known opcode
    Instruction(Op),
    /// First word of a line that is not an opcode
    Name(&'a str),
    /// Word following the opcode
    Argument(&'a str),

    Newline,
}

impl<'a> Token<'a> {
    pub fn new(token_str: &'a str) -> Self {
        match Op::from_name(token_str) {
            Some(op) => Token::Instruction(op),
            None => Token::Name(token_str),
        }
    }
}
