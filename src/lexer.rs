use super::token::Token;

/// Splits program text into per-line tokens.
///
/// Every line yields at most an opcode word and a single argument word, followed by
/// `Token::Newline`. Anything after the argument is ignored, and a line whose first word
/// starts with `#` is a comment.
pub struct Lexer<'a> {
    program: &'a str,
    cursor: usize,
    line_start: bool,
    has_argument: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(program: &'a str) -> Self {
        Lexer {
            program,
            cursor: 0,
            line_start: true,
            has_argument: false,
        }
    }

    /// Get the next token. This consumes the tokens.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            self.trim();

            match self.next_char(true)? {
                b'\n' => {
                    self.cursor += 1;
                    self.line_start = true;
                    self.has_argument = false;
                    return Some(Token::Newline);
                }
                _ if self.line_start => {
                    self.line_start = false;
                    let word = self.read_word();
                    if word.starts_with('#') {
                        self.skip_line();
                        continue;
                    }
                    return Some(Token::new(word));
                }
                _ if !self.has_argument => {
                    self.has_argument = true;
                    return Some(Token::Argument(self.read_word()));
                }
                _ => self.skip_line(),
            }
        }
    }

    /// Trim whitespaces, tabs, carriage returns, form feeds
    fn trim(&mut self) {
        while let Some(ch) = self.next_char(true) {
            if !is_blank(ch) {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Read everything up to the next blank or newline
    fn read_word(&mut self) -> &'a str {
        let start_pos = self.cursor;
        while let Some(ch) = self.next_char(true) {
            if ch == b'\n' || is_blank(ch) {
                break;
            }
            self.cursor += 1;
        }

        &self.program[start_pos..self.cursor]
    }

    /// Move the cursor to the end of the current line, leaving the newline in place
    fn skip_line(&mut self) {
        while let Some(ch) = self.next_char(true) {
            if ch == b'\n' {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Get the next char and increase the cursor if `peek` is false
    fn next_char(&mut self, peek: bool) -> Option<u8> {
        let ch = *self.program.as_bytes().get(self.cursor)?;
        if !peek {
            self.cursor += 1;
        }
        Some(ch)
    }
}

fn is_blank(ch: u8) -> bool {
    ch == b' ' || ch == b'\t' || ch == b'\r' || ch == b'\x0C'
}
