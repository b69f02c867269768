use super::Error;
use crate::error;
use crate::mach::Word;

type Result<T> = std::result::Result<T, Error>;

/// ## Assembly source tokens
///
/// Whitespace and newlines are tokens of their own so the assembler can
/// use end-of-line as the terminator of variable-arity instructions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    HexNumber,
    BinNumber,
    Identifier,
    Label,
    String,
    Char,
    Directive,
    Comment,
    Whitespace,
    NewLine,
    Eof,
}

impl TokenKind {
    pub fn is_number(self) -> bool {
        match self {
            TokenKind::Number | TokenKind::HexNumber | TokenKind::BinNumber => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Number => write!(f, "NUMBER"),
            HexNumber => write!(f, "HEX NUMBER"),
            BinNumber => write!(f, "BIN NUMBER"),
            Identifier => write!(f, "IDENTIFIER"),
            Label => write!(f, "LABEL"),
            String => write!(f, "STRING"),
            Char => write!(f, "CHAR"),
            Directive => write!(f, "DIRECTIVE"),
            Comment => write!(f, "COMMENT"),
            Whitespace => write!(f, "WHITESPACE"),
            NewLine => write!(f, "NEW LINE"),
            Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize, text: String) -> Token {
        Token {
            kind,
            line,
            column,
            text,
        }
    }

    /// Numeric value of a Number, HexNumber, or BinNumber token.
    pub fn number(&self) -> Result<Word> {
        let value = match self.kind {
            TokenKind::Number => self.text.parse::<Word>().ok(),
            TokenKind::HexNumber => radix(&self.text, 16),
            TokenKind::BinNumber => radix(&self.text, 2),
            _ => return Err(error!(SyntaxError, self; "EXPECTED NUMBER, GOT {}", self.kind)),
        };
        match value {
            Some(value) => Ok(value),
            None => Err(error!(SyntaxError, self; "INVALID NUMBER {}", self.text)),
        }
    }
}

// Literals up to the full 32-bit range are accepted, so 0xffffffff is -1.
fn radix(text: &str, radix: u32) -> Option<Word> {
    match Word::from_str_radix(text, radix) {
        Ok(value) => Some(value),
        Err(_) => u32::from_str_radix(text, radix).ok().map(|v| v as Word),
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.text)
    }
}
