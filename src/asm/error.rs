use super::token::Token;

/// ## Assembly and runtime errors

pub struct Error {
    code: ErrorCode,
    line: usize,
    column: usize,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::asm::Error::new($crate::asm::ErrorCode::$err)
    };
    ($err:ident, $token:expr) => {
        $crate::asm::Error::new($crate::asm::ErrorCode::$err).at($token)
    };
    ($err:ident; $($msg:tt)*) => {
        $crate::asm::Error::new($crate::asm::ErrorCode::$err).message(format!($($msg)*))
    };
    ($err:ident, $token:expr; $($msg:tt)*) => {
        $crate::asm::Error::new($crate::asm::ErrorCode::$err)
            .at($token)
            .message(format!($($msg)*))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: 0,
            column: 0,
            message: String::new(),
        }
    }

    pub fn at(mut self, token: &Token) -> Error {
        self.line = token.line;
        self.column = token.column;
        self
    }

    pub fn message(mut self, message: String) -> Error {
        self.message = message;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    LexError = 1,
    SyntaxError = 2,
    InvalidOpcode = 3,
    UnresolvedReference = 4,
    MissingDependency = 5,
    DuplicateDefinition = 6,
    InvalidProgramFormat = 7,
    StackOverflow = 8,
    StackUnderflow = 9,
    MemoryRange = 10,
    InvalidRuntimeOpcode = 11,
    DivisionByZero = 12,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::LexError => "LEX ERROR",
            ErrorCode::SyntaxError => "SYNTAX ERROR",
            ErrorCode::InvalidOpcode => "INVALID OPCODE",
            ErrorCode::UnresolvedReference => "UNRESOLVED REFERENCE",
            ErrorCode::MissingDependency => "MISSING DEPENDENCY",
            ErrorCode::DuplicateDefinition => "DUPLICATE DEFINITION",
            ErrorCode::InvalidProgramFormat => "INVALID PROGRAM FORMAT",
            ErrorCode::StackOverflow => "STACK OVERFLOW",
            ErrorCode::StackUnderflow => "STACK UNDERFLOW",
            ErrorCode::MemoryRange => "MEMORY OUT OF RANGE",
            ErrorCode::InvalidRuntimeOpcode => "INVALID OPCODE AT RUNTIME",
            ErrorCode::DivisionByZero => "DIVISION BY ZERO",
            ErrorCode::FileNotFound => "FILE NOT FOUND",
            ErrorCode::InternalError => "INTERNAL ERROR",
        };
        write!(f, "{}", code_str)?;
        if self.line > 0 {
            write!(f, " AT {}:{}", self.line, self.column)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
