/*!
# Rust Assembly Module

This Rust module provides lexical analysis and assembly of TOYASM
source text into executable program images.

*/

#[macro_use]
mod error;
mod assemble;
mod emit;
mod lex;
mod token;

pub use assemble::assemble;
pub use assemble::Assembler;
pub use emit::Emitter;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::Scanner;
pub use token::Token;
pub use token::TokenKind;
