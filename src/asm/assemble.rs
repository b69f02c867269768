use super::emit::Emitter;
use super::lex::Scanner;
use super::token::{Token, TokenKind};
use super::Error;
use crate::error;
use crate::mach::{MemoryConfig, Opcode, Program, Word};

type Result<T> = std::result::Result<T, Error>;

pub fn assemble(source: &str, config: &MemoryConfig) -> Result<Program> {
    Assembler::new(source, config)?.assemble()
}

/// ## Assembler
///
/// Single pass over the token stream, driving the Emitter directly. The
/// two-pass behavior lives in the Emitter's label patching, not in a
/// separate pass over the source.

pub struct Assembler {
    scanner: Scanner,
    current: Token,
    emitter: Emitter,
}

impl Assembler {
    pub fn new(source: &str, config: &MemoryConfig) -> Result<Assembler> {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token()?;
        Ok(Assembler {
            scanner,
            current,
            emitter: Emitter::new(config),
        })
    }

    pub fn assemble(mut self) -> Result<Program> {
        loop {
            match self.current.kind {
                TokenKind::Directive => self.directive()?,
                TokenKind::Label => {
                    let label = self.advance()?;
                    self.emitter
                        .emit_label(&label.text)
                        .map_err(|e| e.at(&label))?;
                }
                TokenKind::Identifier => self.instruction()?,
                TokenKind::NewLine | TokenKind::Whitespace | TokenKind::Comment => {
                    self.advance()?;
                }
                TokenKind::Eof => break,
                _ => {
                    return Err(
                        error!(SyntaxError, &self.current; "UNEXPECTED {}", self.current),
                    )
                }
            }
        }
        self.emitter.finish()
    }

    fn advance(&mut self) -> Result<Token> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn eat(&mut self, kinds: &[TokenKind]) -> Result<Token> {
        if kinds.contains(&self.current.kind) {
            self.advance()
        } else {
            let expected = kinds
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<String>>()
                .join(" OR ");
            Err(error!(SyntaxError, &self.current; "EXPECTED {}, GOT {}", expected, self.current))
        }
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while self.current.kind == TokenKind::Whitespace {
            self.advance()?;
        }
        Ok(())
    }

    fn identifier(&mut self) -> Result<Token> {
        self.skip_whitespace()?;
        self.eat(&[TokenKind::Identifier])
    }

    fn number(&mut self) -> Result<Word> {
        self.skip_whitespace()?;
        let token = self.eat(&[
            TokenKind::Number,
            TokenKind::HexNumber,
            TokenKind::BinNumber,
        ])?;
        token.number()
    }

    fn instruction(&mut self) -> Result<()> {
        let mnemonic = self.advance()?;
        let opcode = match Opcode::from_mnemonic(&mnemonic.text) {
            Some(opcode) => opcode,
            None => return Err(error!(InvalidOpcode, &mnemonic; "{}", mnemonic.text)),
        };
        match opcode {
            Opcode::Branch | Opcode::BranchIfZero | Opcode::BranchIfNotZero => {
                let label = self.identifier()?;
                self.emitter.emit_jump(opcode, &label.text)
            }
            Opcode::Call => {
                let label = self.identifier()?;
                self.emitter.emit_call(opcode, &label.text)
            }
            Opcode::PushImmediate | Opcode::Get | Opcode::Set => {
                let operand = self.number()?;
                self.emitter.emit_with(opcode, operand);
                Ok(())
            }
            Opcode::CallHostFunction => {
                let name = self.identifier()?;
                let mut args: Vec<Word> = Vec::new();
                // Inline arguments run to the end of the line.
                loop {
                    self.skip_whitespace()?;
                    if self.current.kind.is_number() {
                        let token = self.advance()?;
                        args.push(token.number()?);
                    } else {
                        break;
                    }
                }
                self.emitter
                    .emit_host_call(&name.text, &args)
                    .map_err(|e| e.at(&name))
            }
            _ => {
                self.emitter.emit(opcode);
                Ok(())
            }
        }
    }

    fn directive(&mut self) -> Result<()> {
        let directive = self.advance()?;
        match directive.text.as_str() {
            "config" => {
                // Machine geometry comes from MemoryConfig, not from the
                // program, so the declaration is checked and discarded.
                self.identifier()?;
                self.number()?;
                Ok(())
            }
            "hostfunction" => {
                let name = self.identifier()?;
                self.emitter
                    .add_dependency(&name.text)
                    .map_err(|e| e.at(&name))
            }
            "data" => {
                self.skip_whitespace()?;
                let literal = self.eat(&[TokenKind::String])?;
                self.emitter.add_constant(&literal.text);
                Ok(())
            }
            _ => Err(error!(SyntaxError, &directive; "UNKNOWN DIRECTIVE #{}", directive.text)),
        }
    }
}
