use super::Error;
use crate::error;
use crate::mach::{MemoryConfig, Opcode, Program, Word};
use std::collections::{BTreeMap, HashMap};

type Result<T> = std::result::Result<T, Error>;

/// ## Instruction stream emitter
///
/// Append-only builder of the ROM word stream. Forward references are
/// emitted as `-1` placeholders and patched in place when the label is
/// defined, so assembly stays a single pass over the source.

pub struct Emitter {
    rom: Vec<Word>,
    labels: BTreeMap<String, Word>,
    unpatched: HashMap<String, Vec<usize>>,
    dependencies: Vec<String>,
    constants: BTreeMap<String, Word>,
    constant_next: Word,
}

impl Emitter {
    pub fn new(config: &MemoryConfig) -> Emitter {
        Emitter {
            rom: Vec::new(),
            labels: BTreeMap::new(),
            unpatched: HashMap::new(),
            dependencies: Vec::new(),
            constants: BTreeMap::new(),
            constant_next: config.heap_start() as Word,
        }
    }

    pub fn len(&self) -> usize {
        self.rom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rom.is_empty()
    }

    pub fn emit(&mut self, opcode: Opcode) {
        self.rom.push(opcode as Word);
    }

    pub fn emit_with(&mut self, opcode: Opcode, operand: Word) {
        self.rom.push(opcode as Word);
        self.rom.push(operand);
    }

    /// Define `name` at the current ROM offset and patch every pending
    /// reference to it.
    pub fn emit_label(&mut self, name: &str) -> Result<()> {
        let offset = self.rom.len() as Word;
        if self.labels.insert(name.to_string(), offset).is_some() {
            return Err(error!(DuplicateDefinition; "LABEL {} ALREADY DEFINED", name));
        }
        if let Some(positions) = self.unpatched.remove(name) {
            for position in positions {
                self.rom[position] = offset;
            }
        }
        Ok(())
    }

    pub fn emit_jump(&mut self, opcode: Opcode, label: &str) -> Result<()> {
        match opcode {
            Opcode::Branch | Opcode::BranchIfZero | Opcode::BranchIfNotZero => {}
            _ => return Err(error!(InternalError; "EXPECTED BRANCH, GOT {}", opcode)),
        }
        self.emit_target(opcode, label);
        Ok(())
    }

    pub fn emit_call(&mut self, opcode: Opcode, label: &str) -> Result<()> {
        match opcode {
            Opcode::Call => {}
            _ => return Err(error!(InternalError; "EXPECTED CALL, GOT {}", opcode)),
        }
        self.emit_target(opcode, label);
        Ok(())
    }

    // Offsets are absolute within the code region; the machine adds
    // ProgramStart when it branches.
    fn emit_target(&mut self, opcode: Opcode, label: &str) {
        self.rom.push(opcode as Word);
        match self.labels.get(label) {
            Some(&offset) => self.rom.push(offset),
            None => {
                self.unpatched
                    .entry(label.to_string())
                    .or_default()
                    .push(self.rom.len());
                self.rom.push(-1);
            }
        }
    }

    /// Declaration order defines the index used by CALL_HOST_FUNCTION.
    pub fn add_dependency(&mut self, name: &str) -> Result<()> {
        if self.dependencies.iter().any(|d| d == name) {
            return Err(error!(DuplicateDefinition; "HOST FUNCTION {} ALREADY DECLARED", name));
        }
        self.dependencies.push(name.to_string());
        Ok(())
    }

    /// Allocate a heap address for a string constant, deduplicating by
    /// literal value. Each block takes `len + 1` words for the length
    /// prefix.
    pub fn add_constant(&mut self, literal: &str) -> Word {
        if let Some(&address) = self.constants.get(literal) {
            return address;
        }
        let address = self.constant_next;
        self.constants.insert(literal.to_string(), address);
        self.constant_next += literal.chars().count() as Word + 1;
        address
    }

    pub fn emit_host_call(&mut self, name: &str, args: &[Word]) -> Result<()> {
        let index = match self.dependencies.iter().position(|d| d == name) {
            Some(index) => index as Word,
            None => return Err(error!(MissingDependency; "UNDECLARED HOST FUNCTION {}", name)),
        };
        self.rom.push(Opcode::CallHostFunction as Word);
        self.rom.push(index);
        self.rom.push(args.len() as Word);
        self.rom.extend_from_slice(args);
        Ok(())
    }

    /// Append the trailing HALT and snapshot the immutable Program. A
    /// label still pending here was never defined.
    pub fn finish(mut self) -> Result<Program> {
        self.emit(Opcode::Halt);
        if !self.unpatched.is_empty() {
            let mut names: Vec<&str> = self.unpatched.keys().map(|n| n.as_str()).collect();
            names.sort_unstable();
            return Err(error!(UnresolvedReference; "UNDEFINED LABEL {}", names.join(", ")));
        }
        Ok(Program::new(
            self.rom,
            self.dependencies,
            self.labels,
            self.constants,
        ))
    }
}
