use super::Word;
use crate::asm::Error;
use crate::error;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::collections::BTreeMap;
use std::io::{Read, Write};

type Result<T> = std::result::Result<T, Error>;

const MAGIC: &[u8; 6] = b"TOYASM";

// A string longer than this in a program file is corruption, not data.
const MAX_STRING: usize = 1 << 20;

/// ## Assembled program image
///
/// The ROM word stream plus the tables that connect it to the machine:
/// host function names (index-addressed by CALL_HOST_FUNCTION), label
/// offsets, and the heap addresses of string constants. Created once by
/// the assembler and never mutated.

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    rom: Vec<Word>,
    dependencies: Vec<String>,
    labels: BTreeMap<String, Word>,
    constants: BTreeMap<String, Word>,
}

impl Program {
    pub(crate) fn new(
        rom: Vec<Word>,
        dependencies: Vec<String>,
        labels: BTreeMap<String, Word>,
        constants: BTreeMap<String, Word>,
    ) -> Program {
        Program {
            rom,
            dependencies,
            labels,
            constants,
        }
    }

    pub fn rom(&self) -> &[Word] {
        &self.rom
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn labels(&self) -> &BTreeMap<String, Word> {
        &self.labels
    }

    pub fn constants(&self) -> &BTreeMap<String, Word> {
        &self.constants
    }

    pub fn label(&self, name: &str) -> Option<Word> {
        self.labels.get(name).copied()
    }

    /// Reverse label lookup, for listings.
    pub fn label_at(&self, offset: Word) -> Option<&str> {
        self.labels
            .iter()
            .find(|(_, &o)| o == offset)
            .map(|(name, _)| name.as_str())
    }

    pub fn serialize(&self, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_all(MAGIC)?;
        out.write_i32::<LittleEndian>(self.rom.len() as i32)?;
        for &word in &self.rom {
            out.write_i32::<LittleEndian>(word)?;
        }
        out.write_i32::<LittleEndian>(self.dependencies.len() as i32)?;
        for name in &self.dependencies {
            write_string(out, name)?;
        }
        out.write_i32::<LittleEndian>(self.labels.len() as i32)?;
        for (name, &offset) in &self.labels {
            write_string(out, name)?;
            out.write_i32::<LittleEndian>(offset)?;
        }
        out.write_i32::<LittleEndian>(self.constants.len() as i32)?;
        for (literal, &address) in &self.constants {
            write_string(out, literal)?;
            out.write_i32::<LittleEndian>(address)?;
        }
        Ok(())
    }

    pub fn deserialize(input: &mut dyn Read) -> Result<Program> {
        let mut magic = [0u8; 6];
        input.read_exact(&mut magic).map_err(truncated)?;
        if &magic != MAGIC {
            return Err(error!(InvalidProgramFormat; "BAD MAGIC"));
        }
        let rom_len = read_count(input)?;
        let mut rom = Vec::with_capacity(rom_len);
        for _ in 0..rom_len {
            rom.push(input.read_i32::<LittleEndian>().map_err(truncated)?);
        }
        let dependency_len = read_count(input)?;
        let mut dependencies = Vec::with_capacity(dependency_len);
        for _ in 0..dependency_len {
            dependencies.push(read_string(input)?);
        }
        let label_len = read_count(input)?;
        let mut labels = BTreeMap::new();
        for _ in 0..label_len {
            let name = read_string(input)?;
            let offset = input.read_i32::<LittleEndian>().map_err(truncated)?;
            labels.insert(name, offset);
        }
        let constant_len = read_count(input)?;
        let mut constants = BTreeMap::new();
        for _ in 0..constant_len {
            let literal = read_string(input)?;
            let address = input.read_i32::<LittleEndian>().map_err(truncated)?;
            constants.insert(literal, address);
        }
        Ok(Program {
            rom,
            dependencies,
            labels,
            constants,
        })
    }
}

fn write_string(out: &mut dyn Write, s: &str) -> std::io::Result<()> {
    out.write_u32::<LittleEndian>(s.len() as u32)?;
    out.write_all(s.as_bytes())
}

fn read_string(input: &mut dyn Read) -> Result<String> {
    let len = input.read_u32::<LittleEndian>().map_err(truncated)? as usize;
    if len > MAX_STRING {
        return Err(error!(InvalidProgramFormat; "STRING LENGTH {}", len));
    }
    let mut buf = vec![0u8; len];
    input.read_exact(&mut buf).map_err(truncated)?;
    String::from_utf8(buf).map_err(|_| error!(InvalidProgramFormat; "INVALID STRING"))
}

fn read_count(input: &mut dyn Read) -> Result<usize> {
    let count = input.read_i32::<LittleEndian>().map_err(truncated)?;
    if count < 0 {
        return Err(error!(InvalidProgramFormat; "NEGATIVE COUNT {}", count));
    }
    Ok(count as usize)
}

fn truncated(_: std::io::Error) -> Error {
    error!(InvalidProgramFormat; "TRUNCATED PROGRAM")
}
