use super::{Opcode, Program, Word};
use std::convert::TryFrom;

/// ## Program listing
///
/// Renders the dependency, constant, and label tables followed by a
/// disassembly of the ROM, with branch targets and host calls shown by
/// name where the tables allow it.

pub fn listing(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("Dependency:\n");
    for name in program.dependencies() {
        out.push_str(&format!("  {}\n", name));
    }
    out.push_str("Constants:\n");
    for (literal, address) in program.constants() {
        out.push_str(&format!("  {:?} -> {}\n", literal, address));
    }
    out.push_str("Labels:\n");
    for (name, offset) in program.labels() {
        out.push_str(&format!("  {} -> {}\n", name, offset));
    }
    out.push_str("ROM:\n");
    let rom = program.rom();
    let mut i = 0;
    while i < rom.len() {
        out.push_str(&format!("{:>4}\t", i));
        if let Some(name) = program.label_at(i as Word) {
            out.push_str(&format!("{}:\n\t", name));
        }
        let opcode = match Opcode::try_from(rom[i]) {
            Ok(opcode) => opcode,
            Err(word) => {
                out.push_str(&format!("??? {}\n", word));
                i += 1;
                continue;
            }
        };
        i += 1;
        match opcode {
            Opcode::Branch | Opcode::BranchIfZero | Opcode::BranchIfNotZero | Opcode::Call => {
                let target = operand(rom, &mut i);
                match program.label_at(target) {
                    Some(name) => out.push_str(&format!("{} {}\n", opcode, name)),
                    None => out.push_str(&format!("{} {}\n", opcode, target)),
                }
            }
            Opcode::PushImmediate | Opcode::Get | Opcode::Set => {
                let value = operand(rom, &mut i);
                out.push_str(&format!("{} {}\n", opcode, value));
            }
            Opcode::CallHostFunction => {
                let index = operand(rom, &mut i);
                let count = operand(rom, &mut i).max(0) as usize;
                let args: Vec<String> = rom[i.min(rom.len())..(i + count).min(rom.len())]
                    .iter()
                    .map(|v| v.to_string())
                    .collect();
                i += count;
                let name = match program.dependencies().get(index.max(0) as usize) {
                    Some(name) => name.as_str(),
                    None => "?",
                };
                out.push_str(&format!("{} {} ({})\n", opcode, name, args.join(", ")));
            }
            _ => {
                out.push_str(&format!("{}\n", opcode));
            }
        }
    }
    out
}

fn operand(rom: &[Word], i: &mut usize) -> Word {
    let value = rom.get(*i).copied().unwrap_or(0);
    *i += 1;
    value
}
