use crate::asm::{self, Error};
use crate::error;
use crate::mach::{listing, Machine, MemoryConfig, Program};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read};

pub fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = run_command(&args) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn run_command(args: &[String]) -> Result<(), Error> {
    match args.first().map(|s| s.as_str()) {
        None => {
            usage();
            Ok(())
        }
        Some("--list") => {
            let program = load(arg(args, 1)?)?;
            print!("{}", listing(&program));
            Ok(())
        }
        Some("--emit") => {
            let program = load(arg(args, 1)?)?;
            save(&program, arg(args, 2)?)
        }
        Some(path) => {
            let program = load(path)?;
            let mut machine = Machine::new(MemoryConfig::default());
            register_standard(&mut machine)?;
            machine.load_program(&program)?;
            machine.run()
        }
    }
}

fn usage() {
    println!("Usage: toyasm <program.tasm|program.toy>");
    println!("       toyasm --list <program.tasm|program.toy>");
    println!("       toyasm --emit <program.tasm> <program.toy>");
}

fn arg<'a>(args: &'a [String], index: usize) -> Result<&'a str, Error> {
    match args.get(index) {
        Some(arg) => Ok(arg.as_str()),
        None => Err(error!(InternalError; "MISSING ARGUMENT")),
    }
}

/// Assemble a source file, or deserialize an already assembled `.toy`
/// image.
fn load(path: &str) -> Result<Program, Error> {
    if path.ends_with(".toy") {
        let file = open(path)?;
        let mut reader = BufReader::new(file);
        Program::deserialize(&mut reader)
    } else {
        let mut source = String::new();
        open(path)?
            .read_to_string(&mut source)
            .map_err(|e| error!(InternalError; "{}", e))?;
        asm::assemble(&source, &MemoryConfig::default())
    }
}

fn open(path: &str) -> Result<File, Error> {
    match File::open(path) {
        Ok(file) => Ok(file),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound; "{}", path)),
            _ => Err(error!(InternalError; "{}", error)),
        },
    }
}

fn save(program: &Program, path: &str) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| error!(InternalError; "{}", e))?;
    let mut writer = BufWriter::new(file);
    program
        .serialize(&mut writer)
        .map_err(|e| error!(InternalError; "{}", e))
}

/// The standard host functions every TOYASM front end provides.
fn register_standard(machine: &mut Machine) -> Result<(), Error> {
    machine.register_host_function("hostadd", |_memory, args| args.iter().sum())?;

    let interface = Interface::new("toyasm").ok();
    machine.register_host_function("hostinput", move |_memory, _args| {
        if let Some(interface) = &interface {
            let _ = interface.set_prompt("> ");
            if let Ok(ReadResult::Input(line)) = interface.read_line() {
                return line.trim().parse().unwrap_or(0);
            }
        }
        0
    })?;

    machine.register_host_function("hostprint", |memory, args| {
        let base = args.first().copied().unwrap_or(-1);
        if base >= 0 && (base as usize) < memory.len() {
            let base = base as usize;
            let count = memory[base].max(0) as usize;
            let end = (base + 1 + count).min(memory.len());
            let text: String = memory[base + 1..end]
                .iter()
                .map(|&word| std::char::from_u32(word as u32).unwrap_or('?'))
                .collect();
            print!("{}", text);
        }
        0
    })?;
    Ok(())
}
