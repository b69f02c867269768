#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use toyasm::asm;
use toyasm::mach::{Machine, MemoryConfig, Program};

/// Shared capture buffer for machine output.
#[derive(Clone, Default)]
pub struct Output(Rc<RefCell<Vec<u8>>>);

impl Output {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn assemble(source: &str) -> Program {
    asm::assemble(source, &MemoryConfig::default()).unwrap()
}

pub fn machine() -> (Machine, Output) {
    let mut machine = Machine::new(MemoryConfig::default());
    let output = Output::default();
    machine.set_output(Box::new(output.clone()));
    (machine, output)
}

pub fn run(source: &str) -> String {
    let (mut machine, output) = machine();
    machine.load_program(&assemble(source)).unwrap();
    machine.run().unwrap();
    output.text()
}
