use crate::asm::assemble;
use crate::mach::{Machine, MemoryConfig};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

mod program_test;

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

pub fn machine_for(source: &str) -> (Machine, Output) {
    let config = MemoryConfig::default();
    let program = assemble(source, &config).unwrap();
    let mut machine = Machine::new(config);
    let output = Output::default();
    machine.set_output(Box::new(output.clone()));
    machine.load_program(&program).unwrap();
    (machine, output)
}

pub fn run(source: &str) -> String {
    let (mut machine, output) = machine_for(source);
    machine.run().unwrap();
    output.text()
}
