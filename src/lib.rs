//! # TOYASM
//!
//! A textual assembly language, a two-pass assembler, and the stack
//! machine that executes the assembled image.
//!
//! Programs are assembled into a flat sequence of machine words, loaded
//! into a shared memory array, and executed by a stack machine that
//! delegates named operations to host-supplied functions.
//!
//! ```
//! use toyasm::asm;
//! use toyasm::mach::{Machine, MemoryConfig};
//!
//! let config = MemoryConfig::default();
//! let program = asm::assemble("push 2\npush 3\nadd\nprint\nhalt\n", &config)?;
//! let mut machine = Machine::new(config);
//! machine.load_program(&program)?;
//! machine.run()?;
//! # Ok::<(), toyasm::asm::Error>(())
//! ```

pub mod asm;
pub mod mach;
pub mod term;
