//! # TOYASM
//!
//! Assemble and run TOYASM programs from the command line.

fn main() {
    toyasm::term::main()
}
