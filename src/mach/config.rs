use super::Address;

/// ## Machine memory geometry
///
/// One flat word array partitioned into regions:
///
/// * `[0, program_start)` reserved
/// * `[program_start, stack_start)` code, where the ROM is copied
/// * `[stack_start, stack_max)` operand stack
/// * `[stack_max, memory_size)` constants and heap blocks
///
/// The geometry is supplied by the embedding application; `#config`
/// declarations in assembly source never override it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryConfig {
    pub memory_size: Address,
    pub program_start: Address,
    pub stack_start: Address,
    pub stack_max: Address,
}

impl Default for MemoryConfig {
    fn default() -> MemoryConfig {
        MemoryConfig {
            memory_size: 2048,
            program_start: 64,
            stack_start: 512,
            stack_max: 1024,
        }
    }
}

impl MemoryConfig {
    /// Words available to program code.
    pub fn code_capacity(&self) -> Address {
        self.stack_start - self.program_start
    }

    /// First address of the constant/heap region.
    pub fn heap_start(&self) -> Address {
        self.stack_max
    }
}
