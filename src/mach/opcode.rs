use super::Word;
use std::convert::TryFrom;

/// ## Virtual machine instruction set
///
/// The TOYASM machine has no registers. Every operation is performed on
/// the stack.
///
/// For example: `5 - 2` compiles to `[PushImmediate(5), PushImmediate(2), Sub]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>
///
/// Discriminants are the words stored in ROM, so the declaration order
/// is part of the binary format.

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Opcode {
    Nop,

    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Gt,
    Eq,
    Ne,
    Le,
    Ge,
    Not,

    Branch,
    BranchIfNotZero,
    BranchIfZero,

    Call,
    Ret,

    PushImmediate,
    Get,
    GetAt,
    GetArray,
    Set,
    SetAt,
    SetArray,

    Dup,
    Swap,
    Trip,
    Discard,

    Print,
    PrintArray,
    CallHostFunction,

    Halt,
    Cmp,
}

impl Opcode {
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        use Opcode::*;
        match mnemonic {
            "nop" => Some(Nop),
            "add" => Some(Add),
            "sub" => Some(Sub),
            "mul" => Some(Mul),
            "div" => Some(Div),
            "mod" => Some(Mod),
            "lt" => Some(Lt),
            "gt" => Some(Gt),
            "eq" => Some(Eq),
            "ne" => Some(Ne),
            "le" => Some(Le),
            "ge" => Some(Ge),
            "not" => Some(Not),
            "cmp" => Some(Cmp),
            "br" => Some(Branch),
            "brzero" => Some(BranchIfZero),
            "brnzero" => Some(BranchIfNotZero),
            "call" => Some(Call),
            "ret" => Some(Ret),
            "push" => Some(PushImmediate),
            "get" => Some(Get),
            "getat" => Some(GetAt),
            "getarray" => Some(GetArray),
            "set" => Some(Set),
            "setat" => Some(SetAt),
            "setarray" => Some(SetArray),
            "dup" => Some(Dup),
            "trip" => Some(Trip),
            "swap" => Some(Swap),
            "discard" => Some(Discard),
            "print" => Some(Print),
            "printarray" => Some(PrintArray),
            "callhost" => Some(CallHostFunction),
            "halt" => Some(Halt),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            Nop => "nop",
            Add => "add",
            Sub => "sub",
            Mul => "mul",
            Div => "div",
            Mod => "mod",
            Lt => "lt",
            Gt => "gt",
            Eq => "eq",
            Ne => "ne",
            Le => "le",
            Ge => "ge",
            Not => "not",
            Cmp => "cmp",
            Branch => "br",
            BranchIfZero => "brzero",
            BranchIfNotZero => "brnzero",
            Call => "call",
            Ret => "ret",
            PushImmediate => "push",
            Get => "get",
            GetAt => "getat",
            GetArray => "getarray",
            Set => "set",
            SetAt => "setat",
            SetArray => "setarray",
            Dup => "dup",
            Trip => "trip",
            Swap => "swap",
            Discard => "discard",
            Print => "print",
            PrintArray => "printarray",
            CallHostFunction => "callhost",
            Halt => "halt",
        }
    }
}

impl TryFrom<Word> for Opcode {
    type Error = Word;
    fn try_from(word: Word) -> Result<Opcode, Word> {
        use Opcode::*;
        Ok(match word {
            0 => Nop,
            1 => Add,
            2 => Sub,
            3 => Mul,
            4 => Div,
            5 => Mod,
            6 => Lt,
            7 => Gt,
            8 => Eq,
            9 => Ne,
            10 => Le,
            11 => Ge,
            12 => Not,
            13 => Branch,
            14 => BranchIfNotZero,
            15 => BranchIfZero,
            16 => Call,
            17 => Ret,
            18 => PushImmediate,
            19 => Get,
            20 => GetAt,
            21 => GetArray,
            22 => Set,
            23 => SetAt,
            24 => SetArray,
            25 => Dup,
            26 => Swap,
            27 => Trip,
            28 => Discard,
            29 => Print,
            30 => PrintArray,
            31 => CallHostFunction,
            32 => Halt,
            33 => Cmp,
            _ => return Err(word),
        })
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
