use crate::asm::{assemble, ErrorCode};
use crate::mach::{listing, MemoryConfig, Program};

fn sample() -> Program {
    let source = "
#hostfunction hostadd
#hostfunction hostprint
#data \"count down\"
start:
push 5
callhost hostadd 1 2
print
brzero start
halt
";
    assemble(source, &MemoryConfig::default()).unwrap()
}

#[test]
fn test_round_trip() {
    let program = sample();
    let mut bytes: Vec<u8> = Vec::new();
    program.serialize(&mut bytes).unwrap();
    let restored = Program::deserialize(&mut bytes.as_slice()).unwrap();
    assert_eq!(program, restored);
}

#[test]
fn test_round_trip_is_byte_stable() {
    let program = sample();
    let mut first: Vec<u8> = Vec::new();
    program.serialize(&mut first).unwrap();
    let restored = Program::deserialize(&mut first.as_slice()).unwrap();
    let mut second: Vec<u8> = Vec::new();
    restored.serialize(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_magic_leads_the_image() {
    let program = sample();
    let mut bytes: Vec<u8> = Vec::new();
    program.serialize(&mut bytes).unwrap();
    assert_eq!(&bytes[0..6], b"TOYASM");
}

#[test]
fn test_bad_magic() {
    let program = sample();
    let mut bytes: Vec<u8> = Vec::new();
    program.serialize(&mut bytes).unwrap();
    bytes[0] = b'N';
    let error = Program::deserialize(&mut bytes.as_slice()).unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidProgramFormat);
    assert!(error.to_string().contains("BAD MAGIC"));
}

#[test]
fn test_truncated_image() {
    let program = sample();
    let mut bytes: Vec<u8> = Vec::new();
    program.serialize(&mut bytes).unwrap();
    bytes.truncate(bytes.len() / 2);
    let error = Program::deserialize(&mut bytes.as_slice()).unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidProgramFormat);
}

#[test]
fn test_label_reverse_lookup() {
    let program = sample();
    assert_eq!(program.label_at(0), Some("start"));
    assert_eq!(program.label_at(99), None);
}

#[test]
fn test_listing_names_what_it_can() {
    let text = listing(&sample());
    assert!(text.contains("hostadd"));
    assert!(text.contains("\"count down\""));
    assert!(text.contains("start:"));
    assert!(text.contains("brzero start"));
    assert!(text.contains("callhost hostadd (1, 2)"));
    assert!(text.contains("push 5"));
}
