mod common;
use common::*;
use toyasm::asm::ErrorCode;
use toyasm::mach::State;

#[test]
fn test_sub_keeps_evaluation_order() {
    assert_eq!(run("push 5\npush 2\nsub\nprint\nhalt\n"), "3\n");
}

#[test]
fn test_add() {
    assert_eq!(run("push 2\npush 3\nadd\nprint\nhalt\n"), "5\n");
}

#[test]
fn test_recursive_factorial() {
    let source = "
push 5
call factorial
print
halt
factorial:
dup
brnzero recurse
discard
push 1
ret
recurse:
dup
push 1
sub
call factorial
mul
ret
";
    assert_eq!(run(source), "120\n");
}

#[test]
fn test_call_ret_stack_balance() {
    let source = "
push 3
push 4
call add_pair
print
halt
add_pair:
add
ret
";
    let (mut machine, output) = machine();
    machine.load_program(&assemble(source)).unwrap();
    machine.run().unwrap();
    assert_eq!(output.text(), "7\n");
    // Net stack effect of the call was exactly its return value, and
    // print consumed that.
    assert_eq!(machine.stack().len(), 0);
}

#[test]
fn test_labels_expose_a_callable_function_table() {
    let source = "
halt
square:
dup
mul
ret
";
    let (mut machine, _) = machine();
    machine.load_program(&assemble(source)).unwrap();
    machine.push(9).unwrap();
    machine.call("square").unwrap();
    assert_eq!(machine.pop().unwrap(), 81);
    assert_eq!(machine.state(), State::Halted);
}

#[test]
fn test_halt_and_fault_are_distinguishable() {
    {
        let (mut machine, _) = machine();
        machine.load_program(&assemble("halt\n")).unwrap();
        machine.run().unwrap();
        assert_eq!(machine.state(), State::Halted);
    }
    {
        let (mut machine, _) = machine();
        machine
            .load_program(&assemble("push 1\npush 0\ndiv\n"))
            .unwrap();
        assert!(machine.run().is_err());
        assert_eq!(machine.state(), State::Faulted);
    }
}

#[test]
fn test_stack_overflow_before_corrupting_heap() {
    let source = "
loopstart:
push 1
br loopstart
";
    let (mut machine, _) = machine();
    machine.load_program(&assemble(source)).unwrap();
    let error = machine.run().unwrap_err();
    assert_eq!(error.code(), ErrorCode::StackOverflow);
    assert_eq!(machine.state(), State::Faulted);
    // The guard fired before anything spilled into the heap region.
    let heap_start = machine.config().heap_start();
    assert_eq!(machine.memory()[heap_start], 0);
}

#[test]
fn test_program_too_large_for_code_region() {
    let mut source = String::new();
    for _ in 0..512 {
        source.push_str("nop\n");
    }
    let (mut machine, _) = machine();
    let error = machine.load_program(&assemble(&source)).unwrap_err();
    assert_eq!(error.code(), ErrorCode::MemoryRange);
}
