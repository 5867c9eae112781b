use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn eval(memory: &mut Memory, s: &str) -> Result<Word, Error> {
    Evaluator::new(memory, None, 10)
        .evaluate(s)
        .map(|evaluation| evaluation.value)
}

fn value(s: &str) -> Word {
    eval(&mut Memory::new(256), s).unwrap()
}

fn code(s: &str) -> ErrorCode {
    eval(&mut Memory::new(256), s).unwrap_err().code()
}

#[test]
fn test_arithmetic() {
    assert_eq!(value("5 3 +"), 8);
    assert_eq!(value("2 3 -"), -1);
    assert_eq!(value("6 7 *"), 42);
    assert_eq!(value("7 2 /"), 3);
    assert_eq!(value("7 2 %"), 1);
    assert_eq!(value("0x7FFFFFFF 1 +"), i32::MIN);
}

#[test]
fn test_bits() {
    assert_eq!(value("0b1100 0b1010 &"), 0b1000);
    assert_eq!(value("0b1100 0b1010 |"), 0b1110);
    assert_eq!(value("0b1100 0b1010 ^"), 0b0110);
    assert_eq!(value("0 ~"), -1);
    assert_eq!(value("1 4 <<"), 16);
    assert_eq!(value("0x100 4 >>"), 0x10);
}

#[test]
fn test_comparisons() {
    assert_eq!(value("1 2 ="), 0);
    assert_eq!(value("2 2 ="), 1);
    assert_eq!(value("1 2 <>"), 1);
    assert_eq!(value("1 2 <"), 1);
    assert_eq!(value("2 2 <="), 1);
    assert_eq!(value("1 2 >"), 0);
    assert_eq!(value("3 2 >="), 1);
}

#[test]
fn test_stack_words() {
    assert_eq!(value("4 v *"), 16);
    assert_eq!(value("5 3 s -"), -2);
    assert_eq!(value("1 2 x"), 1);
    assert_eq!(value(""), 0);
    assert_eq!(value("1 x"), 0);
}

#[test]
fn test_division_by_zero() {
    assert_eq!(code("5 0 /"), ErrorCode::MathError);
    assert_eq!(code("5 0 %"), ErrorCode::MathError);
}

#[test]
fn test_stack_limits() {
    assert_eq!(code("+"), ErrorCode::MathError);
    assert_eq!(code("1 2 3 4 5 6 7 8 9 10 11"), ErrorCode::MathError);
    assert_eq!(value("1 2 3 4 5 6 7 8 9 10"), 10);
}

#[test]
fn test_variable_pushes_its_address() {
    let mut m = Memory::new(256);
    let addr = m.var_address(Var::from_name('A').unwrap()) as Word;
    assert_eq!(eval(&mut m, "A"), Ok(addr));
    assert_eq!(eval(&mut m, "Z"), Err(crate::error!(VarsError)));
}

#[test]
fn test_fetch_and_store() {
    let mut m = Memory::new(256);
    assert_eq!(eval(&mut m, "42 A !"), Ok(0));
    assert_eq!(m.get('A'), 42);
    assert_eq!(eval(&mut m, "A @ 1 +"), Ok(43));
    assert_eq!(eval(&mut m, "5 A !+ A @"), Ok(47));
    assert_eq!(eval(&mut m, "7 A !- A @i"), Ok(40));
}

#[test]
fn test_narrow_store_keeps_neighbours() {
    let mut m = Memory::new(256);
    m.set('B', 0x1111_1111);
    eval(&mut m, "0x2345 B !c").unwrap();
    assert_eq!(m.get('B'), 0x1111_1145);
    eval(&mut m, "0x6789ABCD B !s").unwrap();
    assert_eq!(m.get('B'), 0x1111_ABCD);
    assert_eq!(eval(&mut m, "B @c"), Ok(0xCD));
    assert_eq!(eval(&mut m, "B @s"), Ok(0xABCD));
}

#[test]
fn test_raw_addresses_reach_the_script() {
    let mut m = Memory::new(256);
    m.load_line(10, "hi").unwrap();
    assert_eq!(eval(&mut m, "2 @c"), Ok(b'h' as Word));
    assert_eq!(eval(&mut m, "0 @s"), Ok(0x0A00));
}

#[test]
fn test_address_out_of_range() {
    assert_eq!(code("100000 @"), ErrorCode::MathError);
    assert_eq!(code("1 0 1 - !"), ErrorCode::MathError);
    assert_eq!(code("254 @"), ErrorCode::MathError);
}

#[test]
fn test_rest_of_line() {
    let mut m = Memory::new(256);
    let evaluation = Evaluator::new(&mut m, None, 10)
        .evaluate("1 2 <]  puts yes")
        .unwrap();
    assert_eq!(
        evaluation,
        Evaluation {
            value: 1,
            rest: 8
        }
    );
    assert!(evaluation.is_true());
}

struct Register(Rc<Cell<Word>>);

impl ExternalMemory for Register {
    fn read(&mut self, addr: Word, _width: Width) -> Option<Word> {
        if addr == 0x4000_0000 {
            Some(self.0.get())
        } else {
            None
        }
    }

    fn write(&mut self, addr: Word, _width: Width, value: Word) -> Option<()> {
        if addr == 0x4000_0000 {
            self.0.set(value);
            Some(())
        } else {
            None
        }
    }
}

#[test]
fn test_external_memory() {
    let cell = Rc::new(Cell::new(5));
    let mut external: Box<dyn ExternalMemory> = Box::new(Register(cell.clone()));
    let mut m = Memory::new(256);
    let evaluation = Evaluator::new(&mut m, Some(&mut external), 10)
        .evaluate("0x40000000 v @ 1 + s !")
        .unwrap();
    assert_eq!(evaluation.value, 0);
    assert_eq!(cell.get(), 6);
    let error = Evaluator::new(&mut m, Some(&mut external), 10)
        .evaluate("0x40000004 @")
        .unwrap_err();
    assert_eq!(error.code(), ErrorCode::MathError);
}
