use super::*;

#[test]
fn test_push_when_full_is_refused() {
    let mut s: Stack<u8> = Stack::new(2, ErrorCode::GosubError);
    s.push(1).unwrap();
    s.push(2).unwrap();
    assert!(s.is_full());
    let error = s.push(3).unwrap_err();
    assert_eq!(error.code(), ErrorCode::GosubError);
    assert_eq!(s.as_slice(), &[1, 2]);
}

#[test]
fn test_pop_2_is_in_push_order() {
    let mut s: Stack<i32> = Stack::new(4, ErrorCode::MathError);
    s.push(5).unwrap();
    s.push(3).unwrap();
    assert_eq!(s.pop_2(), Ok((5, 3)));
    assert!(s.is_empty());
}

#[test]
fn test_pop_2_underflow_keeps_stack() {
    let mut s: Stack<i32> = Stack::new(4, ErrorCode::MathError);
    s.push(5).unwrap();
    assert_eq!(s.pop_2().unwrap_err().to_string(), "MATH ERROR; STACK UNDERFLOW");
    assert_eq!(s.len(), 1);
    assert_eq!(s.last(), Some(&5));
}
