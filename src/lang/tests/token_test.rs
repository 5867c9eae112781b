use super::*;

fn tokens(s: &str) -> Vec<Token> {
    Scanner::new(s).collect()
}

#[test]
fn test_literals() {
    assert_eq!(
        tokens("12 0x1F 0b101 0o17"),
        [
            Token::Literal(12),
            Token::Literal(31),
            Token::Literal(5),
            Token::Literal(15)
        ]
    );
}

#[test]
fn test_two_character_operators() {
    use Operator::*;
    assert_eq!(
        tokens("<< >> <= >= <> < >"),
        [ShiftLeft, ShiftRight, LessEqual, GreaterEqual, NotEqual, Less, Greater]
            .iter()
            .map(|op| Token::Operator(*op))
            .collect::<Vec<Token>>()
    );
}

#[test]
fn test_memory_operators() {
    use Operator::*;
    assert_eq!(
        tokens("A@ @c @s @i ! !c !s !i !+ !-"),
        [
            Token::Ident('A'),
            Token::Operator(Fetch(Width::Int)),
            Token::Operator(Fetch(Width::Byte)),
            Token::Operator(Fetch(Width::Short)),
            Token::Operator(Fetch(Width::Int)),
            Token::Operator(Store(Width::Int)),
            Token::Operator(Store(Width::Byte)),
            Token::Operator(Store(Width::Short)),
            Token::Operator(Store(Width::Int)),
            Token::Operator(AddStore),
            Token::Operator(SubtractStore),
        ]
    );
}

#[test]
fn test_stops_at_bracket() {
    let mut scanner = Scanner::new("1 2 +]   puts hi");
    assert_eq!(scanner.by_ref().count(), 3);
    assert_eq!(scanner.remainder(), 9);
}

#[test]
fn test_remainder_without_bracket_is_end() {
    let s = "5 3 +";
    assert_eq!(Scanner::new(s).remainder(), s.len());
}

#[test]
fn test_unknown_bytes_are_skipped() {
    assert_eq!(tokens("1 , 2 # y"), [Token::Literal(1), Token::Literal(2)]);
}
