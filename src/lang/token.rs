/// Tokens of the bracketed postfix expression language.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Literal(i32),
    Ident(char),
    Operator(Operator),
}

/// Access width for the memory operators. The native word is 32 bits.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Width {
    Byte,
    Short,
    Int,
}

impl Width {
    pub fn size(self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Short => 2,
            Width::Int => 4,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    And,
    Or,
    Xor,
    Invert,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    ShiftLeft,
    ShiftRight,
    Fetch(Width),
    Store(Width),
    AddStore,
    SubtractStore,
    Dup,
    Swap,
    Drop,
}

/// Scans an expression up to its closing `]` or the end of input.
///
/// Bytes that mean nothing to the expression language, whitespace
/// included, are skipped.
pub struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    closed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a str) -> Scanner<'a> {
        Scanner {
            bytes: s.as_bytes(),
            pos: 0,
            closed: false,
        }
    }

    /// Offset of the first byte after the expression, past the closing
    /// bracket and any whitespace that follows it.
    pub fn remainder(mut self) -> usize {
        while self.next().is_some() {}
        while let Some(b) = self.peek() {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump_if(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn number(&mut self) -> Token {
        let mut base = 10;
        if self.peek() == Some(b'0') {
            let prefix = match self.bytes.get(self.pos + 1) {
                Some(b'x') => Some(16),
                Some(b'b') => Some(2),
                Some(b'o') => Some(8),
                _ => None,
            };
            if let Some(prefix) = prefix {
                base = prefix;
                self.pos += 2;
            }
        }
        let mut value: i32 = 0;
        while let Some(digit) = self.peek().and_then(|b| (b as char).to_digit(base)) {
            value = value.wrapping_mul(base as i32).wrapping_add(digit as i32);
            self.pos += 1;
        }
        Token::Literal(value)
    }

    fn width(&mut self) -> Width {
        if self.bump_if(b'c') {
            Width::Byte
        } else if self.bump_if(b's') {
            Width::Short
        } else {
            self.bump_if(b'i');
            Width::Int
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        use Operator::*;
        if self.closed {
            return None;
        }
        loop {
            let b = self.peek()?;
            if b.is_ascii_digit() {
                return Some(self.number());
            }
            self.pos += 1;
            let op = match b {
                b']' => {
                    self.closed = true;
                    return None;
                }
                b'A'..=b'Z' => return Some(Token::Ident(b as char)),
                b'+' => Plus,
                b'-' => Minus,
                b'*' => Multiply,
                b'/' => Divide,
                b'%' => Modulus,
                b'&' => And,
                b'|' => Or,
                b'^' => Xor,
                b'~' => Invert,
                b'=' => Equal,
                b'<' => {
                    if self.bump_if(b'<') {
                        ShiftLeft
                    } else if self.bump_if(b'=') {
                        LessEqual
                    } else if self.bump_if(b'>') {
                        NotEqual
                    } else {
                        Less
                    }
                }
                b'>' => {
                    if self.bump_if(b'>') {
                        ShiftRight
                    } else if self.bump_if(b'=') {
                        GreaterEqual
                    } else {
                        Greater
                    }
                }
                b'@' => Fetch(self.width()),
                b'!' => {
                    if self.bump_if(b'+') {
                        AddStore
                    } else if self.bump_if(b'-') {
                        SubtractStore
                    } else {
                        Store(self.width())
                    }
                }
                b'v' => Dup,
                b's' => Swap,
                b'x' => Drop,
                _ => continue,
            };
            return Some(Token::Operator(op));
        }
    }
}
