use super::Word;
use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Two operand arithmetic for the expression evaluator. Integer overflow
/// wraps.
pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: Word, rhs: Word) -> Result<Word> {
        use Operator::*;
        match op {
            Plus => Ok(lhs.wrapping_add(rhs)),
            Minus => Ok(lhs.wrapping_sub(rhs)),
            Multiply => Ok(lhs.wrapping_mul(rhs)),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            And => Ok(lhs & rhs),
            Or => Ok(lhs | rhs),
            Xor => Ok(lhs ^ rhs),
            Equal => Ok(Operation::truth(lhs == rhs)),
            NotEqual => Ok(Operation::truth(lhs != rhs)),
            Less => Ok(Operation::truth(lhs < rhs)),
            LessEqual => Ok(Operation::truth(lhs <= rhs)),
            Greater => Ok(Operation::truth(lhs > rhs)),
            GreaterEqual => Ok(Operation::truth(lhs >= rhs)),
            ShiftLeft => Ok(lhs.wrapping_shl(rhs as u32)),
            ShiftRight => Ok(lhs.wrapping_shr(rhs as u32)),
            Invert | Fetch(_) | Store(_) | AddStore | SubtractStore | Dup | Swap | Drop => {
                Err(error!(MathError; "NOT A BINARY OPERATOR"))
            }
        }
    }

    pub fn invert(val: Word) -> Word {
        !val
    }

    pub fn divide(lhs: Word, rhs: Word) -> Result<Word> {
        if rhs == 0 {
            Err(error!(MathError; "DIVISION BY ZERO"))
        } else {
            Ok(lhs.wrapping_div(rhs))
        }
    }

    pub fn modulus(lhs: Word, rhs: Word) -> Result<Word> {
        if rhs == 0 {
            Err(error!(MathError; "DIVISION BY ZERO"))
        } else {
            Ok(lhs.wrapping_rem(rhs))
        }
    }

    fn truth(b: bool) -> Word {
        if b {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_operand_order() {
        assert_eq!(Operation::binary(Operator::Minus, 5, 3).unwrap(), 2);
        assert_eq!(Operation::binary(Operator::Less, 1, 2).unwrap(), 1);
        assert_eq!(Operation::binary(Operator::ShiftLeft, 1, 4).unwrap(), 16);
    }

    #[test]
    fn test_division_by_zero() {
        let e = Operation::divide(5, 0).unwrap_err();
        assert_eq!(e.code(), ErrorCode::MathError);
        assert!(Operation::modulus(5, 0).is_err());
        assert_eq!(Operation::divide(Word::MIN, -1).unwrap(), Word::MIN);
    }
}
