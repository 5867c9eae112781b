use super::{Error, LineNumber};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// One line of console input, split into its optional line number and text.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    text: String,
}

impl Line {
    /// Leading digits followed by whitespace (or nothing) make a stored
    /// line; anything else is direct.
    pub fn new(s: &str) -> Result<Line> {
        let s = s.trim();
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        let rest = &s[digits..];
        let numbered =
            digits > 0 && (rest.is_empty() || rest.starts_with(|c: char| c.is_ascii_whitespace()));
        if !numbered {
            return Ok(Line {
                number: None,
                text: s.to_string(),
            });
        }
        match s[..digits].parse::<u16>() {
            Ok(number) => Ok(Line {
                number: Some(number),
                text: rest.trim_start().to_string(),
            }),
            Err(_) => Err(error!(InvalidArgument; "INVALID LINE NUMBER")),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
