/// Split a line into its argument vector.
///
/// Words are separated by whitespace. A `"` starts a quoted run that may
/// contain whitespace; inside it a backslash takes the next character
/// literally. An unterminated quote runs to the end of the line.
pub fn lex(s: &str) -> Vec<String> {
    ArgLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_tea_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

struct ArgLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> ArgLexer<'a> {
    fn skip_whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_tea_whitespace(*pk) {
                break;
            }
            self.chars.next();
        }
    }
}

impl<'a> Iterator for ArgLexer<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        self.chars.peek()?;
        let mut s = String::new();
        let mut quoted = false;
        while let Some(&ch) = self.chars.peek() {
            if !quoted && is_tea_whitespace(ch) {
                break;
            }
            self.chars.next();
            match ch {
                '"' => quoted = !quoted,
                '\\' if quoted => {
                    if let Some(escaped) = self.chars.next() {
                        s.push(escaped);
                    }
                }
                _ => s.push(ch),
            }
        }
        Some(s)
    }
}
