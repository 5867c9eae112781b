/// Marks a line that was cut short because an expansion did not fit.
pub const TRUNCATED: char = '~';

/// Expand `$$` and `$X` in a line, never producing more than `capacity` bytes.
///
/// `lookup` resolves a variable name to its value. Names it does not know
/// are left in the line as written.
pub fn substitute<F>(line: &str, capacity: usize, mut lookup: F) -> String
where
    F: FnMut(char) -> Option<i32>,
{
    let mut out = String::with_capacity(capacity);
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        let mut piece = String::new();
        if ch == '$' {
            match chars.peek() {
                Some('$') => {
                    chars.next();
                    piece.push('$');
                }
                Some(&name) => match lookup(name) {
                    Some(value) => {
                        chars.next();
                        piece.push_str(&value.to_string());
                    }
                    None => piece.push('$'),
                },
                None => piece.push('$'),
            }
        } else {
            piece.push(ch);
        }
        if out.len() + piece.len() > capacity {
            truncate(&mut out, capacity);
            break;
        }
        out.push_str(&piece);
    }
    out
}

fn truncate(out: &mut String, capacity: usize) {
    let mut len = capacity.saturating_sub(TRUNCATED.len_utf8()).min(out.len());
    while !out.is_char_boundary(len) {
        len -= 1;
    }
    out.truncate(len);
    if capacity >= TRUNCATED.len_utf8() {
        out.push(TRUNCATED);
    }
}
