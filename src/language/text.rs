//! Encoding and decoding of the text held between `[` and `]`.
//!
//! Only two escapes exist: `\]` and `\\`. A backslash in front of anything
//! else is kept as-is. Raw line breaks are soft wraps and vanish on decode;
//! any other control character below 0x20 becomes a single space.

/// Escape a value for output between brackets.
pub fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for c in value.chars() {
        if c == ']' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Decode the raw text found between a value's brackets (the brackets
/// themselves excluded).
pub fn decode(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw
        .chars()
        .peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next) if next == ']' || next == '\\' => {
                    result.push(next);
                    chars.next();
                }
                _ => result.push('\\'),
            },
            '\r' | '\n' => continue,
            c if (c as u32) < 0x20 => result.push(' '),
            c => result.push(c),
        }
    }

    result
}
