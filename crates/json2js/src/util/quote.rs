use crate::emitter::QuoteStyle;

/// Render `s` as a JavaScript string literal in the requested quote style.
///
/// Quoting is structural: the active quote character and the backslash are
/// escaped, while the inactive quote character passes through untouched.
/// Control characters use their short escapes where JavaScript has one and
/// a `\uXXXX` escape otherwise.
pub fn quote(s: &str, style: QuoteStyle) -> String {
    let quote_char = match style {
        QuoteStyle::Single => '\'',
        QuoteStyle::Double => '"',
    };
    let mut output = String::with_capacity(s.len() + 2);
    output.push(quote_char);
    for c in s.chars() {
        match c {
            '\\' => output.push_str("\\\\"),
            '\0' => output.push_str("\\0"),
            '\u{8}' => output.push_str("\\b"),
            '\u{c}' => output.push_str("\\f"),
            '\t' => output.push_str("\\t"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            c if c == quote_char => {
                output.push('\\');
                output.push(c);
            }
            c if (c as u32) < 0x20 => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push(quote_char);
    output
}

/// Whether `s` can be used as a bare object key, i.e. is a valid
/// JavaScript identifier name (`[A-Za-z_$][A-Za-z0-9_$]*`).
pub fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
