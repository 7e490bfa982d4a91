//! Rendering of parsed values as JavaScript object literals.

use std::fmt::{self, Write};

use serde_json::Value;

use crate::util::quote::{is_ident, quote};

/// Quote character used for string literals and quoted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Quote style for strings and non-identifier keys.
    pub quote_style: QuoteStyle,
    /// Containers whose one-line rendering stays within this width are kept
    /// on a single line; longer ones break with two-space indentation.
    pub max_inline_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::Single,
            max_inline_width: 72,
        }
    }
}

/// Render `value` as a JavaScript object literal.
pub fn emit(value: &Value, options: &Options) -> String {
    let mut out = String::new();
    emit_value(&mut out, value, options, 0).unwrap();
    out
}

fn emit_value(f: &mut impl Write, value: &Value, options: &Options, level: usize) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(v) => write!(f, "{v}"),
        Value::Number(v) => write!(f, "{v}"),
        Value::String(v) => f.write_str(&quote(v, options.quote_style)),
        Value::Array(items) => {
            if items.is_empty() {
                return f.write_str("[]");
            }
            if let Some(inline) = inline_within(value, options, level) {
                return f.write_str(&inline);
            }
            f.write_char('[')?;
            let len = items.len();
            for (i, item) in items.iter().enumerate() {
                f.write_char('\n')?;
                write_indent(f, level + 1)?;
                emit_value(f, item, options, level + 1)?;
                if i < len - 1 {
                    f.write_char(',')?;
                }
            }
            f.write_char('\n')?;
            write_indent(f, level)?;
            f.write_char(']')
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                return f.write_str("{}");
            }
            if let Some(inline) = inline_within(value, options, level) {
                return f.write_str(&inline);
            }
            f.write_char('{')?;
            let len = entries.len();
            for (i, (key, item)) in entries.iter().enumerate() {
                f.write_char('\n')?;
                write_indent(f, level + 1)?;
                write_key(f, key, options)?;
                f.write_str(": ")?;
                emit_value(f, item, options, level + 1)?;
                if i < len - 1 {
                    f.write_char(',')?;
                }
            }
            f.write_char('\n')?;
            write_indent(f, level)?;
            f.write_char('}')
        }
    }
}

/// One-line rendering of `value`, or `None` when it would overflow the
/// width budget at the given nesting depth.
fn inline_within(value: &Value, options: &Options, level: usize) -> Option<String> {
    let rendered = emit_inline(value, options);
    if level * 2 + rendered.chars().count() <= options.max_inline_width {
        Some(rendered)
    } else {
        None
    }
}

fn emit_inline(value: &Value, options: &Options) -> String {
    let mut out = String::new();
    emit_inline_impl(&mut out, value, options).unwrap();
    out
}

fn emit_inline_impl(f: &mut impl Write, value: &Value, options: &Options) -> fmt::Result {
    match value {
        Value::Array(items) if !items.is_empty() => {
            f.write_str("[ ")?;
            let len = items.len();
            for (i, item) in items.iter().enumerate() {
                emit_inline_impl(f, item, options)?;
                if i < len - 1 {
                    f.write_str(", ")?;
                }
            }
            f.write_str(" ]")
        }
        Value::Object(entries) if !entries.is_empty() => {
            f.write_str("{ ")?;
            let len = entries.len();
            for (i, (key, item)) in entries.iter().enumerate() {
                write_key(f, key, options)?;
                f.write_str(": ")?;
                emit_inline_impl(f, item, options)?;
                if i < len - 1 {
                    f.write_str(", ")?;
                }
            }
            f.write_str(" }")
        }
        other => emit_value(f, other, options, 0),
    }
}

fn write_key(f: &mut impl Write, key: &str, options: &Options) -> fmt::Result {
    if is_ident(key) {
        f.write_str(key)
    } else {
        f.write_str(&quote(key, options.quote_style))
    }
}

fn write_indent(f: &mut impl Write, level: usize) -> fmt::Result {
    if level > 0 {
        write!(f, "{}", "  ".repeat(level))?;
    }
    Ok(())
}
