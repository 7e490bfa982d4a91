pub mod emitter;
pub mod error;
pub mod parser;
pub mod util;

pub use emitter::{Options, QuoteStyle};
pub use error::Error;

/// Convert commented-JSON text into a JavaScript object-literal rendering.
pub fn convert(source: &str, options: &emitter::Options) -> Result<String, Error> {
    let value = parser::parse(source)?;
    Ok(emitter::emit(&value, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_commented_json_as_a_literal() {
        let options = emitter::Options::default();
        assert_eq!(convert("// note\n{\"a\": 1}", &options).unwrap(), "{ a: 1 }");
    }

    #[test]
    fn converted_output_is_a_fixed_point() {
        // The emitted literal is itself parseable (unquoted keys and
        // single-quoted strings are valid JSON5), so a second conversion
        // must reproduce the first.
        let options = emitter::Options::default();
        let first = convert("{\"kind\": \"demo\", \"tags\": [\"a\", \"b\"]}", &options).unwrap();
        assert_eq!(first, "{ kind: 'demo', tags: [ 'a', 'b' ] }");
        let second = convert(&first, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn double_quoted_output_is_a_fixed_point() {
        let options = emitter::Options {
            quote_style: emitter::QuoteStyle::Double,
            ..Default::default()
        };
        let first = convert("{\"name\": \"O'Brien\"}", &options).unwrap();
        assert_eq!(first, "{ name: \"O'Brien\" }");
        let second = convert(&first, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn quote_free_renderings_ignore_the_quote_style() {
        let source = "{\"a\": 1, \"b\": true, \"c\": null}";
        let single = convert(source, &emitter::Options::default()).unwrap();
        let double = convert(
            source,
            &emitter::Options {
                quote_style: emitter::QuoteStyle::Double,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(single, double);
    }
}
