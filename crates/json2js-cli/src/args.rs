//! Argument normalization and validation.
//!
//! Raw process arguments are first normalized into a canonical token list
//! (short bundles expanded, `--key=value` kept whole), then validated
//! against the recognized flag set and resolved into conversion
//! parameters. Normalization never drops a token and never judges flag
//! names; legality is entirely the business of [`resolve`].

use json2js::QuoteStyle;
use thiserror::Error;

/// Flags understood by the conversion grammar.
const RECOGNIZED: [&str; 4] = ["--input", "--raw", "--output", "-d"];

/// Raw arguments split into option and positional command tokens.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    pub options: Vec<String>,
    pub commands: Vec<String>,
}

/// Canonicalize raw arguments.
///
/// Tokens starting with `--` are kept verbatim (a trailing `=value` stays
/// attached); any other token starting with `-` is treated as a bundle of
/// short flags and expanded one `-x` per non-dash character. Everything
/// else is a positional command, kept only so validation can reject it.
pub fn normalize<I>(raw: I) -> Tokens
where
    I: IntoIterator<Item = String>,
{
    let mut tokens = Tokens::default();
    for arg in raw {
        if arg.starts_with("--") {
            tokens.options.push(arg);
        } else if arg.starts_with('-') {
            for c in arg.chars() {
                if c != '-' {
                    tokens.options.push(format!("-{c}"));
                }
            }
        } else {
            tokens.commands.push(arg);
        }
    }
    tokens
}

/// A violation of the command-line grammar.
///
/// These are soft failures: the dispatcher prints the diagnostic followed
/// by the general help, and the process still exits successfully.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unexpected argument `{0}`")]
    UnexpectedCommand(String),
    #[error("expected between 1 and 3 options, got {0}")]
    OptionCount(usize),
    #[error("unrecognized option `{0}`")]
    UnrecognizedOption(String),
    #[error("--input and --raw are mutually exclusive")]
    ConflictingSources,
    #[error("input path or raw content is missing")]
    MissingSource,
    #[error("output path is missing")]
    MissingOutput,
}

/// Where the document text comes from, before path resolution.
#[derive(Debug, PartialEq, Eq)]
pub enum SourceArg {
    Input(String),
    Raw(String),
}

/// Validated option values, ready for path resolution.
#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedArgs {
    pub source: SourceArg,
    pub output: Option<String>,
    pub quote_style: QuoteStyle,
}

/// Validate normalized tokens and extract the conversion parameters.
///
/// Rules are checked in order and each failure carries its own
/// diagnostic: no positional commands, between one and three options, only
/// recognized flags, `--input`/`--raw` mutually exclusive and exactly one
/// of them present with a non-empty value, `--output` non-empty when
/// given.
pub fn resolve(tokens: &Tokens) -> Result<ResolvedArgs, UsageError> {
    if let Some(command) = tokens.commands.first() {
        return Err(UsageError::UnexpectedCommand(command.clone()));
    }
    if tokens.options.is_empty() || tokens.options.len() > 3 {
        return Err(UsageError::OptionCount(tokens.options.len()));
    }
    for option in &tokens.options {
        let flag = flag_name(option);
        if !RECOGNIZED.contains(&flag) {
            return Err(UsageError::UnrecognizedOption(flag.to_string()));
        }
    }

    let input = flag_value(&tokens.options, "--input");
    let raw = flag_value(&tokens.options, "--raw");
    if input.is_some() && raw.is_some() {
        return Err(UsageError::ConflictingSources);
    }
    let source = match (input, raw) {
        (Some(path), None) if !path.is_empty() => SourceArg::Input(path.to_string()),
        (None, Some(text)) if !text.is_empty() => SourceArg::Raw(text.to_string()),
        _ => return Err(UsageError::MissingSource),
    };

    let output = match flag_value(&tokens.options, "--output") {
        Some("") => return Err(UsageError::MissingOutput),
        other => other.map(str::to_string),
    };

    Ok(ResolvedArgs {
        source,
        output,
        quote_style: quote_style(&tokens.options),
    })
}

/// `-d` switches string rendering to double quotes; the default is single.
pub fn quote_style(options: &[String]) -> QuoteStyle {
    if options.iter().any(|option| option == "-d") {
        QuoteStyle::Double
    } else {
        QuoteStyle::Single
    }
}

fn flag_name(option: &str) -> &str {
    match option.split_once('=') {
        Some((name, _)) => name,
        None => option,
    }
}

/// Value of the first occurrence of `flag`; `Some("")` when the flag is
/// present without a usable value.
fn flag_value<'a>(options: &'a [String], flag: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| flag_name(option) == flag)
        .map(|option| option.split_once('=').map_or("", |(_, value)| value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(args: &[&str]) -> Tokens {
        normalize(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn long_options_are_kept_verbatim() {
        let tokens = raw(&["--input=./a.json", "--output=b.js"]);
        assert_eq!(tokens.options, ["--input=./a.json", "--output=b.js"]);
        assert!(tokens.commands.is_empty());
    }

    #[test]
    fn short_bundles_expand_one_flag_per_character() {
        assert_eq!(raw(&["-vd"]).options, ["-v", "-d"]);
        assert_eq!(raw(&["-d"]).options, ["-d"]);
    }

    #[test]
    fn positional_tokens_are_partitioned_in_order() {
        let tokens = raw(&["convert", "--raw=1", "now"]);
        assert_eq!(tokens.options, ["--raw=1"]);
        assert_eq!(tokens.commands, ["convert", "now"]);
    }

    #[test]
    fn empty_input_yields_empty_lists() {
        let tokens = raw(&[]);
        assert!(tokens.options.is_empty());
        assert!(tokens.commands.is_empty());
    }

    #[test]
    fn resolves_a_file_source_with_defaults() {
        let resolved = resolve(&raw(&["--input=./a.json"])).unwrap();
        assert_eq!(resolved.source, SourceArg::Input("./a.json".into()));
        assert_eq!(resolved.output, None);
        assert_eq!(resolved.quote_style, QuoteStyle::Single);
    }

    #[test]
    fn resolves_the_full_flag_set() {
        let resolved = resolve(&raw(&["--raw={}", "--output=out.js", "-d"])).unwrap();
        assert_eq!(resolved.source, SourceArg::Raw("{}".into()));
        assert_eq!(resolved.output, Some("out.js".into()));
        assert_eq!(resolved.quote_style, QuoteStyle::Double);
    }

    #[test]
    fn quote_flag_is_position_independent() {
        let resolved = resolve(&raw(&["-d", "--raw=1"])).unwrap();
        assert_eq!(resolved.quote_style, QuoteStyle::Double);
    }

    #[test]
    fn rejects_positional_commands() {
        assert_eq!(
            resolve(&raw(&["convert", "--raw=1"])),
            Err(UsageError::UnexpectedCommand("convert".into()))
        );
    }

    #[test]
    fn rejects_option_counts_outside_the_bound() {
        assert_eq!(resolve(&raw(&[])), Err(UsageError::OptionCount(0)));
        assert_eq!(
            resolve(&raw(&["--raw=1", "--output=a", "-d", "-d"])),
            Err(UsageError::OptionCount(4))
        );
    }

    #[test]
    fn rejects_unrecognized_flags() {
        assert_eq!(
            resolve(&raw(&["--raw=1", "--verbose"])),
            Err(UsageError::UnrecognizedOption("--verbose".into()))
        );
        assert_eq!(
            resolve(&raw(&["-x"])),
            Err(UsageError::UnrecognizedOption("-x".into()))
        );
    }

    #[test]
    fn rejects_conflicting_sources() {
        assert_eq!(
            resolve(&raw(&["--input=a", "--raw=1"])),
            Err(UsageError::ConflictingSources)
        );
    }

    #[test]
    fn rejects_missing_or_empty_source_values() {
        assert_eq!(resolve(&raw(&["-d"])), Err(UsageError::MissingSource));
        assert_eq!(resolve(&raw(&["--input="])), Err(UsageError::MissingSource));
        assert_eq!(resolve(&raw(&["--input"])), Err(UsageError::MissingSource));
        assert_eq!(resolve(&raw(&["--raw="])), Err(UsageError::MissingSource));
    }

    #[test]
    fn rejects_an_empty_output_value() {
        assert_eq!(
            resolve(&raw(&["--raw=1", "--output="])),
            Err(UsageError::MissingOutput)
        );
    }
}
