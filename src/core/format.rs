//! Positional template formatting
//!
//! Implements `{0}`-style positional substitution for the `*f` emit
//! variants. A mismatch between the template's placeholders and the
//! supplied arguments is a caller error and is surfaced immediately.

use super::error::{LoggerError, Result};
use std::fmt;

/// Substitute positional placeholders (`{0}`, `{1}`, ...) in `template`
/// with the display form of the corresponding argument.
///
/// Literal braces are written `{{` and `}}`. Errors on an unclosed or
/// non-numeric placeholder, an unmatched `}`, or an argument index with
/// no corresponding argument.
pub fn format_positional(template: &str, args: &[&dyn fmt::Display]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut index_str = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    index_str.push(c);
                }

                if !closed {
                    return Err(LoggerError::format_mismatch(
                        template,
                        "unclosed placeholder",
                    ));
                }

                let index: usize = index_str.parse().map_err(|_| {
                    LoggerError::format_mismatch(
                        template,
                        format!("invalid placeholder '{{{}}}'", index_str),
                    )
                })?;

                let arg = args.get(index).ok_or_else(|| {
                    LoggerError::format_mismatch(
                        template,
                        format!(
                            "argument index {} out of range ({} supplied)",
                            index,
                            args.len()
                        ),
                    )
                })?;

                out.push_str(&arg.to_string());
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(LoggerError::format_mismatch(template, "unmatched '}'"));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_substitution() {
        let result = format_positional("{0}-{1}", &[&"a", &1]).unwrap();
        assert_eq!(result, "a-1");
    }

    #[test]
    fn test_repeated_and_reordered_placeholders() {
        let result = format_positional("{1} {0} {1}", &[&"x", &"y"]).unwrap();
        assert_eq!(result, "y x y");
    }

    #[test]
    fn test_no_placeholders() {
        let result = format_positional("plain text", &[]).unwrap();
        assert_eq!(result, "plain text");
    }

    #[test]
    fn test_escaped_braces() {
        let result = format_positional("{{{0}}}", &[&42]).unwrap();
        assert_eq!(result, "{42}");
    }

    #[test]
    fn test_index_out_of_range() {
        let err = format_positional("{0} {1}", &[&"only"]).unwrap_err();
        assert!(matches!(
            err,
            LoggerError::FormatArgumentMismatch { .. }
        ));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_unclosed_placeholder() {
        let err = format_positional("{0", &[&"a"]).unwrap_err();
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn test_non_numeric_placeholder() {
        let err = format_positional("{name}", &[&"a"]).unwrap_err();
        assert!(matches!(
            err,
            LoggerError::FormatArgumentMismatch { .. }
        ));
    }

    #[test]
    fn test_unmatched_closing_brace() {
        let err = format_positional("oops }", &[]).unwrap_err();
        assert!(err.to_string().contains("unmatched"));
    }

    #[test]
    fn test_unused_arguments_are_allowed() {
        let result = format_positional("{0}", &[&"a", &"spare"]).unwrap();
        assert_eq!(result, "a");
    }
}
