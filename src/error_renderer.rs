//! Source-annotated error rendering using ariadne
//!
//! An execution engine pairs each failed value operation with the position it
//! was evaluating (see [`Error::at`](crate::Error::at)). This module renders
//! such a [`LocatedError`] against the script text, pointing at the offending
//! character.

use crate::LocatedError;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<unknown>" if not provided.
    pub filename: Option<&'a str>,
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use golem::{NULL, Pos, Value, render_error};
///
/// let source = "null + 1";
/// if let Err(e) = NULL.add(&Value::int(1)) {
///     render_error(&e.at(Pos::new(1, 6)), source);
/// }
/// ```
pub fn render_error(error: &LocatedError, source: &str) {
    render_error_to(error, source, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// If the error's position does not fall inside `source`, only the message
/// line is written.
///
/// # Example
/// ```
/// use golem::{NULL, Pos, RenderConfig, Value, render_error_to};
///
/// let source = "null + 1";
/// let err = NULL.add(&Value::int(1)).unwrap_err().at(Pos::new(1, 6));
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, source, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("[V007] Error: NullValue"));
/// ```
pub fn render_error_to(
    error: &LocatedError,
    source: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<unknown>");
    let code = error.kind().code();
    let message = error.error.to_string();

    let Some(offset) = error.pos.char_offset(source) else {
        return writeln!(writer, "[{}] Error: {}", code, error);
    };
    let span = offset..offset + 1;

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_code(code)
        .with_message(&message)
        .with_config(ariadne_config)
        .with_label(
            Label::new((filename, span))
                .with_message(&message)
                .with_color(colors.next()),
        )
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, NULL, Pos, Value};
    use expect_test::{Expect, expect};
    use pretty_assertions::assert_eq;

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.golem"),
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.golem"),
        charset: CharSet::Ascii,
    };

    fn render_error_string(error: &LocatedError, source: &str, config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render_error_to(error, source, &mut buf, config).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn check_error(error: &LocatedError, source: &str, config: &RenderConfig, expected: Expect) {
        let output = render_error_string(error, source, config);
        expected.assert_eq(&output);
    }

    fn null_add() -> Error {
        NULL.add(&Value::int(1)).unwrap_err()
    }

    #[test]
    fn test_null_value_unicode() {
        check_error(
            &null_add().at(Pos::new(1, 6)),
            "null + 1",
            &UNICODE_CONFIG,
            expect![[r#"
                [V007] Error: NullValue
                   ╭─[ test.golem:1:6 ]
                   │
                 1 │ null + 1
                   │      │ 
                   │      ╰─ NullValue
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_null_value_ascii() {
        check_error(
            &null_add().at(Pos::new(1, 6)),
            "null + 1",
            &ASCII_CONFIG,
            expect![[r#"
                [V007] Error: NullValue
                   ,-[ test.golem:1:6 ]
                   |
                 1 | null + 1
                   |      | 
                   |      `- NullValue
                ---'
            "#]],
        );
    }

    #[test]
    fn test_second_line_unicode() {
        let source = "let a = 1\nlet b = a + null";
        let err = Value::int(1).add(&NULL).unwrap_err().at(Pos::new(2, 11));
        check_error(
            &err,
            source,
            &UNICODE_CONFIG,
            expect![[r#"
                [V007] Error: NullValue
                   ╭─[ test.golem:2:11 ]
                   │
                 2 │ let b = a + null
                   │           │ 
                   │           ╰─ NullValue
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_no_such_field_ascii() {
        let err = Error::no_such_field("z").at(Pos::new(1, 3));
        check_error(
            &err,
            "p.z",
            &ASCII_CONFIG,
            expect![[r#"
                [V010] Error: NoSuchField: Field 'z' not found
                   ,-[ test.golem:1:3 ]
                   |
                 1 | p.z
                   |   | 
                   |   `- NoSuchField: Field 'z' not found
                ---'
            "#]],
        );
    }

    #[test]
    fn test_position_outside_source() {
        let output = render_error_string(&null_add().at(Pos::new(5, 1)), "null + 1", &UNICODE_CONFIG);
        assert_eq!(output, "[V007] Error: NullValue at (5, 1)\n");
    }

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.charset, CharSet::Unicode);
        assert!(config.color);
        assert_eq!(config.filename, None);
    }
}
