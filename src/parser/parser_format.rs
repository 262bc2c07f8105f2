use winnow::{
    combinator::alt,
    error::{ContextError, ParseError},
    PResult, Parser,
};

use crate::casing::Format;

pub type Res<T> = PResult<T>;
pub type ResF<'a, T> = Result<T, ParseError<&'a str, ContextError>>;

fn keyword<'a>(tag: &'static str, format: Format) -> impl Parser<&'a str, Format, ContextError> {
    tag.value(format)
}

/// Format tag keyword, tried in [`Format::TAGS`] order
pub fn format_tag(input: &mut &str) -> Res<Format> {
    alt(Format::TAGS.map(|(tag, format)| keyword(tag, format))).parse_next(input)
}

/// Parse a complete tag: the whole input must be consumed
pub fn format_tag_last(input: &str) -> ResF<'_, Format> {
    format_tag.parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tag() {
        let cases = [
            ("up", Format::Up),
            ("low", Format::Low),
            ("camel", Format::Camel),
            ("pascal", Format::Pascal),
            ("snake", Format::Snake),
            ("sn", Format::Snake),
            ("snakeCamel", Format::Snake),
            ("snakeLower", Format::SnakeLower),
            ("snakeUpper", Format::SnakeUpper),
            ("snakePascal", Format::SnakePascal),
            ("dash", Format::Dash),
            ("raw", Format::Raw),
        ];
        for (tag, expected) in cases {
            assert_eq!(format_tag_last(tag).ok(), Some(expected), "Failed for tag: '{}'", tag);
        }
    }

    #[test]
    fn test_format_tag_partial() {
        // Tags are case sensitive and must match exactly
        for tag in ["", "Up", "snakecamel", "snak", "dash ", " up", "upper", "kebab"] {
            assert!(format_tag_last(tag).is_err(), "Unexpected match for tag: '{}'", tag);
        }
        let err = format_tag_last("snakeX").unwrap_err();
        assert_eq!(*err.input(), "snakeX");
    }

    #[test]
    fn test_tag_order() {
        // A tag listed after one of its prefixes could never be reached
        for (i, (tag, _)) in Format::TAGS.iter().enumerate() {
            for (earlier, _) in &Format::TAGS[..i] {
                assert!(!tag.starts_with(earlier), "'{}' shadowed by '{}'", tag, earlier);
            }
        }
    }

    #[test]
    fn test_format_tag_stream() {
        let mut input = "snakeUpper,dash";
        assert_eq!(format_tag(&mut input).ok(), Some(Format::SnakeUpper));
        assert_eq!(input, ",dash");
    }
}
