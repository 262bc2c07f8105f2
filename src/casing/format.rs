use std::{fmt::Display, str::FromStr};

use tracing::trace;

use crate::{error::WordCaseError, parser::parser_format::format_tag_last};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Format {
    #[default]
    /// Normalized token as-is (fallback for unknown tags)
    Raw,
    /// Every character upper-cased
    Up,
    /// Every character lower-cased
    Low,
    /// First character lower-cased
    Camel,
    /// First character upper-cased
    Pascal,
    /// lowercase with words separated by underscore (`snake`, `sn`, `snakeCamel`)
    Snake,
    /// Words separated by underscore, then lower-cased
    SnakeLower,
    /// Words separated by underscore, then upper-cased
    SnakeUpper,
    /// Words separated by underscore, casing preserved
    SnakePascal,
    /// lowercase with words separated by dash
    Dash,
}

impl Format {
    /// All recognized tags with the format they select.
    /// The tag parser tries them in this order, so a tag must never be
    /// preceded by one of its own prefixes (`snake` after `snakeCamel`).
    pub const TAGS: [(&'static str, Format); 12] = [
        ("snakeCamel", Format::Snake),
        ("snakeLower", Format::SnakeLower),
        ("snakeUpper", Format::SnakeUpper),
        ("snakePascal", Format::SnakePascal),
        ("snake", Format::Snake),
        ("sn", Format::Snake),
        ("pascal", Format::Pascal),
        ("camel", Format::Camel),
        ("dash", Format::Dash),
        ("low", Format::Low),
        ("up", Format::Up),
        ("raw", Format::Raw),
    ];

    /// Tags used by the demonstration, in display order
    pub const DEMO_TAGS: [&'static str; 10] = [
        "up",
        "low",
        "camel",
        "pascal",
        "snake",
        "snakeCamel",
        "snakeLower",
        "snakeUpper",
        "snakePascal",
        "dash",
    ];

    /// Lenient tag lookup: anything unknown selects [`Format::Raw`]
    pub fn from_tag(tag: &str) -> Format {
        format_tag_last(tag).unwrap_or_else(|_| {
            trace!("unknown format tag {tag:?}, keeping normalized input");
            Format::Raw
        })
    }

    /// Canonical tag of the format
    pub fn tag(&self) -> &'static str {
        match self {
            Format::Raw => "raw",
            Format::Up => "up",
            Format::Low => "low",
            Format::Camel => "camel",
            Format::Pascal => "pascal",
            Format::Snake => "snake",
            Format::SnakeLower => "snakeLower",
            Format::SnakeUpper => "snakeUpper",
            Format::SnakePascal => "snakePascal",
            Format::Dash => "dash",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Format {
    type Err = WordCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(WordCaseError::empty_tag());
        }
        Ok(format_tag_last(s)?)
    }
}

pub trait ToWordFormat {
    fn to_word_format(&self, format: Format) -> String;
}

impl<T> ToWordFormat for T
where
    T: AsRef<str>,
{
    fn to_word_format(&self, format: Format) -> String {
        format.convert(self.as_ref())
    }
}
