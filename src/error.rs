use std::{error::Error, fmt::Display};

use winnow::error::{ContextError, ParseError};

use crate::casing::Format;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum WordCaseErrorKind {
    /// Output stream error
    Io,
    /// Format tag is empty
    EmptyTag,
    /// Format tag does not name any known format
    UnknownTag,
}

#[derive(Debug, PartialEq, Clone)]
pub struct WordCaseError {
    pub kind: WordCaseErrorKind,
    /// Byte offset of the failure inside the tag
    pub offset: usize,
    pub txt: String,
}

impl Error for WordCaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for WordCaseError {
    fn from(cause: std::io::Error) -> WordCaseError {
        WordCaseError {
            kind: WordCaseErrorKind::Io,
            offset: 0,
            txt: format!("{cause}"),
        }
    }
}

impl From<ParseError<&str, ContextError>> for WordCaseError {
    fn from(cause: ParseError<&str, ContextError>) -> WordCaseError {
        WordCaseError {
            kind: WordCaseErrorKind::UnknownTag,
            offset: cause.offset(),
            txt: (*cause.input()).to_owned(),
        }
    }
}

impl WordCaseError {
    pub fn empty_tag() -> Self {
        WordCaseError {
            kind: WordCaseErrorKind::EmptyTag,
            offset: 0,
            txt: String::new(),
        }
    }

    pub fn is_tag_error(&self) -> bool {
        self.kind != WordCaseErrorKind::Io
    }
}

impl Display for WordCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            WordCaseErrorKind::Io => write!(f, "IO exception: {}", self.txt),
            WordCaseErrorKind::EmptyTag => write!(f, "Empty format tag"),
            WordCaseErrorKind::UnknownTag => {
                write!(
                    f,
                    "Unknown format tag '{}' (column {}), expected one of: ",
                    self.txt, self.offset
                )?;
                let tags: Vec<&str> = Format::TAGS.iter().map(|(tag, _)| *tag).collect();
                write!(f, "{}", tags.join(", "))
            }
        }
    }
}
