//! Conversion of words and phrases between identifier naming conventions
//! (`UPPER`, `lower`, `camelCase`, `PascalCase`, `snake_case` variants, `dash-case`).

pub mod casing;
pub mod error;
pub mod parser;

pub use casing::{
    convert_string_format, to_dash_case, to_pascal_case_with_space, to_snake_case,
    word_change_demo, Format, ToWordFormat,
};
pub use error::{WordCaseError, WordCaseErrorKind};
