pub mod demo;
pub mod format;
pub mod normalize;
pub mod segment;

pub use {
    demo::word_change_demo,
    format::{Format, ToWordFormat},
    normalize::to_pascal_case_with_space,
    segment::{to_dash_case, to_snake_case},
};

/// Convert `src` to the format named by `format`.
///
/// Unknown tags return the normalized input (see [`to_pascal_case_with_space`]).
pub fn convert_string_format(src: &str, format: &str) -> String {
    Format::from_tag(format).convert(src)
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Format {
    /// Normalize `src` then apply this format.
    /// Empty input always gives an empty output.
    pub fn convert(&self, src: &str) -> String {
        if src.is_empty() {
            return String::new();
        }
        let token = to_pascal_case_with_space(src);
        match self {
            Format::Raw => token,
            Format::Up => token.to_uppercase(),
            Format::Low => token.to_lowercase(),
            // Only the first character changes: the rest keeps the normalized casing
            Format::Camel => lower_first(&token),
            Format::Pascal => upper_first(&token),
            Format::Snake => to_snake_case(&token, true).to_lowercase(),
            Format::SnakeLower => to_snake_case(&token, false).to_lowercase(),
            Format::SnakeUpper => to_snake_case(&token, false).to_uppercase(),
            Format::SnakePascal => to_snake_case(&token, false),
            Format::Dash => to_dash_case(&token),
        }
    }
}
