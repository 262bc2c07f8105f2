//! Word boundary detection for the separator based formats.
//!
//! A boundary sits before an upper-case character whose previous character
//! is lower-case (`helloWorld`), or whose next character is lower-case while
//! it is not the first character (`XMLParser` splits before `P`). Nothing
//! else starts a word: runs of capitals, digits and punctuation never do.
//!
//! Case is judged on the general category (`Lu`/`Ll`) so symbols carrying a
//! case property (`Ⓑ`, `ª`) count as non-letters.

use unicode_general_category::{get_general_category, GeneralCategory};

pub(crate) fn is_upper_letter(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

pub(crate) fn is_lower_letter(c: char) -> bool {
    get_general_category(c) == GeneralCategory::LowercaseLetter
}

fn starts_word(prev: Option<char>, c: char, next: Option<char>) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    is_upper_letter(c) && (is_lower_letter(prev) || next.is_some_and(is_lower_letter))
}

/// Single pass over `s` with one character of look-behind and one of
/// look-ahead, inserting `sep` at each detected boundary.
fn segment(s: &str, sep: char, lower: bool) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut chars = s.chars().peekable();
    let mut prev = None;
    let mut needs_sep = false;

    while let Some(c) = chars.next() {
        if starts_word(prev, c, chars.peek().copied()) {
            needs_sep = true;
        }
        // Never a leading separator
        if needs_sep && !out.is_empty() {
            out.push(sep);
            needs_sep = false;
        }
        if lower {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Insert `_` at word boundaries.
/// With `camel` set every character is lower-cased, otherwise casing is kept.
pub fn to_snake_case(s: &str, camel: bool) -> String {
    segment(s, '_', camel)
}

/// Insert `-` at word boundaries, lower-casing everything.
pub fn to_dash_case(s: &str) -> String {
    segment(s, '-', true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_boundaries() {
        let test_cases = [
            ("", ""),
            ("a", "a"),
            ("A", "A"),
            ("hello", "hello"),
            ("Hello", "Hello"),
            ("HelloWorld", "Hello_World"),
            ("helloWorld", "hello_World"),
            ("XMLParser", "XML_Parser"),
            ("XMLHttpRequest", "XML_Http_Request"),
            ("ParseXML", "Parse_XML"),
            ("ABC", "ABC"),
            ("AbC", "Ab_C"),
            ("Version2Beta", "Version2_Beta"),
            ("Point3D", "Point3D"),
            ("Snake_caseWords", "Snake_case_Words"),
            ("ÉlanVital", "Élan_Vital"),
            // Cased symbols are not letters
            ("aⒷc", "aⒷc"),
            ("xⓑBB", "xⓑBB"),
            ("ªB", "ªB"),
            ("xªB", "xªB"),
            ("xªBc", "xª_Bc"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(to_snake_case(input, false), expected, "Failed for input: '{}'", input);
        }
    }

    #[test]
    fn test_camel_mode() {
        assert_eq!(to_snake_case("MyVariableName", true), "my_variable_name");
        assert_eq!(to_snake_case("XMLParser", true), "xml_parser");
        assert_eq!(to_snake_case("ABC", true), "abc");
    }

    #[test]
    fn test_dash() {
        assert_eq!(to_dash_case("HelloWorld"), "hello-world");
        assert_eq!(to_dash_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(to_dash_case("Hello"), "hello");
        assert_eq!(to_dash_case("H"), "h");
        assert_eq!(to_dash_case(""), "");
    }

    #[test]
    fn test_dash_matches_snake() {
        for input in ["HelloWorld", "XMLParser", "AbCdEF", "Point3DModel"] {
            assert_eq!(to_dash_case(input).replace('-', "_"), to_snake_case(input, true));
        }
    }
}
