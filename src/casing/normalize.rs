/// Join whitespace separated words into a single token, capitalizing the
/// first character of every word.
///
/// Only word-initial characters are touched: `"my fooBar"` gives `"MyFooBar"`.
/// Runs of whitespace (leading, trailing or repeated) collapse to a single
/// word boundary and no separator is ever inserted.
pub fn to_pascal_case_with_space(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            word_start = true;
            continue;
        }
        if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}
