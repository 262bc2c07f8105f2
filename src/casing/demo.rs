use std::io::{self, Write};

use super::{convert_string_format, Format};

/// Write `<format>: <result>` for every demo tag.
pub fn word_change_demo<W: Write>(original: &str, out: &mut W) -> io::Result<()> {
    for tag in Format::DEMO_TAGS {
        writeln!(out, "{}: {}", tag, convert_string_format(original, tag))?;
    }
    Ok(())
}
