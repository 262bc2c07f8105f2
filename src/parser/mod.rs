pub mod parser_format;

pub use parser_format::*;
