//! vCard parsing.
//!
//! ## Usage
//!
//! ```
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card = vcard4::parse(input).unwrap();
//! assert_eq!(card.formatted_name_value(), Some("John Doe"));
//! ```

mod lexer;
mod parser;

pub use parser::parse;
