//! vCard 4.0 contact-record library.
//!
//! Parses, validates, and serializes single-record vCard files: one contact
//! per file, CRLF-terminated lines, `BEGIN:VCARD` / `VERSION:4.0` /
//! `END:VCARD` envelope. The formatted name and the birthday/anniversary
//! date slots are modeled; every other property is carried as an opaque
//! [`Property`] with its group, parameters, and values in file order.
//!
//! ## Parsing
//!
//! ```
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! BDAY:19850312\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card = vcard4::parse(input).unwrap();
//! assert_eq!(card.formatted_name_value(), Some("John Doe"));
//! assert_eq!(card.birthday.as_ref().unwrap().date, "19850312");
//! ```
//!
//! ## Serializing
//!
//! ```
//! use vcard4::{Card, Property, serialize};
//!
//! let mut card = Card::new(Property::text("FN", "Jane Doe"));
//! card.add_property(Property::text("EMAIL", "jane@example.com"));
//!
//! let output = serialize(&card);
//! assert!(output.starts_with("BEGIN:VCARD\r\n"));
//! assert!(output.contains("EMAIL:jane@example.com\r\n"));
//! ```
//!
//! Files are handled by [`load_card`] and [`save_card`]; [`validate_card`]
//! checks an assembled card against the structural rule set. All failures
//! come back as [`VCardError`] values; the library never panics on
//! malformed input.

pub mod build;
pub mod core;
pub mod error;
pub mod parse;
pub mod validate;

use std::path::Path;

pub use crate::build::serialize;
pub use crate::core::{Card, DateAndOrTime, Parameter, Property};
pub use crate::error::{ErrorKind, VCardError, VCardResult};
pub use crate::parse::parse;
pub use crate::validate::validate_card;

/// Loads and parses a vCard file into a [`Card`].
///
/// The file is read in one scoped open-read-close span; the handle is
/// released on every exit path.
///
/// ## Errors
/// Returns [`VCardError::InvalidFile`] when the file cannot be opened or
/// read, and the parse errors of [`parse`] otherwise.
#[tracing::instrument]
pub fn load_card(path: impl AsRef<Path> + std::fmt::Debug) -> VCardResult<Card> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading vCard file");

    let contents = std::fs::read_to_string(path)
        .map_err(|err| VCardError::InvalidFile(format!("{}: {err}", path.display())))?;

    parse(&contents)
}

/// Serializes a [`Card`] to a vCard file.
///
/// A failed write aborts at the point of failure; partially written bytes
/// are not rolled back, so a failed save can leave a truncated file.
///
/// ## Errors
/// Returns [`VCardError::Write`] when the destination cannot be opened or a
/// write call fails.
#[tracing::instrument(skip(card))]
pub fn save_card(path: impl AsRef<Path> + std::fmt::Debug, card: &Card) -> VCardResult<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "saving vCard file");

    let output = serialize(card);
    std::fs::write(path, output)
        .map_err(|err| VCardError::Write(format!("{}: {err}", path.display())))
}
