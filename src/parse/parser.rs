//! vCard document parser: envelope checks, property routing, card assembly.

use super::lexer::{parse_content_line, physical_lines, unfold};
use crate::core::{Card, DateAndOrTime, Property, names};
use crate::error::{VCardError, VCardResult};

/// The one supported version line.
const VERSION_LINE: &str = "VERSION:4.0";
/// The opening envelope line.
const BEGIN_LINE: &str = "BEGIN:VCARD";
/// The terminal envelope line.
const END_LINE: &str = "END:VCARD";

/// Parses one vCard record from raw file content.
///
/// ## Errors
/// Returns [`VCardError::InvalidCard`] on a structural violation (bad line
/// terminator, bad envelope, unsupported version, missing `FN`) and
/// [`VCardError::InvalidProperty`] on a malformed property line. The first
/// violation aborts the parse; no partial card is produced.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> VCardResult<Card> {
    tracing::debug!("parsing vCard document");

    let physical = physical_lines(input)?;
    check_envelope(&physical)?;

    let logical = unfold(&physical);
    tracing::trace!(count = logical.len(), "unfolded logical lines");

    let mut formatted_name: Option<Property> = None;
    let mut birthday: Option<DateAndOrTime> = None;
    let mut anniversary: Option<DateAndOrTime> = None;
    let mut other_properties = Vec::new();

    for (line, line_num) in &logical {
        let content = parse_content_line(line, *line_num)?;
        let is_text = content.is_text_value();

        match content.name.as_str() {
            // Last FN occurrence wins; earlier ones are discarded.
            names::FN => formatted_name = Some(content.into_property()),
            names::BDAY => birthday = Some(DateAndOrTime::decode(&content.raw_value, is_text)),
            names::ANNIVERSARY => {
                anniversary = Some(DateAndOrTime::decode(&content.raw_value, is_text));
            }
            _ => other_properties.push(content.into_property()),
        }
    }

    let Some(formatted_name) = formatted_name else {
        tracing::warn!("no FN property survived parsing");
        return Err(VCardError::InvalidCard("missing FN property".into()));
    };

    tracing::debug!(
        properties = other_properties.len(),
        has_birthday = birthday.is_some(),
        has_anniversary = anniversary.is_some(),
        "parsed vCard"
    );

    Ok(Card {
        formatted_name,
        birthday,
        anniversary,
        other_properties,
    })
}

/// Structural pre-scan over the raw physical lines, before any tokenization.
///
/// The file must end with `END:VCARD`, contain at least one `FN` line, open
/// with `BEGIN:VCARD`, and declare version 4.0 on the second line.
fn check_envelope(lines: &[&str]) -> VCardResult<()> {
    let last_nonempty = lines.iter().rev().find(|l| !l.is_empty()).copied();
    if last_nonempty != Some(END_LINE) {
        return Err(VCardError::InvalidCard(format!(
            "file does not end with {END_LINE}"
        )));
    }

    if !lines.iter().any(|l| is_fn_line(l)) {
        return Err(VCardError::InvalidCard("missing FN property".into()));
    }

    if lines.first().copied() != Some(BEGIN_LINE) {
        return Err(VCardError::InvalidCard(format!(
            "file does not begin with {BEGIN_LINE}"
        )));
    }

    if lines.get(1).copied() != Some(VERSION_LINE) {
        return Err(VCardError::InvalidCard(format!(
            "second line must be {VERSION_LINE}"
        )));
    }

    Ok(())
}

/// Returns whether a raw physical line introduces an `FN` property.
fn is_fn_line(line: &str) -> bool {
    line.strip_prefix(names::FN)
        .is_some_and(|rest| rest.starts_with(':') || rest.starts_with(';'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const SIMPLE_VCARD: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n\
EMAIL:john@example.com\r\n\
END:VCARD\r\n";

    #[test]
    fn parse_simple_card() {
        let card = parse(SIMPLE_VCARD).unwrap();
        assert_eq!(card.formatted_name_value(), Some("John Doe"));
        assert_eq!(card.other_properties.len(), 1);
        assert_eq!(card.other_properties[0].name, "EMAIL");
    }

    #[test]
    fn parse_routes_birthday_and_anniversary() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n\
BDAY:19850312\r\n\
ANNIVERSARY;VALUE=text:circa 2000\r\n\
END:VCARD\r\n";

        let card = parse(input).unwrap();
        assert!(card.other_properties.is_empty());

        let birthday = card.birthday.unwrap();
        assert_eq!(birthday.date, "19850312");
        assert!(!birthday.is_text);

        let anniversary = card.anniversary.unwrap();
        assert!(anniversary.is_text);
        assert_eq!(anniversary.text, "circa 2000");
    }

    #[test]
    fn parse_duplicate_fn_keeps_last() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:First Name\r\n\
FN:Second Name\r\n\
END:VCARD\r\n";

        let card = parse(input).unwrap();
        assert_eq!(card.formatted_name_value(), Some("Second Name"));
        assert!(card.other_properties.is_empty());
    }

    #[test]
    fn parse_grouped_property() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n\
item1.TEL;TYPE=home:+1-555-555-5555\r\n\
END:VCARD\r\n";

        let card = parse(input).unwrap();
        let tel = card.get_property("TEL").unwrap();
        assert_eq!(tel.group, "item1");
        assert_eq!(tel.params[0].value, "home");
    }

    #[test]
    fn parse_missing_fn_fails() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
EMAIL:john@example.com\r\n\
END:VCARD\r\n";

        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn parse_missing_end_marker_fails() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n";

        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn parse_wrong_version_fails() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:John Doe\r\n\
END:VCARD\r\n";

        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn parse_missing_begin_fails() {
        let input = "\
VERSION:4.0\r\n\
FN:John Doe\r\n\
END:VCARD\r\n";

        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn parse_bare_lf_fails() {
        let input = "BEGIN:VCARD\nVERSION:4.0\nFN:John Doe\nEND:VCARD\n";
        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn parse_malformed_property_fails() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n\
TEL;TYPE:+1-555-555-5555\r\n\
END:VCARD\r\n";

        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidProperty);
    }

    #[test]
    fn parse_error_names_physical_line() {
        // The malformed TEL sits on physical line 6, after the envelope and
        // a folded NOTE; the diagnostic must say so.
        let input = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n\
NOTE:first part\r\n  second part\r\n\
TEL;TYPE:+1-555-555-5555\r\n\
END:VCARD\r\n";

        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidProperty);
        assert!(err.to_string().contains("line 6"), "{err}");
    }

    #[test]
    fn parse_folded_value() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe with a very long name\r\n\
NOTE:first part\r\n  second part\r\n\
END:VCARD\r\n";

        let card = parse(input).unwrap();
        let note = card.get_property("NOTE").unwrap();
        assert_eq!(note.first_value(), Some("first part second part"));
    }
}
