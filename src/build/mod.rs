//! vCard serialization: canonical wire-format output.

mod fold;

use fold::fold_line;

use crate::core::{Card, DateAndOrTime, Property, names};

/// Serializes a card to canonical vCard 4.0 text.
///
/// Emits the envelope, the FN line, the birthday and anniversary lines when
/// present, then every other property in order. Every line is
/// CRLF-terminated; property lines over 75 octets are folded. Output is
/// deterministic: serializing the same card twice is byte-identical.
#[must_use]
#[tracing::instrument(skip(card))]
pub fn serialize(card: &Card) -> String {
    tracing::debug!(
        properties = card.other_properties.len(),
        "serializing vCard"
    );

    let mut output = String::new();
    output.push_str("BEGIN:VCARD\r\n");
    output.push_str("VERSION:4.0\r\n");

    write_property(&card.formatted_name, &mut output);

    if let Some(birthday) = &card.birthday {
        write_date_property(names::BDAY, birthday, &mut output);
    }
    if let Some(anniversary) = &card.anniversary {
        write_date_property(names::ANNIVERSARY, anniversary, &mut output);
    }

    for property in &card.other_properties {
        write_property(property, &mut output);
    }

    output.push_str("END:VCARD\r\n");
    output
}

/// Writes one property as `[group.]name[;param=value]*:value[;value]*`.
fn write_property(property: &Property, output: &mut String) {
    let mut line = String::new();

    if !property.group.is_empty() {
        line.push_str(&property.group);
        line.push('.');
    }
    line.push_str(&property.name);

    for param in &property.params {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        line.push_str(&param.value);
    }

    line.push(':');
    for (i, value) in property.values.iter().enumerate() {
        if i > 0 {
            line.push(';');
        }
        line.push_str(value);
    }

    output.push_str(&fold_line(&line));
    output.push_str("\r\n");
}

/// Writes a birthday or anniversary line in one of its four shapes:
/// text, date+time, date-only, or time-only.
fn write_date_property(name: &str, value: &DateAndOrTime, output: &mut String) {
    let mut line = String::from(name);
    if value.is_text {
        line.push_str(";VALUE=text");
    }
    line.push(':');
    line.push_str(&value.encode());

    output.push_str(&fold_line(&line));
    output.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parameter;

    #[test]
    fn serialize_minimal_card() {
        let card = Card::new(Property::text("FN", "John Doe"));
        assert_eq!(
            serialize(&card),
            "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn serialize_parameters_and_groups() {
        let mut card = Card::new(Property::text("FN", "Jane Doe"));
        let mut tel = Property::grouped_text("item1", "TEL", "+1-555-555-5555");
        tel.add_param(Parameter::new("TYPE", "home"));
        tel.add_param(Parameter::new("PREF", "1"));
        card.add_property(tel);

        let output = serialize(&card);
        assert!(output.contains("item1.TEL;TYPE=home;PREF=1:+1-555-555-5555\r\n"));
    }

    #[test]
    fn serialize_multi_value_property() {
        let mut card = Card::new(Property::text("FN", "Jane Doe"));
        let mut n = Property::text("N", "Doe");
        n.add_value("Jane");
        n.add_value("");
        n.add_value("");
        n.add_value("");
        card.add_property(n);

        let output = serialize(&card);
        assert!(output.contains("N:Doe;Jane;;;\r\n"));
    }

    #[test]
    fn serialize_date_shapes() {
        let mut card = Card::new(Property::text("FN", "Jane Doe"));
        card.birthday = Some(DateAndOrTime::date_time("19850312", "140000", true));
        card.anniversary = Some(DateAndOrTime::text("circa 2000"));

        let output = serialize(&card);
        assert!(output.contains("BDAY:19850312T140000Z\r\n"));
        assert!(output.contains("ANNIVERSARY;VALUE=text:circa 2000\r\n"));
    }

    #[test]
    fn serialize_time_only_birthday() {
        let mut card = Card::new(Property::text("FN", "Jane Doe"));
        card.birthday = Some(DateAndOrTime::time("140000", false));

        let output = serialize(&card);
        assert!(output.contains("BDAY:T140000\r\n"));
    }

    #[test]
    fn serialize_orders_slots_before_other_properties() {
        let mut card = Card::new(Property::text("FN", "Jane Doe"));
        card.add_property(Property::text("EMAIL", "jane@example.com"));
        card.birthday = Some(DateAndOrTime::date("19850312"));

        let output = serialize(&card);
        let fn_pos = output.find("FN:").unwrap_or(usize::MAX);
        let bday_pos = output.find("BDAY:").unwrap_or(usize::MAX);
        let email_pos = output.find("EMAIL:").unwrap_or(usize::MAX);
        assert!(fn_pos < bday_pos && bday_pos < email_pos);
    }

    #[test]
    fn serialize_folds_long_lines() {
        let mut card = Card::new(Property::text("FN", "Jane Doe"));
        card.add_property(Property::text("NOTE", "X".repeat(100)));

        let output = serialize(&card);
        assert!(output.contains("\r\n "));
    }

    #[test]
    fn serialize_is_idempotent() {
        let mut card = Card::new(Property::text("FN", "Jane Doe"));
        card.add_property(Property::text("UID", "urn:uuid:1234"));
        assert_eq!(serialize(&card), serialize(&card));
    }
}
