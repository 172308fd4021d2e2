//! Structural validation of assembled cards.

use crate::core::{Card, DateAndOrTime, Property, names};
use crate::error::{VCardError, VCardResult};

/// Properties allowed at most once among the generic list.
const SINGLETONS: [&str; 6] = [
    names::KIND,
    names::N,
    names::GENDER,
    names::PRODID,
    names::REV,
    names::UID,
];

/// Properties whose values may legitimately be empty strings.
const EMPTY_VALUE_ALLOWED: [&str; 2] = [names::N, names::ADR];

/// Validates a card against the structural rule set.
///
/// Checks run in a fixed precedence and stop at the first violation:
/// the FN property shape, envelope-only `VERSION`, value presence, parameter
/// shape, singleton cardinality, misplaced `BDAY`/`ANNIVERSARY`, and finally
/// the birthday and anniversary date invariants. The card is never mutated,
/// so validating twice yields the same outcome.
///
/// ## Errors
/// Returns the first violated rule as [`VCardError::InvalidProperty`],
/// [`VCardError::InvalidCard`], or [`VCardError::InvalidDateTime`].
#[tracing::instrument(skip(card))]
pub fn validate_card(card: &Card) -> VCardResult<()> {
    check_property_shape(&card.formatted_name, false)?;

    for property in &card.other_properties {
        if property.name == names::VERSION {
            tracing::warn!("VERSION found outside the envelope");
            return Err(VCardError::InvalidCard(
                "VERSION may only appear in the envelope".into(),
            ));
        }
    }

    for property in &card.other_properties {
        let allow_empty = EMPTY_VALUE_ALLOWED.contains(&property.name.as_str());
        check_property_shape(property, allow_empty)?;
    }

    for name in SINGLETONS {
        let count = card.other_properties.iter().filter(|p| p.name == name).count();
        if count > 1 {
            tracing::warn!(property = name, count, "duplicate singleton property");
            return Err(VCardError::InvalidProperty(format!(
                "{name} may appear at most once, found {count}"
            )));
        }
    }

    for property in &card.other_properties {
        if property.name == names::BDAY || property.name == names::ANNIVERSARY {
            return Err(VCardError::InvalidProperty(format!(
                "{} must not appear as a generic property",
                property.name
            )));
        }
    }

    if let Some(birthday) = &card.birthday {
        check_date(birthday, names::BDAY)?;
    }
    if let Some(anniversary) = &card.anniversary {
        check_date(anniversary, names::ANNIVERSARY)?;
    }

    Ok(())
}

/// Checks one property: non-empty name, at least one value, and well-formed
/// parameters. Empty string values are rejected unless `allow_empty`.
fn check_property_shape(property: &Property, allow_empty: bool) -> VCardResult<()> {
    if property.name.is_empty() {
        return Err(VCardError::InvalidProperty("property with empty name".into()));
    }

    if property.values.is_empty() {
        return Err(VCardError::InvalidProperty(format!(
            "property {} has no values",
            property.name
        )));
    }
    if !allow_empty && property.values.iter().any(String::is_empty) {
        return Err(VCardError::InvalidProperty(format!(
            "property {} has an empty value",
            property.name
        )));
    }

    for param in &property.params {
        if param.name.is_empty() || param.value.is_empty() {
            return Err(VCardError::InvalidProperty(format!(
                "property {} has a parameter with an empty name or value",
                property.name
            )));
        }
    }

    Ok(())
}

/// Checks the date-and-or-time invariants for one slot.
///
/// Textual values must carry no date/time components and no UTC flag.
/// Structured values must carry no text and at least one of date or time.
fn check_date(value: &DateAndOrTime, name: &str) -> VCardResult<()> {
    if value.is_text {
        if !value.date.is_empty() || !value.time.is_empty() {
            return Err(VCardError::InvalidDateTime(format!(
                "{name}: textual value must not carry date or time components"
            )));
        }
        if value.is_utc {
            return Err(VCardError::InvalidDateTime(format!(
                "{name}: textual value must not be flagged UTC"
            )));
        }
    } else {
        if !value.text.is_empty() {
            return Err(VCardError::InvalidDateTime(format!(
                "{name}: structured value must not carry text"
            )));
        }
        if value.date.is_empty() && value.time.is_empty() {
            return Err(VCardError::InvalidDateTime(format!(
                "{name}: structured value needs a date or a time"
            )));
        }
    }

    Ok(())
}
