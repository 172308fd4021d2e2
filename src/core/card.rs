//! Top-level contact record.

use std::fmt;

use super::datetime::DateAndOrTime;
use super::property::Property;

/// A complete contact record parsed from one vCard file.
///
/// The formatted name is mandatory and holds the last `FN` occurrence found
/// during parsing (last-wins). Birthday and anniversary live in dedicated
/// slots; every other property stays in `other_properties` in file order.
/// Dropping a card drops everything it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The `FN` property. Mandatory on every card.
    pub formatted_name: Property,
    /// Birthday, when the file carried a `BDAY` line.
    pub birthday: Option<DateAndOrTime>,
    /// Anniversary, when the file carried an `ANNIVERSARY` line.
    pub anniversary: Option<DateAndOrTime>,
    /// Every property other than `FN`, `BDAY`, and `ANNIVERSARY`, in file
    /// order.
    pub other_properties: Vec<Property>,
}

impl Card {
    /// Creates a card with just a formatted name.
    #[must_use]
    pub fn new(formatted_name: Property) -> Self {
        Self {
            formatted_name,
            birthday: None,
            anniversary: None,
            other_properties: Vec::new(),
        }
    }

    /// Appends a property to the generic list.
    pub fn add_property(&mut self, property: Property) {
        self.other_properties.push(property);
    }

    /// Returns the formatted-name display value (the first `FN` value).
    #[must_use]
    pub fn formatted_name_value(&self) -> Option<&str> {
        self.formatted_name.first_value()
    }

    /// Returns the first generic property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.other_properties.iter().find(|p| p.name == name)
    }

    /// Returns every generic property with the given name, in file order.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        self.other_properties
            .iter()
            .filter(|p| p.name == name)
            .collect()
    }
}

/// Human-readable debug dump. Not the wire format; use
/// [`serialize`](crate::build::serialize) for that.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FN: {} Group: {}", self.formatted_name.name, self.formatted_name.group)?;
        for param in &self.formatted_name.params {
            write!(f, " {param}")?;
        }
        for value in &self.formatted_name.values {
            write!(f, " Value: {value}")?;
        }
        for prop in &self.other_properties {
            write!(f, "\n{prop}")?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, "\nBirthday: {birthday}")?;
        }
        if let Some(anniversary) = &self.anniversary {
            write!(f, "\nAnniversary: {anniversary}")?;
        }
        Ok(())
    }
}
