//! vCard property type.

use std::fmt;

use super::parameter::Parameter;

/// A generic vCard property.
///
/// Values are kept in wire form (escapes untouched), so serialization is
/// byte-lossless. Every property carries at least one value on a valid card;
/// the group is empty when the property has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name, matched exactly (no case normalization).
    pub name: String,
    /// Group prefix, or empty when the property is ungrouped.
    pub group: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Values in order of appearance. Empty strings are preserved.
    pub values: Vec<String>,
}

impl Property {
    /// Creates an ungrouped property with a single value and no parameters.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: String::new(),
            params: Vec::new(),
            values: vec![value.into()],
        }
    }

    /// Creates a grouped property with a single value.
    #[must_use]
    pub fn grouped_text(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            params: Vec::new(),
            values: vec![value.into()],
        }
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    /// Adds a value to this property.
    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns the parameter with the given name, if present.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property: {} Group: {}", self.name, self.group)?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        for value in &self.values {
            write!(f, " Value: {value}")?;
        }
        Ok(())
    }
}

/// Property names the parser and validator treat specially.
pub mod names {
    /// Formatted name; mandatory, routed to its own card slot.
    pub const FN: &str = "FN";
    /// Birthday; routed to the card's date slot.
    pub const BDAY: &str = "BDAY";
    /// Anniversary; routed to the card's date slot.
    pub const ANNIVERSARY: &str = "ANNIVERSARY";

    /// Envelope-only properties.
    pub const BEGIN: &str = "BEGIN";
    /// Version tag; envelope-only, must be 4.0.
    pub const VERSION: &str = "VERSION";
    /// Terminal envelope marker.
    pub const END: &str = "END";

    /// Structured name; may carry empty values, at most one occurrence.
    pub const N: &str = "N";
    /// Address; may carry empty values.
    pub const ADR: &str = "ADR";
    /// Kind of entity; at most one occurrence.
    pub const KIND: &str = "KIND";
    /// Gender; at most one occurrence.
    pub const GENDER: &str = "GENDER";
    /// Producing product identifier; at most one occurrence.
    pub const PRODID: &str = "PRODID";
    /// Revision timestamp; at most one occurrence.
    pub const REV: &str = "REV";
    /// Unique identifier; at most one occurrence.
    pub const UID: &str = "UID";
}
