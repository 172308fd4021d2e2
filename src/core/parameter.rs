//! vCard parameter type.

use std::fmt;

/// A property parameter.
///
/// Both the name and the value must be non-empty for a card to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, as it appeared on the wire.
    pub name: String,
    /// Parameter value, as it appeared on the wire.
    pub value: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns whether this parameter marks the property value as free text,
    /// i.e. `VALUE=text` (case-insensitive value match).
    #[must_use]
    pub fn is_text_marker(&self) -> bool {
        self.name.eq_ignore_ascii_case("VALUE") && self.value.eq_ignore_ascii_case("text")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_wire_shape() {
        let param = Parameter::new("TYPE", "home");
        assert_eq!(param.to_string(), "TYPE=home");
    }

    #[test]
    fn text_marker() {
        assert!(Parameter::new("VALUE", "text").is_text_marker());
        assert!(Parameter::new("value", "TEXT").is_text_marker());
        assert!(!Parameter::new("VALUE", "uri").is_text_marker());
        assert!(!Parameter::new("TYPE", "text").is_text_marker());
    }
}
