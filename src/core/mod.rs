//! Core vCard types.
//!
//! - [`Card`] - a complete contact record
//! - [`Property`] - one named field with parameters and values
//! - [`Parameter`] - a name=value modifier on a property
//! - [`DateAndOrTime`] - the structured-or-textual BDAY/ANNIVERSARY value

mod card;
mod datetime;
mod parameter;
mod property;

pub use card::Card;
pub use datetime::DateAndOrTime;
pub use parameter::Parameter;
pub use property::{Property, names};
