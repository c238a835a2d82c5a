use std::fmt;

use crate::formatting::{formatter, Identity};
use crate::language::{ModelError, PropertyValue};

/// A label together with its values, for example `AB[dd][pp]`. The label is
/// case sensitive and kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    label: String,
    value: PropertyValue,
}

impl Property {
    pub fn new<I, S>(label: impl Into<String>, values: I) -> Result<Property, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        validate_label(&label)?;

        let value = PropertyValue::new(values)?;
        Ok(Property { label, value })
    }

    pub(crate) fn from_parts(label: String, value: PropertyValue) -> Property {
        Property { label, value }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &PropertyValue {
        &self.value
    }

    pub fn add(&mut self, value: impl Into<String>) -> Result<(), ModelError> {
        self.value
            .add(value)
    }

    pub fn remove(&mut self, value: &str) -> Result<(), ModelError> {
        self.value
            .remove(value)
    }

    pub fn into_parts(self) -> (String, PropertyValue) {
        (self.label, self.value)
    }
}

/// Labels are one or more ASCII letters; anything else could not be written
/// back out and read in again.
pub(crate) fn validate_label(label: &str) -> Result<(), ModelError> {
    let re = regex!(r"^[A-Za-z]+$");

    if re.is_match(label) {
        Ok(())
    } else {
        Err(ModelError::InvalidLabel(label.to_string()))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::render_property(&self.label, &self.value, &Identity))
    }
}
