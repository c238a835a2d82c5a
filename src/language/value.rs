//! The values attached to a single property.

use std::collections::BTreeSet;
use std::fmt;

use crate::formatting::{formatter, Identity};
use crate::language::ModelError;

/// A non-empty set of distinct text values. Iteration, and therefore
/// serialization, is always in ascending order regardless of the order the
/// values were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyValue {
    values: BTreeSet<String>,
}

impl PropertyValue {
    /// Build from any collection of strings. Repeated elements collapse into
    /// one; an empty input is rejected.
    pub fn new<I, S>(values: I) -> Result<PropertyValue, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values
            .into_iter()
            .map(Into::into)
            .collect();

        if values.is_empty() {
            return Err(ModelError::ValueRequired);
        }

        Ok(PropertyValue { values })
    }

    pub fn len(&self) -> usize {
        self.values
            .len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values
            .contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .map(String::as_str)
    }

    /// The smallest value. Handy for the many properties that only ever
    /// carry one.
    pub fn first(&self) -> &str {
        self.iter()
            .next()
            .unwrap_or_default()
    }

    pub fn add(&mut self, value: impl Into<String>) -> Result<(), ModelError> {
        let value = value.into();

        if self
            .values
            .contains(&value)
        {
            return Err(ModelError::DuplicateValue(value));
        }

        self.values
            .insert(value);
        Ok(())
    }

    pub fn remove(&mut self, value: &str) -> Result<(), ModelError> {
        if !self
            .values
            .contains(value)
        {
            return Err(ModelError::ValueNotFound(value.to_string()));
        }

        self.discard(value)?;
        Ok(())
    }

    /// Remove the value if present. Unlike remove() an absent value is not an
    /// error, but the set still refuses to become empty. Returns whether
    /// anything was removed.
    pub fn discard(&mut self, value: &str) -> Result<bool, ModelError> {
        if self
            .values
            .len()
            == 1
            && self
                .values
                .contains(value)
        {
            return Err(ModelError::LastValue(value.to_string()));
        }

        Ok(self
            .values
            .remove(value))
    }

    /// Remove and return the smallest value.
    pub fn pop(&mut self) -> Result<String, ModelError> {
        if self
            .values
            .len()
            == 1
        {
            return Err(ModelError::LastValue(
                self.first()
                    .to_string(),
            ));
        }

        self.values
            .pop_first()
            .ok_or(ModelError::ValueRequired)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::render_value(self, &Identity))
    }
}
