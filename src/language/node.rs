use std::collections::BTreeMap;
use std::fmt;

use crate::formatting::{formatter, Identity};
use crate::language::property::validate_label;
use crate::language::{ModelError, Property, PropertyValue};

/// One position in a game record: its properties, each label at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Node {
    properties: BTreeMap<String, PropertyValue>,
}

impl Node {
    /// Build a Node from a list of properties, failing on the first label
    /// that repeats.
    pub fn new<I>(properties: I) -> Result<Node, ModelError>
    where
        I: IntoIterator<Item = Property>,
    {
        let mut node = Node::default();

        for property in properties {
            node.add(property)?;
        }

        Ok(node)
    }

    pub fn len(&self) -> usize {
        self.properties
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties
            .is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.properties
            .contains_key(label)
    }

    pub fn get(&self, label: &str) -> Result<&PropertyValue, ModelError> {
        self.properties
            .get(label)
            .ok_or_else(|| ModelError::PropertyNotFound(label.to_string()))
    }

    pub fn get_mut(&mut self, label: &str) -> Result<&mut PropertyValue, ModelError> {
        self.properties
            .get_mut(label)
            .ok_or_else(|| ModelError::PropertyNotFound(label.to_string()))
    }

    pub fn add(&mut self, property: Property) -> Result<(), ModelError> {
        let (label, value) = property.into_parts();

        if self
            .properties
            .contains_key(&label)
        {
            return Err(ModelError::DuplicateProperty(label));
        }

        self.properties
            .insert(label, value);
        Ok(())
    }

    /// Insert the property, replacing whatever was previously held under the
    /// same label.
    pub fn set<I, S>(&mut self, label: impl Into<String>, values: I) -> Result<(), ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        validate_label(&label)?;

        let value = PropertyValue::new(values)?;
        self.properties
            .insert(label, value);
        Ok(())
    }

    pub(crate) fn replace(&mut self, property: Property) {
        let (label, value) = property.into_parts();
        self.properties
            .insert(label, value);
    }

    pub fn remove(&mut self, label: &str) -> Result<PropertyValue, ModelError> {
        self.properties
            .remove(label)
            .ok_or_else(|| ModelError::PropertyNotFound(label.to_string()))
    }

    /// Labels and their values, in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|(label, value)| (label.as_str(), value))
    }

    pub fn properties(&self) -> Vec<Property> {
        self.properties
            .iter()
            .map(|(label, value)| Property::from_parts(label.clone(), value.clone()))
            .collect()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::render_node(self, &Identity))
    }
}
