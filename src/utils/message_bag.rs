// Field-keyed collection of validation messages

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

/// Validation messages grouped by field name, serialized as `{ field: [messages] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBag(BTreeMap<String, Vec<String>>);

impl MessageBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag holding a single message for `field`
    pub fn with(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut bag: MessageBag = Self::new();
        bag.add(field, message);
        bag
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&ValidationErrors> for MessageBag {
    fn from(errors: &ValidationErrors) -> Self {
        let mut bag: MessageBag = Self::new();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                bag.add(field.to_string(), describe(error));
            }
        }

        bag
    }
}

// Custom message when the rule declares one, otherwise the rule code ("required", "email", ...)
fn describe(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}
