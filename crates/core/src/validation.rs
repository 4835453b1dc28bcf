//! Fluent validation rules for a single value.
//!
//! A [`ValidatorRules`] is bound to one `(value, property)` pair. Each rule
//! consumes the validator and hands it back on success, so rules compose with
//! `?` and the first failing rule aborts the rest of the chain:
//!
//! ```
//! use seedwork_core::ValidatorRules;
//!
//! # fn main() -> Result<(), seedwork_core::ValidationError> {
//! ValidatorRules::values("Movie", "name")
//!     .required()?
//!     .string()?
//!     .max_length(255)?;
//! # Ok(())
//! # }
//! ```
//!
//! Values are held as [`serde_json::Value`]. `Value::Null` stands for an
//! absent value; `Option<T>` converts `None` into it.

use serde_json::Value;
use thiserror::Error;

/// A single rule violation.
///
/// `Display` yields exactly the rule message, e.g. `The name is required.`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validator state bound to one value and the property name used in messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorRules {
    value: Value,
    property: String,
}

impl ValidatorRules {
    /// Bind a value to a property name. Never validates by itself.
    pub fn values(value: impl Into<Value>, property: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            property: property.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    /// Fails for null and the empty string. `0` and `false` are present.
    pub fn required(self) -> Result<Self, ValidationError> {
        let missing = match &self.value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if missing {
            return Err(self.reject("required", format!("The {} is required.", self.property)));
        }
        Ok(self)
    }

    /// Fails for any non-null value that is not a string.
    pub fn string(self) -> Result<Self, ValidationError> {
        if !self.value.is_null() && !self.value.is_string() {
            return Err(self.reject("string", format!("The {} must be a string.", self.property)));
        }
        Ok(self)
    }

    /// Fails for any non-null value whose length exceeds `max`.
    ///
    /// Strings are measured in characters and arrays in elements. Values with
    /// no length (numbers, booleans, objects) pass.
    pub fn max_length(self, max: usize) -> Result<Self, ValidationError> {
        let too_long = match length_of(&self.value) {
            Some(len) => len > max,
            None => false,
        };
        if too_long {
            return Err(self.reject(
                "max_length",
                format!(
                    "The {} length must be less or equal than {} characters.",
                    self.property, max
                ),
            ));
        }
        Ok(self)
    }

    /// Fails for any non-null value that is not a boolean. No coercion.
    pub fn boolean(self) -> Result<Self, ValidationError> {
        if !self.value.is_null() && !self.value.is_boolean() {
            return Err(self.reject("boolean", format!("The {} must be a boolean.", self.property)));
        }
        Ok(self)
    }

    fn reject(&self, rule: &'static str, message: String) -> ValidationError {
        tracing::debug!(property = %self.property, rule, "validation rule rejected value");
        ValidationError::new(message)
    }
}

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}
