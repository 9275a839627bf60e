//! Typed access to tool call arguments

use super::error::ToolError;
use serde_json::{Map, Value};

/// Arguments of one `tools/call`, as a JSON object.
///
/// Getters fail with [`ToolError::InvalidArguments`] naming the offending
/// field. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    values: Map<String, Value>,
}

impl ToolArguments {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Accept an object, or `null` / absent as no arguments.
    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::default()),
            other => Err(ToolError::InvalidArguments {
                field: None,
                message: format!("arguments must be an object, got {}", type_name(&other)),
            }),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// A non-empty string
    pub fn required_str(&self, name: &str) -> Result<&str, ToolError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Err(ToolError::missing(name)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(ToolError::invalid(name, format!("'{}' must not be empty", name)))
            }
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(wrong_type(name, "a string", other)),
        }
    }

    /// A string if present; blank strings count as absent
    pub fn optional_str(&self, name: &str) -> Result<Option<&str>, ToolError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(wrong_type(name, "a string", other)),
        }
    }

    /// A positive integer no larger than `max`, or `default` when absent
    pub fn optional_count(&self, name: &str, default: u64, max: u64) -> Result<u64, ToolError> {
        let value = match self.values.get(name) {
            None | Some(Value::Null) => return Ok(default),
            Some(value) => value,
        };
        let n = match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
                .ok_or_else(|| wrong_type(name, "a positive integer", value))?,
            other => return Err(wrong_type(name, "a positive integer", other)),
        };
        if n == 0 || n > max {
            return Err(ToolError::invalid(
                name,
                format!("'{}' must be between 1 and {}, got {}", name, max, n),
            ));
        }
        Ok(n)
    }

    /// One of `choices`, or `default` when absent
    pub fn optional_choice<'a>(
        &'a self,
        name: &str,
        choices: &[&'a str],
        default: &'a str,
    ) -> Result<&'a str, ToolError> {
        match self.optional_str(name)? {
            None => Ok(default),
            Some(value) => choices
                .iter()
                .copied()
                .find(|choice| choice.eq_ignore_ascii_case(value.trim()))
                .ok_or_else(|| {
                    ToolError::invalid(
                        name,
                        format!("'{}' must be one of: {}", name, choices.join(", ")),
                    )
                }),
        }
    }
}

fn wrong_type(name: &str, expected: &str, got: &Value) -> ToolError {
    ToolError::invalid(
        name,
        format!("'{}' must be {}, got {}", name, expected, type_name(got)),
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
