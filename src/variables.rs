//! Chapter 2: Variables and Union Types
//!
//! A value that may be "a number or a string" is an explicit enum here, so
//! `add` matches on both sides instead of inspecting types at runtime.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Union of number and text
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Text(String),
}

impl Operand {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Number(_) => "number",
            Operand::Text(_) => "string",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddError {
    #[error("Parameters must be numbers or strings (got {left} and {right})")]
    MixedOperands {
        left: &'static str,
        right: &'static str,
    },
}

/// Sums two numbers or concatenates two strings. Mixing the two is an error.
pub fn add(left: Operand, right: Operand) -> Result<Operand, AddError> {
    match (left, right) {
        (Operand::Number(a), Operand::Number(b)) => Ok(Operand::Number(a + b)),
        (Operand::Text(mut a), Operand::Text(b)) => {
            a.push_str(&b);
            Ok(Operand::Text(a))
        }
        (left, right) => Err(AddError::MixedOperands {
            left: left.kind(),
            right: right.kind(),
        }),
    }
}

// =============================================================================
// Union of number and boolean
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MultiType {
    Number(f64),
    Flag(bool),
}

impl fmt::Display for MultiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiType::Number(n) => write!(f, "{}", n),
            MultiType::Flag(b) => write!(f, "{}", b),
        }
    }
}

pub fn greeting(first_name: &str, last_name: &str) -> String {
    format!("Hi {} {}", first_name, last_name)
}

/// Same text as [`greeting`], built by appending pieces.
pub fn greeting_concat(first_name: &str, last_name: &str) -> String {
    "Hi ".to_string() + first_name + " " + last_name
}

// =============================================================================
// A variable of any type
// =============================================================================

/// Runtime kind of a dynamically typed value.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
