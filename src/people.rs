//! Chapter 4: Classes, Accessors and Parameter Properties
//!
//! `Customer` spells out its fields and constructor; `Client` is the
//! shorthand version where constructor arguments become fields directly.
//! Both keep their fields private behind getter/setter pairs.

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    first_name: String,
    last_name: String,
}

impl Customer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        Self {
            first_name,
            last_name,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    first_name: String,
    last_name: String,
}

impl Client {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }
}

/// Plain record with a derived value, the object-literal-with-method example.
#[derive(Debug, Clone, PartialEq)]
pub struct Emp {
    pub first_name: String,
    pub last_name: String,
}

impl Emp {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
