//! Required-field checks run before any statement reaches the store.
//!
//! Each request type owns a `validate()` that feeds its required fields into
//! a [`Fields`] accumulator; the result names every missing field at once
//! instead of failing on the first.

use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct Fields {
    missing: Vec<&'static str>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required text field. Absent, empty and whitespace-only all count as missing.
    pub fn require(mut self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => {}
            _ => self.missing.push(name),
        }
        self
    }

    /// Required reference to another row.
    pub fn require_id(mut self, name: &'static str, value: Option<i32>) -> Self {
        if value.is_none() {
            self.missing.push(name);
        }
        self
    }

    /// Required timestamp.
    pub fn require_at<T>(mut self, name: &'static str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.missing.push(name);
        }
        self
    }

    /// Required non-empty sequence.
    pub fn require_list<T>(mut self, name: &'static str, value: Option<&[T]>) -> Self {
        match value {
            Some(v) if !v.is_empty() => {}
            _ => self.missing.push(name),
        }
        self
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation {
                missing: self.missing,
            })
        }
    }
}
