//! Nested arrays read straight from JSON.
//!
//! A JSON array is array-like; every other value, including an object, is a
//! leaf.

use std::fmt::{Write as _};

use serde_json::{Value};

use super::{ArrayLike, JoinText};

impl ArrayLike for Value {
    fn as_array(&self) -> Option<&[Value]> { Value::as_array(self).map(Vec::as_slice) }

    fn as_array_mut(&mut self) -> Option<&mut [Value]> { Value::as_array_mut(self).map(Vec::as_mut_slice) }
}

/// Strings are written without quotes and `null` as nothing, so that text
/// split by [`nested_split()`] survives a trip through JSON. Arrays are
/// written as their children joined by `","`. Anything else is written as
/// compact JSON.
///
/// [`nested_split()`]: super::nested_split
impl JoinText for Value {
    fn join_text(&self, out: &mut String) {
        match self {
            Value::Null => {},
            Value::String(s) => out.push_str(s),
            Value::Array(children) => {
                for (index, child) in children.iter().enumerate() {
                    if index > 0 { out.push(','); }
                    child.join_text(out);
                }
            },
            other => { let _ = write!(out, "{}", other); },
        }
    }
}

// ----------------------------------------------------------------------------
