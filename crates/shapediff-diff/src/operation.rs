//! Diff operations: the unit of output.

use std::fmt;

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use shapediff_types::{to_json, Diffable};

use crate::error::DiffResult;

/// The kind of edit an operation describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Add => "Add",
            OpKind::Remove => "Remove",
            OpKind::Replace => "Replace",
        };
        f.write_str(name)
    }
}

/// A single path-addressed edit.
///
/// `value` borrows from the modified input and is set for `Add` and
/// `Replace` only.
#[derive(Clone)]
pub struct DiffOperation<'a> {
    pub kind: OpKind,
    pub path: String,
    pub value: Option<&'a dyn Diffable>,
}

impl<'a> DiffOperation<'a> {
    pub fn add(path: impl Into<String>, value: &'a dyn Diffable) -> Self {
        Self {
            kind: OpKind::Add,
            path: path.into(),
            value: Some(value),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            kind: OpKind::Remove,
            path: path.into(),
            value: None,
        }
    }

    pub fn replace(path: impl Into<String>, value: &'a dyn Diffable) -> Self {
        Self {
            kind: OpKind::Replace,
            path: path.into(),
            value: Some(value),
        }
    }

    /// The new value rendered as JSON, if the operation carries one.
    pub fn value_json(&self) -> DiffResult<Option<Value>> {
        match self.value {
            Some(value) => Ok(Some(to_json(value)?)),
            None => Ok(None),
        }
    }

    /// The operation as a `{ operation, path, value? }` record.
    pub fn to_json(&self) -> DiffResult<Value> {
        let mut record = Map::new();
        record.insert("operation".into(), Value::String(self.kind.to_string()));
        record.insert("path".into(), Value::String(self.path.clone()));
        if let Some(value) = self.value_json()? {
            record.insert("value".into(), value);
        }
        Ok(Value::Object(record))
    }
}

impl fmt::Debug for DiffOperation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DiffOperation");
        s.field("kind", &self.kind).field("path", &self.path);
        if let Some(value) = self.value {
            match to_json(value) {
                Ok(json) => s.field("value", &json),
                Err(_) => s.field("value", &value.type_name()),
            };
        }
        s.finish()
    }
}

impl fmt::Display for DiffOperation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.path)
    }
}

impl Serialize for DiffOperation<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
