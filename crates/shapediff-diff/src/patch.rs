//! A fully collected diff.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::DiffResult;
use crate::operation::{DiffOperation, OpKind};

/// The complete, ordered list of operations produced by one diff.
#[derive(Clone, Debug, Default)]
pub struct Patch<'a> {
    /// The operations, in the order the engine produced them.
    pub operations: Vec<DiffOperation<'a>>,
}

impl<'a> Patch<'a> {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Number of `Add` operations.
    pub fn additions(&self) -> usize {
        self.count(OpKind::Add)
    }

    /// Number of `Remove` operations.
    pub fn removals(&self) -> usize {
        self.count(OpKind::Remove)
    }

    /// Number of `Replace` operations.
    pub fn replacements(&self) -> usize {
        self.count(OpKind::Replace)
    }

    /// The operation paths, in order.
    pub fn paths(&self) -> Vec<&str> {
        self.operations.iter().map(|op| op.path.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffOperation<'a>> {
        self.operations.iter()
    }

    /// The patch as a JSON array of `{ operation, path, value? }` records.
    pub fn to_json(&self) -> DiffResult<Value> {
        self.operations
            .iter()
            .map(DiffOperation::to_json)
            .collect::<DiffResult<Vec<_>>>()
            .map(Value::Array)
    }

    fn count(&self, kind: OpKind) -> usize {
        self.operations.iter().filter(|op| op.kind == kind).count()
    }
}

impl<'a> From<Vec<DiffOperation<'a>>> for Patch<'a> {
    fn from(operations: Vec<DiffOperation<'a>>) -> Self {
        Self { operations }
    }
}

impl<'a> IntoIterator for Patch<'a> {
    type Item = DiffOperation<'a>;
    type IntoIter = std::vec::IntoIter<DiffOperation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl Serialize for Patch<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.operations.len()))?;
        for op in &self.operations {
            seq.serialize_element(op)?;
        }
        seq.end()
    }
}
