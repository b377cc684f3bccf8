//! The recursive diff engine.
//!
//! A [`Diff`] walks two values of the same declared type depth-first, in
//! field-declaration order, and yields [`DiffOperation`]s lazily. Pending work
//! lives on an explicit stack, so nothing beyond the current step is compared
//! until the consumer asks for the next operation.
//!
//! Sequences are aligned by position with a tail bias: a length difference is
//! attributed to the end of the sequence, and elements are compared index by
//! index up to the shorter length. An insertion in the middle therefore shows
//! up as a run of `Replace` operations plus one `Add`.
//!
//! Errors found below the root surface only when iteration reaches them.
//! Operations yielded before an error are still correct, but the diff as a
//! whole has failed and the iterator yields nothing after the error.

use std::iter::FusedIterator;

use shapediff_types::{Diffable, Field, Shape};
use tracing::{debug, trace};

use crate::config::DiffOptions;
use crate::error::{DiffError, DiffResult, Side};
use crate::operation::DiffOperation;
use crate::patch::Patch;
use crate::pointer::Pointer;

/// A unit of pending work.
enum Task<'a> {
    Emit(DiffOperation<'a>),
    Compare {
        original: &'a dyn Diffable,
        modified: &'a dyn Diffable,
        at: Pointer,
    },
}

/// A lazy, single-pass stream of diff operations.
pub struct Diff<'a> {
    pending: Vec<Task<'a>>,
    escape_segments: bool,
}

impl<'a> Diff<'a> {
    /// Prepare a diff of `original` against `modified`.
    ///
    /// The declared types and root presence are checked here, before any
    /// operation is produced.
    pub fn new(
        original: &'a dyn Diffable,
        modified: &'a dyn Diffable,
        options: &DiffOptions,
    ) -> DiffResult<Self> {
        let root = Pointer::root(&options.root);

        let (original_type, modified_type) = (original.type_name(), modified.type_name());
        if original_type != modified_type {
            return Err(DiffError::ShapeMismatch {
                path: root.address(),
                original: original_type.to_owned(),
                modified: modified_type.to_owned(),
            });
        }
        if original.shape().is_absent() {
            return Err(DiffError::NullRoot {
                side: Side::Original,
            });
        }
        if modified.shape().is_absent() {
            return Err(DiffError::NullRoot {
                side: Side::Modified,
            });
        }

        debug!(root = %root, ty = original_type, "diff started");
        Ok(Self {
            pending: vec![Task::Compare {
                original,
                modified,
                at: root,
            }],
            escape_segments: options.escape_segments,
        })
    }

    /// Drive the diff to completion, stopping at the first error.
    pub fn into_patch(self) -> DiffResult<Patch<'a>> {
        self.collect::<DiffResult<Vec<_>>>().map(Patch::from)
    }

    fn compare(
        &mut self,
        original: &'a dyn Diffable,
        modified: &'a dyn Diffable,
        at: Pointer,
    ) -> DiffResult<Option<DiffOperation<'a>>> {
        match (original.shape(), modified.shape()) {
            (Shape::Absent, Shape::Absent) => Ok(None),
            (_, Shape::Absent) => Ok(Some(DiffOperation::remove(at.address()))),
            (Shape::Absent, _) => Ok(Some(DiffOperation::add(at.address(), modified))),
            (Shape::Unsupported, _) => Err(unsupported(&at, original)),
            (_, Shape::Unsupported) => Err(unsupported(&at, modified)),
            (Shape::Scalar(before), Shape::Scalar(after)) => {
                Ok((before != after).then(|| DiffOperation::replace(at.address(), modified)))
            }
            (Shape::Sequence(before), Shape::Sequence(after)) => {
                self.expand_sequence(&before, &after, &at);
                Ok(None)
            }
            (Shape::Composite(before), Shape::Composite(after)) => {
                if !same_fields(&before, &after) {
                    return Err(mismatch(&at, original, modified));
                }
                self.expand_composite(before, after, &at);
                Ok(None)
            }
            (before, after) => Err(DiffError::ShapeMismatch {
                path: at.address(),
                original: format!("{} ({})", original.type_name(), before.kind()),
                modified: format!("{} ({})", modified.type_name(), after.kind()),
            }),
        }
    }

    fn expand_sequence(
        &mut self,
        original: &[&'a dyn Diffable],
        modified: &[&'a dyn Diffable],
        at: &Pointer,
    ) {
        let (n, k) = (original.len(), modified.len());
        trace!(path = %at, original = n, modified = k, "expanding sequence");

        // Pushed in reverse: elementwise comparisons pop after the length
        // reconciliation.
        for index in (0..n.min(k)).rev() {
            self.pending.push(Task::Compare {
                original: original[index],
                modified: modified[index],
                at: at.index(index),
            });
        }
        if n > k {
            // Removals come out from the highest original index down.
            for index in k..n {
                let op = DiffOperation::remove(at.index(index).address());
                self.pending.push(Task::Emit(op));
            }
        } else {
            for index in (n..k).rev() {
                let op = DiffOperation::add(at.index(index).address(), modified[index]);
                self.pending.push(Task::Emit(op));
            }
        }
    }

    fn expand_composite(&mut self, original: Vec<Field<'a>>, modified: Vec<Field<'a>>, at: &Pointer) {
        trace!(path = %at, fields = original.len(), "expanding composite");

        for (before, after) in original.into_iter().zip(modified).rev() {
            let child = if self.escape_segments {
                at.field(before.name)
            } else {
                at.field_raw(before.name)
            };
            self.pending.push(Task::Compare {
                original: before.value,
                modified: after.value,
                at: child,
            });
        }
    }
}

impl<'a> Iterator for Diff<'a> {
    type Item = DiffResult<DiffOperation<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(task) = self.pending.pop() {
            let outcome = match task {
                Task::Emit(op) => return Some(Ok(op)),
                Task::Compare {
                    original,
                    modified,
                    at,
                } => self.compare(original, modified, at),
            };
            match outcome {
                Ok(Some(op)) => return Some(Ok(op)),
                Ok(None) => {}
                Err(err) => {
                    debug!(error = %err, "diff aborted");
                    self.pending.clear();
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

impl FusedIterator for Diff<'_> {}

fn same_fields(original: &[Field<'_>], modified: &[Field<'_>]) -> bool {
    original.len() == modified.len()
        && original
            .iter()
            .zip(modified)
            .all(|(before, after)| before.name == after.name)
}

fn mismatch(at: &Pointer, original: &dyn Diffable, modified: &dyn Diffable) -> DiffError {
    DiffError::ShapeMismatch {
        path: at.address(),
        original: original.type_name().to_owned(),
        modified: modified.type_name().to_owned(),
    }
}

fn unsupported(at: &Pointer, value: &dyn Diffable) -> DiffError {
    DiffError::UnsupportedShape {
        path: at.address(),
        type_name: value.type_name(),
    }
}

/// Diff two values of the same type, with paths rooted at `/`.
pub fn diff<'a, T: Diffable>(original: &'a T, modified: &'a T) -> DiffResult<Diff<'a>> {
    diff_with(original, modified, &DiffOptions::default())
}

/// Diff two values of the same type, with paths rooted at `root`.
pub fn diff_at<'a, T: Diffable>(
    original: &'a T,
    modified: &'a T,
    root: &str,
) -> DiffResult<Diff<'a>> {
    diff_with(original, modified, &DiffOptions::default().with_root(root))
}

/// Diff two values of the same type with explicit options.
pub fn diff_with<'a, T: Diffable>(
    original: &'a T,
    modified: &'a T,
    options: &DiffOptions,
) -> DiffResult<Diff<'a>> {
    Diff::new(original, modified, options)
}

/// Diff two type-erased values.
///
/// Fails with [`DiffError::ShapeMismatch`] when their declared types differ.
pub fn diff_dyn<'a>(
    original: &'a dyn Diffable,
    modified: &'a dyn Diffable,
    root: &str,
) -> DiffResult<Diff<'a>> {
    Diff::new(original, modified, &DiffOptions::default().with_root(root))
}
