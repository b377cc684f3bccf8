//! Diff engine for shapediff.
//!
//! Computes the path-addressed add/remove/replace operations that turn one
//! structured value into another of the same shape. Values are inspected
//! through the [`Diffable`] classifier from `shapediff-types`.
//!
//! # Key Types
//!
//! - [`Diff`] -- Lazy, single-pass stream of operations
//! - [`DiffOperation`] / [`OpKind`] -- A single path-addressed edit
//! - [`Patch`] -- A fully collected diff with per-kind counts
//! - [`Pointer`] -- Slash-delimited address builder
//! - [`DiffOptions`] -- Root prefix and segment escaping
//!
//! ```
//! use shapediff_diff::{composite, diff};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! composite!(Point { x, y });
//!
//! let (a, b) = (Point { x: 1, y: 2 }, Point { x: 1, y: 3 });
//! let patch = diff(&a, &b).unwrap().into_patch().unwrap();
//! assert_eq!(patch.paths(), ["/y"]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod operation;
pub mod patch;
pub mod pointer;

pub use config::DiffOptions;
pub use engine::{diff, diff_at, diff_dyn, diff_with, Diff};
pub use error::{DiffError, DiffResult, Side};
pub use operation::{DiffOperation, OpKind};
pub use patch::Patch;
pub use pointer::Pointer;

pub use shapediff_types::{composite, Diffable, Field, Scalar, Shape, ShapeKind};
