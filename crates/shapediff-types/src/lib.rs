//! Shape classification for shapediff.
//!
//! The diff engine never inspects concrete types. Instead, every value it
//! compares implements [`Diffable`] and classifies itself as a scalar, an
//! ordered sequence, or a composite record with named fields.
//!
//! # Key Types
//!
//! - [`Diffable`] -- The classifier trait, implemented for std types and via [`composite!`]
//! - [`Shape`] / [`ShapeKind`] -- The structural category of a value
//! - [`Scalar`] -- A primitive or text value compared by equality
//! - [`Field`] -- A named field of a composite record

#[macro_use]
mod macros;

pub mod error;
pub mod impls;
pub mod render;
pub mod shape;

pub use error::{TypeError, TypeResult};
pub use render::{scalar_to_json, to_json};
pub use shape::{Diffable, Field, Scalar, Shape, ShapeKind};
