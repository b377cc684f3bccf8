//! Render classified values as JSON.
//!
//! Rendering walks the value through its [`Shape`], so any [`Diffable`] can be
//! rendered without a `serde::Serialize` implementation of its own.

use serde_json::{Map, Number, Value};

use crate::error::{TypeError, TypeResult};
use crate::shape::{Diffable, Scalar, Shape};

/// Render a value as a JSON tree.
///
/// Absent values become `null`, sequences become arrays and composites become
/// objects with their fields in declaration order.
pub fn to_json(value: &dyn Diffable) -> TypeResult<Value> {
    match value.shape() {
        Shape::Absent => Ok(Value::Null),
        Shape::Scalar(scalar) => scalar_to_json(scalar),
        Shape::Sequence(items) => items
            .into_iter()
            .map(to_json)
            .collect::<TypeResult<Vec<_>>>()
            .map(Value::Array),
        Shape::Composite(fields) => {
            let mut object = Map::with_capacity(fields.len());
            for field in fields {
                object.insert(field.name.to_owned(), to_json(field.value)?);
            }
            Ok(Value::Object(object))
        }
        Shape::Unsupported => Err(TypeError::Unsupported {
            type_name: value.type_name(),
        }),
    }
}

/// Render a single scalar.
pub fn scalar_to_json(scalar: Scalar<'_>) -> TypeResult<Value> {
    Ok(match scalar {
        Scalar::Bool(b) => Value::Bool(b),
        Scalar::Int(i) => Value::from(i),
        Scalar::UInt(u) => Value::from(u),
        Scalar::Float(f) => Number::from_f64(f)
            .map(Value::Number)
            .ok_or(TypeError::NonFiniteFloat(f))?,
        Scalar::Char(c) => Value::String(c.to_string()),
        Scalar::Str(s) => Value::String(s.to_owned()),
    })
}
