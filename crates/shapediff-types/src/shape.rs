//! The shape classifier contract.
//!
//! Every value the diff engine walks is classified into exactly one [`Shape`]:
//! a scalar compared by equality, an ordered sequence compared by position,
//! or a composite record compared field by field. Null-like values classify
//! as [`Shape::Absent`], and values the classifier cannot express (maps and
//! other dictionary-like containers) classify as [`Shape::Unsupported`].

use std::fmt;

/// A value that can be classified into a [`Shape`].
///
/// Implementations must be deterministic: calling [`Diffable::shape`] twice on
/// the same value yields the same shape and the same field or element
/// enumeration. Two instances of the same declared type must enumerate the
/// same fields in the same order.
pub trait Diffable {
    /// Classify this value.
    fn shape(&self) -> Shape<'_>;

    /// The declared type of this value, used for mismatch detection and
    /// error reporting.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The structural category of a value, borrowing from the classified value.
pub enum Shape<'a> {
    /// A null or otherwise missing value (`None`).
    Absent,
    /// A primitive or text value.
    Scalar(Scalar<'a>),
    /// An ordered, indexable collection.
    Sequence(Vec<&'a dyn Diffable>),
    /// A record with a fixed, ordered set of named fields.
    Composite(Vec<Field<'a>>),
    /// A value the classifier cannot express.
    Unsupported,
}

impl Shape<'_> {
    /// The category of this shape without its contents.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Absent => ShapeKind::Absent,
            Shape::Scalar(_) => ShapeKind::Scalar,
            Shape::Sequence(_) => ShapeKind::Sequence,
            Shape::Composite(_) => ShapeKind::Composite,
            Shape::Unsupported => ShapeKind::Unsupported,
        }
    }

    /// Returns `true` for [`Shape::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Shape::Absent)
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Absent => write!(f, "Absent"),
            Shape::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Shape::Sequence(items) => write!(f, "Sequence(len={})", items.len()),
            Shape::Composite(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.name).collect();
                f.debug_tuple("Composite").field(&names).finish()
            }
            Shape::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// Shape category, detached from any value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Absent,
    Scalar,
    Sequence,
    Composite,
    Unsupported,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Absent => "absent",
            ShapeKind::Scalar => "scalar",
            ShapeKind::Sequence => "sequence",
            ShapeKind::Composite => "composite",
            ShapeKind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// A scalar value.
///
/// Integers are widened to 64 bits and `f32` to `f64`, so two scalars of the
/// same declared type always land in the same variant.
#[derive(Clone, Copy, Debug)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl PartialEq for Scalar<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::UInt(a), Scalar::UInt(b)) => a == b,
            // NaN equals NaN here, otherwise a value would differ from itself.
            (Scalar::Float(a), Scalar::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Char(a), Scalar::Char(b)) => a == b,
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            _ => false,
        }
    }
}

/// A named field of a composite record.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// The field name, used verbatim as a path segment.
    pub name: &'static str,
    /// The field value.
    pub value: &'a dyn Diffable,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn Diffable) -> Self {
        Self { name, value }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type", &self.value.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_equality_is_by_value() {
        assert_eq!(Scalar::Int(3), Scalar::Int(3));
        assert_ne!(Scalar::Int(3), Scalar::Int(4));
        assert_eq!(Scalar::Str("a"), Scalar::Str("a"));
        assert_ne!(Scalar::Str("a"), Scalar::Str("b"));
    }

    #[test]
    fn nan_equals_nan() {
        assert_eq!(Scalar::Float(f64::NAN), Scalar::Float(f64::NAN));
        assert_ne!(Scalar::Float(f64::NAN), Scalar::Float(0.0));
    }

    #[test]
    fn different_variants_never_equal() {
        assert_ne!(Scalar::Int(1), Scalar::UInt(1));
        assert_ne!(Scalar::Bool(true), Scalar::Int(1));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Shape::Absent.kind(), ShapeKind::Absent);
        assert_eq!(Shape::Scalar(Scalar::Bool(true)).kind(), ShapeKind::Scalar);
        assert_eq!(Shape::Sequence(Vec::new()).kind(), ShapeKind::Sequence);
        assert_eq!(Shape::Composite(Vec::new()).kind(), ShapeKind::Composite);
        assert_eq!(Shape::Unsupported.kind(), ShapeKind::Unsupported);
        assert!(Shape::Absent.is_absent());
    }

    #[test]
    fn kind_display() {
        assert_eq!(ShapeKind::Sequence.to_string(), "sequence");
        assert_eq!(ShapeKind::Composite.to_string(), "composite");
    }
}
