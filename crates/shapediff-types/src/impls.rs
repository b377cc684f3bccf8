//! [`Diffable`] implementations for standard library types.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::shape::{Diffable, Scalar, Shape};

macro_rules! signed_scalar {
    ($($t:ty),*) => {
        $(impl Diffable for $t {
            fn shape(&self) -> Shape<'_> {
                Shape::Scalar(Scalar::Int(*self as i64))
            }
        })*
    };
}

macro_rules! unsigned_scalar {
    ($($t:ty),*) => {
        $(impl Diffable for $t {
            fn shape(&self) -> Shape<'_> {
                Shape::Scalar(Scalar::UInt(*self as u64))
            }
        })*
    };
}

signed_scalar!(i8, i16, i32, i64, isize);
unsigned_scalar!(u8, u16, u32, u64, usize);

impl Diffable for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Bool(*self))
    }
}

impl Diffable for f32 {
    fn shape(&self) -> Shape<'_> {
        // Widen through the shortest decimal form, so 0.1f32 becomes 0.1.
        let widened = self.to_string().parse().unwrap_or(f64::from(*self));
        Shape::Scalar(Scalar::Float(widened))
    }
}

impl Diffable for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Float(*self))
    }
}

impl Diffable for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Char(*self))
    }
}

impl Diffable for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }
}

impl Diffable for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self.as_str()))
    }
}

impl Diffable for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(&**self))
    }
}

fn elements<'a, T: Diffable + 'a>(items: impl Iterator<Item = &'a T>) -> Shape<'a> {
    Shape::Sequence(items.map(|item| item as &dyn Diffable).collect())
}

impl<T: Diffable> Diffable for [T] {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

impl<T: Diffable, const N: usize> Diffable for [T; N] {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

impl<T: Diffable> Diffable for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

impl<T: Diffable> Diffable for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

impl<T: Diffable> Diffable for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Absent,
        }
    }
}

// Pointer types are transparent: they classify and report as their target.
macro_rules! transparent {
    ($($ptr:ident),*) => {
        $(impl<T: Diffable + ?Sized> Diffable for $ptr<T> {
            fn shape(&self) -> Shape<'_> {
                (**self).shape()
            }

            fn type_name(&self) -> &'static str {
                (**self).type_name()
            }
        })*
    };
}

transparent!(Box, Rc, Arc);

impl<T: Diffable + ?Sized> Diffable for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

// Keyed containers have no fixed field set, so they are not composites.
impl<K, V> Diffable for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported
    }
}

impl<K, V, S> Diffable for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported
    }
}
