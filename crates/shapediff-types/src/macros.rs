//! Generated accessors for composite records.

/// Implement [`Diffable`](crate::Diffable) for a struct as a composite record.
///
/// Fields are listed in declaration order; that order is the order in which
/// the diff engine visits them. A field may be renamed for path purposes with
/// `field as "Name"`.
///
/// ```
/// use shapediff_types::{composite, Diffable, ShapeKind};
///
/// struct Point {
///     x: i32,
///     y: i32,
///     label: Option<String>,
/// }
///
/// composite!(Point { x, y, label as "Label" });
///
/// let p = Point { x: 1, y: 2, label: None };
/// assert_eq!(p.shape().kind(), ShapeKind::Composite);
/// ```
#[macro_export]
macro_rules! composite {
    (@name $field:ident) => {
        stringify!($field)
    };
    (@name $field:ident $name:literal) => {
        $name
    };
    ($ty:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::Diffable for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Composite(::std::vec![
                    $($crate::Field::new(
                        $crate::composite!(@name $field $($name)?),
                        &self.$field,
                    )),*
                ])
            }
        }
    };
}
