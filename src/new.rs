use std::convert::{Infallible};

use super::{Nested, Error, Result};
use super::error::{non_empty};

fn build<T, E>(
    shape: &[usize],
    indices: &mut Vec<usize>,
    f: &mut impl FnMut(&[usize]) -> Result<T, E>,
) -> Result<Vec<Nested<T>>, E> {
    let Some((&length, rest)) = shape.split_first() else { return Ok(Vec::new()) };
    let mut items = Vec::with_capacity(length);
    for index in 0..length {
        indices.push(index);
        let item = if rest.is_empty() {
            f(indices.as_slice()).map(Nested::Leaf)
        } else {
            build(rest, indices, f).map(Nested::Array)
        };
        indices.pop();
        items.push(item?);
    }
    Ok(items)
}

/// Builds a nested array of shape `shape`, computing each leaf from its
/// coordinates.
///
/// `f` is called exactly once per leaf, in row-major order, with one index
/// per axis. The [`shape_at_origin()`] of the result is `shape`.
///
/// Returns [`Error::EmptySequence`] if `shape` is empty.
///
/// ```
/// use nested_array::{build_shape, nested};
/// let a = build_shape(&[2, 3], |i| i[0] * 3 + i[1]).unwrap();
/// assert_eq!(a, nested![[0, 1, 2], [3, 4, 5]]);
/// ```
///
/// [`shape_at_origin()`]: super::shape_at_origin
pub fn build_shape<T>(
    shape: &[usize],
    mut f: impl FnMut(&[usize]) -> T,
) -> Result<Vec<Nested<T>>> {
    non_empty(shape, "shape")?;
    log::trace!("Building nested array of shape {:?}", shape);
    let built: Result<_, Infallible> = build(shape, &mut Vec::new(), &mut |indices| Ok(f(indices)));
    Ok(built.unwrap_or_else(|never| match never {}))
}

/// Builds a nested array of shape `shape` with every leaf equal to `value`.
///
/// ```
/// use nested_array::{build_shape_with_value, nested};
/// let a = build_shape_with_value(&[2, 3], 10).unwrap();
/// assert_eq!(a, nested![[10, 10, 10], [10, 10, 10]]);
/// ```
pub fn build_shape_with_value<T: Clone>(shape: &[usize], value: T) -> Result<Vec<Nested<T>>> {
    build_shape(shape, |_| value.clone())
}

/// Like [`build_shape()`] but `f` may fail.
///
/// The first `Err` returned by `f` aborts the build and is returned as it
/// is. Usage errors are converted into `E`.
///
/// ```
/// use nested_array::{try_build_shape, Error};
/// #[derive(Debug)]
/// enum Oops { Usage, TooBig }
/// impl From<Error> for Oops { fn from(_: Error) -> Self { Oops::Usage } }
///
/// let r = try_build_shape(&[2, 2], |i| if i[0] + i[1] > 1 { Err(Oops::TooBig) } else { Ok(i[1]) });
/// assert!(matches!(r, Err(Oops::TooBig)));
/// assert!(matches!(try_build_shape(&[], |_| Ok::<u8, Oops>(0)), Err(Oops::Usage)));
/// ```
pub fn try_build_shape<T, E: From<Error>>(
    shape: &[usize],
    mut f: impl FnMut(&[usize]) -> Result<T, E>,
) -> Result<Vec<Nested<T>>, E> {
    non_empty(shape, "shape")?;
    log::trace!("Building nested array of shape {:?}", shape);
    build(shape, &mut Vec::new(), &mut f)
}

// ----------------------------------------------------------------------------
