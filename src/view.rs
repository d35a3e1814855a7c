use std::convert::{Infallible};
use std::fmt::{self, Debug};

use super::{ArrayLike, Nested, Error, Result};
use super::error::{depth_limit};

/// What a callback sees of one visited element.
///
/// `value` is a leaf, or an array-like node that lies at the depth limit.
/// `indices` has one entry per axis, from the root down to `value`.
pub struct Entry<'a, N> {
    pub value: &'a N,
    pub indices: &'a [usize],
    /// The whole nested array being traversed.
    pub root: &'a [N],
    /// The array that directly contains `value`.
    pub parent: &'a [N],
}

impl<'a, N> Entry<'a, N> {
    /// The index of `value` in `parent`.
    pub fn index(&self) -> usize { self.indices.last().copied().unwrap_or(0) }
}

impl<'a, T> Entry<'a, Nested<T>> {
    /// The leaf value, if `value` is a leaf.
    pub fn leaf(&self) -> Option<&'a T> { self.value.leaf() }
}

impl<'a, N> Clone for Entry<'a, N> {
    fn clone(&self) -> Self { *self }
}

impl<'a, N> Copy for Entry<'a, N> {}

impl<'a, N: Debug> Debug for Entry<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("value", self.value)
            .field("indices", &self.indices)
            .finish_non_exhaustive()
    }
}

// ----------------------------------------------------------------------------

fn map<N: ArrayLike, U, E>(
    root: &[N],
    parent: &[N],
    indices: &mut Vec<usize>,
    depth: usize,
    f: &mut impl FnMut(Entry<'_, N>) -> Result<U, E>,
) -> Result<Vec<Nested<U>>, E> {
    let mut items = Vec::with_capacity(parent.len());
    for (index, value) in parent.iter().enumerate() {
        indices.push(index);
        let item = match value.as_array() {
            Some(children) if indices.len() < depth => {
                map(root, children, indices, depth, f).map(Nested::Array)
            },
            _ => f(Entry {value, indices: indices.as_slice(), root, parent}).map(Nested::Leaf),
        };
        indices.pop();
        items.push(item?);
    }
    Ok(items)
}

fn for_each<N: ArrayLike, E>(
    root: &[N],
    parent: &[N],
    indices: &mut Vec<usize>,
    depth: usize,
    f: &mut impl FnMut(Entry<'_, N>) -> Result<(), E>,
) -> Result<(), E> {
    for (index, value) in parent.iter().enumerate() {
        indices.push(index);
        let done = match value.as_array() {
            Some(children) if indices.len() < depth => for_each(root, children, indices, depth, f),
            _ => f(Entry {value, indices: indices.as_slice(), root, parent}),
        };
        indices.pop();
        done?;
    }
    Ok(())
}

/// Calls `f` on every element of `array` and collects the results into a
/// new nested array of the same shape.
///
/// The traversal is depth-first and left to right. Array-like nodes are
/// descended into until `max_depth` axes have been traversed; a node at that
/// depth is passed to `f` as it is. The result therefore has the shape of the
/// traversal, which may be shallower than `array`.
///
/// ```
/// use nested_array::{nested, nested_map, ArrayLike};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// let b = nested_map(&a, |e| e.leaf().map_or(0, |n| n + 10), None).unwrap();
/// assert_eq!(b, nested![[10, 11, 12], [13, 14, 15]]);
///
/// let rows = nested_map(&a, |e| e.value.as_array().map_or(0, <[_]>::len), Some(1)).unwrap();
/// assert_eq!(rows, nested![3, 3]);
/// ```
pub fn nested_map<N: ArrayLike, U>(
    array: &[N],
    mut f: impl FnMut(Entry<'_, N>) -> U,
    max_depth: Option<usize>,
) -> Result<Vec<Nested<U>>> {
    let depth = depth_limit(max_depth)?;
    let mapped: Result<_, Infallible> = map(array, array, &mut Vec::new(), depth, &mut |e| Ok(f(e)));
    Ok(mapped.unwrap_or_else(|never| match never {}))
}

/// Like [`nested_map()`] but `f` may fail.
///
/// The first `Err` returned by `f` aborts the traversal and is returned as
/// it is.
pub fn try_nested_map<N: ArrayLike, U, E: From<Error>>(
    array: &[N],
    mut f: impl FnMut(Entry<'_, N>) -> Result<U, E>,
    max_depth: Option<usize>,
) -> Result<Vec<Nested<U>>, E> {
    let depth = depth_limit(max_depth)?;
    map(array, array, &mut Vec::new(), depth, &mut f)
}

/// Calls `f` on every element of `array`, in the same order as
/// [`nested_map()`].
///
/// ```
/// use nested_array::{nested, nested_for_each};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// let mut seen = Vec::new();
/// nested_for_each(&a, |e| seen.push(e.indices.to_vec()), None).unwrap();
/// assert_eq!(seen[4], [1, 1]);
/// assert_eq!(seen.len(), 6);
/// ```
pub fn nested_for_each<N: ArrayLike>(
    array: &[N],
    mut f: impl FnMut(Entry<'_, N>),
    max_depth: Option<usize>,
) -> Result<()> {
    let depth = depth_limit(max_depth)?;
    let done: Result<_, Infallible> = for_each(array, array, &mut Vec::new(), depth, &mut |e| {
        f(e);
        Ok(())
    });
    done.unwrap_or_else(|never| match never {});
    Ok(())
}

/// Like [`nested_for_each()`] but `f` may fail.
///
/// The first `Err` returned by `f` stops the traversal and is returned as it
/// is.
pub fn try_nested_for_each<N: ArrayLike, E: From<Error>>(
    array: &[N],
    mut f: impl FnMut(Entry<'_, N>) -> Result<(), E>,
    max_depth: Option<usize>,
) -> Result<(), E> {
    let depth = depth_limit(max_depth)?;
    for_each(array, array, &mut Vec::new(), depth, &mut f)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nested, build_shape, build_shape_with_value, shape_at_origin};

    fn label(indices: &[usize]) -> String {
        indices.iter().map(usize::to_string).collect()
    }

    #[test]
    fn map_indices() {
        let zeros = build_shape_with_value(&[3, 4, 5], 0).unwrap();
        let expected = build_shape(&[3, 4, 5], label).unwrap();
        assert_eq!(nested_map(&zeros, |e| label(e.indices), None).unwrap(), expected);
    }

    #[test]
    fn for_each_visits_in_order() {
        let a = build_shape(&[3, 4, 5], label).unwrap();
        let mut seen = Vec::new();
        nested_for_each(&a, |e| seen.push(e.leaf().cloned().unwrap()), None).unwrap();
        assert_eq!(seen.len(), 60);
        assert_eq!(seen[0], "000");
        assert_eq!(seen[7], "012");
        assert_eq!(seen[59], "234");
    }

    #[test]
    fn parent_and_root() {
        let a = nested![[1, 2], [3, [4]]];
        nested_for_each(&a, |e| {
            assert_eq!(e.root.len(), 2);
            assert_eq!(e.parent[e.index()], *e.value);
            if *e.indices == [1, 1, 0] { assert_eq!(e.parent.len(), 1); }
        }, None).unwrap();
    }

    #[test]
    fn bounded_depth() {
        let a = build_shape(&[3, 4, 5, 6], label).unwrap();
        let mapped = nested_map(&a, |e| {
            assert_eq!(shape_at_origin(e.value.as_array().unwrap(), None).unwrap(), [5, 6]);
            e.indices.to_vec()
        }, Some(2)).unwrap();
        assert_eq!(mapped, build_shape(&[3, 4], <[usize]>::to_vec).unwrap());

        let mut count = 0;
        nested_for_each(&a, |e| {
            assert_eq!(shape_at_origin(e.value.as_array().unwrap(), None).unwrap(), [5, 6]);
            count += 1;
        }, Some(2)).unwrap();
        assert_eq!(count, 12);
    }

    #[test]
    fn empty_arrays_are_not_leaves() {
        let a: Vec<Nested<i32>> = nested![[], [[]], 1];
        let mut seen = Vec::new();
        nested_for_each(&a, |e| seen.push(e.indices.to_vec()), None).unwrap();
        assert_eq!(seen, [vec![2]]);
        assert_eq!(nested_map(&a, |_| 'x', None).unwrap(), nested![[], [[]], 'x']);
    }

    #[test]
    fn errors_abort() {
        let a = build_shape(&[2, 3], label).unwrap();
        let mut calls = 0;
        let r: Result<Vec<Nested<()>>, Error> = try_nested_map(&a, |e| {
            calls += 1;
            if *e.indices == [1, 0] { Err(Error::InvalidDepth(3)) } else { Ok(()) }
        }, None);
        assert!(matches!(r, Err(Error::InvalidDepth(3))));
        assert_eq!(calls, 4);

        let r: Result<(), Error> = try_nested_for_each(&a, |_| Ok(()), Some(0));
        assert!(matches!(r, Err(Error::InvalidDepth(0))));
        assert!(nested_map(&a, |_| (), Some(0)).is_err());
    }
}
