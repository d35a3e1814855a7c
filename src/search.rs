//! Short-circuiting searches.
//!
//! Every search walks the nested array depth-first, visiting one node's
//! whole subtree before its next sibling. [`Direction::Forward`] visits
//! siblings in ascending order, [`Direction::Backward`] in descending order.
//! The optional `from` bounds give the first index to visit on each axis,
//! and apply to every node on that axis, so a search covers a box-shaped
//! region rather than a suffix of the row-major order.
//!
//! Array-like nodes are descended into until `max_depth` axes have been
//! traversed. Nodes at that depth, and leaves, are the candidates.

use std::convert::{Infallible};

use super::{ArrayLike, Bounds, Direction, Entry, Error, Result};
use super::error::{depth_limit};
use super::index::{Steps};

/// A successful search: the matching element and its indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<'a, N> {
    pub value: &'a N,
    pub indices: Vec<usize>,
}

struct Search<'a, N> {
    root: &'a [N],
    from: Bounds,
    depth: usize,
    direction: Direction,
}

impl<'a, N: ArrayLike> Search<'a, N> {
    /// Returns the first candidate under `parent` accepted by `predicate`.
    /// On success, `indices` is left holding its indices.
    fn seek<E>(
        &self,
        parent: &'a [N],
        indices: &mut Vec<usize>,
        predicate: &mut impl FnMut(Entry<'_, N>) -> Result<bool, E>,
    ) -> Result<Option<&'a N>, E> {
        let axis = indices.len();
        for index in Steps::new(self.direction, self.from.get(axis), parent) {
            indices.push(index);
            let value = &parent[index];
            let found = match value.as_array() {
                Some(children) if indices.len() < self.depth => self.seek(children, indices, predicate)?,
                _ => {
                    let entry = Entry {value, indices: indices.as_slice(), root: self.root, parent};
                    if predicate(entry)? { Some(value) } else { None }
                },
            };
            if found.is_some() { return Ok(found); }
            indices.pop();
        }
        Ok(None)
    }

    fn run<E>(
        self,
        predicate: &mut impl FnMut(Entry<'_, N>) -> Result<bool, E>,
    ) -> Result<Option<Found<'a, N>>, E> {
        let mut indices = Vec::new();
        Ok(self.seek(self.root, &mut indices, predicate)?.map(|value| Found {value, indices}))
    }
}

/// Returns the first element of `array` accepted by `predicate`, visiting
/// in `direction` from `from`.
///
/// This is the engine behind every other search in this module.
///
/// ```
/// use nested_array::{nested, nested_search, Bounds, Direction};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// let found = nested_search(&a, Direction::Backward, |e| e.leaf() < Some(&4), Bounds::default(), None)
///     .unwrap().unwrap();
/// assert_eq!(found.indices, [1, 0]);
/// assert_eq!(found.value.leaf(), Some(&3));
/// ```
pub fn nested_search<'a, N: ArrayLike>(
    array: &'a [N],
    direction: Direction,
    mut predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<Option<Found<'a, N>>> {
    let search = Search {root: array, from: from.into(), depth: depth_limit(max_depth)?, direction};
    let found: Result<_, Infallible> = search.run(&mut |e| Ok(predicate(e)));
    Ok(found.unwrap_or_else(|never| match never {}))
}

/// Like [`nested_search()`] but `predicate` may fail.
///
/// The first `Err` returned by `predicate` stops the search and is returned
/// as it is. Usage errors are converted into `E`.
///
/// ```
/// use nested_array::{nested, try_nested_search, Bounds, Direction, Error};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// let r: Result<_, Error> = try_nested_search(&a, Direction::Forward, |e| {
///     if e.leaf() == Some(&4) { Err(Error::InvalidDepth(4)) } else { Ok(false) }
/// }, Bounds::default(), None);
/// assert!(matches!(r, Err(Error::InvalidDepth(4))));
/// ```
pub fn try_nested_search<'a, N: ArrayLike, E: From<Error>>(
    array: &'a [N],
    direction: Direction,
    mut predicate: impl FnMut(Entry<'_, N>) -> Result<bool, E>,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<Option<Found<'a, N>>, E> {
    let search = Search {root: array, from: from.into(), depth: depth_limit(max_depth)?, direction};
    search.run(&mut predicate)
}

fn position<N: ArrayLike + PartialEq>(
    array: &[N],
    direction: Direction,
    element: &N,
    from: Bounds,
    max_depth: Option<usize>,
) -> Result<Option<Vec<usize>>> {
    let found = nested_search(array, direction, |e| e.value == element, from, max_depth)?;
    Ok(found.map(|f| f.indices))
}

// ----------------------------------------------------------------------------

/// Tests whether `array` contains `element`, searching forwards from `from`.
///
/// ```
/// use nested_array::{nested, nested_includes, Bounds, Nested};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// assert!(nested_includes(&a, &Nested::Leaf(3), Bounds::default(), None).unwrap());
/// assert!(!nested_includes(&a, &Nested::Leaf(3), [0, 1], None).unwrap());
/// ```
pub fn nested_includes<N: ArrayLike + PartialEq>(
    array: &[N],
    element: &N,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<bool> {
    Ok(position(array, Direction::Forward, element, from.into(), max_depth)?.is_some())
}

/// Tests whether `array` contains `element`, searching backwards from
/// `from`.
///
/// ```
/// use nested_array::{nested, nested_includes_from_last, Bounds, Nested};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// assert!(nested_includes_from_last(&a, &Nested::Leaf(2), Bounds::default(), None).unwrap());
/// assert!(!nested_includes_from_last(&a, &Nested::Leaf(2), [1, 1], None).unwrap());
/// ```
pub fn nested_includes_from_last<N: ArrayLike + PartialEq>(
    array: &[N],
    element: &N,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<bool> {
    Ok(position(array, Direction::Backward, element, from.into(), max_depth)?.is_some())
}

/// The indices of the first occurrence of `element`, searching forwards.
///
/// ```
/// use nested_array::{nested, nested_index_of, Bounds, Nested};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// assert_eq!(nested_index_of(&a, &Nested::Leaf(3), Bounds::default(), None).unwrap(), Some(vec![1, 0]));
/// assert_eq!(nested_index_of(&a, &Nested::Leaf(3), [0, 1], None).unwrap(), None);
/// ```
pub fn nested_index_of<N: ArrayLike + PartialEq>(
    array: &[N],
    element: &N,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<Option<Vec<usize>>> {
    position(array, Direction::Forward, element, from.into(), max_depth)
}

/// The indices of the last occurrence of `element`, searching backwards.
///
/// ```
/// use nested_array::{nested, nested_last_index_of, Bounds, Nested};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// assert_eq!(nested_last_index_of(&a, &Nested::Leaf(2), Bounds::default(), None).unwrap(), Some(vec![0, 2]));
/// assert_eq!(nested_last_index_of(&a, &Nested::Leaf(2), [1, 1], None).unwrap(), None);
/// ```
pub fn nested_last_index_of<N: ArrayLike + PartialEq>(
    array: &[N],
    element: &N,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<Option<Vec<usize>>> {
    position(array, Direction::Backward, element, from.into(), max_depth)
}

// ----------------------------------------------------------------------------

/// The first element accepted by `predicate`, searching forwards.
///
/// ```
/// use nested_array::{nested, nested_find, Bounds};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// let found = nested_find(&a, |e| e.leaf().is_some_and(|n| n % 6 == 3), Bounds::default(), None).unwrap();
/// assert_eq!(found.and_then(|n| n.leaf()), Some(&3));
/// assert_eq!(nested_find(&a, |e| e.leaf().is_some_and(|n| n % 6 == 3), [0, 1], None).unwrap(), None);
/// ```
pub fn nested_find<'a, N: ArrayLike>(
    array: &'a [N],
    predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<Option<&'a N>> {
    Ok(nested_search(array, Direction::Forward, predicate, from, max_depth)?.map(|f| f.value))
}

/// The last element accepted by `predicate`, searching backwards.
pub fn nested_find_last<'a, N: ArrayLike>(
    array: &'a [N],
    predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<Option<&'a N>> {
    Ok(nested_search(array, Direction::Backward, predicate, from, max_depth)?.map(|f| f.value))
}

/// The indices of the first element accepted by `predicate`, searching
/// forwards.
pub fn nested_find_index<N: ArrayLike>(
    array: &[N],
    predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<Option<Vec<usize>>> {
    Ok(nested_search(array, Direction::Forward, predicate, from, max_depth)?.map(|f| f.indices))
}

/// The indices of the last element accepted by `predicate`, searching
/// backwards.
pub fn nested_find_last_index<N: ArrayLike>(
    array: &[N],
    predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<Option<Vec<usize>>> {
    Ok(nested_search(array, Direction::Backward, predicate, from, max_depth)?.map(|f| f.indices))
}

// ----------------------------------------------------------------------------

/// Tests whether `predicate` accepts any element, searching forwards.
///
/// An empty array, or an empty region, gives `false`.
pub fn nested_some<N: ArrayLike>(
    array: &[N],
    predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<bool> {
    Ok(nested_search(array, Direction::Forward, predicate, from, max_depth)?.is_some())
}

/// Like [`nested_some()`] but searching backwards.
pub fn nested_some_from_last<N: ArrayLike>(
    array: &[N],
    predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<bool> {
    Ok(nested_search(array, Direction::Backward, predicate, from, max_depth)?.is_some())
}

/// Tests whether `predicate` accepts every element, searching forwards and
/// stopping at the first rejection.
///
/// An empty array, or an empty region, gives `true`.
///
/// ```
/// use nested_array::{nested, nested_every, Bounds};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// assert!(!nested_every(&a, |e| e.leaf() != Some(&3), Bounds::default(), None).unwrap());
/// assert!(nested_every(&a, |e| e.leaf() != Some(&3), [0, 1], None).unwrap());
/// ```
pub fn nested_every<N: ArrayLike>(
    array: &[N],
    mut predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<bool> {
    Ok(nested_search(array, Direction::Forward, |e| !predicate(e), from, max_depth)?.is_none())
}

/// Like [`nested_every()`] but searching backwards.
pub fn nested_every_from_last<N: ArrayLike>(
    array: &[N],
    mut predicate: impl FnMut(Entry<'_, N>) -> bool,
    from: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<bool> {
    Ok(nested_search(array, Direction::Backward, |e| !predicate(e), from, max_depth)?.is_none())
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_shape, Nested};

    fn label(indices: &[usize]) -> String {
        indices.iter().map(usize::to_string).collect()
    }

    fn coords() -> Vec<Nested<String>> {
        build_shape(&[3, 4, 5], label).unwrap()
    }

    fn sum(e: Entry<'_, Nested<String>>) -> usize { e.indices.iter().sum() }

    fn leaf(s: &str) -> Nested<String> { Nested::Leaf(s.to_string()) }

    fn none() -> Bounds { Bounds::default() }

    #[test]
    fn includes_and_index_of() {
        let a = coords();
        assert!(nested_includes(&a, &leaf("123"), none(), None).unwrap());
        assert!(!nested_includes(&a, &leaf("456"), none(), None).unwrap());
        assert!(nested_includes_from_last(&a, &leaf("123"), none(), None).unwrap());
        assert!(!nested_includes_from_last(&a, &leaf("456"), none(), None).unwrap());
        assert!(!nested_includes(&a, &leaf("123"), [0, 3, 2], None).unwrap());
        assert!(!nested_includes_from_last(&a, &leaf("123"), [0, 3, 2], None).unwrap());
        assert!(!nested_includes(&a, &leaf("123"), [2, 2, 3], None).unwrap());
        assert!(nested_includes_from_last(&a, &leaf("123"), [2, 2, 3], None).unwrap());

        assert_eq!(nested_index_of(&a, &leaf("123"), none(), None).unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(nested_index_of(&a, &leaf("456"), none(), None).unwrap(), None);
        assert_eq!(nested_last_index_of(&a, &leaf("123"), none(), None).unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(nested_index_of(&a, &leaf("123"), [0, 3, 2], None).unwrap(), None);
        assert_eq!(nested_last_index_of(&a, &leaf("123"), [0, 3, 2], None).unwrap(), None);
        assert_eq!(nested_index_of(&a, &leaf("123"), [2, 2, 3], None).unwrap(), None);
        assert_eq!(nested_last_index_of(&a, &leaf("123"), [2, 2, 3], None).unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn find() {
        let a = coords();
        let text = |n: Option<&Nested<String>>| n.and_then(Nested::leaf).cloned();
        assert_eq!(text(nested_find(&a, |e| sum(e) >= 5, none(), None).unwrap()), Some("014".into()));
        assert_eq!(nested_find(&a, |e| sum(e) >= 10, none(), None).unwrap(), None);
        assert_eq!(text(nested_find_last(&a, |e| sum(e) <= 3, none(), None).unwrap()), Some("210".into()));
        assert_eq!(text(nested_find(&a, |e| sum(e) >= 5, [1, 2, 0], None).unwrap()), Some("122".into()));
        assert_eq!(text(nested_find_last(&a, |e| sum(e) <= 3, [1, 3, 3], None).unwrap()), Some("120".into()));
        assert_eq!(nested_find(&a, |e| sum(e) <= 3, [2, 1, 1], None).unwrap(), None);
        assert_eq!(nested_find_last(&a, |e| sum(e) >= 5, [0, 1, 3], None).unwrap(), None);

        assert_eq!(nested_find_index(&a, |e| sum(e) >= 5, none(), None).unwrap(), Some(vec![0, 1, 4]));
        assert_eq!(nested_find_last_index(&a, |e| sum(e) <= 3, none(), None).unwrap(), Some(vec![2, 1, 0]));
        assert_eq!(nested_find_index(&a, |e| sum(e) >= 5, [1, 2, 0], None).unwrap(), Some(vec![1, 2, 2]));
        assert_eq!(nested_find_last_index(&a, |e| sum(e) <= 3, [1, 3, 3], None).unwrap(), Some(vec![1, 2, 0]));
        assert_eq!(nested_find_last_index(&a, |e| sum(e) >= 5, [0, 1, 3], None).unwrap(), None);
    }

    #[test]
    fn some_and_every() {
        let a = coords();
        assert!(nested_some(&a, |e| sum(e) >= 5, none(), None).unwrap());
        assert!(!nested_some(&a, |e| sum(e) >= 10, none(), None).unwrap());
        assert!(nested_some_from_last(&a, |e| sum(e) <= 3, [1, 3, 3], None).unwrap());
        assert!(!nested_some_from_last(&a, |e| sum(e) >= 5, [0, 1, 3], None).unwrap());

        assert!(!nested_every(&a, |e| sum(e) < 5, none(), None).unwrap());
        assert!(nested_every(&a, |e| sum(e) < 10, none(), None).unwrap());
        assert!(!nested_every_from_last(&a, |e| sum(e) > 3, none(), None).unwrap());
        assert!(nested_every_from_last(&a, |e| sum(e) < 5, [0, 1, 3], None).unwrap());
        assert!(nested_every(&a, |e| sum(e) > 3, [2, 1, 1], None).unwrap());
    }

    #[test]
    fn visiting_order() {
        let a = crate::nested![[0, 1], [2, [3, 4]], 5];
        let mut forward = Vec::new();
        nested_some(&a, |e| { forward.push(*e.leaf().unwrap()); false }, none(), None).unwrap();
        assert_eq!(forward, [0, 1, 2, 3, 4, 5]);
        let mut backward = Vec::new();
        nested_some_from_last(&a, |e| { backward.push(*e.leaf().unwrap()); false }, none(), None).unwrap();
        assert_eq!(backward, [5, 4, 3, 2, 1, 0]);
        let mut stopped = 0;
        assert!(nested_some(&a, |e| { stopped += 1; e.leaf() == Some(&2) }, none(), None).unwrap());
        assert_eq!(stopped, 3);
    }

    #[test]
    fn empty_regions() {
        let a: Vec<Nested<u8>> = vec![];
        assert!(nested_every(&a, |_| false, none(), None).unwrap());
        assert!(!nested_some(&a, |_| true, none(), None).unwrap());
        let b = coords();
        assert!(nested_every(&b, |_| false, [3], None).unwrap());
        assert!(nested_every_from_last(&b, |_| false, [-4], None).unwrap());
        assert!(!nested_some(&b, |_| true, [0, 0, 5], None).unwrap());
    }

    #[test]
    fn failing_predicate() {
        let a = coords();
        let mut calls = 0;
        let r: Result<_, Error> = try_nested_search(&a, Direction::Backward, |e| {
            calls += 1;
            if sum(e) == 5 { Err(Error::InvalidDepth(5)) } else { Ok(false) }
        }, none(), None);
        assert!(matches!(r, Err(Error::InvalidDepth(5))));
        assert_eq!(calls, 5);

        let found: Result<_, Error> = try_nested_search(&a, Direction::Forward, |e| Ok(sum(e) == 2), [1], None);
        assert_eq!(found.unwrap().map(|f| f.indices), Some(vec![1, 0, 1]));
        let r: Result<_, Error> = try_nested_search(&a, Direction::Forward, |_| Ok(true), none(), Some(0));
        assert!(matches!(r, Err(Error::InvalidDepth(0))));
    }

    #[test]
    fn bounded_depth() {
        let a = build_shape(&[3, 4, 5, 6], label).unwrap();
        let row = |i: usize, j: usize| a[i].as_array().unwrap()[j].clone();
        assert!(nested_includes(&a, &row(1, 2), none(), Some(2)).unwrap());
        assert!(nested_includes_from_last(&a, &row(2, 1), none(), Some(2)).unwrap());
        assert!(!nested_includes(&a, &row(1, 2), none(), None).unwrap());
        assert_eq!(nested_index_of(&a, &row(1, 2), none(), Some(2)).unwrap(), Some(vec![1, 2]));
        assert_eq!(nested_last_index_of(&a, &row(2, 1), none(), Some(2)).unwrap(), Some(vec![2, 1]));
        assert_eq!(nested_find(&a, |e| *e.value == row(1, 2), none(), Some(2)).unwrap(), Some(&row(1, 2)));
        assert_eq!(nested_find_last_index(&a, |e| *e.value == row(2, 1), none(), Some(2)).unwrap(), Some(vec![2, 1]));
        assert!(matches!(nested_some(&a, |_| true, none(), Some(0)), Err(Error::InvalidDepth(0))));
    }
}
