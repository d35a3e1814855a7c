//! In-place overwriting of a box-shaped region of a nested array.

use std::convert::{Infallible};

use super::{ArrayLike, Bounds, Error, Result};
use super::error::{depth_limit};
use super::index::{Steps};

/// The region to overwrite, and how deep to go.
struct Region {
    start: Bounds,
    end: Bounds,
    depth: usize,
}

fn fill<N: ArrayLike, E>(
    parent: &mut [N],
    indices: &mut Vec<usize>,
    region: &Region,
    f: &mut impl FnMut(&N, &[usize]) -> Result<N, E>,
) -> Result<(), E> {
    let axis = indices.len();
    for index in Steps::between(region.start.get(axis), region.end.get(axis), parent) {
        indices.push(index);
        let done = if axis + 1 < region.depth && parent[index].is_array_like() {
            match parent[index].as_array_mut() {
                Some(children) => fill(children, indices, region, f),
                None => Ok(()),
            }
        } else {
            f(&parent[index], indices.as_slice()).map(|value| { parent[index] = value; })
        };
        indices.pop();
        done?;
    }
    Ok(())
}

impl Region {
    fn new(start: Bounds, end: Bounds, max_depth: Option<usize>) -> Result<Self> {
        let depth = depth_limit(max_depth)?;
        log::trace!("Filling from {:?} to {:?}", start, end);
        Ok(Region {start, end, depth})
    }
}

/// Overwrites every element of `array` in the box from `start` (inclusive)
/// to `end` (exclusive) with a clone of `value`.
///
/// Both bounds apply to every node on their axis. A missing or `None` start
/// means `0`, and a missing or `None` end means the length of the node.
/// Negative bounds count back from the end. Array-like nodes at `max_depth`
/// are overwritten as a whole.
///
/// Returns `array`, for chaining.
///
/// ```
/// use nested_array::{nested, nested_fill, Bounds, Nested};
/// let mut a = nested![[0, 1, 2], [3, 4, 5]];
/// nested_fill(&mut a, Nested::Leaf(10), [0, 0], [2, 2], None).unwrap();
/// assert_eq!(a, nested![[10, 10, 2], [10, 10, 5]]);
///
/// nested_fill(&mut a, Nested::Leaf(7), Bounds::default(), [-1, -1], None).unwrap();
/// assert_eq!(a, nested![[7, 7, 2], [10, 10, 5]]);
/// ```
pub fn nested_fill<N: ArrayLike + Clone>(
    array: &mut [N],
    value: N,
    start: impl Into<Bounds>,
    end: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<&mut [N]> {
    nested_fill_map(array, |_, _| value.clone(), start, end, max_depth)
}

/// Replaces every element of `array` in the box from `start` (inclusive)
/// to `end` (exclusive) with the result of `f`.
///
/// `f` receives the old element and its indices. Bounds are interpreted as
/// by [`nested_fill()`]. With no bounds this is an in-place
/// [`nested_map()`].
///
/// ```
/// use nested_array::{nested, nested_fill_map, Bounds, Nested};
/// let mut a = nested![[0, 1, 2], [3, 4, 5]];
/// let add = |n: &Nested<i32>, _: &[usize]| Nested::Leaf(n.leaf().unwrap() + 10);
/// nested_fill_map(&mut a, add, [0, 0], [2, 2], None).unwrap();
/// assert_eq!(a, nested![[10, 11, 2], [13, 14, 5]]);
/// nested_fill_map(&mut a, add, Bounds::default(), Bounds::default(), None).unwrap();
/// assert_eq!(a, nested![[20, 21, 12], [23, 24, 15]]);
/// ```
///
/// [`nested_map()`]: super::nested_map
pub fn nested_fill_map<N: ArrayLike>(
    array: &mut [N],
    mut f: impl FnMut(&N, &[usize]) -> N,
    start: impl Into<Bounds>,
    end: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<&mut [N]> {
    let region = Region::new(start.into(), end.into(), max_depth)?;
    let filled: Result<_, Infallible> = fill(array, &mut Vec::new(), &region, &mut |value, indices| Ok(f(value, indices)));
    filled.unwrap_or_else(|never| match never {});
    Ok(array)
}

/// Like [`nested_fill_map()`] but `f` may fail.
///
/// The first `Err` returned by `f` stops the fill. Elements already
/// replaced keep their new values.
pub fn try_nested_fill_map<N: ArrayLike, E: From<Error>>(
    array: &mut [N],
    mut f: impl FnMut(&N, &[usize]) -> Result<N, E>,
    start: impl Into<Bounds>,
    end: impl Into<Bounds>,
    max_depth: Option<usize>,
) -> Result<&mut [N], E> {
    let region = Region::new(start.into(), end.into(), max_depth)?;
    fill(array, &mut Vec::new(), &region, &mut f)?;
    Ok(array)
}

// ----------------------------------------------------------------------------
